mod counters;

pub use counters::SvCounters;
