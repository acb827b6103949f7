use crate::cursor::CursorPosition;
use crate::players::{PlayerId, PlayerRecord, PlayerRegistry};
use crate::press_lock::CounterAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Counter {
    Life,
    Cmdr,
}

impl CounterAction {
    pub const fn counter(self) -> Counter {
        match self {
            CounterAction::LifeUp | CounterAction::LifeDown => Counter::Life,
            CounterAction::CmdrUp | CounterAction::CmdrDown => Counter::Cmdr,
        }
    }

    pub const fn delta(self) -> i32 {
        match self {
            CounterAction::LifeUp | CounterAction::CmdrUp => 1,
            CounterAction::LifeDown | CounterAction::CmdrDown => -1,
        }
    }
}

/// Outcome of a counter change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mutation {
    pub player: PlayerId,
    pub action: CounterAction,
    /// Counter value after the change.
    pub value: i32,
}

/// Marker struct grouping the counter arithmetic (zero-sized namespace)
#[derive(Debug, Copy, Clone)]
pub struct CounterEngine(());

impl CounterEngine {
    /// Applies `action` to the player seated at `position`.
    ///
    /// Counters are signed and may go below zero. They saturate at the `i32`
    /// limits instead of wrapping.
    pub fn apply(
        registry: &mut PlayerRegistry,
        position: CursorPosition,
        action: CounterAction,
    ) -> Mutation {
        let player = PlayerId::at(position);
        let value = Self::apply_to_record(registry.get_mut(player), action);
        Mutation {
            player,
            action,
            value,
        }
    }

    fn apply_to_record(record: &mut PlayerRecord, action: CounterAction) -> i32 {
        let counter = match action.counter() {
            Counter::Life => &mut record.life,
            Counter::Cmdr => &mut record.cmdr,
        };
        *counter = counter.saturating_add(action.delta());
        *counter
    }
}
