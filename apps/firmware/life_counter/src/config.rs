//! Match configuration baked in at build time.
//!
//! `build.rs` forwards the `LC_*` variables (from the environment or a `.env`
//! file); anything missing or malformed falls back to the library defaults.

use core::str::FromStr;

use counter_core::config::{DEFAULT_PLAYER_NAMES, DEFAULT_STARTING_CMDR, DEFAULT_STARTING_LIFE};
use counter_core::{InputConfig, MatchConfig, PanelLayout, Polarity};
use defmt_or_log as log;

const DEFAULT_DEBOUNCE_FRAMES: u8 = 1;

fn parse_or<T: FromStr>(var_name: &str, value: Option<&'static str>, default: T) -> T {
    let Some(raw) = value else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("Ignoring {}={}: not a number", var_name, raw);
        default
    })
}

pub fn match_config() -> MatchConfig {
    MatchConfig {
        names: [
            option_env!("LC_PLAYER_1_NAME").unwrap_or(DEFAULT_PLAYER_NAMES[0]),
            option_env!("LC_PLAYER_2_NAME").unwrap_or(DEFAULT_PLAYER_NAMES[1]),
            option_env!("LC_PLAYER_3_NAME").unwrap_or(DEFAULT_PLAYER_NAMES[2]),
            option_env!("LC_PLAYER_4_NAME").unwrap_or(DEFAULT_PLAYER_NAMES[3]),
        ],
        starting_life: parse_or(
            "LC_STARTING_LIFE",
            option_env!("LC_STARTING_LIFE"),
            DEFAULT_STARTING_LIFE,
        ),
        starting_cmdr: parse_or(
            "LC_STARTING_CMDR",
            option_env!("LC_STARTING_CMDR"),
            DEFAULT_STARTING_CMDR,
        ),
        input: InputConfig {
            // Buttons are wired to ground with the internal pull-ups enabled
            polarity: Polarity::ActiveLow,
            debounce_frames: parse_or(
                "LC_DEBOUNCE_FRAMES",
                option_env!("LC_DEBOUNCE_FRAMES"),
                DEFAULT_DEBOUNCE_FRAMES,
            ),
        },
        layout: PanelLayout::SSD1306_128X64,
    }
}
