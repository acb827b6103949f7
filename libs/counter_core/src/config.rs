use crate::input::InputConfig;
use crate::players::PLAYERS_COUNT;
use crate::render::PanelLayout;

pub const DEFAULT_PLAYER_NAMES: [&str; PLAYERS_COUNT] =
    ["Player 1", "Player 2", "Player 3", "Player 4"];
pub const DEFAULT_STARTING_LIFE: i32 = 40;
pub const DEFAULT_STARTING_CMDR: i32 = 0;

/// Everything that is fixed when a match starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchConfig {
    /// Names in seat order: top left, top right, bottom left, bottom right.
    pub names: [&'static str; PLAYERS_COUNT],
    pub starting_life: i32,
    pub starting_cmdr: i32,
    pub input: InputConfig,
    pub layout: PanelLayout,
}

impl MatchConfig {
    pub const fn new() -> Self {
        Self {
            names: DEFAULT_PLAYER_NAMES,
            starting_life: DEFAULT_STARTING_LIFE,
            starting_cmdr: DEFAULT_STARTING_CMDR,
            input: InputConfig::new(),
            layout: PanelLayout::RIT128X96,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
