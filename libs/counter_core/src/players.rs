use crate::config::MatchConfig;
use crate::cursor::{Col, CursorPosition, Row};

pub const PLAYERS_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerId {
    One,
    Two,
    Three,
    Four,
}

impl PlayerId {
    pub const ALL: [PlayerId; PLAYERS_COUNT] =
        [PlayerId::One, PlayerId::Two, PlayerId::Three, PlayerId::Four];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Owner of a grid cell. Player one sits top left, numbering runs row by row.
    pub const fn at(position: CursorPosition) -> Self {
        match (position.row, position.col) {
            (Row::Top, Col::Left) => PlayerId::One,
            (Row::Top, Col::Right) => PlayerId::Two,
            (Row::Bottom, Col::Left) => PlayerId::Three,
            (Row::Bottom, Col::Right) => PlayerId::Four,
        }
    }

    /// Grid cell owned by the player.
    pub const fn seat(self) -> CursorPosition {
        match self {
            PlayerId::One => CursorPosition::TOP_LEFT,
            PlayerId::Two => CursorPosition::TOP_RIGHT,
            PlayerId::Three => CursorPosition::BOTTOM_LEFT,
            PlayerId::Four => CursorPosition::BOTTOM_RIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerRecord {
    name: &'static str,
    pub(crate) life: i32,
    pub(crate) cmdr: i32,
}

impl PlayerRecord {
    pub const fn new(name: &'static str, life: i32, cmdr: i32) -> Self {
        Self { name, life, cmdr }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn life(&self) -> i32 {
        self.life
    }

    /// Secondary ("commander damage") counter.
    pub const fn cmdr(&self) -> i32 {
        self.cmdr
    }
}

/// The four player records, one per grid cell, fixed for the lifetime of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerRegistry {
    records: [PlayerRecord; PLAYERS_COUNT],
}

impl PlayerRegistry {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            records: config
                .names
                .map(|name| PlayerRecord::new(name, config.starting_life, config.starting_cmdr)),
        }
    }

    pub fn get(&self, id: PlayerId) -> &PlayerRecord {
        &self.records[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> &mut PlayerRecord {
        &mut self.records[id.index()]
    }

    /// Record owned by the cell under the cursor.
    pub fn resolve(&self, position: CursorPosition) -> &PlayerRecord {
        self.get(PlayerId::at(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerRecord)> {
        PlayerId::ALL.into_iter().zip(self.records.iter())
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_map_to_players_row_by_row() {
        assert_eq!(PlayerId::at(CursorPosition::TOP_LEFT), PlayerId::One);
        assert_eq!(PlayerId::at(CursorPosition::TOP_RIGHT), PlayerId::Two);
        assert_eq!(PlayerId::at(CursorPosition::BOTTOM_LEFT), PlayerId::Three);
        assert_eq!(PlayerId::at(CursorPosition::BOTTOM_RIGHT), PlayerId::Four);

        for id in PlayerId::ALL {
            assert_eq!(PlayerId::at(id.seat()), id);
        }
    }

    #[test]
    fn registry_starts_from_config() {
        let registry = PlayerRegistry::default();
        for (id, record) in registry.iter() {
            assert_eq!(record.life(), 40);
            assert_eq!(record.cmdr(), 0);
            assert_eq!(record, registry.get(id));
        }
        assert_eq!(registry.resolve(CursorPosition::TOP_LEFT).name(), "Player 1");
        assert_eq!(registry.resolve(CursorPosition::BOTTOM_RIGHT).name(), "Player 4");
    }

    #[test]
    fn custom_names_and_totals() {
        let config = MatchConfig {
            names: ["Ann", "Bob", "Cid", "Dee"],
            starting_life: 20,
            starting_cmdr: 3,
            ..MatchConfig::default()
        };
        let registry = PlayerRegistry::new(&config);
        let record = registry.resolve(CursorPosition::BOTTOM_LEFT);
        assert_eq!(record.name(), "Cid");
        assert_eq!(record.life(), 20);
        assert_eq!(record.cmdr(), 3);
    }
}
