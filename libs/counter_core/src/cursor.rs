use crate::input::{Button, ButtonStates};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Col {
    Left,
    Right,
}

/// One of the four logical grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub row: Row,
    pub col: Col,
}

impl CursorPosition {
    pub const TOP_LEFT: Self = Self::new(Row::Top, Col::Left);
    pub const TOP_RIGHT: Self = Self::new(Row::Top, Col::Right);
    pub const BOTTOM_LEFT: Self = Self::new(Row::Bottom, Col::Left);
    pub const BOTTOM_RIGHT: Self = Self::new(Row::Bottom, Col::Right);

    pub const ALL: [Self; 4] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    pub const fn new(row: Row, col: Col) -> Self {
        Self { row, col }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// Cursor over the 2x2 player grid.
///
/// Movement only happens while Select is held. A direction toggles the cursor
/// from the far edge back to the near one; pushing further at an edge does
/// nothing, the grid never wraps. The four rules are checked against the
/// position at the start of the frame, so chorded directions combine
/// (Up + Left from the bottom right corner lands in the top left one).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorGrid {
    position: CursorPosition,
}

impl CursorGrid {
    pub const fn new() -> Self {
        Self {
            position: CursorPosition::TOP_LEFT,
        }
    }

    pub const fn position(&self) -> CursorPosition {
        self.position
    }

    /// Applies one frame of input. Returns `true` when the cursor moved.
    pub fn update(&mut self, states: &ButtonStates) -> bool {
        if !states.is_pressed(Button::Select) {
            return false;
        }

        let start = self.position;
        let mut next = start;

        if states.is_pressed(Button::Up) && start.row == Row::Bottom {
            next.row = Row::Top;
        }
        if states.is_pressed(Button::Down) && start.row == Row::Top {
            next.row = Row::Bottom;
        }
        if states.is_pressed(Button::Left) && start.col == Col::Right {
            next.col = Col::Left;
        }
        if states.is_pressed(Button::Right) && start.col == Col::Left {
            next.col = Col::Right;
        }

        self.position = next;
        next != start
    }
}
