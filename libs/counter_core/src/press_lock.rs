use crate::input::{Button, ButtonStates};

/// Counter mutation bound to a direction held together with Select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterAction {
    LifeUp,
    LifeDown,
    CmdrDown,
    CmdrUp,
}

impl CounterAction {
    /// Direction to action table, in tie-break order. When several directions
    /// are held at once the first one listed here wins. Cursor movement does
    /// not use this order, it honours every held direction.
    pub const PRIORITY: [(Button, CounterAction); 4] = [
        (Button::Up, CounterAction::LifeUp),
        (Button::Down, CounterAction::LifeDown),
        (Button::Left, CounterAction::CmdrDown),
        (Button::Right, CounterAction::CmdrUp),
    ];

    /// Action requested by the current frame, if Select and a direction are held.
    pub fn requested(states: &ButtonStates) -> Option<CounterAction> {
        if !states.is_pressed(Button::Select) {
            return None;
        }
        Self::PRIORITY
            .iter()
            .find(|(button, _)| states.is_pressed(*button))
            .map(|(_, action)| *action)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    #[default]
    Idle,
    /// An action already fired for the current hold.
    Armed,
}

/// One action per press-and-hold gesture.
///
/// The lock arms when an action fires and only disarms once Select is
/// released or no direction is held with it, so a hold spanning many frames
/// fires exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressLock {
    state: LockState,
}

impl PressLock {
    pub const fn new() -> Self {
        Self {
            state: LockState::Idle,
        }
    }

    pub const fn state(&self) -> LockState {
        self.state
    }

    pub const fn is_armed(&self) -> bool {
        matches!(self.state, LockState::Armed)
    }

    /// Returns the action allowed to fire this frame.
    pub fn gate(&mut self, states: &ButtonStates) -> Option<CounterAction> {
        match (self.state, CounterAction::requested(states)) {
            (_, None) => {
                self.state = LockState::Idle;
                None
            }
            (LockState::Idle, Some(action)) => {
                self.state = LockState::Armed;
                Some(action)
            }
            (LockState::Armed, Some(_)) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_up_down_left_right() {
        let all = ButtonStates::with_pressed(&[
            Button::Select,
            Button::Right,
            Button::Left,
            Button::Down,
            Button::Up,
        ]);
        assert_eq!(CounterAction::requested(&all), Some(CounterAction::LifeUp));

        let states = ButtonStates::with_pressed(&[Button::Select, Button::Right, Button::Down]);
        assert_eq!(CounterAction::requested(&states), Some(CounterAction::LifeDown));

        let states = ButtonStates::with_pressed(&[Button::Select, Button::Right, Button::Left]);
        assert_eq!(CounterAction::requested(&states), Some(CounterAction::CmdrDown));

        let states = ButtonStates::with_pressed(&[Button::Select, Button::Right]);
        assert_eq!(CounterAction::requested(&states), Some(CounterAction::CmdrUp));
    }

    #[test]
    fn nothing_is_requested_without_select() {
        let states = ButtonStates::with_pressed(&[Button::Up]);
        assert_eq!(CounterAction::requested(&states), None);
        let states = ButtonStates::with_pressed(&[Button::Select]);
        assert_eq!(CounterAction::requested(&states), None);
    }

    #[test]
    fn long_hold_fires_once() {
        let mut lock = PressLock::new();
        let hold = ButtonStates::with_pressed(&[Button::Select, Button::Up]);

        assert_eq!(lock.gate(&hold), Some(CounterAction::LifeUp));
        for _ in 0..100 {
            assert_eq!(lock.gate(&hold), None);
            assert!(lock.is_armed());
        }
    }

    #[test]
    fn releasing_the_direction_rearms() {
        let mut lock = PressLock::new();
        let hold = ButtonStates::with_pressed(&[Button::Select, Button::Left]);
        let select_only = ButtonStates::with_pressed(&[Button::Select]);

        assert_eq!(lock.gate(&hold), Some(CounterAction::CmdrDown));
        assert_eq!(lock.gate(&select_only), None);
        assert_eq!(lock.state(), LockState::Idle);
        assert_eq!(lock.gate(&hold), Some(CounterAction::CmdrDown));
    }

    #[test]
    fn releasing_select_rearms() {
        let mut lock = PressLock::new();
        let hold = ButtonStates::with_pressed(&[Button::Select, Button::Right]);
        let direction_only = ButtonStates::with_pressed(&[Button::Right]);

        assert_eq!(lock.gate(&hold), Some(CounterAction::CmdrUp));
        assert_eq!(lock.gate(&direction_only), None);
        assert_eq!(lock.state(), LockState::Idle);
        assert_eq!(lock.gate(&hold), Some(CounterAction::CmdrUp));
    }

    #[test]
    fn switching_direction_mid_hold_does_not_fire() {
        let mut lock = PressLock::new();
        let up = ButtonStates::with_pressed(&[Button::Select, Button::Up]);
        let down = ButtonStates::with_pressed(&[Button::Select, Button::Down]);

        assert_eq!(lock.gate(&up), Some(CounterAction::LifeUp));
        assert_eq!(lock.gate(&down), None);
    }
}
