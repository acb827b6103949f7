//! Per-frame control logic.
//!
//! One call to [`MatchState::step`] is one frame: move the cursor, resolve the
//! player under it, then let the press lock decide whether that player's
//! counters change. [`FrameController`] adds button sampling and statistics on
//! top and is what the firmware loop drives.

use defmt_or_log as log;

use crate::config::MatchConfig;
use crate::counter::{CounterEngine, Mutation};
use crate::cursor::{CursorGrid, CursorPosition};
use crate::input::{ButtonBank, ButtonReader, ButtonStates, InputFault};
use crate::players::{PlayerRecord, PlayerRegistry};
use crate::press_lock::PressLock;

/// All mutable match state, owned by the control loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState {
    grid: CursorGrid,
    registry: PlayerRegistry,
    lock: PressLock,
}

/// What happened during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    pub previous_cursor: CursorPosition,
    pub cursor: CursorPosition,
    pub mutation: Option<Mutation>,
}

impl FrameReport {
    pub fn cursor_moved(&self) -> bool {
        self.previous_cursor != self.cursor
    }
}

impl MatchState {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            grid: CursorGrid::new(),
            registry: PlayerRegistry::new(config),
            lock: PressLock::new(),
        }
    }

    pub fn cursor(&self) -> CursorPosition {
        self.grid.position()
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Player the cursor currently points at.
    pub fn selected(&self) -> &PlayerRecord {
        self.registry.resolve(self.grid.position())
    }

    pub fn step(&mut self, states: &ButtonStates) -> FrameReport {
        let previous_cursor = self.grid.position();
        if self.grid.update(states) {
            log::debug!(
                "Cursor moved: {:?} -> {:?}",
                previous_cursor,
                self.grid.position()
            );
        }

        let cursor = self.grid.position();
        let mutation = self
            .lock
            .gate(states)
            .map(|action| CounterEngine::apply(&mut self.registry, cursor, action));

        if let Some(m) = &mutation {
            log::debug!("{:?} {:?} -> {}", m.player, m.action, m.value);
        }

        FrameReport {
            previous_cursor,
            cursor,
            mutation,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

/// Milliseconds between frames at `rate_hz`, rounded down and never below one.
/// A zero rate is treated as one frame per second.
pub const fn frame_period_ms(rate_hz: u64) -> u64 {
    let rate_hz = if rate_hz == 0 { 1 } else { rate_hz };
    let period = 1000 / rate_hz;
    if period == 0 { 1 } else { period }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    pub frames: u32,
    pub skipped_frames: u32,
    pub mutations: u32,
}

/// Samples the buttons and advances the match by one frame.
pub struct FrameController<R> {
    buttons: ButtonBank<R>,
    state: MatchState,
    stats: FrameStats,
}

impl<R> FrameController<R>
where
    R: ButtonReader,
{
    pub fn new(reader: R, config: &MatchConfig) -> Self {
        Self {
            buttons: ButtonBank::new(reader, config.input),
            state: MatchState::new(config),
            stats: FrameStats::default(),
        }
    }

    /// Runs one frame.
    ///
    /// On an input fault the frame is skipped: cursor, lock and counters keep
    /// their last values and the fault is returned to the caller.
    pub fn tick(&mut self) -> Result<FrameReport, InputFault> {
        self.stats.frames = self.stats.frames.wrapping_add(1);

        let states = self.buttons.sample().inspect_err(|fault| {
            self.stats.skipped_frames = self.stats.skipped_frames.wrapping_add(1);
            log::warn!(
                "Frame skipped: {:?} ({})",
                fault,
                fault.error_description().unwrap_or("unknown")
            );
        })?;

        let report = self.state.step(&states);
        if report.mutation.is_some() {
            self.stats.mutations = self.stats.mutations.wrapping_add(1);
        }
        Ok(report)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonBank<R> {
        &mut self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Counter;
    use crate::input::{Button, BUTTONS_COUNT, Level};
    use crate::players::PlayerId;
    use crate::press_lock::CounterAction;

    fn held(buttons: &[Button]) -> ButtonStates {
        ButtonStates::with_pressed(buttons)
    }

    #[test]
    fn frame_period_rounds_down_to_whole_milliseconds() {
        assert_eq!(frame_period_ms(60), 16);
        assert_eq!(frame_period_ms(25), 40);
        assert_eq!(frame_period_ms(1), 1000);
        assert_eq!(frame_period_ms(0), 1000);
        assert_eq!(frame_period_ms(5000), 1);
    }

    #[test]
    fn long_hold_mutates_once_then_rearms() {
        let mut state = MatchState::default();
        let up = held(&[Button::Select, Button::Up]);

        let report = state.step(&up);
        assert_eq!(report.mutation.map(|m| m.value), Some(41));
        assert_eq!(state.players().get(PlayerId::One).life(), 41);

        for _ in 0..2 {
            assert_eq!(state.step(&up).mutation, None);
            assert_eq!(state.players().get(PlayerId::One).life(), 41);
        }

        // Let go of Up while keeping Select, then press again
        state.step(&held(&[Button::Select]));
        state.step(&up);
        assert_eq!(state.players().get(PlayerId::One).life(), 42);
    }

    #[test]
    fn hold_length_does_not_matter() {
        for frames in 1..20 {
            let mut state = MatchState::default();
            let down = held(&[Button::Select, Button::Down, Button::Left]);
            let mutations = (0..frames)
                .filter(|_| state.step(&down).mutation.is_some())
                .count();
            assert_eq!(mutations, 1);
        }
    }

    #[test]
    fn moving_right_retargets_later_mutations() {
        let mut state = MatchState::default();

        let report = state.step(&held(&[Button::Select, Button::Right]));
        assert_eq!(report.cursor, CursorPosition::TOP_RIGHT);
        assert!(report.cursor_moved());
        // Movement happens before the mutation, so the press lands on player two
        let m = report.mutation.unwrap();
        assert_eq!(m.player, PlayerId::Two);
        assert_eq!(m.action.counter(), Counter::Cmdr);

        state.step(&ButtonStates::released());
        state.step(&held(&[Button::Select, Button::Up]));
        assert_eq!(state.players().get(PlayerId::Two).life(), 41);
        assert_eq!(state.players().get(PlayerId::One).life(), 40);
        assert_eq!(state.selected().name(), "Player 2");
    }

    #[test]
    fn diagonal_chord_moves_and_mutates_by_priority() {
        let mut state = MatchState::default();
        state.step(&held(&[Button::Select, Button::Down, Button::Right]));
        assert_eq!(state.cursor(), CursorPosition::BOTTOM_RIGHT);
        state.step(&ButtonStates::released());

        let report = state.step(&held(&[Button::Select, Button::Up, Button::Left]));
        assert_eq!(report.cursor, CursorPosition::TOP_LEFT);
        let m = report.mutation.unwrap();
        assert_eq!(m.player, PlayerId::One);
        assert_eq!(m.action, CounterAction::LifeUp);
    }

    #[test]
    fn directions_without_select_do_nothing() {
        let mut state = MatchState::default();
        for buttons in [[Button::Up], [Button::Down], [Button::Left], [Button::Right]] {
            let report = state.step(&held(&buttons));
            assert_eq!(report.mutation, None);
            assert!(!report.cursor_moved());
        }
        assert_eq!(state, MatchState::default());
    }

    /// Pins scripted frame by frame. `None` makes the Select read fail.
    struct ScriptedPins {
        frame: Option<[bool; BUTTONS_COUNT]>,
    }

    impl ButtonReader for ScriptedPins {
        fn read_level(&mut self, button: Button) -> Result<Level, InputFault> {
            match self.frame {
                Some(pressed) => Ok(Level::from(!pressed[button.index()])),
                None if button == Button::Select => Err(InputFault::PinRead(button)),
                None => Ok(Level::High),
            }
        }
    }

    fn pins(buttons: &[Button]) -> Option<[bool; BUTTONS_COUNT]> {
        let mut pressed = [false; BUTTONS_COUNT];
        for button in buttons {
            pressed[button.index()] = true;
        }
        Some(pressed)
    }

    #[test]
    fn input_fault_skips_the_frame() {
        let reader = ScriptedPins {
            frame: pins(&[Button::Select, Button::Down]),
        };
        let mut controller = FrameController::new(reader, &MatchConfig::default());

        let report = controller.tick().unwrap();
        assert_eq!(report.cursor, CursorPosition::BOTTOM_LEFT);
        assert_eq!(controller.state().players().get(PlayerId::Three).life(), 39);
        let before = controller.state().clone();

        controller.buttons_mut().reader_mut().frame = None;
        assert_eq!(controller.tick(), Err(InputFault::PinRead(Button::Select)));
        assert_eq!(controller.state(), &before);
        assert!(controller.state().lock.is_armed());

        // Still the same hold once reads recover
        controller.buttons_mut().reader_mut().frame = pins(&[Button::Select, Button::Down]);
        assert_eq!(controller.tick().unwrap().mutation, None);

        let stats = controller.stats();
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.skipped_frames, 1);
        assert_eq!(stats.mutations, 1);
    }

    #[test]
    fn release_and_press_through_the_controller() {
        let reader = ScriptedPins {
            frame: pins(&[Button::Select, Button::Right]),
        };
        let mut controller = FrameController::new(reader, &MatchConfig::default());

        for _ in 0..3 {
            controller.tick().unwrap();
        }
        controller.buttons_mut().reader_mut().frame = pins(&[]);
        controller.tick().unwrap();
        controller.buttons_mut().reader_mut().frame = pins(&[Button::Select, Button::Right]);
        controller.tick().unwrap();

        assert_eq!(controller.state().players().get(PlayerId::Two).cmdr(), 2);
        assert_eq!(controller.stats().mutations, 2);
    }
}
