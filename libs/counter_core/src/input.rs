//! Logical button bank.
//!
//! Raw pin levels are read through the [`ButtonReader`] seam, normalized to
//! [`ButtonState`] according to the board [`Polarity`] and optionally filtered
//! by a per-button debounce counter before any game logic sees them.

pub const BUTTONS_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Select,
}

impl Button {
    /// All buttons in sampling order.
    pub const ALL: [Button; BUTTONS_COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Select,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Select => "Select",
        }
    }
}

/// Electrical level reported by a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(is_high: bool) -> Self {
        if is_high { Level::High } else { Level::Low }
    }
}

/// Which electrical level means "pressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pulled up, shorted to ground when pressed.
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl Polarity {
    pub const fn state_of(self, level: Level) -> ButtonState {
        match (self, level) {
            (Polarity::ActiveLow, Level::Low) | (Polarity::ActiveHigh, Level::High) => {
                ButtonState::Pressed
            }
            _ => ButtonState::Released,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Pressed,
    #[default]
    Released,
}

impl ButtonState {
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

/// Logical state of every button for one frame, indexed by [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStates([ButtonState; BUTTONS_COUNT]);

impl ButtonStates {
    pub const fn released() -> Self {
        Self([ButtonState::Released; BUTTONS_COUNT])
    }

    /// Builds a snapshot where exactly the listed buttons are pressed.
    pub fn with_pressed(buttons: &[Button]) -> Self {
        let mut states = Self::released();
        for &button in buttons {
            states.set(button, ButtonState::Pressed);
        }
        states
    }

    pub const fn get(&self, button: Button) -> ButtonState {
        self.0[button.index()]
    }

    pub fn set(&mut self, button: Button, state: ButtonState) {
        self.0[button.index()] = state;
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        self.get(button).is_pressed()
    }

    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL
            .into_iter()
            .filter(move |button| self.is_pressed(*button))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputFault {
    PinRead(Button),
}

impl InputFault {
    pub fn error_description(&self) -> Option<&'static str> {
        match self {
            InputFault::PinRead(_) => Some("Button pin read failed"),
        }
    }
}

/// Hardware seam: reports the raw level of a logical button.
pub trait ButtonReader {
    fn read_level(&mut self, button: Button) -> Result<Level, InputFault>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    pub polarity: Polarity,
    /// Consecutive samples a new level must persist before it is accepted.
    /// `0` and `1` disable the filter.
    pub debounce_frames: u8,
}

impl InputConfig {
    pub const fn new() -> Self {
        Self {
            polarity: Polarity::ActiveLow,
            debounce_frames: 1,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, Default)]
struct DebounceFilter {
    stable: ButtonState,
    pending: u8,
}

impl DebounceFilter {
    fn update(&mut self, raw: ButtonState, threshold: u8) -> ButtonState {
        if threshold <= 1 || raw == self.stable {
            self.stable = raw;
            self.pending = 0;
            return self.stable;
        }

        self.pending += 1;
        if self.pending >= threshold {
            self.stable = raw;
            self.pending = 0;
        }
        self.stable
    }
}

pub struct ButtonBank<R> {
    reader: R,
    config: InputConfig,
    filters: [DebounceFilter; BUTTONS_COUNT],
    states: ButtonStates,
}

impl<R> ButtonBank<R>
where
    R: ButtonReader,
{
    pub fn new(reader: R, config: InputConfig) -> Self {
        Self {
            reader,
            config,
            filters: [DebounceFilter::default(); BUTTONS_COUNT],
            states: ButtonStates::released(),
        }
    }

    /// Reads every button once and returns the normalized snapshot.
    ///
    /// All five pins are read before anything is committed, so a failed read
    /// leaves the previous snapshot and the debounce counters untouched.
    pub fn sample(&mut self) -> Result<ButtonStates, InputFault> {
        let mut raw = [ButtonState::Released; BUTTONS_COUNT];
        for button in Button::ALL {
            let level = self.reader.read_level(button)?;
            raw[button.index()] = self.config.polarity.state_of(level);
        }

        for button in Button::ALL {
            let i = button.index();
            let state = self.filters[i].update(raw[i], self.config.debounce_frames);
            self.states.set(button, state);
        }
        Ok(self.states)
    }

    /// Last accepted snapshot.
    pub fn states(&self) -> ButtonStates {
        self.states
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}
