//! GPIO side of the button bank.

use counter_core::input::BUTTONS_COUNT;
use counter_core::{Button, ButtonReader, InputFault, Level};
use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};
use embedded_hal::digital::InputPin;

/// Five input pins indexed by logical button.
pub struct GpioButtons<P> {
    pins: [P; BUTTONS_COUNT],
}

impl<P> ButtonReader for GpioButtons<P>
where
    P: InputPin,
{
    fn read_level(&mut self, button: Button) -> Result<Level, InputFault> {
        self.pins[button.index()]
            .is_high()
            .map(Level::from)
            .map_err(|_| InputFault::PinRead(button))
    }
}

pub type BoardButtons = GpioButtons<Input<'static>>;

pub struct GpioButtonsBuilder {
    pins: [Option<Input<'static>>; BUTTONS_COUNT],
}

impl GpioButtonsBuilder {
    pub fn new() -> Self {
        Self {
            pins: [None, None, None, None, None],
        }
    }

    pub fn bind_pin(&mut self, button: Button, pin: Peri<'static, impl Pin>, pull: Pull) {
        self.pins[button.index()] = Some(Input::new(pin, pull));
    }

    /// Fails with the first button that has no pin bound.
    pub fn build(self) -> Result<BoardButtons, Button> {
        let [up, down, left, right, select] = self.pins;
        Ok(GpioButtons {
            pins: [
                up.ok_or(Button::Up)?,
                down.ok_or(Button::Down)?,
                left.ok_or(Button::Left)?,
                right.ok_or(Button::Right)?,
                select.ok_or(Button::Select)?,
            ],
        })
    }
}
