use defmt_or_log as log;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306Async;
use ssd1306::prelude::*;

use crate::ui::screen_view::ScreenView;

pub struct Ui<I2cDevice, DisplaySize>
where
    DisplaySize: ssd1306::size::DisplaySizeAsync,
{
    display:
        Ssd1306Async<I2CInterface<I2cDevice>, DisplaySize, ssd1306::mode::BufferedGraphicsModeAsync<DisplaySize>>,
}

/// Marker struct for UI interface creation (zero-sized factory pattern)
#[derive(Debug, Copy, Clone)]
pub struct UiInterface(());

impl UiInterface {
    /// Creates a new UI instance with SSD1306 display
    ///
    /// This is a factory method that returns `Ui<I2cDevice, DisplaySize>`, not `Self`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<I2cDevice, DisplaySize>(
        i2c_dev: I2cDevice,
        display_size: DisplaySize,
    ) -> Ui<I2cDevice, DisplaySize>
    where
        I2cDevice: embedded_hal_async::i2c::I2c,
        DisplaySize: ssd1306::size::DisplaySizeAsync,
    {
        let interface = I2CDisplayInterface::new(i2c_dev);
        let display = Ssd1306Async::new(
            interface,
            display_size,
            ssd1306::prelude::DisplayRotation::Rotate0,
        )
        .into_buffered_graphics_mode();
        Ui { display }
    }
}

impl<I2cDevice, DisplaySize> Ui<I2cDevice, DisplaySize>
where
    DisplaySize: ssd1306::size::DisplaySizeAsync,
    I2cDevice: embedded_hal_async::i2c::I2c,
{
    pub async fn init(&mut self) {
        log::debug!("Initializing the display ...");
        self.display.init().await.unwrap_or_else(|e| {
            log::error!("Init error: {:?}", e);
        });
        self.flush().await;
    }

    pub fn enter<S: ScreenView>(&mut self, screen: &mut S) {
        screen.enter(&mut self.display);
    }

    /// Draws the screen into the frame buffer and pushes it to the panel.
    pub async fn present<S: ScreenView>(&mut self, screen: &mut S) {
        screen.redraw(&mut self.display);
        self.flush().await;
    }

    async fn flush(&mut self) {
        self.display.flush().await.unwrap_or_else(|e| {
            log::error!("Flush error: {:?}", e);
        });
    }
}
