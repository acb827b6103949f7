// Display driver imports
mod screen_view;
mod screens;
mod ui_interface;

pub use self::screen_view::ScreenView;
pub use self::screens::*;
pub use self::ui_interface::UiInterface;

use crate::global_types::I2c0Device;

pub type Ui<'a> = self::ui_interface::Ui<I2c0Device<'a>, ssd1306::size::DisplaySize128x64>;
