//! Drawing of the four player panels and the selection cursor on a
//! monochrome `embedded-graphics` draw target.

use core::fmt::Write;

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::cursor::{Col, CursorPosition, Row};
use crate::frame::MatchState;
use crate::players::PlayerRecord;

pub const CURSOR_GLYPH_SIZE: Size = Size::new(4, 5);

// Right-pointing arrow, one byte per row, MSB first
const CURSOR_GLYPH_DATA: [u8; 5] = [
    0b1000_0000,
    0b1100_0000,
    0b1110_0000,
    0b1100_0000,
    0b1000_0000,
];

/// Characters of a name that fit in half the screen width.
const NAME_MAX_CHARS: usize = 9;

const PANEL_TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyleBuilder::new()
    .font(&FONT_6X10)
    .text_color(BinaryColor::On)
    .background_color(BinaryColor::Off)
    .build();

/// Pixel placement of the 2x2 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelLayout {
    /// Y offset of the top and bottom rows.
    pub row_offsets: [i32; 2],
    /// X offset of the left and right columns.
    pub col_offsets: [i32; 2],
    /// Horizontal gap between the cursor glyph and the panel text.
    pub panel_indent: i32,
    pub line_pitch: i32,
}

impl PanelLayout {
    /// 128x96 RIT OLED panel.
    pub const RIT128X96: Self = Self {
        row_offsets: [0, 48],
        col_offsets: [0, 64],
        panel_indent: 5,
        line_pitch: 10,
    };

    /// 128x64 SSD1306 module. Rows are pulled up so three text lines fit.
    pub const SSD1306_128X64: Self = Self {
        row_offsets: [0, 32],
        col_offsets: [0, 64],
        panel_indent: 5,
        line_pitch: 10,
    };

    /// Top left corner of a grid cell, where the cursor glyph goes.
    pub const fn cell_origin(&self, position: CursorPosition) -> Point {
        let y = match position.row {
            Row::Top => self.row_offsets[0],
            Row::Bottom => self.row_offsets[1],
        };
        let x = match position.col {
            Col::Left => self.col_offsets[0],
            Col::Right => self.col_offsets[1],
        };
        Point::new(x, y)
    }

    pub const fn panel_origin(&self, position: CursorPosition) -> Point {
        let cell = self.cell_origin(position);
        Point::new(cell.x + self.panel_indent, cell.y)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::RIT128X96
    }
}

pub fn draw_cursor_glyph<D>(target: &mut D, origin: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let raw = ImageRaw::<BinaryColor>::new(&CURSOR_GLYPH_DATA, CURSOR_GLYPH_SIZE.width);
    Image::new(&raw, origin).draw(target)
}

pub fn clear_cursor_glyph<D>(target: &mut D, origin: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(origin, CURSOR_GLYPH_SIZE)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(target)
}

fn truncated_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_MAX_CHARS) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

fn life_text(life: i32) -> heapless::String<16> {
    let mut buffer = heapless::String::new();
    write!(buffer, "  {:04}  ", life).ok();
    buffer
}

fn cmdr_text(cmdr: i32) -> heapless::String<16> {
    let mut buffer = heapless::String::new();
    write!(buffer, "   {:02}   ", cmdr).ok();
    buffer
}

/// Draws name, life and cmdr of one player as three text lines from `origin`.
pub fn draw_panel<D>(
    target: &mut D,
    record: &PlayerRecord,
    origin: Point,
    line_pitch: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let line = Point::new(0, line_pitch);

    Text::with_baseline(
        truncated_name(record.name()),
        origin,
        PANEL_TEXT_STYLE,
        Baseline::Top,
    )
    .draw(target)?;

    let life = life_text(record.life());
    Text::with_baseline(&life, origin + line, PANEL_TEXT_STYLE, Baseline::Top).draw(target)?;

    let cmdr = cmdr_text(record.cmdr());
    Text::with_baseline(&cmdr, origin + line * 2, PANEL_TEXT_STYLE, Baseline::Top)
        .draw(target)?;

    Ok(())
}

/// Draws a full frame: erases the cursor at its previous cell, draws it at the
/// current one and repaints every panel whether or not it changed.
pub fn render_frame<D>(
    target: &mut D,
    state: &MatchState,
    previous_cursor: CursorPosition,
    layout: &PanelLayout,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    clear_cursor_glyph(target, layout.cell_origin(previous_cursor))?;
    draw_cursor_glyph(target, layout.cell_origin(state.cursor()))?;

    for (id, record) in state.players().iter() {
        draw_panel(
            target,
            record,
            layout.panel_origin(id.seat()),
            layout.line_pitch,
        )?;
    }
    Ok(())
}
