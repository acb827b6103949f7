use counter_core::render::render_frame;
use counter_core::{CursorPosition, FrameReport, MatchState, PanelLayout};
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::ui::ScreenView;

/// Four player panels plus the selection cursor.
pub struct SvCounters {
    layout: PanelLayout,
    state: MatchState,
    previous_cursor: CursorPosition,
}

impl SvCounters {
    pub fn new(layout: PanelLayout, state: &MatchState) -> Self {
        Self {
            layout,
            state: state.clone(),
            previous_cursor: state.cursor(),
        }
    }

    /// Takes the state produced by the last frame.
    pub fn update(&mut self, state: &MatchState, report: &FrameReport) {
        self.state.clone_from(state);
        self.previous_cursor = report.previous_cursor;
    }
}

impl ScreenView for SvCounters {
    fn enter<D>(&mut self, draw_target: &mut D)
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw_target.clear(BinaryColor::Off).ok();
    }

    fn redraw<D>(&mut self, draw_target: &mut D)
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        render_frame(draw_target, &self.state, self.previous_cursor, &self.layout).ok();
        self.previous_cursor = self.state.cursor();
    }
}
