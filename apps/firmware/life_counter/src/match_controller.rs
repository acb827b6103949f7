use counter_core::{ButtonReader, FrameController, MatchConfig};
use defmt_or_log as log;
use embassy_time::{Instant, Ticker};

use crate::ui::*;
use crate::units::{TimeExt as _, frame_period};

const FRAME_RATE_HZ: u64 = 60;
const STATS_PERIOD_S: u64 = 10;

/// The control loop: one iteration is one frame.
///
/// Samples the buttons, advances the match, repaints the screen and waits for
/// the next tick. Input faults skip the game logic for that frame only; the
/// screen keeps showing the last good state.
pub async fn match_controller<R>(buttons: R, config: MatchConfig, ui: &mut Ui<'_>) -> !
where
    R: ButtonReader,
{
    log::info!(
        "Starting match: life {}, cmdr {}, debounce {} frame(s)",
        config.starting_life,
        config.starting_cmdr,
        config.input.debounce_frames
    );

    let mut controller = FrameController::new(buttons, &config);
    let mut screen = SvCounters::new(config.layout, controller.state());

    ui.init().await;
    ui.enter(&mut screen);

    let mut ticker = Ticker::every(frame_period(FRAME_RATE_HZ));
    let mut last_stats = Instant::now();

    loop {
        if let Ok(report) = controller.tick() {
            screen.update(controller.state(), &report);
        }
        ui.present(&mut screen).await;

        if last_stats.elapsed() >= STATS_PERIOD_S.s() {
            let stats = controller.stats();
            log::info!(
                "Frames: {}, skipped: {}, mutations: {}",
                stats.frames,
                stats.skipped_frames,
                stats.mutations
            );
            last_stats = Instant::now();
        }

        ticker.next().await;
    }
}
