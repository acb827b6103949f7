//! Game logic of the four player life counter.
//!
//! The crate is hardware independent: buttons come in through
//! [`input::ButtonReader`] and the screen is any monochrome
//! `embedded-graphics` draw target, so the whole state machine runs in host
//! tests.
#![no_std]

pub mod config;
pub mod counter;
pub mod cursor;
pub mod frame;
pub mod input;
pub mod players;
pub mod press_lock;
pub mod render;

pub use config::MatchConfig;
pub use counter::{Counter, CounterEngine, Mutation};
pub use cursor::{Col, CursorGrid, CursorPosition, Row};
pub use frame::{FrameController, FrameReport, FrameStats, MatchState};
pub use input::{
    Button, ButtonBank, ButtonReader, ButtonState, ButtonStates, InputConfig, InputFault, Level,
    Polarity,
};
pub use players::{PlayerId, PlayerRecord, PlayerRegistry};
pub use press_lock::{CounterAction, LockState, PressLock};
pub use render::PanelLayout;
