//! Tenths-of-a-second stopwatch for a Raspberry Pi Pico driving a chain of
//! MAX7219 LED matrices.
//!
//! The core is [`clock::StopwatchClock`], advanced once per timer tick and
//! controlled by [`command::Command`]s, plus [`digits::format`] which turns
//! its [`clock::Snapshot`] into the four display digits.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod command;
pub mod config;
pub mod digits;
pub mod display;
pub mod font;
pub mod ticker;

pub use clock::{Snapshot, StopwatchClock};
pub use command::{Command, Indicator};
pub use ticker::TickGrid;
