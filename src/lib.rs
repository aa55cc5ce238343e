//! Core of a CHIP-8 virtual machine: memory, registers, display surface,
//! input latch, timers, and the fetch/decode/execute loop over them.
//!
//! The crate deliberately stops at the machine boundary. Opening a window,
//! turning the frame into host pixels, mapping a physical keyboard onto the
//! hex pad, pacing execution and reading ROM files are all the host's job;
//! it drives the machine through [`Emulator`] and nothing else.

pub use display::{Frame, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use emulator::Emulator;
pub use error::Error;

mod decode;
mod display;
mod emulator;
mod error;
mod keypad;
mod memory;
mod registers;
mod timer;
