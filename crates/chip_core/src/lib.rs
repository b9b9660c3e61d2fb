//! Interpreter core for the CHIP-8 virtual machine.
//!
//! [`Machine`] owns the whole machine state. A driver calls
//! [`Machine::step`] once per instruction and [`Machine::tick_timers`] at
//! 60 Hz, lending it a host that implements the [`ports`] traits.
mod cpu;
mod display;
mod errors;
mod font;
pub mod globals;
mod machine;
mod opcode;
pub mod ports;
mod utils;
#[cfg(test)]
mod test_utils;

pub use cpu::Step;
pub use display::FrameBuffer;
pub use errors::ChipError;
pub use font::FONT;
pub use machine::Machine;
pub use opcode::Opcode;
pub use ports::Ports;
