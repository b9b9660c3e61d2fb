//! Capabilities the cycle engine borrows from its host.
//!
//! A host usually implements all of them on one type and passes that as
//! [`Ports`] to [`Machine::step`](crate::Machine::step).

use crate::{globals::KEY_COUNT, opcode::Opcode};

/// Raw "no key pressed" value used by hosts that report keys as bytes
pub const NO_KEY: u8 = 0x10;

/// Maps a raw key byte to a key, treating [`NO_KEY`] (or anything
/// outside 0-15) as absent.
pub fn key_from_raw(raw: u8) -> Option<u8> {
    if raw < KEY_COUNT { Some(raw) } else { None }
}

pub trait Display {
    fn clear_screen(&mut self);
    /// XORs the pixel at (x, y); returns true if it was on and is now off
    fn toggle_pixel(&mut self, x: usize, y: usize) -> bool;
}

pub trait Keypad {
    fn is_key_down(&self, key: u8) -> bool;
    /// The currently pressed key, if any
    fn current_key(&mut self) -> Option<u8>;
}

pub trait Speaker {
    fn sound_on(&mut self);
    fn sound_off(&mut self);
}

pub trait Rng {
    fn random_byte(&mut self) -> u8;
}

pub trait Tracer {
    /// Called for words the dispatch does not recognise
    fn trace_unknown(&mut self, op: &Opcode) {
        tracing::debug!(
            "unknown instruction {:04X} (x={:X} y={:X} n={:X} nn={:02X} nnn={:03X})",
            op.word, op.x, op.y, op.n, op.nn, op.nnn
        );
    }
}

pub trait Ports: Display + Keypad + Speaker + Rng + Tracer {}
impl<T: Display + Keypad + Speaker + Rng + Tracer> Ports for T {}
