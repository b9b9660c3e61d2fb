use std::collections::VecDeque;

use crate::{
    display::FrameBuffer,
    opcode::Opcode,
    ports::{Display, Keypad, Speaker, Rng, Tracer}
};

/// Deterministic host: real frame buffer, scripted keys, fixed random stream
pub struct Host {
    pub screen: FrameBuffer,
    pub clears: usize,
    pub toggles: Vec<(usize, usize)>,
    pub keys_down: [bool; 16],
    /// answers to `current_key`, one per query; empty means no key
    pub key_queue: VecDeque<Option<u8>>,
    pub key_queries: usize,
    pub randoms: VecDeque<u8>,
    pub sound_ons: usize,
    pub sound_offs: usize,
    pub traced: Vec<u16>,
}
impl Host {
    pub fn new() -> Self {
        Host {
            screen: FrameBuffer::new(),
            clears: 0,
            toggles: Vec::new(),
            keys_down: [false; 16],
            key_queue: VecDeque::new(),
            key_queries: 0,
            randoms: VecDeque::new(),
            sound_ons: 0,
            sound_offs: 0,
            traced: Vec::new(),
        }
    }
}
impl Display for Host {
    fn clear_screen(&mut self) {
        self.clears += 1;
        self.screen.clear();
    }
    fn toggle_pixel(&mut self, x: usize, y: usize) -> bool {
        self.toggles.push((x, y));
        self.screen.toggle(x, y)
    }
}
impl Keypad for Host {
    fn is_key_down(&self, key: u8) -> bool {
        self.keys_down.get(key as usize).copied().unwrap_or(false)
    }
    fn current_key(&mut self) -> Option<u8> {
        self.key_queries += 1;
        self.key_queue.pop_front().flatten()
    }
}
impl Speaker for Host {
    fn sound_on(&mut self) {
        self.sound_ons += 1;
    }
    fn sound_off(&mut self) {
        self.sound_offs += 1;
    }
}
impl Rng for Host {
    fn random_byte(&mut self) -> u8 {
        self.randoms.pop_front().unwrap_or(0xFF)
    }
}
impl Tracer for Host {
    fn trace_unknown(&mut self, op: &Opcode) {
        self.traced.push(op.word);
    }
}
