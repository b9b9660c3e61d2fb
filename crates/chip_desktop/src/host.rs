use rand::{rngs::ThreadRng, Rng as _};

use chip_core::{
    FrameBuffer,
    ports::{Display, Keypad, Speaker, Rng, Tracer}
};

use crate::{audio, keypad::Keys};

/// Everything the machine talks to on the desktop
pub struct Host {
    pub screen: FrameBuffer,
    pub keys: Keys,
    audio: audio::Device,
    rng: ThreadRng
}
impl Host {
    pub fn new(audio: audio::Device) -> Self {
        Host {
            screen: FrameBuffer::new(),
            keys: Keys::default(),
            audio,
            rng: rand::thread_rng()
        }
    }
}
impl Display for Host {
    fn clear_screen(&mut self) {
        self.screen.clear();
    }
    fn toggle_pixel(&mut self, x: usize, y: usize) -> bool {
        self.screen.toggle(x, y)
    }
}
impl Keypad for Host {
    fn is_key_down(&self, key: u8) -> bool {
        self.keys.is_down(key)
    }
    fn current_key(&mut self) -> Option<u8> {
        self.keys.take_latched()
    }
}
impl Speaker for Host {
    fn sound_on(&mut self) {
        self.audio.beep();
    }
    fn sound_off(&mut self) {
        if self.audio.is_playing() {
            self.audio.stop();
        }
    }
}
impl Rng for Host {
    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
impl Tracer for Host {}
