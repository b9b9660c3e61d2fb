use chip_core::{
    FrameBuffer,
    Machine,
    ports::{Display, Keypad, Speaker, Rng, Tracer}
};

/// Frame buffer backed host with a single latched key and a constant rng
#[derive(Default)]
pub struct Host {
    pub screen: FrameBuffer,
    pub key: Option<u8>,
    pub sounding: bool,
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
        self.key == Some(key)
    }
    fn current_key(&mut self) -> Option<u8> {
        self.key
    }
}
impl Speaker for Host {
    fn sound_on(&mut self) {
        self.sounding = true;
    }
    fn sound_off(&mut self) {
        self.sounding = false;
    }
}
impl Rng for Host {
    fn random_byte(&mut self) -> u8 {
        0xA5
    }
}
impl Tracer for Host {}

pub fn boot(program: &[u8]) -> (Machine, Host) {
    let mut machine = Machine::new();
    machine.load_rom(program).expect("program fits");
    (machine, Host::default())
}

#[allow(dead_code)]
pub fn run(machine: &mut Machine, host: &mut Host, cycles: usize) {
    for _ in 0..cycles {
        machine.step(host).expect("no fault");
    }
}
