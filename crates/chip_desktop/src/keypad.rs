use winit::keyboard::KeyCode;

use chip_core::globals::KEY_COUNT;

/// COSMAC hex keypad laid over the left side of a QWERTY keyboard:
///
/// ```text
/// 1 2 3 4      1 2 3 C
/// Q W E R  ->  4 5 6 D
/// A S D F      7 8 9 E
/// Z X C V      A 0 B F
/// ```
pub fn map_key(code: KeyCode) -> Option<u8> {
    let key = match code {
        KeyCode::KeyX => 0x0,
        KeyCode::Digit1 => 0x1,
        KeyCode::Digit2 => 0x2,
        KeyCode::Digit3 => 0x3,
        KeyCode::KeyQ => 0x4,
        KeyCode::KeyW => 0x5,
        KeyCode::KeyE => 0x6,
        KeyCode::KeyA => 0x7,
        KeyCode::KeyS => 0x8,
        KeyCode::KeyD => 0x9,
        KeyCode::KeyZ => 0xA,
        KeyCode::KeyC => 0xB,
        KeyCode::Digit4 => 0xC,
        KeyCode::KeyR => 0xD,
        KeyCode::KeyF => 0xE,
        KeyCode::KeyV => 0xF,
        _ => return None
    };
    Some(key)
}

/// Held keys plus the last key pressed, which a key wait consumes
#[derive(Default)]
pub struct Keys {
    down: [bool; KEY_COUNT as usize],
    latched: Option<u8>
}
impl Keys {
    pub fn set(&mut self, key: u8, pressed: bool) {
        let Some(slot) = self.down.get_mut(key as usize) else { return };
        *slot = pressed;
        self.latched = if pressed { Some(key) } else { None };
    }
    pub fn is_down(&self, key: u8) -> bool {
        self.down.get(key as usize).copied().unwrap_or(false)
    }
    pub fn take_latched(&mut self) -> Option<u8> {
        self.latched.take()
    }
}
