pub const RAM_SIZE: usize = 4096;
pub const STACK_SIZE: usize = 16;
pub const REG_COUNT: usize = 16;
/// VF, overloaded as carry / borrow / collision / shifted-out bit
pub const FLAG_REG: usize = 0xF;

pub const PROGRAM_START: u16 = 0x200;
pub const FONT_START: u16 = 0x050;
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const KEY_COUNT: u8 = 16;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const SCREEN_BUFFER_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 8;
