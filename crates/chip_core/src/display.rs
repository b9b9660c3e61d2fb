use crate::{
    globals::{SCREEN_WIDTH, SCREEN_HEIGHT, SCREEN_BUFFER_SIZE},
    ports::Display
};

/// Monochrome 64x32 screen, one bit per pixel, rows packed left to right
/// with the leftmost pixel in the most significant bit.
#[derive(Clone)]
pub struct FrameBuffer {
    buffer: [u8; SCREEN_BUFFER_SIZE]
}
impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            buffer: [0; SCREEN_BUFFER_SIZE]
        }
    }
    pub fn clear(&mut self) {
        self.buffer = [0x0; SCREEN_BUFFER_SIZE];
    }
    pub fn load(&mut self, data: &[u8; SCREEN_BUFFER_SIZE]) {
        self.buffer.copy_from_slice(data);
    }
    pub fn get_buffer(&self) -> &[u8; SCREEN_BUFFER_SIZE] {
        &self.buffer
    }
    pub fn is_blank(&self) -> bool {
        self.buffer.iter().all(|b| *b == 0)
    }
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match Self::locate(x, y) {
            Some((i, mask)) => self.buffer[i] & mask != 0,
            None => false
        }
    }
    /// XORs a single pixel, returns the collision flag.
    /// Coordinates outside the screen are ignored.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let Some((i, mask)) = Self::locate(x, y) else { return false };
        let was_on = self.buffer[i] & mask != 0;
        self.buffer[i] ^= mask;
        was_on
    }
    fn locate(x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT { return None }
        let px = x + y * SCREEN_WIDTH;
        Some((px / 8, 0x80 >> (px % 8)))
    }
}
impl Display for FrameBuffer {
    fn clear_screen(&mut self) {
        self.clear();
    }
    fn toggle_pixel(&mut self, x: usize, y: usize) -> bool {
        self.toggle(x, y)
    }
}
