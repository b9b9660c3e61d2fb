use core::ops::Range;

use crate::{
    errors::ChipError,
    font::FONT,
    globals::{RAM_SIZE, STACK_SIZE, REG_COUNT, PROGRAM_START, FONT_START},
    ports::Speaker
};

/// Complete state of one emulated machine.
///
/// Only [`Machine::step`] and [`Machine::tick_timers`] mutate it while a
/// program runs, so several independent machines can live side by side.
#[derive(Clone)]
pub struct Machine {
    pub(crate) memory: [u8; RAM_SIZE],
    pub(crate) v: [u8; REG_COUNT],
    pub(crate) pc: u16,
    pub(crate) i: u16,
    pub(crate) sp: usize,
    pub(crate) stack: [u16; STACK_SIZE],
    pub(crate) delay_timer: u8,
    pub(crate) sound_timer: u8,
    pub(crate) redraw: bool
}
impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
impl Machine {
    /// Zeroed machine with the font installed and pc at the program start
    pub fn new() -> Self {
        let mut machine = Machine {
            memory: [0; RAM_SIZE],
            v: [0; REG_COUNT],
            pc: PROGRAM_START,
            i: 0,
            sp: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
            redraw: false
        };
        let font = FONT_START as usize;
        machine.memory[font..font + FONT.len()].copy_from_slice(&FONT);
        machine
    }
    pub fn reset(&mut self) {
        *self = Self::new();
    }
    /// Copies a program to the program start. Does not touch any other state.
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), ChipError> {
        let capacity = RAM_SIZE - PROGRAM_START as usize;
        if data.len() > capacity {
            return Err(ChipError::RomTooLarge { len: data.len(), capacity });
        }
        self.load_at(PROGRAM_START, data)
    }
    pub fn load_at(&mut self, addr: u16, data: &[u8]) -> Result<(), ChipError> {
        let range = self.region(addr, data.len())?;
        self.memory[range].copy_from_slice(data);
        Ok(())
    }

    pub fn memory(&self) -> &[u8; RAM_SIZE] {
        &self.memory
    }
    pub fn registers(&self) -> &[u8; REG_COUNT] {
        &self.v
    }
    /// Panics if `x` is not a register index
    pub fn reg(&self, x: usize) -> u8 {
        self.v[x]
    }
    pub fn set_reg(&mut self, x: usize, val: u8) {
        self.v[x] = val;
    }
    pub fn pc(&self) -> u16 {
        self.pc
    }
    pub fn index(&self) -> u16 {
        self.i
    }
    pub fn sp(&self) -> usize {
        self.sp
    }
    /// Return addresses currently on the stack, oldest first
    pub fn stack(&self) -> &[u16] {
        &self.stack[..self.sp]
    }
    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }
    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }
    /// Checks and clears the redraw flag
    pub fn take_redraw(&mut self) -> bool {
        if self.redraw {
            self.redraw = false;
            return true;
        }
        false
    }

    /// Counts both timers down by one. Meant to be called at 60 Hz,
    /// independently of the instruction rate.
    pub fn tick_timers<S: Speaker + ?Sized>(&mut self, speaker: &mut S) {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
        }
        if self.sound_timer == 0 {
            speaker.sound_off();
        }
    }

    pub(crate) fn push_stack(&mut self, val: u16) -> Result<(), ChipError> {
        if self.sp >= STACK_SIZE {
            return Err(ChipError::StackOverflow(self.pc.wrapping_sub(2)));
        }
        self.stack[self.sp] = val;
        self.sp += 1;
        Ok(())
    }
    pub(crate) fn pop_stack(&mut self) -> Result<u16, ChipError> {
        if self.sp == 0 { return Err(ChipError::StackUnderflow(self.pc.wrapping_sub(2))) }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }
    /// Memory range `start..start + len`, or the first address past the end of RAM.
    /// An empty region is always `0..0`, wherever it starts.
    pub(crate) fn region(&self, start: u16, len: usize) -> Result<Range<usize>, ChipError> {
        if len == 0 { return Ok(0..0) }
        let start = start as usize;
        let end = start + len;
        if end > RAM_SIZE {
            return Err(ChipError::IllegalAddr(start.max(RAM_SIZE) as u16));
        }
        Ok(start..end)
    }
}
