use crate::{
    errors::ChipError,
    font::glyph_addr,
    globals::{RAM_SIZE, FLAG_REG, SCREEN_WIDTH, SCREEN_HEIGHT},
    machine::Machine,
    opcode::Opcode,
    ports::Ports,
    utils::{bcd, u16_from_two}
};

/// What a single cycle did, for drivers that pace frames on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Executed,
    /// a sprite was drawn
    Drew,
    /// Fx0A found no key and will run again next cycle
    WaitingForKey,
}

impl Machine {
    /// Fetches, decodes and executes exactly one instruction.
    ///
    /// On error nothing is changed: pc still points at the faulting
    /// instruction.
    pub fn step<P: Ports + ?Sized>(&mut self, ports: &mut P) -> Result<Step, ChipError> {
        let addr = self.pc;
        let op = self.fetch()?;
        tracing::trace!("{:03X}: {:04X}", addr, op.word);
        self.pc += 2;
        let result = self.execute(op, ports);
        if result.is_err() {
            self.pc = addr;
        }
        result
    }
    fn fetch(&self) -> Result<Opcode, ChipError> {
        let addr = self.pc as usize;
        if addr > RAM_SIZE - 2 {
            return Err(ChipError::IllegalAddr(self.pc))
        }
        Ok(Opcode::decode(u16_from_two(self.memory[addr], self.memory[addr + 1])))
    }
    fn execute<P: Ports + ?Sized>(&mut self, op: Opcode, ports: &mut P) -> Result<Step, ChipError> {
        let x = op.x as usize;
        let y = op.y as usize;
        match op.nibbles() {
            (0, 0, 0xE, 0) => {
                ports.clear_screen();
                self.redraw = true;
            },
            (0, 0, 0xE, 0xE) => self.pc = self.pop_stack()?,
            // machine subroutine -> ignored
            (0, _, _, _) => (),
            (1, _, _, _) => self.pc = op.nnn,
            (2, _, _, _) => {
                self.push_stack(self.pc)?;
                self.pc = op.nnn;
            },
            (3, _, _, _) => self.skip_if(self.v[x] == op.nn),
            (4, _, _, _) => self.skip_if(self.v[x] != op.nn),
            (5, _, _, _) => self.skip_if(self.v[x] == self.v[y]),
            (9, _, _, _) => self.skip_if(self.v[x] != self.v[y]),
            (6, _, _, _) => self.v[x] = op.nn,
            (7, _, _, _) => self.v[x] = self.v[x].wrapping_add(op.nn),
            (8, _, _, 0) => self.v[x] = self.v[y],
            (8, _, _, 1) => self.logic(x, self.v[x] | self.v[y]),
            (8, _, _, 2) => self.logic(x, self.v[x] & self.v[y]),
            (8, _, _, 3) => self.logic(x, self.v[x] ^ self.v[y]),
            (8, _, _, 4) => {
                let (val, carry) = self.v[x].overflowing_add(self.v[y]);
                self.set_with_flag(x, val, carry);
            },
            (8, _, _, 5) => {
                let (val, borrow) = self.v[x].overflowing_sub(self.v[y]);
                self.set_with_flag(x, val, !borrow);
            },
            (8, _, _, 7) => {
                let (val, borrow) = self.v[y].overflowing_sub(self.v[x]);
                self.set_with_flag(x, val, !borrow);
            },
            // shifts read vY, not vX
            (8, _, _, 6) => {
                let src = self.v[y];
                self.set_with_flag(x, src >> 1, src & 0x01 != 0);
            },
            (8, _, _, 0xE) => {
                let src = self.v[y];
                self.set_with_flag(x, src << 1, src & 0x80 != 0);
            },
            (0xA, _, _, _) => self.i = op.nnn,
            (0xB, _, _, _) => self.pc = op.nnn + self.v[0] as u16,
            (0xC, _, _, _) => self.v[x] = ports.random_byte() & op.nn,
            (0xD, _, _, n) => {
                self.draw(x, y, n, ports)?;
                return Ok(Step::Drew);
            },
            (0xE, _, 0x9, 0xE) => self.skip_if(ports.is_key_down(self.v[x])),
            (0xE, _, 0xA, 0x1) => self.skip_if(!ports.is_key_down(self.v[x])),
            (0xF, _, 0x0, 0x7) => self.v[x] = self.delay_timer,
            (0xF, _, 0x0, 0xA) => match ports.current_key() {
                Some(key) => self.v[x] = key,
                None => {
                    self.pc -= 2;
                    return Ok(Step::WaitingForKey);
                }
            },
            (0xF, _, 0x1, 0x5) => self.delay_timer = self.v[x],
            (0xF, _, 0x1, 0x8) => {
                let prev = self.sound_timer;
                self.sound_timer = self.v[x];
                if self.sound_timer > 0 && prev == 0 {
                    ports.sound_on();
                }
            },
            (0xF, _, 0x1, 0xE) => self.i = self.i.wrapping_add(self.v[x] as u16),
            (0xF, _, 0x2, 0x9) => self.i = glyph_addr(self.v[x]),
            (0xF, _, 0x3, 0x3) => {
                let range = self.region(self.i, 3)?;
                self.memory[range].copy_from_slice(&bcd(self.v[x]));
            },
            (0xF, _, 0x5, 0x5) => {
                let range = self.region(self.i, x + 1)?;
                self.memory[range].copy_from_slice(&self.v[..=x]);
                self.i = self.i.wrapping_add(x as u16 + 1);
            },
            (0xF, _, 0x6, 0x5) => {
                let range = self.region(self.i, x + 1)?;
                self.v[..=x].copy_from_slice(&self.memory[range]);
                self.i = self.i.wrapping_add(x as u16 + 1);
            },
            _ => ports.trace_unknown(&op),
        };
        Ok(Step::Executed)
    }
    #[inline(always)]
    fn skip_if(&mut self, cond: bool) {
        if cond {
            self.pc += 2;
        }
    }
    /// Writes vX first so the flag wins when X is VF
    #[inline(always)]
    fn set_with_flag(&mut self, x: usize, val: u8, flag: bool) {
        self.v[x] = val;
        self.v[FLAG_REG] = flag as u8;
    }
    #[inline(always)]
    fn logic(&mut self, x: usize, val: u8) {
        self.set_with_flag(x, val, false);
    }
    /// Sprite origin wraps, the sprite itself is clipped at the screen edges
    fn draw<P: Ports + ?Sized>(&mut self, x: usize, y: usize, n: u8, ports: &mut P) -> Result<(), ChipError> {
        let ox = self.v[x] as usize % SCREEN_WIDTH;
        let oy = self.v[y] as usize % SCREEN_HEIGHT;
        let rows = (n as usize).min(SCREEN_HEIGHT - oy);
        let cols = 8usize.min(SCREEN_WIDTH - ox);
        let sprite = self.region(self.i, rows)?;

        let mut collision = false;
        for (row, line) in self.memory[sprite].iter().enumerate() {
            for bit in 0..cols {
                if *line & (0x80u8 >> bit) != 0 && ports.toggle_pixel(ox + bit, oy + row) {
                    collision = true;
                }
            }
        }
        self.v[FLAG_REG] = collision as u8;
        self.redraw = true;
        Ok(())
    }
}
