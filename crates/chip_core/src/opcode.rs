use crate::utils::u16_from_two;

/// A fetched instruction word split into its operand fields.
/// Fields are not validated: every 16-bit word decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub word: u16,
    /// top nibble, selects the instruction family
    pub kind: u8,
    pub x: u8,
    pub y: u8,
    pub n: u8,
    pub nn: u8,
    pub nnn: u16,
}
impl Opcode {
    pub fn decode(word: u16) -> Self {
        Opcode {
            word,
            kind: (word >> 12) as u8,
            x: (word >> 8 & 0x0F) as u8,
            y: (word >> 4 & 0x0F) as u8,
            n: (word & 0x0F) as u8,
            nn: (word & 0xFF) as u8,
            nnn: word & 0x0FFF,
        }
    }
    pub fn from_bytes(hi: u8, lo: u8) -> Self {
        Self::decode(u16_from_two(hi, lo))
    }
    /// The four nibbles, most significant first
    pub fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.kind, self.x, self.y, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_fields() {
        let op = Opcode::from_bytes(0xD1, 0x2F);
        assert!(op.word == 0xD12F);
        assert!(op.nibbles() == (0xD, 0x1, 0x2, 0xF));
        assert!(op.nn == 0x2F);
        assert!(op.nnn == 0x12F);
    }
    #[test]
    fn decode_edges() {
        let op = Opcode::decode(0xFFFF);
        assert!(op.nibbles() == (0xF, 0xF, 0xF, 0xF));
        assert!(op.nn == 0xFF);
        assert!(op.nnn == 0xFFF);
        let op = Opcode::decode(0x0000);
        assert!(op.nibbles() == (0, 0, 0, 0));
        assert!(op.nnn == 0);
    }
}
