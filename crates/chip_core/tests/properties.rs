mod common;

use common::{boot, run};
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_then_add_zero(x in 0u8..16, nn: u8) {
        let (mut machine, mut host) = boot(&[0x60 | x, nn, 0x70 | x, 0x00]);
        run(&mut machine, &mut host, 2);
        prop_assert_eq!(machine.reg(x as usize), nn);
    }

    #[test]
    fn add_sets_carry(a: u8, b: u8) {
        let (mut machine, mut host) = boot(&[0x60, a, 0x61, b, 0x80, 0x14]);
        run(&mut machine, &mut host, 3);
        prop_assert_eq!(machine.reg(0), a.wrapping_add(b));
        prop_assert_eq!(machine.reg(0xF), (a as u16 + b as u16 > 0xFF) as u8);
    }

    #[test]
    fn sub_clears_on_borrow(a: u8, b: u8) {
        let (mut machine, mut host) = boot(&[0x60, a, 0x61, b, 0x80, 0x15]);
        run(&mut machine, &mut host, 3);
        prop_assert_eq!(machine.reg(0), a.wrapping_sub(b));
        prop_assert_eq!(machine.reg(0xF), (a >= b) as u8);
    }

    #[test]
    fn skip_only_when_condition_holds(a: u8, b: u8, kind in 0usize..4) {
        let (op, skips) = match kind {
            0 => ([0x30, b], a == b),
            1 => ([0x40, b], a != b),
            2 => ([0x50, 0x10], a == b),
            _ => ([0x90, 0x10], a != b),
        };
        let (mut machine, mut host) = boot(&[0x60, a, 0x61, b, op[0], op[1]]);
        run(&mut machine, &mut host, 3);
        prop_assert_eq!(machine.pc(), if skips { 0x208 } else { 0x206 });
    }

    #[test]
    fn bcd_digits(val: u8) {
        let (mut machine, mut host) = boot(&[0x60, val, 0xA3, 0x00, 0xF0, 0x33]);
        run(&mut machine, &mut host, 3);
        let digits = &machine.memory()[0x300..0x303];
        prop_assert_eq!(digits[0] as u16 * 100 + digits[1] as u16 * 10 + digits[2] as u16, val as u16);
        prop_assert!(digits.iter().all(|d| *d < 10));
    }

    #[test]
    fn dump_load_round_trip(regs: [u8; 16], x in 0u8..16) {
        // dump v0..=vX at 0x300, clear them, reload
        let (mut machine, mut host) = boot(&[
            0xA3, 0x00,
            0xF0 | x, 0x55,
            0xA3, 0x00,
            0xF0 | x, 0x65,
        ]);
        for (r, val) in regs.iter().enumerate() {
            machine.set_reg(r, *val);
        }
        run(&mut machine, &mut host, 2);
        prop_assert_eq!(machine.index(), 0x300 + x as u16 + 1);
        for r in 0..=x as usize {
            machine.set_reg(r, 0);
        }
        run(&mut machine, &mut host, 2);
        prop_assert_eq!(machine.registers(), &regs);
        prop_assert_eq!(machine.index(), 0x300 + x as u16 + 1);
    }
}
