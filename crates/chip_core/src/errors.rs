use thiserror::Error;

/// Faults the core traps instead of touching memory out of range.
/// A faulting step leaves the machine as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("illegal memory access at {0:#05x}")]
    IllegalAddr(u16),
    #[error("call stack overflow at pc {0:#05x}")]
    StackOverflow(u16),
    #[error("return with empty call stack at pc {0:#05x}")]
    StackUnderflow(u16),
    #[error("rom of {len} bytes does not fit in {capacity} bytes of program memory")]
    RomTooLarge { len: usize, capacity: usize },
}
