use crate::memory::{MEM_SIZE, PROG_START};

/// Errors surfaced by the machine to its host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ROM does not fit between the program start and the end of memory.
    #[error("ROM is {size} bytes, at most {max} fit", max = MEM_SIZE - PROG_START)]
    RomTooLarge { size: usize },

    /// 00EE executed with an empty call stack.
    #[error("return with an empty call stack at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    /// An instruction word whose top-level family the machine does not know.
    /// Unknown words inside a known family are logged and skipped instead.
    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },
}
