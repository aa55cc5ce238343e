use crate::memory::PROG_START;

/// Register index of VF, the flag output of carry/borrow/shift/collision.
pub const FLAG: u8 = 0xF;

/// The register file: sixteen byte registers V0-VF, the 16-bit address
/// register I, the program counter and the call stack.
///
/// VF doubles as a flag output. Every instruction that reports a flag
/// overwrites it outright; nothing here accumulates into it.
pub struct Registers {
    v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    stack: Vec<u16>,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            v: [0; 16],
            i: 0,
            pc: PROG_START as u16,
            stack: Vec::new(),
        }
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.v[reg as usize & 0xF]
    }

    pub fn set(&mut self, reg: u8, val: u8) {
        self.v[reg as usize & 0xF] = val;
    }

    /// Overwrites VF with 1 or 0.
    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG as usize] = flag.into();
    }

    /// Skips the next 2-byte instruction.
    pub fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Rewinds the program counter onto the instruction just fetched.
    pub fn rewind(&mut self) {
        self.pc = self.pc.wrapping_sub(2);
    }

    pub fn push(&mut self, addr: u16) {
        self.stack.push(addr);
    }

    /// Pops a saved program counter; `None` on underflow so the caller can
    /// surface it as a real error.
    pub fn pop(&mut self) -> Option<u16> {
        self.stack.pop()
    }
}
