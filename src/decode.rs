//! Splits 16-bit instruction words into their nibble fields and decodes them
//! into a closed instruction set.

/// A raw instruction word with accessors for the operand fields opcodes
/// carve out of it:
/// - `[_x__]` a register index
/// - `[__y_]` a second register index
/// - `[___n]` a 4-bit immediate (sprite height)
/// - `[__nn]` a byte immediate
/// - `[_nnn]` a 12-bit address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word(pub u16);

impl Word {
    /// The four nibbles, highest to lowest. Total over every bit pattern.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        ((self.0 >> 12) as u8, self.x(), self.y(), self.n())
    }

    pub fn x(self) -> u8 {
        (self.0 >> 8 & 0xF) as u8
    }

    pub fn y(self) -> u8 {
        (self.0 >> 4 & 0xF) as u8
    }

    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    pub fn nn(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn nnn(self) -> u16 {
        self.0 & 0xFFF
    }
}

/// Every instruction the machine implements, plus `Unknown` carrying any
/// word that decodes to nothing. Operand order follows the opcode layout:
/// register indices first, immediates after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xnn
    SkipEqual(u8, u8),
    /// 4xnn
    SkipNotEqual(u8, u8),
    /// 6xnn
    SetRegister(u8, u8),
    /// 7xnn, wrapping, no flag
    AddToRegister(u8, u8),
    /// 8xy0
    CopyRegister(u8, u8),
    /// 8xy2
    And(u8, u8),
    /// 8xy3
    Xor(u8, u8),
    /// 8xy4, VF = carry
    Add(u8, u8),
    /// 8xy5, VF = no borrow
    Subtract(u8, u8),
    /// 8xy6, VF = shifted-out bit
    ShiftRight(u8),
    /// 9xy0
    SkipNotEqualRegister(u8, u8),
    /// Annn
    SetIndex(u16),
    /// Cxnn
    Random(u8, u8),
    /// Dxyn
    Draw(u8, u8, u8),
    /// Ex9E
    SkipIfPressed(u8),
    /// ExA1
    SkipIfReleased(u8),
    /// Fx07
    ReadDelay(u8),
    /// Fx0A
    WaitKey(u8),
    /// Fx15
    SetDelay(u8),
    /// Fx18
    SetSound(u8),
    /// Fx1E
    AddToIndex(u8),
    /// Fx29
    FontChar(u8),
    /// Fx33
    StoreDigits(u8),
    /// Fx55
    StoreRegisters(u8),
    /// Fx65
    LoadRegisters(u8),
    /// Anything else, with the raw word kept for reporting.
    Unknown(u16),
}

impl Instruction {
    /// Decodes one instruction word. Pure and total; unhandled patterns come
    /// back as [`Instruction::Unknown`] for the executor to judge.
    pub fn decode(word: u16) -> Self {
        let w = Word(word);
        match w.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Self::ClearScreen,
            (0x0, 0x0, 0xE, 0xE) => Self::Return,
            (0x1, ..) => Self::Jump(w.nnn()),
            (0x2, ..) => Self::Call(w.nnn()),
            (0x3, ..) => Self::SkipEqual(w.x(), w.nn()),
            (0x4, ..) => Self::SkipNotEqual(w.x(), w.nn()),
            (0x6, ..) => Self::SetRegister(w.x(), w.nn()),
            (0x7, ..) => Self::AddToRegister(w.x(), w.nn()),
            (0x8, .., 0x0) => Self::CopyRegister(w.x(), w.y()),
            (0x8, .., 0x2) => Self::And(w.x(), w.y()),
            (0x8, .., 0x3) => Self::Xor(w.x(), w.y()),
            (0x8, .., 0x4) => Self::Add(w.x(), w.y()),
            (0x8, .., 0x5) => Self::Subtract(w.x(), w.y()),
            (0x8, .., 0x6) => Self::ShiftRight(w.x()),
            (0x9, .., 0x0) => Self::SkipNotEqualRegister(w.x(), w.y()),
            (0xA, ..) => Self::SetIndex(w.nnn()),
            (0xC, ..) => Self::Random(w.x(), w.nn()),
            (0xD, ..) => Self::Draw(w.x(), w.y(), w.n()),
            (0xE, .., 0x9, 0xE) => Self::SkipIfPressed(w.x()),
            (0xE, .., 0xA, 0x1) => Self::SkipIfReleased(w.x()),
            (0xF, .., 0x0, 0x7) => Self::ReadDelay(w.x()),
            (0xF, .., 0x0, 0xA) => Self::WaitKey(w.x()),
            (0xF, .., 0x1, 0x5) => Self::SetDelay(w.x()),
            (0xF, .., 0x1, 0x8) => Self::SetSound(w.x()),
            (0xF, .., 0x1, 0xE) => Self::AddToIndex(w.x()),
            (0xF, .., 0x2, 0x9) => Self::FontChar(w.x()),
            (0xF, .., 0x3, 0x3) => Self::StoreDigits(w.x()),
            (0xF, .., 0x5, 0x5) => Self::StoreRegisters(w.x()),
            (0xF, .., 0x6, 0x5) => Self::LoadRegisters(w.x()),
            _ => Self::Unknown(word),
        }
    }
}

#[test]
fn test_nibble_fields() {
    let w = Word(0xABCD);
    assert_eq!(w.nibbles(), (0xA, 0xB, 0xC, 0xD));
    assert_eq!(w.x(), 0xB);
    assert_eq!(w.y(), 0xC);
    assert_eq!(w.n(), 0xD);
    assert_eq!(w.nn(), 0xCD);
    assert_eq!(w.nnn(), 0xBCD);
}

#[cfg(test)]
mod tests {
    use super::Instruction::{self, *};

    #[test]
    fn decodes_every_implemented_opcode() {
        let cases = [
            (0x00E0, ClearScreen),
            (0x00EE, Return),
            (0x1ABC, Jump(0xABC)),
            (0x2ABC, Call(0xABC)),
            (0x3144, SkipEqual(0x1, 0x44)),
            (0x4144, SkipNotEqual(0x1, 0x44)),
            (0x6144, SetRegister(0x1, 0x44)),
            (0x7144, AddToRegister(0x1, 0x44)),
            (0x8120, CopyRegister(0x1, 0x2)),
            (0x8122, And(0x1, 0x2)),
            (0x8123, Xor(0x1, 0x2)),
            (0x8124, Add(0x1, 0x2)),
            (0x8125, Subtract(0x1, 0x2)),
            (0x8126, ShiftRight(0x1)),
            (0x9120, SkipNotEqualRegister(0x1, 0x2)),
            (0xAABC, SetIndex(0xABC)),
            (0xC144, Random(0x1, 0x44)),
            (0xD125, Draw(0x1, 0x2, 0x5)),
            (0xE19E, SkipIfPressed(0x1)),
            (0xE1A1, SkipIfReleased(0x1)),
            (0xF107, ReadDelay(0x1)),
            (0xF10A, WaitKey(0x1)),
            (0xF115, SetDelay(0x1)),
            (0xF118, SetSound(0x1)),
            (0xF11E, AddToIndex(0x1)),
            (0xF129, FontChar(0x1)),
            (0xF133, StoreDigits(0x1)),
            (0xF155, StoreRegisters(0x1)),
            (0xF165, LoadRegisters(0x1)),
        ];
        for (word, expected) in cases {
            assert_eq!(Instruction::decode(word), expected, "word {word:#06X}");
        }
    }

    #[test]
    fn unhandled_sub_opcodes_decode_to_unknown() {
        // OR, SUBN and SHL are deliberately not part of this machine
        for word in [0x8121, 0x8127, 0x812E, 0x0123, 0xE100, 0xF1FF, 0x9121] {
            assert_eq!(Instruction::decode(word), Instruction::Unknown(word));
        }
    }

    #[test]
    fn unhandled_families_decode_to_unknown() {
        for word in [0x5120, 0xB123] {
            assert_eq!(Instruction::decode(word), Instruction::Unknown(word));
        }
    }
}
