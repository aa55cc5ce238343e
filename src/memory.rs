use crate::error::Error;

/// Addressable memory, 0x000..0xFFF.
pub const MEM_SIZE: usize = 0xFFF;
/// Where loaded programs begin; everything below is interpreter area.
pub const PROG_START: usize = 0x200;

/// Bytes per font glyph, one glyph per hex digit starting at address 0.
pub const GLYPH_LEN: u16 = 5;

const FONT: [u8; 5 * 16] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Byte-addressable store holding the font, the loaded program and working
/// data. Addresses are reduced modulo [`MEM_SIZE`], so every 16-bit address
/// lands somewhere valid.
pub struct Memory {
    bytes: [u8; MEM_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEM_SIZE];
        bytes[..FONT.len()].copy_from_slice(&FONT);
        Self { bytes }
    }

    /// Copies a ROM verbatim to [`PROG_START`]. A ROM that does not fit is a
    /// construction error, never a truncation.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Error> {
        if rom.len() > MEM_SIZE - PROG_START {
            return Err(Error::RomTooLarge { size: rom.len() });
        }
        self.bytes[PROG_START..PROG_START + rom.len()].copy_from_slice(rom);
        log::debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROG_START);
        Ok(())
    }

    pub fn get(&self, addr: u16) -> u8 {
        self.bytes[addr as usize % MEM_SIZE]
    }

    pub fn set(&mut self, addr: u16, val: u8) {
        self.bytes[addr as usize % MEM_SIZE] = val;
    }

    /// Reads the big-endian instruction word at `addr`.
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from(self.get(addr)) << 8 | u16::from(self.get(addr.wrapping_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_sits_at_address_zero() {
        let mem = Memory::new();
        // first bytes of the glyphs for 0 and 1
        assert_eq!(mem.get(0x000), 0xF0);
        assert_eq!(mem.get(GLYPH_LEN), 0x20);
    }

    #[test]
    fn loads_rom_at_program_start() {
        let mut mem = Memory::new();
        mem.load_rom(&[0xAA, 0xBB]).unwrap();
        assert_eq!(mem.get(0x200), 0xAA);
        assert_eq!(mem.get(0x201), 0xBB);
    }

    #[test]
    fn accepts_a_rom_that_exactly_fills_memory() {
        let mut mem = Memory::new();
        let rom = vec![0x00; MEM_SIZE - PROG_START];
        assert!(mem.load_rom(&rom).is_ok());
    }

    #[test]
    fn rejects_a_rom_one_byte_too_large() {
        let mut mem = Memory::new();
        let rom = vec![0x00; MEM_SIZE - PROG_START + 1];
        assert!(matches!(
            mem.load_rom(&rom),
            Err(Error::RomTooLarge { size }) if size == MEM_SIZE - PROG_START + 1
        ));
    }

    #[test]
    fn addresses_wrap_at_the_memory_bound() {
        let mut mem = Memory::new();
        mem.set(MEM_SIZE as u16, 0x42);
        assert_eq!(mem.get(0x000), 0x42);
    }

    #[test]
    fn reads_big_endian_words() {
        let mut mem = Memory::new();
        mem.set(0x200, 0xAB);
        mem.set(0x201, 0xCD);
        assert_eq!(mem.read_word(0x200), 0xABCD);
    }
}
