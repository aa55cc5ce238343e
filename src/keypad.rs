/// The 16-key hex pad latch.
///
/// The host writes key transitions in; the executor only ever reads. Indices
/// are masked to 0x0-0xF so a garbage register value cannot index out of
/// the pad.
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Self { keys: [false; 16] }
    }

    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[key as usize & 0xF] = pressed;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[key as usize & 0xF]
    }

    /// Lowest-numbered held key, if any. Drives the key-wait instruction.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&k| k).map(|k| k as u8)
    }
}
