use rand::Rng;

use crate::decode::Instruction;
use crate::display::{Display, Frame};
use crate::error::Error;
use crate::keypad::Keypad;
use crate::memory::{Memory, GLYPH_LEN};
use crate::registers::Registers;
use crate::timer::Timer;

/// The machine: memory, register file, display surface, input latch and the
/// two timers, driven by `step`.
///
/// The host owns pacing. It calls [`step`](Emulator::step) at whatever
/// instruction rate it wants and [`tick_timers`](Emulator::tick_timers) at
/// 60 Hz; the two clocks are independent and the core never sleeps.
pub struct Emulator {
    mem: Memory,
    regs: Registers,
    display: Display,
    keypad: Keypad,
    delay: Timer,
    sound: Timer,
}

impl Emulator {
    /// Builds a machine with `rom` loaded at the program start. Fails if the
    /// ROM does not fit.
    pub fn new(rom: &[u8]) -> Result<Self, Error> {
        let mut mem = Memory::new();
        mem.load_rom(rom)?;
        Ok(Self {
            mem,
            regs: Registers::new(),
            display: Display::new(),
            keypad: Keypad::new(),
            delay: Timer::new(),
            sound: Timer::new(),
        })
    }

    /// Runs one fetch/decode/execute cycle.
    ///
    /// Returns `Err` on stack underflow or on a word from a family the
    /// machine does not recognize at all; unknown words inside a recognized
    /// family are logged and skipped. Either way the program counter has
    /// already moved past the word.
    pub fn step(&mut self) -> Result<(), Error> {
        let word = self.fetch();
        log::trace!("{:04X} at pc {:#06X}", word, self.regs.pc.wrapping_sub(2));
        self.execute(Instruction::decode(word))
    }

    /// Decrements the delay and sound timers once each. Call at 60 Hz.
    pub fn tick_timers(&mut self) {
        self.delay.tick();
        self.sound.tick();
    }

    /// Whether the host should be emitting a tone right now.
    pub fn sound_active(&self) -> bool {
        self.sound.active()
    }

    /// Records a key transition on the hex pad, index 0x0-0xF.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keypad.set(key, pressed);
    }

    /// The current frame if a draw happened since the last take; taking it
    /// clears the dirty flag.
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.display.take_frame()
    }

    fn fetch(&mut self) -> u16 {
        let word = self.mem.read_word(self.regs.pc);
        self.regs.skip();
        word
    }

    fn execute(&mut self, instruction: Instruction) -> Result<(), Error> {
        match instruction {
            Instruction::ClearScreen => self.display.clear(),
            Instruction::Return => {
                let addr = self.regs.pop().ok_or(Error::StackUnderflow {
                    pc: self.regs.pc.wrapping_sub(2),
                })?;
                self.regs.pc = addr;
            }
            Instruction::Jump(addr) => self.regs.pc = addr,
            Instruction::Call(addr) => {
                self.regs.push(self.regs.pc);
                self.regs.pc = addr;
            }
            Instruction::SkipEqual(x, nn) => {
                if self.regs.get(x) == nn {
                    self.regs.skip();
                }
            }
            Instruction::SkipNotEqual(x, nn) => {
                if self.regs.get(x) != nn {
                    self.regs.skip();
                }
            }
            Instruction::SetRegister(x, nn) => self.regs.set(x, nn),
            Instruction::AddToRegister(x, nn) => {
                // wraps silently, no flag
                self.regs.set(x, self.regs.get(x).wrapping_add(nn));
            }
            Instruction::CopyRegister(x, y) => self.regs.set(x, self.regs.get(y)),
            Instruction::And(x, y) => self.regs.set(x, self.regs.get(x) & self.regs.get(y)),
            Instruction::Xor(x, y) => self.regs.set(x, self.regs.get(x) ^ self.regs.get(y)),
            Instruction::Add(x, y) => {
                let (sum, carry) = self.regs.get(x).overflowing_add(self.regs.get(y));
                self.regs.set(x, sum);
                self.regs.set_flag(carry);
            }
            Instruction::Subtract(x, y) => {
                let (diff, borrow) = self.regs.get(x).overflowing_sub(self.regs.get(y));
                self.regs.set(x, diff);
                self.regs.set_flag(!borrow);
            }
            Instruction::ShiftRight(x) => {
                let vx = self.regs.get(x);
                self.regs.set(x, vx >> 1);
                self.regs.set_flag(vx & 0x1 == 0x1);
            }
            Instruction::SkipNotEqualRegister(x, y) => {
                if self.regs.get(x) != self.regs.get(y) {
                    self.regs.skip();
                }
            }
            Instruction::SetIndex(addr) => self.regs.i = addr,
            Instruction::Random(x, nn) => {
                let byte: u8 = rand::thread_rng().gen();
                self.regs.set(x, byte & nn);
            }
            Instruction::Draw(x, y, n) => {
                let sprite: Vec<u8> = (0..u16::from(n))
                    .map(|row| self.mem.get(self.regs.i.wrapping_add(row)))
                    .collect();
                let collision =
                    self.display
                        .draw_sprite(self.regs.get(x), self.regs.get(y), &sprite);
                self.regs.set_flag(collision);
            }
            Instruction::SkipIfPressed(x) => {
                if self.keypad.is_pressed(self.regs.get(x)) {
                    self.regs.skip();
                }
            }
            Instruction::SkipIfReleased(x) => {
                if !self.keypad.is_pressed(self.regs.get(x)) {
                    self.regs.skip();
                }
            }
            Instruction::ReadDelay(x) => self.regs.set(x, self.delay.get()),
            Instruction::WaitKey(x) => match self.keypad.first_pressed() {
                Some(key) => self.regs.set(x, key),
                // re-execute this word next cycle; machine time does not move
                None => self.regs.rewind(),
            },
            Instruction::SetDelay(x) => self.delay.set(self.regs.get(x)),
            Instruction::SetSound(x) => self.sound.set(self.regs.get(x)),
            Instruction::AddToIndex(x) => {
                self.regs.i = self.regs.i.wrapping_add(u16::from(self.regs.get(x)));
            }
            Instruction::FontChar(x) => {
                self.regs.i = u16::from(self.regs.get(x)) * GLYPH_LEN;
            }
            Instruction::StoreDigits(x) => {
                let value = self.regs.get(x);
                self.mem.set(self.regs.i, value / 100);
                self.mem.set(self.regs.i.wrapping_add(1), value / 10 % 10);
                self.mem.set(self.regs.i.wrapping_add(2), value % 10);
            }
            Instruction::StoreRegisters(x) => {
                for reg in 0..=x {
                    self.mem.set(self.regs.i, self.regs.get(reg));
                    self.regs.i = self.regs.i.wrapping_add(1);
                }
            }
            Instruction::LoadRegisters(x) => {
                for reg in 0..=x {
                    self.regs.set(reg, self.mem.get(self.regs.i));
                    self.regs.i = self.regs.i.wrapping_add(1);
                }
            }
            Instruction::Unknown(word) => {
                if family_recognized(word) {
                    log::warn!("skipping unimplemented opcode {word:#06X}");
                } else {
                    return Err(Error::UnknownOpcode { opcode: word });
                }
            }
        }
        Ok(())
    }
}

/// 0x5 and 0xB carry no instructions on this machine; every other top nibble
/// has at least one handled sub-opcode.
fn family_recognized(word: u16) -> bool {
    !matches!(word >> 12, 0x5 | 0xB)
}
