/// Logical display resolution before any host-side upscaling.
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// One frame of pixel state, indexed `[y][x]`, each cell 0 or 1.
pub type Frame = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Monochrome surface with XOR sprite composition.
///
/// Sprite coordinates wrap modulo the resolution, both at the start position
/// and per plotted pixel; nothing clips at the edges. A draw that turns any
/// lit pixel off reports a collision.
pub struct Display {
    pixels: Frame,
    dirty: bool,
}

impl Display {
    pub fn new() -> Self {
        Self {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs an 8-wide sprite in at `(x, y)`, one byte per row, MSB leftmost.
    /// Returns whether any pixel went from on to off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (dy, row) in sprite.iter().enumerate() {
            let py = (y as usize + dy) % DISPLAY_HEIGHT;
            for dx in 0..8 {
                if row & (0x80 >> dx) == 0 {
                    continue;
                }
                let px = (x as usize + dx) % DISPLAY_WIDTH;
                if self.pixels[py][px] == 1 {
                    collision = true;
                }
                self.pixels[py][px] ^= 1;
            }
        }
        self.dirty = true;
        collision
    }

    /// Hands the frame to the host if a draw happened since the last take,
    /// clearing the dirty flag in the process.
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.dirty {
            self.dirty = false;
            Some(self.pixels)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y][x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_a_row_msb_first() {
        let mut display = Display::new();
        // 1100 0001
        display.draw_sprite(0, 0, &[0xC1]);
        assert_eq!(display.pixel(0, 0), 1);
        assert_eq!(display.pixel(1, 0), 1);
        assert_eq!(display.pixel(2, 0), 0);
        assert_eq!(display.pixel(7, 0), 1);
    }

    #[test]
    fn drawing_twice_xors_back_to_blank_and_collides() {
        let mut display = Display::new();
        assert!(!display.draw_sprite(3, 5, &[0xFF, 0x81]));
        assert!(display.draw_sprite(3, 5, &[0xFF, 0x81]));
        assert!(display
            .take_frame()
            .unwrap()
            .iter()
            .all(|row| row.iter().all(|&p| p == 0)));
    }

    #[test]
    fn sprites_wrap_at_both_edges() {
        let mut display = Display::new();
        display.draw_sprite(62, 31, &[0xC0, 0xC0]);
        // rightmost column pair wraps to x 62,63 then 0; row 31 then row 0
        assert_eq!(display.pixel(62, 31), 1);
        assert_eq!(display.pixel(63, 31), 1);
        assert_eq!(display.pixel(62, 0), 1);
        assert_eq!(display.pixel(63, 0), 1);
    }

    #[test]
    fn coordinates_past_the_resolution_wrap() {
        let mut display = Display::new();
        display.draw_sprite(64 + 2, 32 + 1, &[0x80]);
        assert_eq!(display.pixel(2, 1), 1);
    }

    #[test]
    fn clear_blanks_every_pixel_and_dirties() {
        let mut display = Display::new();
        display.draw_sprite(10, 10, &[0xFF]);
        display.take_frame();
        display.clear();
        let frame = display.take_frame().expect("clear should dirty the frame");
        assert!(frame.iter().all(|row| row.iter().all(|&p| p == 0)));
    }

    #[test]
    fn frame_is_taken_once_per_draw() {
        let mut display = Display::new();
        assert!(display.take_frame().is_none());
        display.draw_sprite(0, 0, &[0x80]);
        assert!(display.take_frame().is_some());
        assert!(display.take_frame().is_none());
    }
}
