//! Monochrome 64x32 framebuffer.

/// Width in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Height in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of pixel cells.
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Row-major lit/unlit cells, read by the display collaborator after each
/// cycle or batch of cycles.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [bool; DISPLAY_SIZE],
}

impl Framebuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pixels: [false; DISPLAY_SIZE],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [false; DISPLAY_SIZE];
    }

    /// Whether the pixel at (x, y) is lit. Off-screen coordinates read as
    /// unlit.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && self.pixels[y * DISPLAY_WIDTH + x]
    }

    /// All cells, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[bool; DISPLAY_SIZE] {
        &self.pixels
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// XOR an 8-pixel-wide sprite onto the screen.
    ///
    /// The start position wraps (`x % 64`, `y % 32`) but the sprite itself
    /// is clipped at the right and bottom edges. Returns true if any lit
    /// pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let x0 = usize::from(x) % DISPLAY_WIDTH;
        let y0 = usize::from(y) % DISPLAY_HEIGHT;
        let mut collision = false;

        for (dy, &bits) in rows.iter().enumerate() {
            let py = y0 + dy;
            if py >= DISPLAY_HEIGHT {
                break;
            }
            for dx in 0..8 {
                let px = x0 + dx;
                if px >= DISPLAY_WIDTH {
                    break;
                }
                if bits & (0x80 >> dx) == 0 {
                    continue;
                }
                let cell = &mut self.pixels[py * DISPLAY_WIDTH + px];
                collision |= *cell;
                *cell = !*cell;
            }
        }
        collision
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.pixels.chunks(DISPLAY_WIDTH) {
            let line: String = row.iter().map(|&p| if p { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
