//! 16-key hexadecimal keypad.

/// Number of keys.
pub const KEY_COUNT: usize = 16;

/// Pressed/released state for keys 0x0-0xF.
///
/// The input collaborator sets and clears keys between cycles; the
/// interpreter only reads them. Key numbers above 0xF are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
        }
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(k) = self.keys.get_mut(usize::from(key)) {
            *k = pressed;
        }
    }

    pub fn release_all(&mut self) {
        self.keys = [false; KEY_COUNT];
    }

    #[must_use]
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(usize::from(key)).copied().unwrap_or(false)
    }

    /// Lowest-numbered key currently held.
    #[must_use]
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&k| k).map(|k| k as u8)
    }

    #[must_use]
    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        &self.keys
    }
}
