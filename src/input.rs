/// Number of entries in the held-key table. Codes at or above it are ignored.
pub const KEY_TABLE_SIZE: usize = 1024;

/// Platform-neutral key identifier, numbered like the GLFW key tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const NUM_0: Self = Self(48);
    pub const NUM_1: Self = Self(49);
    pub const NUM_2: Self = Self(50);
    pub const NUM_3: Self = Self(51);
    pub const NUM_4: Self = Self(52);
    pub const NUM_5: Self = Self(53);
    pub const NUM_6: Self = Self(54);
    pub const NUM_7: Self = Self(55);
    pub const NUM_8: Self = Self(56);
    pub const NUM_9: Self = Self(57);
    pub const W: Self = Self(87);
    pub const ESCAPE: Self = Self(256);
    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);

    /// Numeric value of a top row digit key.
    pub fn digit(self) -> Option<u8> {
        match self.0 {
            48..=57 => Some((self.0 - 48) as u8),
            _ => None,
        }
    }
}

/// What a key event changed in the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyTransition {
    /// Key went from released to held.
    Pressed,
    /// Key was already held, the platform repeated the press.
    Repeated,
    Released,
    /// Code does not fit the table.
    Ignored,
}

/// Table of currently held keys, indexed directly by key code.
pub struct KeyState {
    held: [bool; KEY_TABLE_SIZE],
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_TABLE_SIZE],
        }
    }

    pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> KeyTransition {
        let slot = match self.held.get_mut(code.0 as usize) {
            Some(slot) => slot,
            None => {
                log::trace!("key code {} outside of key table", code.0);
                return KeyTransition::Ignored;
            }
        };

        let was_held = std::mem::replace(slot, pressed);

        match (was_held, pressed) {
            (false, true) => KeyTransition::Pressed,
            (true, true) => KeyTransition::Repeated,
            (_, false) => KeyTransition::Released,
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.get(code.0 as usize).copied().unwrap_or(false)
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
