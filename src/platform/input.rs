//! Sampled key state

use super::InputSource;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Jump
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Held/released state kept up to date by key events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    space: bool,
}

impl KeyboardState {
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Space => self.space = held,
        }
    }

    /// Release everything (focus lost)
    pub fn release_all(&mut self) {
        self.space = false;
    }
}

impl InputSource for KeyboardState {
    fn is_key_held(&self, key: Key) -> bool {
        match key {
            Key::Space => self.space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Enter"), None);
    }

    #[test]
    fn test_keyboard_state() {
        let mut keys = KeyboardState::default();
        assert!(!keys.is_key_held(Key::Space));
        keys.set(Key::Space, true);
        assert!(keys.is_key_held(Key::Space));
        keys.release_all();
        assert!(!keys.is_key_held(Key::Space));
    }
}
