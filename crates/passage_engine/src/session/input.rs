//! Input surface
//!
//! The host owns input devices; this module only defines the key identity
//! space, the per-frame snapshot the host hands over, and the configurable
//! chord bindings. All commands are chorded: a designated modifier key held
//! down plus one decision key pressed this frame.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// 0 key
    Digit0,
    /// 1 key
    Digit1,
    /// 2 key
    Digit2,
    /// 3 key
    Digit3,
    /// 4 key
    Digit4,
    /// 5 key
    Digit5,
    /// 6 key
    Digit6,
    /// 7 key
    Digit7,
    /// 8 key
    Digit8,
    /// 9 key
    Digit9,
}

bitflags! {
    /// Chord modifier state derived from a snapshot
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChordState: u8 {
        /// The command modifier key is held
        const MODIFIER = 1;
        /// The debug-chord hold key is held
        const DEBUG_HOLD = 1 << 1;
    }
}

/// One frame of input, as sampled by the host
///
/// `pressed` holds keys that went down this frame; `held` holds every key
/// currently down (a freshly pressed key appears in both). The clipboard
/// text, when the host can provide one, rides along for the debug learn
/// command.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    /// Host clipboard contents this frame, if available
    pub clipboard: Option<String>,
}

impl InputSnapshot {
    /// An empty snapshot (no keys down)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held (down, but not newly pressed this frame)
    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Mark a key as pressed this frame (implies held)
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    /// Attach clipboard text to the snapshot
    pub fn with_clipboard(mut self, text: impl Into<String>) -> Self {
        self.clipboard = Some(text.into());
        self
    }

    /// Whether a key is currently down
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether a key went down this frame
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Derive the chord modifier state for the given bindings
    pub fn chord_state(&self, bindings: &KeyBindings) -> ChordState {
        let mut state = ChordState::empty();
        if self.is_held(bindings.modifier) {
            state |= ChordState::MODIFIER;
        }
        if self.is_held(bindings.debug_hold) {
            state |= ChordState::DEBUG_HOLD;
        }
        state
    }
}

/// Chord bindings for every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Modifier held for every chord
    pub modifier: Key,
    /// Open nearby pathways (also the debug learn key when unmodified)
    pub open_nearby: Key,
    /// Close nearby pathways
    pub close_nearby: Key,
    /// Open nearby pathways including the filtered set
    pub open_all: Key,
    /// Increase the toggle radius by one step
    pub radius_increase: Key,
    /// Decrease the toggle radius by one step
    pub radius_decrease: Key,
    /// Second hold key of the debug-mode chord
    pub debug_hold: Key,
    /// Decision key of the debug-mode chord
    pub debug_toggle: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            modifier: Key::O,
            open_nearby: Key::I,
            close_nearby: Key::P,
            open_all: Key::K,
            radius_increase: Key::Digit0,
            radius_decrease: Key::Digit9,
            debug_hold: Key::M,
            debug_toggle: Key::N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_implies_held() {
        let input = InputSnapshot::new().press(Key::I);
        assert!(input.was_pressed(Key::I));
        assert!(input.is_held(Key::I));
    }

    #[test]
    fn test_hold_is_not_a_press() {
        let input = InputSnapshot::new().hold(Key::O);
        assert!(input.is_held(Key::O));
        assert!(!input.was_pressed(Key::O));
    }

    #[test]
    fn test_chord_state_tracks_both_holds() {
        let bindings = KeyBindings::default();
        let input = InputSnapshot::new().hold(Key::O).hold(Key::M);
        let state = input.chord_state(&bindings);
        assert!(state.contains(ChordState::MODIFIER));
        assert!(state.contains(ChordState::DEBUG_HOLD));

        let bare = InputSnapshot::new().press(Key::I);
        assert_eq!(bare.chord_state(&bindings), ChordState::empty());
    }
}
