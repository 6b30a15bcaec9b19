//! Keyboard state tracked across the event loop.

use std::collections::HashSet;

use glutin::event::{ElementState, KeyboardInput, VirtualKeyCode};

/// Standard quit key; [`QUIT_SPECIAL`] is its special-key counterpart.
pub const QUIT_KEY: char = 'q';
pub const QUIT_SPECIAL: VirtualKeyCode = VirtualKeyCode::F4;

/// What the event loop should do after a key event has been folded in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyDispatch {
    Continue,
    Quit,
}

/// Currently held keys, split the way the window system reports them:
/// printable characters in one set, everything else by keycode.
#[derive(Debug, Default)]
pub struct KeyState {
    keys: HashSet<char>,
    special: HashSet<VirtualKeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one keyboard event into the held sets. A press of the quit key
    /// (or its special-key variant) reports [`KeyDispatch::Quit`] so the
    /// loop can terminate before anything else runs.
    pub fn handle(&mut self, input: &KeyboardInput) -> KeyDispatch {
        let key = match input.virtual_keycode {
            Some(key) => key,
            None => return KeyDispatch::Continue,
        };

        match (printable(key), input.state) {
            (Some(ch), ElementState::Pressed) => self.key_down(ch),
            (Some(ch), ElementState::Released) => {
                self.key_up(ch);
                KeyDispatch::Continue
            }
            (None, ElementState::Pressed) => self.special_down(key),
            (None, ElementState::Released) => {
                self.special_up(key);
                KeyDispatch::Continue
            }
        }
    }

    pub fn key_down(&mut self, key: char) -> KeyDispatch {
        self.keys.insert(key);
        if key == QUIT_KEY {
            KeyDispatch::Quit
        } else {
            KeyDispatch::Continue
        }
    }

    /// Removing a key that was never pressed is a no-op.
    pub fn key_up(&mut self, key: char) {
        self.keys.remove(&key);
    }

    pub fn special_down(&mut self, key: VirtualKeyCode) -> KeyDispatch {
        self.special.insert(key);
        if key == QUIT_SPECIAL {
            KeyDispatch::Quit
        } else {
            KeyDispatch::Continue
        }
    }

    pub fn special_up(&mut self, key: VirtualKeyCode) {
        self.special.remove(&key);
    }

    pub fn is_down(&self, key: char) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_special_down(&self, key: VirtualKeyCode) -> bool {
        self.special.contains(&key)
    }
}

/// The character a keycode stands for, when it has one. Keys without a
/// printable form (function keys, arrows, modifiers) go to the special set.
fn printable(key: VirtualKeyCode) -> Option<char> {
    use glutin::event::VirtualKeyCode::*;

    Some(match key {
        A => 'a',
        B => 'b',
        C => 'c',
        D => 'd',
        E => 'e',
        F => 'f',
        G => 'g',
        H => 'h',
        I => 'i',
        J => 'j',
        K => 'k',
        L => 'l',
        M => 'm',
        N => 'n',
        O => 'o',
        P => 'p',
        Q => 'q',
        R => 'r',
        S => 's',
        T => 't',
        U => 'u',
        V => 'v',
        W => 'w',
        X => 'x',
        Y => 'y',
        Z => 'z',
        Key0 => '0',
        Key1 => '1',
        Key2 => '2',
        Key3 => '3',
        Key4 => '4',
        Key5 => '5',
        Key6 => '6',
        Key7 => '7',
        Key8 => '8',
        Key9 => '9',
        Space => ' ',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_then_up_round_trips() {
        let mut state = KeyState::new();
        assert_eq!(state.key_down('w'), KeyDispatch::Continue);
        assert!(state.is_down('w'));
        state.key_up('w');
        assert!(!state.is_down('w'));
    }

    #[test]
    fn releasing_an_unpressed_key_is_idempotent() {
        let mut state = KeyState::new();
        state.key_up('x');
        assert!(!state.is_down('x'));
        state.special_up(VirtualKeyCode::Left);
        assert!(!state.is_special_down(VirtualKeyCode::Left));
    }

    #[test]
    fn quit_key_reports_quit() {
        let mut state = KeyState::new();
        assert_eq!(state.key_down('q'), KeyDispatch::Quit);
        assert_eq!(state.key_down('w'), KeyDispatch::Continue);
    }

    #[test]
    fn special_quit_variant_reports_quit() {
        let mut state = KeyState::new();
        assert_eq!(state.special_down(VirtualKeyCode::F4), KeyDispatch::Quit);
        assert_eq!(state.special_down(VirtualKeyCode::F5), KeyDispatch::Continue);
    }

    #[test]
    fn special_keys_track_separately_from_characters() {
        let mut state = KeyState::new();
        state.special_down(VirtualKeyCode::LShift);
        state.key_down('a');
        assert!(state.is_special_down(VirtualKeyCode::LShift));
        assert!(state.is_down('a'));

        state.special_up(VirtualKeyCode::LShift);
        assert!(!state.is_special_down(VirtualKeyCode::LShift));
        assert!(state.is_down('a'));
    }

    #[test]
    fn printable_classification() {
        assert_eq!(printable(VirtualKeyCode::Q), Some('q'));
        assert_eq!(printable(VirtualKeyCode::Key3), Some('3'));
        assert_eq!(printable(VirtualKeyCode::Space), Some(' '));
        assert_eq!(printable(VirtualKeyCode::F4), None);
        assert_eq!(printable(VirtualKeyCode::Escape), None);
    }
}
