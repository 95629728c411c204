use raylib::prelude::*;

use crate::input::{InputSource, Intent};

const BOUND_KEYS: [KeyboardKey; 5] = [
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_D,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_A,
];

pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self, rl: &RaylibHandle) -> Intent {
        for key in BOUND_KEYS {
            if rl.is_key_pressed(key) {
                return intent_for_key(key);
            }
        }
        Intent::Ignore
    }
}

pub fn intent_for_key(key: KeyboardKey) -> Intent {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE | KeyboardKey::KEY_D => Intent::Advance,
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_A => Intent::Retreat,
        _ => Intent::Ignore,
    }
}
