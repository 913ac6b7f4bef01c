use raylib::prelude::*;

use crate::app::Fullscreen;
use crate::error::{Result, SlidedeckError};
use crate::input::Key;

impl Fullscreen for RaylibHandle {
    fn is_fullscreen(&self) -> bool {
        self.is_window_fullscreen()
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.toggle_fullscreen();
        if self.is_window_fullscreen() {
            Ok(())
        } else {
            Err(SlidedeckError::Fullscreen("window did not enter fullscreen".into()))
        }
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.toggle_fullscreen();
        if self.is_window_fullscreen() {
            Err(SlidedeckError::Fullscreen("window did not leave fullscreen".into()))
        } else {
            Ok(())
        }
    }
}

/// Non-printing keys by key code. Printing keys come through [`translate_char`],
/// so layouts other than US still produce the right characters.
pub fn translate_key(key: KeyboardKey) -> Option<Key> {
    match key {
        KeyboardKey::KEY_LEFT => Some(Key::Left),
        KeyboardKey::KEY_UP => Some(Key::Up),
        KeyboardKey::KEY_RIGHT => Some(Key::Right),
        KeyboardKey::KEY_DOWN => Some(Key::Down),
        KeyboardKey::KEY_SPACE => Some(Key::Space),
        KeyboardKey::KEY_HOME => Some(Key::Home),
        KeyboardKey::KEY_END => Some(Key::End),
        KeyboardKey::KEY_ESCAPE => Some(Key::Escape),
        // ' ' through '`', reported again as characters
        key if (33..=96).contains(&(key as i32)) => None,
        _ => Some(Key::Other),
    }
}

pub fn translate_char(c: char) -> Option<Key> {
    match c {
        ' ' => None, // already KEY_SPACE
        c => Some(Key::Char(c)),
    }
}

pub fn collect_keys(
    codes: impl IntoIterator<Item = KeyboardKey>,
    chars: impl IntoIterator<Item = char>,
) -> Vec<Key> {
    codes
        .into_iter()
        .filter_map(translate_key)
        .chain(chars.into_iter().filter_map(translate_char))
        .collect()
}

/// Keys pressed since the last frame: key codes first, then typed characters.
pub fn pressed_keys(rl: &mut RaylibHandle) -> Vec<Key> {
    let codes: Vec<KeyboardKey> = std::iter::from_fn(|| rl.get_key_pressed()).collect();
    let chars: Vec<char> = std::iter::from_fn(|| rl.get_char_pressed()).collect();
    collect_keys(codes, chars)
}
