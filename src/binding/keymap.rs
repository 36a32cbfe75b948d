//! Platform key/button code to `BoolBinding` translation.
//!
//! A total function mapping platform key/button codes to bool-binding
//! enums, returning `Undefined` for unmapped codes. Both left/right
//! variants of a modifier key collapse to the logical modifier. Codes here
//! are Win32 virtual-key codes (the concrete host target), gated behind no
//! feature - the mapping table itself has no platform dependency, only the
//! raw-input registration in `os_adapter` does.

use super::{BoolBinding, KeyboardKey, MouseButton};

/// A platform virtual-key code, e.g. Win32 `VK_*`.
pub type PlatformKeyCode = u16;

/// Total function: unmapped codes return `BoolBinding::Undefined`.
pub fn translate_key_code(code: PlatformKeyCode) -> BoolBinding {
    use KeyboardKey::*;
    let key = match code {
        0x41..=0x5A => {
            const LETTERS: [KeyboardKey; 26] = [
                A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            ];
            LETTERS[(code - 0x41) as usize]
        }
        0x30..=0x39 => {
            const DIGITS: [KeyboardKey; 10] = [
                Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
            ];
            DIGITS[(code - 0x30) as usize]
        }
        0x70..=0x7B => {
            const FKEYS: [KeyboardKey; 12] = [
                F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            ];
            FKEYS[(code - 0x70) as usize]
        }
        0x60..=0x69 => {
            const NUMPAD_DIGITS: [KeyboardKey; 10] = [
                Numpad0, Numpad1, Numpad2, Numpad3, Numpad4, Numpad5, Numpad6, Numpad7, Numpad8,
                Numpad9,
            ];
            NUMPAD_DIGITS[(code - 0x60) as usize]
        }
        0x10 | 0xA0 | 0xA1 => Shift, // VK_SHIFT, VK_LSHIFT, VK_RSHIFT
        0x11 | 0xA2 | 0xA3 => Control, // VK_CONTROL, VK_LCONTROL, VK_RCONTROL
        0x12 | 0xA4 | 0xA5 => Alt,   // VK_MENU, VK_LMENU, VK_RMENU
        0x1B => Escape,
        0x09 => Tab,
        0x14 => CapsLock,
        0x20 => Space,
        0x0D => Enter,
        0x08 => Backspace,
        0x2E => Delete,
        0x2D => Insert,
        0x24 => Home,
        0x23 => End,
        0x21 => PageUp,
        0x22 => PageDown,
        0x26 => ArrowUp,
        0x28 => ArrowDown,
        0x25 => ArrowLeft,
        0x27 => ArrowRight,
        0x6B => NumpadAdd,
        0x6D => NumpadSubtract,
        0x6A => NumpadMultiply,
        0x6F => NumpadDivide,
        0x6E => NumpadDecimal,
        0xBC => OemComma,
        0xBE => OemPeriod,
        0xBD => OemMinus,
        0xBB => OemPlus,
        0xBA => OemSemicolon,
        0xBF => OemSlash,
        0xDC => OemBackslash,
        0xDB => OemBracketOpen,
        0xDD => OemBracketClose,
        0xDE => OemQuote,
        0xC0 => OemTilde,
        _ => return BoolBinding::Undefined,
    };
    BoolBinding::Keyboard(key)
}

/// Total function over the five platform mouse button codes.
pub fn translate_mouse_button_code(code: u8) -> Option<MouseButton> {
    match code {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Right),
        2 => Some(MouseButton::Middle),
        3 => Some(MouseButton::X1),
        4 => Some(MouseButton::X2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_shift_collapse_to_shift() {
        assert_eq!(translate_key_code(0xA0), BoolBinding::Keyboard(KeyboardKey::Shift));
        assert_eq!(translate_key_code(0xA1), BoolBinding::Keyboard(KeyboardKey::Shift));
        assert_eq!(translate_key_code(0x10), BoolBinding::Keyboard(KeyboardKey::Shift));
    }

    #[test]
    fn unmapped_code_is_undefined() {
        assert_eq!(translate_key_code(0xFFF), BoolBinding::Undefined);
    }

    #[test]
    fn letters_round_trip() {
        assert_eq!(translate_key_code(0x41), BoolBinding::Keyboard(KeyboardKey::A));
        assert_eq!(translate_key_code(0x5A), BoolBinding::Keyboard(KeyboardKey::Z));
    }
}
