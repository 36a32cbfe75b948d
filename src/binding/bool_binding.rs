use serde::{Deserialize, Serialize};

use super::Hand;

/// A digital (on/off) input binding.
///
/// The mouse block reserves 16 slots (5 buttons, click + double-click, with
/// headroom), the keyboard block covers the ~128-key desktop layout, and the
/// XR block covers the 128-slot controller button space. Those slot counts
/// are the source's layout; here they're just doc comments, since the
/// region check is an exhaustive match rather than an integer range test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolBinding {
    /// Returned by OS-event translation for a platform key/button code with
    /// no mapping. Never matches any binding in a real `Action`.
    Undefined,
    Mouse(MouseButtonBinding),
    Keyboard(KeyboardKey),
    XrController(XrBoolBinding),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButtonBinding {
    LeftClick,
    LeftDoubleClick,
    RightClick,
    RightDoubleClick,
    MiddleClick,
    MiddleDoubleClick,
    X1Click,
    X1DoubleClick,
    X2Click,
    X2DoubleClick,
}

impl MouseButtonBinding {
    /// The single-click and double-click variant pair for a given physical
    /// button, used by the double-click arbitration in the OS adapter.
    pub fn single(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftClick,
            MouseButton::Right => Self::RightClick,
            MouseButton::Middle => Self::MiddleClick,
            MouseButton::X1 => Self::X1Click,
            MouseButton::X2 => Self::X2Click,
        }
    }

    pub fn double(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftDoubleClick,
            MouseButton::Right => Self::RightDoubleClick,
            MouseButton::Middle => Self::MiddleDoubleClick,
            MouseButton::X1 => Self::X1DoubleClick,
            MouseButton::X2 => Self::X2DoubleClick,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(
            self,
            Self::LeftDoubleClick
                | Self::RightDoubleClick
                | Self::MiddleDoubleClick
                | Self::X1DoubleClick
                | Self::X2DoubleClick
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

/// Desktop keyboard keys. Both left/right variants of a modifier collapse
/// to the logical modifier at OS-translation time (`KeyboardShift` covers
/// both shift keys) - there is deliberately no `LeftShift`/`RightShift`
/// pair here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum KeyboardKey {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Shift,
    Control,
    Alt,
    Escape,
    Tab,
    CapsLock,
    Space,
    Enter,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
    OemComma,
    OemPeriod,
    OemMinus,
    OemPlus,
    OemSemicolon,
    OemSlash,
    OemBackslash,
    OemBracketOpen,
    OemBracketClose,
    OemQuote,
    OemTilde,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrButtonPhase {
    Click,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrButton {
    /// Click only; no touch sense on any supported profile.
    Select,
    /// Click only; no touch sense on any supported profile.
    Menu,
    A,
    B,
    Trigger,
    Thumbstick,
    Trackpad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XrBoolBinding {
    pub hand: Hand,
    pub button: XrButton,
    pub phase: XrButtonPhase,
}

impl XrBoolBinding {
    pub const fn new(hand: Hand, button: XrButton, phase: XrButtonPhase) -> Self {
        Self {
            hand,
            button,
            phase,
        }
    }
}

impl From<XrBoolBinding> for BoolBinding {
    fn from(value: XrBoolBinding) -> Self {
        BoolBinding::XrController(value)
    }
}
