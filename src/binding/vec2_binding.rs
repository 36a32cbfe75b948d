use serde::{Deserialize, Serialize};

use super::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vec2Binding {
    /// Per-frame relative motion delta. Accumulated by the OS adapter and
    /// dispatched once at `process_events` time.
    MouseMoved,
    /// Absolute cursor position in client space.
    MousePosition,
    XrController { hand: Hand, axis: XrVec2Axis },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrVec2Axis {
    Thumbstick,
    Trackpad,
}

impl Vec2Binding {
    pub const fn xr(hand: Hand, axis: XrVec2Axis) -> Self {
        Self::XrController { hand, axis }
    }
}
