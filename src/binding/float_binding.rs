use serde::{Deserialize, Serialize};

use super::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatBinding {
    Mouse(MouseWheelAxis),
    XrController { hand: Hand, axis: XrFloatAxis },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseWheelAxis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrFloatAxis {
    SqueezeValue,
    SqueezeForce,
    TriggerValue,
    ThumbstickX,
    ThumbstickY,
    TrackpadX,
    TrackpadY,
    TrackpadForce,
}

impl FloatBinding {
    pub const fn xr(hand: Hand, axis: XrFloatAxis) -> Self {
        Self::XrController { hand, axis }
    }
}
