use serde::{Deserialize, Serialize};

use super::Hand;

/// Pose bindings resolve to a rigid-body transform sampled at a display
/// time. `Hmd` is resolved against the XR view space directly rather than
/// an action space - there is no OpenXR action behind it at all, unlike
/// the controller poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseBinding {
    Hmd,
    XrController { hand: Hand, which: PoseWhich },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseWhich {
    Grip,
    Aim,
}

impl PoseBinding {
    pub const fn xr(hand: Hand, which: PoseWhich) -> Self {
        Self::XrController { hand, which }
    }

    pub fn is_hmd(self) -> bool {
        matches!(self, Self::Hmd)
    }

    /// Panics on `Hmd`, which has no per-hand subaction path; callers must
    /// check `is_hmd` first (every call site in this crate does, since the
    /// HMD binding never gets an XR action or space to qualify by hand).
    pub fn hand(self) -> Hand {
        match self {
            Self::Hmd => unreachable!("HMD pose binding has no hand"),
            Self::XrController { hand, .. } => hand,
        }
    }
}
