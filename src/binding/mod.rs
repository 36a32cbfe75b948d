//! The closed binding vocabulary: every raw device input or output the
//! action system knows how to translate into a typed action value.
//!
//! Each value type (`Bool`, `Float`, `Vec2`, `Pose`, `Haptic`) gets its own
//! enum, and each enum is a tagged sum over device regions (mouse,
//! keyboard, XR controller) rather than a flat range of integers - the
//! `is_xr_*` predicates below are exhaustive matches, not bounds checks.

mod bool_binding;
mod float_binding;
mod haptic_binding;
pub mod keymap;
pub mod paths;
mod pose_binding;
pub mod profiles;
mod vec2_binding;

pub use bool_binding::{
    BoolBinding, KeyboardKey, MouseButton, MouseButtonBinding, XrBoolBinding, XrButton,
    XrButtonPhase,
};
pub use float_binding::{FloatBinding, MouseWheelAxis, XrFloatAxis};
pub use haptic_binding::HapticBinding;
pub use pose_binding::{PoseBinding, PoseWhich};
pub use profiles::InteractionProfile;
pub use vec2_binding::{Vec2Binding, XrVec2Axis};

/// A controller hand, used to qualify every XR binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn both() -> [Hand; 2] {
        [Hand::Left, Hand::Right]
    }

    /// OpenXR user path for this hand, e.g. `/user/hand/left`.
    pub fn user_path(self) -> &'static str {
        match self {
            Hand::Left => "/user/hand/left",
            Hand::Right => "/user/hand/right",
        }
    }
}

pub fn is_xr_bool(b: BoolBinding) -> bool {
    matches!(b, BoolBinding::XrController(_))
}

pub fn is_xr_float(f: FloatBinding) -> bool {
    matches!(f, FloatBinding::XrController { .. })
}

pub fn is_xr_vec2(v: Vec2Binding) -> bool {
    matches!(v, Vec2Binding::XrController { .. })
}

pub fn is_xr_pose(p: PoseBinding) -> bool {
    // every pose binding is XR-sourced; kept as a named predicate for
    // symmetry with the other four vocabularies and because a future
    // desktop-simulated pose (e.g. a fixed debug camera) would not be.
    matches!(p, PoseBinding::Hmd | PoseBinding::XrController { .. })
}

pub fn is_xr_haptic(_h: HapticBinding) -> bool {
    // haptic output only exists on XR controllers today; kept as a function
    // (rather than `true`) so new haptic sources added later don't have to
    // touch every call site.
    true
}
