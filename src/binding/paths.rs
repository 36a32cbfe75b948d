//! Canonical OpenXR path strings for every XR binding, bit-exact for wire
//! compatibility with the runtime's binding suggestion call.

use super::{
    BoolBinding, FloatBinding, HapticBinding, Hand, PoseBinding, PoseWhich, Vec2Binding,
    XrBoolBinding, XrButton, XrButtonPhase, XrFloatAxis, XrVec2Axis,
};

fn hand_path(hand: Hand) -> &'static str {
    hand.user_path()
}

/// Total over every binding in the vocabulary: XR bindings resolve to their
/// canonical path, non-XR bindings log a warning and resolve to `""` (they
/// have no OpenXR path; calling this on one is caller error).
pub fn xr_path_name_bool(b: BoolBinding) -> &'static str {
    match b {
        BoolBinding::XrController(xr) => xr_bool_path(xr),
        BoolBinding::Mouse(_) | BoolBinding::Keyboard(_) | BoolBinding::Undefined => {
            log::warn!("xr_path_name_bool called on non-XR binding {b:?}");
            ""
        }
    }
}

fn xr_bool_path(b: XrBoolBinding) -> &'static str {
    use Hand::*;
    use XrButton::*;
    use XrButtonPhase::*;
    match (b.hand, b.button, b.phase) {
        (Left, Select, Click) => "/user/hand/left/input/select/click",
        (Right, Select, Click) => "/user/hand/right/input/select/click",
        (Left, Menu, Click) => "/user/hand/left/input/menu/click",
        (Right, Menu, Click) => "/user/hand/right/input/menu/click",
        (Left, A, Click) => "/user/hand/left/input/a/click",
        (Right, A, Click) => "/user/hand/right/input/a/click",
        (Left, A, Touch) => "/user/hand/left/input/a/touch",
        (Right, A, Touch) => "/user/hand/right/input/a/touch",
        (Left, B, Click) => "/user/hand/left/input/b/click",
        (Right, B, Click) => "/user/hand/right/input/b/click",
        (Left, B, Touch) => "/user/hand/left/input/b/touch",
        (Right, B, Touch) => "/user/hand/right/input/b/touch",
        (Left, Trigger, Click) => "/user/hand/left/input/trigger/click",
        (Right, Trigger, Click) => "/user/hand/right/input/trigger/click",
        (Left, Trigger, Touch) => "/user/hand/left/input/trigger/touch",
        (Right, Trigger, Touch) => "/user/hand/right/input/trigger/touch",
        (Left, Thumbstick, Click) => "/user/hand/left/input/thumbstick/click",
        (Right, Thumbstick, Click) => "/user/hand/right/input/thumbstick/click",
        (Left, Thumbstick, Touch) => "/user/hand/left/input/thumbstick/touch",
        (Right, Thumbstick, Touch) => "/user/hand/right/input/thumbstick/touch",
        (Left, Trackpad, Click) => "/user/hand/left/input/trackpad/click",
        (Right, Trackpad, Click) => "/user/hand/right/input/trackpad/click",
        (Left, Trackpad, Touch) => "/user/hand/left/input/trackpad/touch",
        (Right, Trackpad, Touch) => "/user/hand/right/input/trackpad/touch",
        (_, Select | Menu, Touch) => {
            log::warn!("{b:?} has no touch component on any supported profile");
            ""
        }
    }
}

pub fn xr_path_name_float(f: FloatBinding) -> &'static str {
    match f {
        FloatBinding::XrController { hand, axis } => match (hand, axis) {
            (Hand::Left, XrFloatAxis::SqueezeValue) => "/user/hand/left/input/squeeze/value",
            (Hand::Right, XrFloatAxis::SqueezeValue) => "/user/hand/right/input/squeeze/value",
            (Hand::Left, XrFloatAxis::SqueezeForce) => "/user/hand/left/input/squeeze/force",
            (Hand::Right, XrFloatAxis::SqueezeForce) => "/user/hand/right/input/squeeze/force",
            (Hand::Left, XrFloatAxis::TriggerValue) => "/user/hand/left/input/trigger/value",
            (Hand::Right, XrFloatAxis::TriggerValue) => "/user/hand/right/input/trigger/value",
            (Hand::Left, XrFloatAxis::ThumbstickX) => "/user/hand/left/input/thumbstick/x",
            (Hand::Right, XrFloatAxis::ThumbstickX) => "/user/hand/right/input/thumbstick/x",
            (Hand::Left, XrFloatAxis::ThumbstickY) => "/user/hand/left/input/thumbstick/y",
            (Hand::Right, XrFloatAxis::ThumbstickY) => "/user/hand/right/input/thumbstick/y",
            (Hand::Left, XrFloatAxis::TrackpadX) => "/user/hand/left/input/trackpad/x",
            (Hand::Right, XrFloatAxis::TrackpadX) => "/user/hand/right/input/trackpad/x",
            (Hand::Left, XrFloatAxis::TrackpadY) => "/user/hand/left/input/trackpad/y",
            (Hand::Right, XrFloatAxis::TrackpadY) => "/user/hand/right/input/trackpad/y",
            (Hand::Left, XrFloatAxis::TrackpadForce) => "/user/hand/left/input/trackpad/force",
            (Hand::Right, XrFloatAxis::TrackpadForce) => "/user/hand/right/input/trackpad/force",
        },
        FloatBinding::Mouse(_) => {
            log::warn!("xr_path_name_float called on non-XR binding {f:?}");
            ""
        }
    }
}

pub fn xr_path_name_vec2(v: Vec2Binding) -> &'static str {
    match v {
        Vec2Binding::XrController { hand, axis } => match (hand, axis) {
            (Hand::Left, XrVec2Axis::Thumbstick) => "/user/hand/left/input/thumbstick",
            (Hand::Right, XrVec2Axis::Thumbstick) => "/user/hand/right/input/thumbstick",
            (Hand::Left, XrVec2Axis::Trackpad) => "/user/hand/left/input/trackpad",
            (Hand::Right, XrVec2Axis::Trackpad) => "/user/hand/right/input/trackpad",
        },
        Vec2Binding::MouseMoved | Vec2Binding::MousePosition => {
            log::warn!("xr_path_name_vec2 called on non-XR binding {v:?}");
            ""
        }
    }
}

pub fn xr_path_name_pose(p: PoseBinding) -> &'static str {
    match p {
        PoseBinding::Hmd => "/user/head/input/grip/pose",
        PoseBinding::XrController { hand, which } => match (hand, which) {
            (Hand::Left, PoseWhich::Grip) => "/user/hand/left/input/grip/pose",
            (Hand::Right, PoseWhich::Grip) => "/user/hand/right/input/grip/pose",
            (Hand::Left, PoseWhich::Aim) => "/user/hand/left/input/aim/pose",
            (Hand::Right, PoseWhich::Aim) => "/user/hand/right/input/aim/pose",
        },
    }
}

pub fn xr_path_name_haptic(h: HapticBinding) -> &'static str {
    match h.hand {
        Hand::Left => "/user/hand/left/output/haptic",
        Hand::Right => "/user/hand/right/output/haptic",
    }
}
