//! Declared interaction profiles: the closed set of controller families the
//! application tells the XR runtime it wants bindings suggested for.
//!
//! Grounded on `input/profiles/simple_controller.rs` and
//! `input/profiles/vive_controller.rs`'s per-profile legal-path tables,
//! trimmed to the two profiles this vocabulary commits to (Khronos Simple
//! Controller, Valve Index Controller).

use super::{
    BoolBinding, FloatBinding, Hand, PoseBinding, PoseWhich, Vec2Binding, XrBoolBinding,
    XrButton, XrButtonPhase, XrFloatAxis, XrVec2Axis,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum InteractionProfile {
    SimpleController,
    ValveIndexController,
}

impl InteractionProfile {
    pub fn profile_path(self) -> &'static str {
        match self {
            Self::SimpleController => "/interaction_profiles/khr/simple_controller",
            Self::ValveIndexController => "/interaction_profiles/valve/index_controller",
        }
    }
}

/// The exact set of bindings a profile supports, one vec per value type.
/// `ActionSystem::setup` intersects each action's declared bindings against
/// this before suggesting them to the runtime - suggesting a path the
/// profile doesn't support is an OpenXR validation error.
#[derive(Default)]
pub struct ProfileBindings {
    pub bools: Vec<BoolBinding>,
    pub floats: Vec<FloatBinding>,
    pub vec2s: Vec<Vec2Binding>,
    pub poses: Vec<PoseBinding>,
    pub haptics: Vec<super::HapticBinding>,
}

pub fn xr_interaction_profile_bindings(profile: InteractionProfile) -> ProfileBindings {
    match profile {
        InteractionProfile::SimpleController => simple_controller(),
        InteractionProfile::ValveIndexController => valve_index_controller(),
    }
}

fn simple_controller() -> ProfileBindings {
    let mut bools = Vec::new();
    let mut poses = Vec::new();
    let mut haptics = Vec::new();
    for hand in Hand::both() {
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Select,
            XrButtonPhase::Click,
        )));
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Menu,
            XrButtonPhase::Click,
        )));
        poses.push(PoseBinding::xr(hand, PoseWhich::Grip));
        poses.push(PoseBinding::xr(hand, PoseWhich::Aim));
        haptics.push(super::HapticBinding::new(hand));
    }
    ProfileBindings {
        bools,
        poses,
        haptics,
        ..Default::default()
    }
}

fn valve_index_controller() -> ProfileBindings {
    let mut bools = Vec::new();
    let mut floats = Vec::new();
    let mut vec2s = Vec::new();
    let mut poses = Vec::new();
    let mut haptics = Vec::new();
    for hand in Hand::both() {
        for button in [XrButton::A, XrButton::B] {
            for phase in [XrButtonPhase::Click, XrButtonPhase::Touch] {
                bools.push(BoolBinding::XrController(XrBoolBinding::new(
                    hand, button, phase,
                )));
            }
        }
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Trigger,
            XrButtonPhase::Click,
        )));
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Trigger,
            XrButtonPhase::Touch,
        )));
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Thumbstick,
            XrButtonPhase::Click,
        )));
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Thumbstick,
            XrButtonPhase::Touch,
        )));
        bools.push(BoolBinding::XrController(XrBoolBinding::new(
            hand,
            XrButton::Trackpad,
            XrButtonPhase::Touch,
        )));

        floats.push(FloatBinding::xr(hand, XrFloatAxis::SqueezeValue));
        floats.push(FloatBinding::xr(hand, XrFloatAxis::SqueezeForce));
        floats.push(FloatBinding::xr(hand, XrFloatAxis::TriggerValue));
        floats.push(FloatBinding::xr(hand, XrFloatAxis::TrackpadForce));

        vec2s.push(Vec2Binding::xr(hand, XrVec2Axis::Thumbstick));
        vec2s.push(Vec2Binding::xr(hand, XrVec2Axis::Trackpad));

        poses.push(PoseBinding::xr(hand, PoseWhich::Grip));
        poses.push(PoseBinding::xr(hand, PoseWhich::Aim));

        haptics.push(super::HapticBinding::new(hand));
    }
    ProfileBindings {
        bools,
        floats,
        vec2s,
        poses,
        haptics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_controller_has_no_hmd_binding() {
        let bindings = xr_interaction_profile_bindings(InteractionProfile::SimpleController);
        assert!(!bindings.poses.contains(&PoseBinding::Hmd));
    }

    #[test]
    fn valve_index_is_a_superset_of_simple_controller_buttons() {
        let simple = xr_interaction_profile_bindings(InteractionProfile::SimpleController);
        let index = xr_interaction_profile_bindings(InteractionProfile::ValveIndexController);
        for hand in Hand::both() {
            assert!(index.bools.contains(&BoolBinding::XrController(
                XrBoolBinding::new(hand, XrButton::Trigger, XrButtonPhase::Click)
            )));
        }
        assert_eq!(simple.haptics.len(), index.haptics.len());
    }
}
