use super::{auto_visible, ActionMeta};
use crate::binding::{is_xr_pose, PoseBinding};
use crate::pose::Pose;
use crate::xr_handle::{XrActionId, XrSpaceId};

/// A pose action has no last-frame comparison - pose values are continuous
/// and sampled per frame - and exactly one binding, unlike the other four
/// action types' binding *sets*.
#[derive(Debug)]
pub struct PoseAction {
    pub meta: ActionMeta,
    binding: PoseBinding,
    enabled: bool,
    value: Pose,
    xr_action: Option<XrActionId>,
    xr_space: Option<XrSpaceId>,
}

impl PoseAction {
    pub fn new(meta: ActionMeta, binding: PoseBinding) -> Self {
        Self {
            meta,
            binding,
            enabled: true,
            value: Pose::IDENTITY,
            xr_action: None,
            xr_space: None,
        }
    }

    pub fn binding(&self) -> PoseBinding {
        self.binding
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.reset();
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get_value(&self) -> Pose {
        self.value
    }

    pub fn trigger(&mut self, value: Pose) {
        if !self.enabled {
            return;
        }
        self.value = value;
    }

    pub fn reset(&mut self) {
        self.value = Pose::IDENTITY;
    }

    pub fn contains_binding(&self, binding: PoseBinding) -> bool {
        self.binding == binding
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        auto_visible(self.meta.xr_visibility, is_xr_pose(self.binding))
    }

    pub fn xr_action_handle(&self) -> Option<XrActionId> {
        self.xr_action
    }

    pub fn xr_space_handle(&self) -> Option<XrSpaceId> {
        self.xr_space
    }

    /// Never set for the HMD binding: it has no OpenXR action behind it at
    /// all, it resolves directly against the runtime's view space.
    pub(crate) fn set_xr_action(&mut self, handle: Option<XrActionId>) {
        if self.binding.is_hmd() {
            return;
        }
        self.xr_action = handle;
    }

    pub(crate) fn set_space(&mut self, space: Option<XrSpaceId>) {
        self.xr_space = space;
    }

    pub(crate) fn apply_xr_sync(&mut self, value: Pose) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::super::XrVisibility;
    use super::*;

    #[test]
    fn reset_restores_identity() {
        let mut a = PoseAction::new(
            ActionMeta::new("grip", "Grip", XrVisibility::Auto).unwrap(),
            PoseBinding::xr(crate::binding::Hand::Left, crate::binding::PoseWhich::Grip),
        );
        a.trigger(Pose {
            position: glam::Vec3::new(1.0, 2.0, 3.0),
            orientation: glam::Quat::IDENTITY,
        });
        a.disable();
        assert_eq!(a.get_value(), Pose::IDENTITY);
    }

    #[test]
    fn hmd_binding_never_gets_an_xr_action() {
        let mut a = PoseAction::new(
            ActionMeta::new("hmd", "Hmd", XrVisibility::Auto).unwrap(),
            PoseBinding::Hmd,
        );
        a.set_xr_action(Some(XrActionId(1)));
        assert!(a.xr_action_handle().is_none());
    }
}
