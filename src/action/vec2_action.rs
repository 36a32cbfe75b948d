use glam::Vec2;

use super::{auto_visible, ActionMeta};
use crate::binding::{is_xr_vec2, Vec2Binding};
use crate::xr_handle::XrActionId;

#[derive(Debug)]
pub struct Vec2Action {
    pub meta: ActionMeta,
    bindings: Vec<Vec2Binding>,
    enabled: bool,
    value: Vec2,
    value_last_frame: Vec2,
    xr_action: Option<XrActionId>,
}

impl Vec2Action {
    pub fn new(meta: ActionMeta, bindings: Vec<Vec2Binding>) -> Self {
        Self {
            meta,
            bindings,
            enabled: true,
            value: Vec2::ZERO,
            value_last_frame: Vec2::ZERO,
            xr_action: None,
        }
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

    pub fn value_changed(&self) -> bool {
        self.value != self.value_last_frame
    }

    pub fn get_value(&self) -> Vec2 {
        self.value
    }

    pub fn trigger(&mut self, value: Vec2) {
        if !self.enabled {
            return;
        }
        self.value = value;
    }

    pub fn reset(&mut self) {
        self.value = Vec2::ZERO;
    }

    pub fn contains_binding(&self, binding: Vec2Binding) -> bool {
        self.bindings.contains(&binding)
    }

    pub fn bindings(&self) -> &[Vec2Binding] {
        &self.bindings
    }

    pub(crate) fn new_frame_started(&mut self) {
        self.value_last_frame = self.value;
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        auto_visible(
            self.meta.xr_visibility,
            self.bindings.iter().any(|b| is_xr_vec2(*b)),
        )
    }

    pub fn xr_action_handle(&self) -> Option<XrActionId> {
        self.xr_action
    }

    pub(crate) fn set_xr_action(&mut self, handle: Option<XrActionId>) {
        self.xr_action = handle;
    }

    pub(crate) fn apply_xr_sync(&mut self, value: Vec2) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::super::XrVisibility;
    use super::*;

    #[test]
    fn accumulated_delta_round_trips_through_a_frame() {
        let mut a = Vec2Action::new(
            ActionMeta::new("move", "Move", XrVisibility::Never).unwrap(),
            vec![Vec2Binding::MouseMoved],
        );
        a.new_frame_started();
        let mut acc = Vec2::ZERO;
        for d in [Vec2::new(3.0, 0.0), Vec2::new(-1.0, 2.0), Vec2::new(0.0, 4.0)] {
            acc += d;
        }
        a.trigger(acc);
        assert_eq!(a.get_value(), Vec2::new(2.0, 6.0));
        a.reset();
        a.new_frame_started();
        assert_eq!(a.get_value(), Vec2::ZERO);
    }
}
