use super::{auto_visible, ActionMeta};
use crate::binding::{is_xr_float, FloatBinding};
use crate::xr_handle::XrActionId;

#[derive(Debug)]
pub struct FloatAction {
    pub meta: ActionMeta,
    bindings: Vec<FloatBinding>,
    enabled: bool,
    value: f32,
    value_last_frame: f32,
    xr_action: Option<XrActionId>,
}

impl FloatAction {
    pub fn new(meta: ActionMeta, bindings: Vec<FloatBinding>) -> Self {
        Self {
            meta,
            bindings,
            enabled: true,
            value: 0.0,
            value_last_frame: 0.0,
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

    pub fn get_value(&self) -> f32 {
        self.value
    }

    pub fn trigger(&mut self, value: f32) {
        if !self.enabled {
            return;
        }
        self.value = value;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn contains_binding(&self, binding: FloatBinding) -> bool {
        self.bindings.contains(&binding)
    }

    pub fn bindings(&self) -> &[FloatBinding] {
        &self.bindings
    }

    pub(crate) fn new_frame_started(&mut self) {
        self.value_last_frame = self.value;
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        auto_visible(
            self.meta.xr_visibility,
            self.bindings.iter().any(|b| is_xr_float(*b)),
        )
    }

    pub fn xr_action_handle(&self) -> Option<XrActionId> {
        self.xr_action
    }

    pub(crate) fn set_xr_action(&mut self, handle: Option<XrActionId>) {
        self.xr_action = handle;
    }

    pub(crate) fn apply_xr_sync(&mut self, value: f32) {
        // XR sync always wins regardless of the action's own enabled gate -
        // it represents the runtime reclaiming the action, not an ordinary
        // trigger, so it bypasses `trigger`'s disabled guard.
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::super::XrVisibility;
    use super::*;

    fn action() -> FloatAction {
        FloatAction::new(
            ActionMeta::new("throttle", "Throttle", XrVisibility::Auto).unwrap(),
            vec![],
        )
    }

    #[test]
    fn disable_resets_to_zero() {
        let mut a = action();
        a.trigger(0.5);
        a.disable();
        assert_eq!(a.get_value(), 0.0);
        assert!(!a.is_enabled());
    }

    #[test]
    fn trigger_is_noop_when_disabled() {
        let mut a = action();
        a.disable();
        a.trigger(0.5);
        assert_eq!(a.get_value(), 0.0);
    }
}
