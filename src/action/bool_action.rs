use super::{auto_visible, ActionMeta};
use crate::binding::{is_xr_bool, BoolBinding};
use crate::xr_handle::XrActionId;

/// A digital action. `trigger` deliberately does **not** no-op when the
/// action is disabled - a disabled bool action still tracks the raw input
/// state so that re-enabling it doesn't require a fresh down-edge; the
/// zeroing on disable happens one level up, at `ActionSet::disable`'s
/// cascade, not per-trigger.
#[derive(Debug)]
pub struct BoolAction {
    pub meta: ActionMeta,
    bindings: Vec<BoolBinding>,
    enabled: bool,
    value: bool,
    value_last_frame: bool,
    xr_action: Option<XrActionId>,
}

impl BoolAction {
    pub fn new(meta: ActionMeta, bindings: Vec<BoolBinding>) -> Self {
        Self {
            meta,
            bindings,
            enabled: true,
            value: false,
            value_last_frame: false,
            xr_action: None,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn value_changed(&self) -> bool {
        self.value != self.value_last_frame
    }

    pub fn get_value(&self) -> bool {
        self.value
    }

    pub fn trigger(&mut self, value: bool) {
        self.value = value;
    }

    pub fn reset(&mut self) {
        self.value = false;
    }

    pub fn contains_binding(&self, binding: BoolBinding) -> bool {
        self.bindings.contains(&binding)
    }

    pub fn bindings(&self) -> &[BoolBinding] {
        &self.bindings
    }

    pub(crate) fn new_frame_started(&mut self) {
        self.value_last_frame = self.value;
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        auto_visible(
            self.meta.xr_visibility,
            self.bindings.iter().any(|b| is_xr_bool(*b)),
        )
    }

    pub fn xr_action_handle(&self) -> Option<XrActionId> {
        self.xr_action
    }

    pub(crate) fn set_xr_action(&mut self, handle: Option<XrActionId>) {
        self.xr_action = handle;
    }

    /// Overwritten by XR sync: bool `trigger` already has no disabled
    /// guard, so XR sync can reuse it directly.
    pub(crate) fn apply_xr_sync(&mut self, value: bool) {
        self.trigger(value);
    }
}

#[cfg(test)]
mod tests {
    use super::super::XrVisibility;
    use super::*;

    fn action() -> BoolAction {
        BoolAction::new(
            ActionMeta::new("jump", "Jump", XrVisibility::Auto).unwrap(),
            vec![],
        )
    }

    #[test]
    fn trigger_applies_even_when_disabled() {
        let mut a = action();
        a.disable();
        a.trigger(true);
        assert!(a.get_value());
    }

    #[test]
    fn disable_does_not_reset_value() {
        let mut a = action();
        a.trigger(true);
        a.disable();
        assert!(a.get_value());
    }

    #[test]
    fn value_changed_tracks_last_frame_snapshot() {
        let mut a = action();
        a.new_frame_started();
        assert!(!a.value_changed());
        a.trigger(true);
        assert!(a.value_changed());
        a.new_frame_started();
        assert!(!a.value_changed());
    }
}
