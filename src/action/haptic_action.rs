use super::{auto_visible, ActionMeta};
use crate::binding::{is_xr_haptic, HapticBinding};
use crate::xr_handle::XrActionId;

/// A haptic output action. Unlike the four input actions, it has no value
/// to snapshot or compare - `trigger`/`stop` are fire-and-forget calls the
/// dispatcher forwards to whichever `XrAdapter` it owns, never held here
/// directly, so this type stays testable without a runtime.
#[derive(Debug)]
pub struct HapticAction {
    pub meta: ActionMeta,
    binding: HapticBinding,
    enabled: bool,
    xr_action: Option<XrActionId>,
}

impl HapticAction {
    pub fn new(meta: ActionMeta, binding: HapticBinding) -> Self {
        Self {
            meta,
            binding,
            enabled: true,
            xr_action: None,
        }
    }

    pub fn binding(&self) -> HapticBinding {
        self.binding
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

    pub fn contains_binding(&self, binding: HapticBinding) -> bool {
        self.binding == binding
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        auto_visible(self.meta.xr_visibility, is_xr_haptic(self.binding))
    }

    pub fn xr_action_handle(&self) -> Option<XrActionId> {
        self.xr_action
    }

    pub(crate) fn set_xr_action(&mut self, handle: Option<XrActionId>) {
        self.xr_action = handle;
    }

    /// Clamps amplitude into OpenXR's documented `[0, 1]` range rather than
    /// passing a bad value through to the adapter, which would just
    /// round-trip a runtime error for something callers can fix locally.
    pub fn clamp_amplitude(amplitude: f32) -> f32 {
        if !(0.0..=1.0).contains(&amplitude) {
            log::warn!("haptic amplitude {amplitude} out of range, clamping");
        }
        amplitude.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::XrVisibility;
    use super::*;
    use crate::binding::Hand;

    #[test]
    fn disable_does_not_clear_the_xr_action_handle() {
        let mut a = HapticAction::new(
            ActionMeta::new("buzz", "Buzz", XrVisibility::Auto).unwrap(),
            HapticBinding { hand: Hand::Left },
        );
        a.set_xr_action(Some(XrActionId(7)));
        a.disable();
        assert_eq!(a.xr_action_handle(), Some(XrActionId(7)));
        assert!(!a.is_enabled());
    }

    #[test]
    fn amplitude_is_clamped_into_unit_range() {
        assert_eq!(HapticAction::clamp_amplitude(1.5), 1.0);
        assert_eq!(HapticAction::clamp_amplitude(-0.2), 0.0);
        assert_eq!(HapticAction::clamp_amplitude(0.4), 0.4);
    }
}
