//! A named group of typed actions sharing a priority and an enable gate.
//!
//! Grounded on xrizer's `input/legacy.rs` action-set construction (one
//! `xr::ActionSet` per legacy action set, created with name + localized name
//! + priority) and its five-parallel-map layout for actions of different
//! value types: a single polymorphic map would require boxed trait objects,
//! where enum-keyed lookup on a five-element outer dispatch plus a per-type
//! name map stays concrete and readable.

use std::collections::HashMap;

use crate::action::{BoolAction, FloatAction, HapticAction, PoseAction, Vec2Action};
use crate::binding::{BoolBinding, FloatBinding, HapticBinding, PoseBinding, Vec2Binding};
use crate::error::ActionError;
use crate::xr_adapter::XrAdapter;
use crate::xr_handle::XrActionSetId;

#[derive(Debug)]
pub struct ActionSet {
    pub name: String,
    pub localized_name: String,
    priority: u32,
    enabled: bool,
    xr_action_set: Option<XrActionSetId>,
    bools: HashMap<String, BoolAction>,
    floats: HashMap<String, FloatAction>,
    vec2s: HashMap<String, Vec2Action>,
    poses: HashMap<String, PoseAction>,
    haptics: HashMap<String, HapticAction>,
}

impl ActionSet {
    pub fn new(name: impl Into<String>, localized_name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            localized_name: localized_name.into(),
            priority,
            enabled: true,
            xr_action_set: None,
            bools: HashMap::new(),
            floats: HashMap::new(),
            vec2s: HashMap::new(),
            poses: HashMap::new(),
            haptics: HashMap::new(),
        }
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resets every owned input action, then clears the enabled flag.
    /// Distinct from `BoolAction::disable`, which is a pure gate: this
    /// cascade exists so a button mid-press at set-disable time doesn't
    /// leave the action observing stale "still held" state once re-enabled.
    ///
    /// Haptic actions have no value to reset and aren't touched here - a
    /// haptic pulse in flight can only be cancelled through the adapter
    /// that owns it, which this type has no handle to. Callers that might
    /// have an active haptic pulse running must go through
    /// `ActionSystem::disable_action_set` instead of calling this directly.
    pub fn disable(&mut self) {
        for a in self.bools.values_mut() {
            a.reset();
        }
        for a in self.floats.values_mut() {
            a.reset();
        }
        for a in self.vec2s.values_mut() {
            a.reset();
        }
        for a in self.poses.values_mut() {
            a.reset();
        }
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn xr_action_set_handle(&self) -> Option<XrActionSetId> {
        self.xr_action_set
    }

    pub fn is_visible_to_xr_session(&self) -> bool {
        self.bools.values().any(|a| a.is_visible_to_xr_session())
            || self.floats.values().any(|a| a.is_visible_to_xr_session())
            || self.vec2s.values().any(|a| a.is_visible_to_xr_session())
            || self.poses.values().any(|a| a.is_visible_to_xr_session())
            || self.haptics.values().any(|a| a.is_visible_to_xr_session())
    }

    pub fn add_bool_action(&mut self, action: BoolAction) {
        self.bools.insert(action.meta.name.clone(), action);
    }

    pub fn add_float_action(&mut self, action: FloatAction) {
        self.floats.insert(action.meta.name.clone(), action);
    }

    pub fn add_vec2_action(&mut self, action: Vec2Action) {
        self.vec2s.insert(action.meta.name.clone(), action);
    }

    pub fn add_pose_action(&mut self, action: PoseAction) {
        self.poses.insert(action.meta.name.clone(), action);
    }

    pub fn add_haptic_action(&mut self, action: HapticAction) {
        self.haptics.insert(action.meta.name.clone(), action);
    }

    pub fn bool_action(&self, name: &str) -> Option<&BoolAction> {
        self.bools.get(name)
    }

    pub fn bool_action_mut(&mut self, name: &str) -> Option<&mut BoolAction> {
        self.bools.get_mut(name)
    }

    pub fn float_action(&self, name: &str) -> Option<&FloatAction> {
        self.floats.get(name)
    }

    pub fn float_action_mut(&mut self, name: &str) -> Option<&mut FloatAction> {
        self.floats.get_mut(name)
    }

    pub fn vec2_action(&self, name: &str) -> Option<&Vec2Action> {
        self.vec2s.get(name)
    }

    pub fn vec2_action_mut(&mut self, name: &str) -> Option<&mut Vec2Action> {
        self.vec2s.get_mut(name)
    }

    pub fn pose_action(&self, name: &str) -> Option<&PoseAction> {
        self.poses.get(name)
    }

    pub fn pose_action_mut(&mut self, name: &str) -> Option<&mut PoseAction> {
        self.poses.get_mut(name)
    }

    pub fn haptic_action(&self, name: &str) -> Option<&HapticAction> {
        self.haptics.get(name)
    }

    pub fn haptic_action_mut(&mut self, name: &str) -> Option<&mut HapticAction> {
        self.haptics.get_mut(name)
    }

    pub fn bool_action_names(&self) -> impl Iterator<Item = &str> {
        self.bools.keys().map(String::as_str)
    }

    pub fn float_action_names(&self) -> impl Iterator<Item = &str> {
        self.floats.keys().map(String::as_str)
    }

    pub fn vec2_action_names(&self) -> impl Iterator<Item = &str> {
        self.vec2s.keys().map(String::as_str)
    }

    pub fn pose_action_names(&self) -> impl Iterator<Item = &str> {
        self.poses.keys().map(String::as_str)
    }

    pub fn haptic_action_names(&self) -> impl Iterator<Item = &str> {
        self.haptics.keys().map(String::as_str)
    }

    pub(crate) fn bool_actions_mut(&mut self) -> impl Iterator<Item = &mut BoolAction> {
        self.bools.values_mut()
    }

    pub(crate) fn float_actions_mut(&mut self) -> impl Iterator<Item = &mut FloatAction> {
        self.floats.values_mut()
    }

    pub(crate) fn vec2_actions_mut(&mut self) -> impl Iterator<Item = &mut Vec2Action> {
        self.vec2s.values_mut()
    }

    pub(crate) fn pose_actions_mut(&mut self) -> impl Iterator<Item = &mut PoseAction> {
        self.poses.values_mut()
    }

    pub fn contains_bool_binding(&self, b: BoolBinding) -> bool {
        self.bools.values().any(|a| a.contains_binding(b))
    }

    pub fn contains_float_binding(&self, b: FloatBinding) -> bool {
        self.floats.values().any(|a| a.contains_binding(b))
    }

    pub fn contains_vec2_binding(&self, b: Vec2Binding) -> bool {
        self.vec2s.values().any(|a| a.contains_binding(b))
    }

    pub fn contains_pose_binding(&self, b: PoseBinding) -> bool {
        self.poses.values().any(|a| a.contains_binding(b))
    }

    pub fn contains_haptic_binding(&self, b: HapticBinding) -> bool {
        self.haptics.values().any(|a| a.contains_binding(b))
    }

    /// No-op when the set is disabled. Bool's own `trigger` does not gate
    /// on disabled, so the gate lives here.
    pub fn trigger_bool_input_action(&mut self, b: BoolBinding, value: bool) {
        if !self.enabled {
            return;
        }
        for a in self.bools.values_mut() {
            if a.contains_binding(b) {
                a.trigger(value);
            }
        }
    }

    pub fn trigger_float_input_action(&mut self, b: FloatBinding, value: f32) {
        if !self.enabled {
            return;
        }
        for a in self.floats.values_mut() {
            if a.contains_binding(b) {
                a.trigger(value);
            }
        }
    }

    pub fn trigger_vec2_input_action(&mut self, b: Vec2Binding, value: glam::Vec2) {
        if !self.enabled {
            return;
        }
        for a in self.vec2s.values_mut() {
            if a.contains_binding(b) {
                a.trigger(value);
            }
        }
    }

    /// Resets bypass priority and the set's enabled gate entirely - they
    /// fan out to every set containing the binding, regardless of
    /// priority. Called directly by the dispatcher at the frame boundary,
    /// never gated here.
    pub fn reset_vec2_binding(&mut self, b: Vec2Binding) {
        for a in self.vec2s.values_mut() {
            if a.contains_binding(b) {
                a.reset();
            }
        }
    }

    pub fn reset_float_binding(&mut self, b: FloatBinding) {
        for a in self.floats.values_mut() {
            if a.contains_binding(b) {
                a.reset();
            }
        }
    }

    pub fn setup_xr_actions(
        &mut self,
        adapter: &mut dyn XrAdapter,
    ) -> Result<(), ActionError> {
        if !self.is_visible_to_xr_session() {
            return Ok(());
        }
        let set_handle = adapter.create_action_set(&self.name, &self.localized_name, self.priority)?;
        let mut created = Vec::new();
        let result = (|| -> Result<(), ActionError> {
            for a in self.bools.values_mut() {
                if a.is_visible_to_xr_session() {
                    let handle = adapter.create_bool_action(set_handle, &a.meta.name, &a.meta.localized_name)?;
                    a.set_xr_action(Some(handle));
                    created.push(handle);
                }
            }
            for a in self.floats.values_mut() {
                if a.is_visible_to_xr_session() {
                    let handle = adapter.create_float_action(set_handle, &a.meta.name, &a.meta.localized_name)?;
                    a.set_xr_action(Some(handle));
                    created.push(handle);
                }
            }
            for a in self.vec2s.values_mut() {
                if a.is_visible_to_xr_session() {
                    let handle = adapter.create_vec2_action(set_handle, &a.meta.name, &a.meta.localized_name)?;
                    a.set_xr_action(Some(handle));
                    created.push(handle);
                }
            }
            for a in self.poses.values_mut() {
                if a.is_visible_to_xr_session() && !a.binding().is_hmd() {
                    let handle = adapter.create_pose_action(set_handle, &a.meta.name, &a.meta.localized_name)?;
                    a.set_xr_action(Some(handle));
                    created.push(handle);
                }
            }
            for a in self.haptics.values_mut() {
                if a.is_visible_to_xr_session() {
                    let handle = adapter.create_haptic_action(set_handle, &a.meta.name, &a.meta.localized_name)?;
                    a.set_xr_action(Some(handle));
                    created.push(handle);
                }
            }
            Ok(())
        })();

        match result {
            Ok(()) => {
                self.xr_action_set = Some(set_handle);
                Ok(())
            }
            Err(e) => {
                log::error!("XR setup failed for action set {:?}, rolling back: {e}", self.name);
                for handle in created {
                    adapter.destroy_action(handle);
                }
                adapter.destroy_action_set(set_handle);
                self.reset_xr_actions();
                Err(e)
            }
        }
    }

    pub fn reset_xr_actions(&mut self) {
        self.xr_action_set = None;
        for a in self.bools.values_mut() {
            a.set_xr_action(None);
        }
        for a in self.floats.values_mut() {
            a.set_xr_action(None);
        }
        for a in self.vec2s.values_mut() {
            a.set_xr_action(None);
        }
        for a in self.poses.values_mut() {
            a.set_xr_action(None);
        }
        for a in self.haptics.values_mut() {
            a.set_xr_action(None);
        }
    }

    pub fn create_xr_spaces(&mut self, adapter: &mut dyn XrAdapter) {
        for a in self.poses.values_mut() {
            if a.binding().is_hmd() {
                continue;
            }
            let Some(action) = a.xr_action_handle() else {
                continue;
            };
            match adapter.create_pose_space(action, a.binding().hand()) {
                Ok(space) => a.set_space(Some(space)),
                Err(e) => log::warn!("failed to create pose space for {:?}: {e}", a.meta.name),
            }
        }
    }

    pub fn destroy_xr_spaces(&mut self, adapter: &mut dyn XrAdapter) {
        for a in self.poses.values_mut() {
            if let Some(space) = a.xr_space_handle() {
                adapter.destroy_space(space);
            }
            a.set_space(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionMeta, XrVisibility};
    use crate::binding::Hand;

    fn action_set() -> ActionSet {
        let mut set = ActionSet::new("main", "Main", 0);
        set.add_bool_action(BoolAction::new(
            ActionMeta::new("jump", "Jump", XrVisibility::Auto).unwrap(),
            vec![BoolBinding::Keyboard(crate::binding::KeyboardKey::Space)],
        ));
        set
    }

    #[test]
    fn disable_cascades_reset_to_every_owned_action() {
        let mut set = action_set();
        set.bool_action_mut("jump").unwrap().trigger(true);
        set.disable();
        assert!(!set.bool_action("jump").unwrap().get_value());
        assert!(!set.is_enabled());
    }

    #[test]
    fn trigger_is_noop_while_set_disabled() {
        let mut set = action_set();
        set.disable();
        set.trigger_bool_input_action(BoolBinding::Keyboard(crate::binding::KeyboardKey::Space), true);
        assert!(!set.bool_action("jump").unwrap().get_value());
    }

    #[test]
    fn visibility_is_the_disjunction_of_its_actions() {
        let mut set = ActionSet::new("s", "S", 0);
        assert!(!set.is_visible_to_xr_session());
        set.add_pose_action(PoseAction::new(
            ActionMeta::new("hmd", "Hmd", XrVisibility::Auto).unwrap(),
            PoseBinding::Hmd,
        ));
        assert!(set.is_visible_to_xr_session());
    }

    #[test]
    fn non_hmd_pose_binding_reports_its_hand() {
        let binding = PoseBinding::xr(Hand::Left, crate::binding::PoseWhich::Grip);
        assert_eq!(binding.hand(), Hand::Left);
    }

    #[test]
    fn setup_failure_rolls_back_previously_created_actions() {
        use crate::xr_adapter::mock::MockXrAdapter;

        let mut set = ActionSet::new("main", "Main", 0);
        set.add_bool_action(BoolAction::new(
            ActionMeta::new("a", "A", XrVisibility::Always).unwrap(),
            vec![],
        ));
        set.add_bool_action(BoolAction::new(
            ActionMeta::new("b", "B", XrVisibility::Always).unwrap(),
            vec![],
        ));

        let mut adapter = MockXrAdapter::new();
        adapter.fail_creation_after(2);

        assert!(set.setup_xr_actions(&mut adapter).is_err());
        assert_eq!(adapter.destroyed_actions.len(), 1);
        assert_eq!(adapter.destroyed_sets.len(), 1);
        assert!(set.xr_action_set_handle().is_none());
        assert!(set.bool_action("a").unwrap().xr_action_handle().is_none());
        assert!(set.bool_action("b").unwrap().xr_action_handle().is_none());
    }
}
