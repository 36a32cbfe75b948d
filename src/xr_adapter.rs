//! The XR runtime collaborator.
//!
//! `ActionSystem` is generic over this trait rather than owning an
//! `openxr::Session` directly - it's a sibling dependency of the
//! dispatcher, not nested inside it, to break a cycle. The trait speaks in
//! the crate's own opaque handles (`xr_handle`) so that the dispatcher,
//! priority arbitration and frame bookkeeping can be exercised with
//! `MockXrAdapter` in unit tests without a real OpenXR runtime - the
//! idiomatic replacement for xrizer's C-level `fakexr` ICD loader.
//!
//! `RealXrAdapter` is the production implementation, grounded on
//! `openxr_data.rs`'s use of the `openxr` crate (instance/session/action
//! creation, `suggest_interaction_profile_bindings`, `Space::locate`).

use std::collections::HashMap;

use openxr as xr;

use crate::binding::Hand;
use crate::error::ActionError;
use crate::pose::Pose;
use crate::xr_handle::{XrActionId, XrActionSetId, XrSpaceId};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XrActionState<T> {
    pub current_state: T,
    pub is_active: bool,
    pub changed_since_last_sync: bool,
}

/// What the OpenXR session lifecycle is doing right now, mirrored from
/// `xr::SessionState` so callers don't need the `openxr` crate in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XrSessionState {
    #[default]
    Idle,
    Ready,
    Running,
    Stopping,
    Exiting,
    LossPending,
}

impl From<xr::SessionState> for XrSessionState {
    fn from(value: xr::SessionState) -> Self {
        match value {
            xr::SessionState::READY => Self::Ready,
            xr::SessionState::SYNCHRONIZED | xr::SessionState::VISIBLE | xr::SessionState::FOCUSED => {
                Self::Running
            }
            xr::SessionState::STOPPING => Self::Stopping,
            xr::SessionState::EXITING => Self::Exiting,
            xr::SessionState::LOSS_PENDING => Self::LossPending,
            _ => Self::Idle,
        }
    }
}

pub trait XrAdapter {
    fn create_action_set(
        &mut self,
        name: &str,
        localized_name: &str,
        priority: u32,
    ) -> Result<XrActionSetId, ActionError>;
    fn destroy_action_set(&mut self, set: XrActionSetId);

    fn create_bool_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError>;
    fn create_float_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError>;
    fn create_vec2_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError>;
    fn create_pose_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError>;
    fn create_haptic_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError>;
    fn destroy_action(&mut self, action: XrActionId);

    /// Suggests every (action, path) pair gathered for one profile in a
    /// single call, mirroring `xrSuggestInteractionProfileBindings`.
    fn suggest_bindings(
        &mut self,
        profile_path: &str,
        bindings: &[(XrActionId, &str)],
    ) -> Result<(), ActionError>;

    fn attach_action_sets(&mut self, sets: &[XrActionSetId]) -> Result<(), ActionError>;

    /// Per-frame sync; `sync_actions` itself never fails the frame loop -
    /// failures are logged and swallowed by the caller.
    fn sync_actions(&mut self, sets: &[XrActionSetId]) -> Result<(), ActionError>;

    fn bool_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<bool>, ActionError>;
    fn float_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<f32>, ActionError>;
    fn vec2_state(
        &self,
        action: XrActionId,
        hand: Hand,
    ) -> Result<XrActionState<(f32, f32)>, ActionError>;

    fn create_pose_space(&mut self, action: XrActionId, hand: Hand) -> Result<XrSpaceId, ActionError>;
    fn destroy_space(&mut self, space: XrSpaceId);
    fn locate_space(&self, space: XrSpaceId, display_time: i64) -> Result<Pose, ActionError>;
    fn locate_view(&self, display_time: i64) -> Result<Pose, ActionError>;

    fn apply_haptic_feedback(
        &mut self,
        action: XrActionId,
        hand: Hand,
        duration_ns: i64,
        frequency_hz: f32,
        amplitude: f32,
    ) -> Result<(), ActionError>;
    fn stop_haptic_feedback(&mut self, action: XrActionId, hand: Hand);

    fn session_state(&self) -> XrSessionState;

    /// Lets test code downcast a boxed `dyn XrAdapter` back to
    /// `MockXrAdapter` to inspect state `ActionSystem` has no other way to
    /// expose (e.g. `haptics_active`).
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// Production adapter backed by a live OpenXR instance and session.
pub struct RealXrAdapter {
    instance: xr::Instance,
    session: xr::Session<xr::AnyGraphics>,
    left_hand: xr::Path,
    right_hand: xr::Path,
    view_space: xr::Space,
    next_id: u64,
    action_sets: HashMap<u64, xr::ActionSet>,
    bool_actions: HashMap<u64, xr::Action<bool>>,
    float_actions: HashMap<u64, xr::Action<f32>>,
    vec2_actions: HashMap<u64, xr::Action<xr::Vector2f>>,
    pose_actions: HashMap<u64, xr::Action<xr::Posef>>,
    haptic_actions: HashMap<u64, xr::Action<xr::Haptic>>,
    spaces: HashMap<u64, xr::Space>,
    session_state: xr::SessionState,
}

impl RealXrAdapter {
    pub fn new(
        instance: xr::Instance,
        session: xr::Session<xr::AnyGraphics>,
        left_hand: xr::Path,
        right_hand: xr::Path,
        view_space: xr::Space,
    ) -> Self {
        Self {
            instance,
            session,
            left_hand,
            right_hand,
            view_space,
            next_id: 0,
            action_sets: HashMap::new(),
            bool_actions: HashMap::new(),
            float_actions: HashMap::new(),
            vec2_actions: HashMap::new(),
            pose_actions: HashMap::new(),
            haptic_actions: HashMap::new(),
            spaces: HashMap::new(),
            session_state: xr::SessionState::IDLE,
        }
    }

    pub fn set_session_state(&mut self, state: xr::SessionState) {
        self.session_state = state;
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn subaction_path(&self, hand: Hand) -> xr::Path {
        match hand {
            Hand::Left => self.left_hand,
            Hand::Right => self.right_hand,
        }
    }

    fn action_set(&self, id: XrActionSetId) -> Result<&xr::ActionSet, ActionError> {
        self.action_sets
            .get(&id.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown XR action set handle".into()))
    }
}

impl XrAdapter for RealXrAdapter {
    fn create_action_set(
        &mut self,
        name: &str,
        localized_name: &str,
        priority: u32,
    ) -> Result<XrActionSetId, ActionError> {
        let set = self
            .instance
            .create_action_set(name, localized_name, priority)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.action_sets.insert(id, set);
        Ok(XrActionSetId(id))
    }

    fn destroy_action_set(&mut self, set: XrActionSetId) {
        self.action_sets.remove(&set.0);
    }

    fn create_bool_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError> {
        let hands = [self.left_hand, self.right_hand];
        let action = self
            .action_set(set)?
            .create_action::<bool>(name, localized_name, &hands)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.bool_actions.insert(id, action);
        Ok(XrActionId(id))
    }

    fn create_float_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError> {
        let hands = [self.left_hand, self.right_hand];
        let action = self
            .action_set(set)?
            .create_action::<f32>(name, localized_name, &hands)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.float_actions.insert(id, action);
        Ok(XrActionId(id))
    }

    fn create_vec2_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError> {
        let hands = [self.left_hand, self.right_hand];
        let action = self
            .action_set(set)?
            .create_action::<xr::Vector2f>(name, localized_name, &hands)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.vec2_actions.insert(id, action);
        Ok(XrActionId(id))
    }

    fn create_pose_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError> {
        let hands = [self.left_hand, self.right_hand];
        let action = self
            .action_set(set)?
            .create_action::<xr::Posef>(name, localized_name, &hands)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.pose_actions.insert(id, action);
        Ok(XrActionId(id))
    }

    fn create_haptic_action(
        &mut self,
        set: XrActionSetId,
        name: &str,
        localized_name: &str,
    ) -> Result<XrActionId, ActionError> {
        let hands = [self.left_hand, self.right_hand];
        let action = self
            .action_set(set)?
            .create_action::<xr::Haptic>(name, localized_name, &hands)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.haptic_actions.insert(id, action);
        Ok(XrActionId(id))
    }

    fn destroy_action(&mut self, action: XrActionId) {
        self.bool_actions.remove(&action.0);
        self.float_actions.remove(&action.0);
        self.vec2_actions.remove(&action.0);
        self.pose_actions.remove(&action.0);
        self.haptic_actions.remove(&action.0);
    }

    fn suggest_bindings(
        &mut self,
        profile_path: &str,
        bindings: &[(XrActionId, &str)],
    ) -> Result<(), ActionError> {
        let profile = self
            .instance
            .string_to_path(profile_path)
            .map_err(ActionError::from)?;
        let mut xr_bindings = Vec::with_capacity(bindings.len());
        for (action, path) in bindings {
            let xr_path = self.instance.string_to_path(path).map_err(ActionError::from)?;
            if let Some(a) = self.bool_actions.get(&action.0) {
                xr_bindings.push(xr::Binding::new(a, xr_path));
            } else if let Some(a) = self.float_actions.get(&action.0) {
                xr_bindings.push(xr::Binding::new(a, xr_path));
            } else if let Some(a) = self.vec2_actions.get(&action.0) {
                xr_bindings.push(xr::Binding::new(a, xr_path));
            } else if let Some(a) = self.pose_actions.get(&action.0) {
                xr_bindings.push(xr::Binding::new(a, xr_path));
            } else if let Some(a) = self.haptic_actions.get(&action.0) {
                xr_bindings.push(xr::Binding::new(a, xr_path));
            }
        }
        self.instance
            .suggest_interaction_profile_bindings(profile, &xr_bindings)
            .map_err(ActionError::from)
    }

    fn attach_action_sets(&mut self, sets: &[XrActionSetId]) -> Result<(), ActionError> {
        let sets: Vec<&xr::ActionSet> = sets
            .iter()
            .filter_map(|id| self.action_sets.get(&id.0))
            .collect();
        self.session.attach_action_sets(&sets).map_err(ActionError::from)
    }

    fn sync_actions(&mut self, sets: &[XrActionSetId]) -> Result<(), ActionError> {
        let sets: Vec<xr::ActiveActionSet<'_>> = sets
            .iter()
            .filter_map(|id| self.action_sets.get(&id.0))
            .map(xr::ActiveActionSet::new)
            .collect();
        self.session.sync_actions(&sets).map_err(ActionError::from)
    }

    fn bool_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<bool>, ActionError> {
        let action = self
            .bool_actions
            .get(&action.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown bool action handle".into()))?;
        let state = action
            .state(&self.session, self.subaction_path(hand))
            .map_err(ActionError::from)?;
        Ok(XrActionState {
            current_state: state.current_state,
            is_active: state.is_active,
            changed_since_last_sync: state.changed_since_last_sync,
        })
    }

    fn float_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<f32>, ActionError> {
        let action = self
            .float_actions
            .get(&action.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown float action handle".into()))?;
        let state = action
            .state(&self.session, self.subaction_path(hand))
            .map_err(ActionError::from)?;
        Ok(XrActionState {
            current_state: state.current_state,
            is_active: state.is_active,
            changed_since_last_sync: state.changed_since_last_sync,
        })
    }

    fn vec2_state(
        &self,
        action: XrActionId,
        hand: Hand,
    ) -> Result<XrActionState<(f32, f32)>, ActionError> {
        let action = self
            .vec2_actions
            .get(&action.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown vec2 action handle".into()))?;
        let state = action
            .state(&self.session, self.subaction_path(hand))
            .map_err(ActionError::from)?;
        Ok(XrActionState {
            current_state: (state.current_state.x, state.current_state.y),
            is_active: state.is_active,
            changed_since_last_sync: state.changed_since_last_sync,
        })
    }

    fn create_pose_space(&mut self, action: XrActionId, hand: Hand) -> Result<XrSpaceId, ActionError> {
        let action = self
            .pose_actions
            .get(&action.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown pose action handle".into()))?;
        let space = action
            .create_space(self.session.clone(), self.subaction_path(hand), xr::Posef::IDENTITY)
            .map_err(ActionError::from)?;
        let id = self.fresh_id();
        self.spaces.insert(id, space);
        Ok(XrSpaceId(id))
    }

    fn destroy_space(&mut self, space: XrSpaceId) {
        self.spaces.remove(&space.0);
    }

    fn locate_space(&self, space: XrSpaceId, display_time: i64) -> Result<Pose, ActionError> {
        let space = self
            .spaces
            .get(&space.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown XR space handle".into()))?;
        let location = space
            .locate(&self.view_space, xr::Time::from_nanos(display_time))
            .map_err(ActionError::from)?;
        Ok(pose_or_identity(location))
    }

    fn locate_view(&self, display_time: i64) -> Result<Pose, ActionError> {
        let location = self
            .view_space
            .locate(&self.view_space, xr::Time::from_nanos(display_time))
            .map_err(ActionError::from)?;
        Ok(pose_or_identity(location))
    }

    fn apply_haptic_feedback(
        &mut self,
        action: XrActionId,
        hand: Hand,
        duration_ns: i64,
        frequency_hz: f32,
        amplitude: f32,
    ) -> Result<(), ActionError> {
        let action = self
            .haptic_actions
            .get(&action.0)
            .ok_or_else(|| ActionError::InvalidArgument("unknown haptic action handle".into()))?;
        let event = xr::HapticVibration::new()
            .amplitude(amplitude)
            .frequency(frequency_hz)
            .duration(xr::Duration::from_nanos(duration_ns));
        action
            .apply_feedback(&self.session, self.subaction_path(hand), &event)
            .map_err(ActionError::from)
    }

    fn stop_haptic_feedback(&mut self, action: XrActionId, hand: Hand) {
        if let Some(action) = self.haptic_actions.get(&action.0) {
            if let Err(e) = action.stop_feedback(&self.session, self.subaction_path(hand)) {
                log::warn!("failed to stop haptic feedback: {e}");
            }
        }
    }

    fn session_state(&self) -> XrSessionState {
        self.session_state.into()
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

fn pose_or_identity(location: xr::SpaceLocation) -> Pose {
    if !location.location_flags.contains(
        xr::SpaceLocationFlags::POSITION_VALID | xr::SpaceLocationFlags::ORIENTATION_VALID,
    ) {
        return Pose::IDENTITY;
    }
    location.pose.into()
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap as Map;

    /// A plain-Rust test double for `XrAdapter`: no OpenXR runtime, no
    /// linked loader. Tests drive the "runtime" by calling
    /// `set_bool_state`/`set_session_state` directly, the same way
    /// `fakexr::set_action_state` is driven from xrizer's integration
    /// tests, but without any C ABI in between.
    #[derive(Default)]
    pub struct MockXrAdapter {
        next_id: u64,
        pub suggested: Vec<(String, Vec<(XrActionId, String)>)>,
        pub attached: Vec<XrActionSetId>,
        pub destroyed_sets: Vec<XrActionSetId>,
        pub destroyed_actions: Vec<XrActionId>,
        bool_states: Map<(XrActionId, Hand), XrActionState<bool>>,
        float_states: Map<(XrActionId, Hand), XrActionState<f32>>,
        vec2_states: Map<(XrActionId, Hand), XrActionState<(f32, f32)>>,
        spaces: Map<XrSpaceId, Pose>,
        view_pose: Pose,
        session_state: XrSessionState,
        pub haptics_active: Map<(XrActionId, Hand), bool>,
        fail_after_creations: Option<u32>,
    }

    impl MockXrAdapter {
        pub fn new() -> Self {
            Self {
                view_pose: Pose::IDENTITY,
                session_state: XrSessionState::Idle,
                ..Default::default()
            }
        }

        fn fresh_id(&mut self) -> u64 {
            self.next_id += 1;
            self.next_id
        }

        pub fn set_session_state(&mut self, state: XrSessionState) {
            self.session_state = state;
        }

        pub fn set_bool_state(&mut self, action: XrActionId, hand: Hand, state: XrActionState<bool>) {
            self.bool_states.insert((action, hand), state);
        }

        pub fn set_space_pose(&mut self, space: XrSpaceId, pose: Pose) {
            self.spaces.insert(space, pose);
        }

        pub fn set_view_pose(&mut self, pose: Pose) {
            self.view_pose = pose;
        }

        /// The very next creation call fails; every call after it succeeds.
        pub fn fail_next_creation(&mut self) {
            self.fail_after_creations = Some(0);
        }

        /// The next `n` creation calls succeed, then the one after that
        /// fails. Lets a test push an action set and some of its actions
        /// through successfully before exercising a mid-setup failure.
        pub fn fail_creation_after(&mut self, n: u32) {
            self.fail_after_creations = Some(n);
        }

        fn maybe_fail_creation(&mut self) -> bool {
            match self.fail_after_creations {
                Some(0) => {
                    self.fail_after_creations = None;
                    true
                }
                Some(n) => {
                    self.fail_after_creations = Some(n - 1);
                    false
                }
                None => false,
            }
        }
    }

    impl XrAdapter for MockXrAdapter {
        fn create_action_set(
            &mut self,
            _name: &str,
            _localized_name: &str,
            _priority: u32,
        ) -> Result<XrActionSetId, ActionError> {
            if self.maybe_fail_creation() {
                return Err(ActionError::XrFailure(xr::sys::Result::ERROR_RUNTIME_FAILURE));
            }
            Ok(XrActionSetId(self.fresh_id()))
        }

        fn destroy_action_set(&mut self, set: XrActionSetId) {
            self.destroyed_sets.push(set);
        }

        fn create_bool_action(
            &mut self,
            _set: XrActionSetId,
            _name: &str,
            _localized_name: &str,
        ) -> Result<XrActionId, ActionError> {
            if self.maybe_fail_creation() {
                return Err(ActionError::XrFailure(xr::sys::Result::ERROR_RUNTIME_FAILURE));
            }
            Ok(XrActionId(self.fresh_id()))
        }

        fn create_float_action(
            &mut self,
            set: XrActionSetId,
            name: &str,
            localized_name: &str,
        ) -> Result<XrActionId, ActionError> {
            self.create_bool_action(set, name, localized_name)
        }

        fn create_vec2_action(
            &mut self,
            set: XrActionSetId,
            name: &str,
            localized_name: &str,
        ) -> Result<XrActionId, ActionError> {
            self.create_bool_action(set, name, localized_name)
        }

        fn create_pose_action(
            &mut self,
            set: XrActionSetId,
            name: &str,
            localized_name: &str,
        ) -> Result<XrActionId, ActionError> {
            self.create_bool_action(set, name, localized_name)
        }

        fn create_haptic_action(
            &mut self,
            set: XrActionSetId,
            name: &str,
            localized_name: &str,
        ) -> Result<XrActionId, ActionError> {
            self.create_bool_action(set, name, localized_name)
        }

        fn destroy_action(&mut self, action: XrActionId) {
            self.destroyed_actions.push(action);
        }

        fn suggest_bindings(
            &mut self,
            profile_path: &str,
            bindings: &[(XrActionId, &str)],
        ) -> Result<(), ActionError> {
            self.suggested.push((
                profile_path.to_string(),
                bindings.iter().map(|(a, p)| (*a, p.to_string())).collect(),
            ));
            Ok(())
        }

        fn attach_action_sets(&mut self, sets: &[XrActionSetId]) -> Result<(), ActionError> {
            self.attached.extend_from_slice(sets);
            Ok(())
        }

        fn sync_actions(&mut self, _sets: &[XrActionSetId]) -> Result<(), ActionError> {
            Ok(())
        }

        fn bool_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<bool>, ActionError> {
            Ok(self.bool_states.get(&(action, hand)).copied().unwrap_or_default())
        }

        fn float_state(&self, action: XrActionId, hand: Hand) -> Result<XrActionState<f32>, ActionError> {
            Ok(self.float_states.get(&(action, hand)).copied().unwrap_or_default())
        }

        fn vec2_state(
            &self,
            action: XrActionId,
            hand: Hand,
        ) -> Result<XrActionState<(f32, f32)>, ActionError> {
            Ok(self.vec2_states.get(&(action, hand)).copied().unwrap_or_default())
        }

        fn create_pose_space(&mut self, _action: XrActionId, _hand: Hand) -> Result<XrSpaceId, ActionError> {
            let id = XrSpaceId(self.fresh_id());
            self.spaces.insert(id, Pose::IDENTITY);
            Ok(id)
        }

        fn destroy_space(&mut self, space: XrSpaceId) {
            self.spaces.remove(&space);
        }

        fn locate_space(&self, space: XrSpaceId, _display_time: i64) -> Result<Pose, ActionError> {
            Ok(self.spaces.get(&space).copied().unwrap_or(Pose::IDENTITY))
        }

        fn locate_view(&self, _display_time: i64) -> Result<Pose, ActionError> {
            Ok(self.view_pose)
        }

        fn apply_haptic_feedback(
            &mut self,
            action: XrActionId,
            hand: Hand,
            _duration_ns: i64,
            _frequency_hz: f32,
            _amplitude: f32,
        ) -> Result<(), ActionError> {
            self.haptics_active.insert((action, hand), true);
            Ok(())
        }

        fn stop_haptic_feedback(&mut self, action: XrActionId, hand: Hand) {
            self.haptics_active.insert((action, hand), false);
        }

        fn session_state(&self) -> XrSessionState {
            self.session_state
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockXrAdapter;
    use super::*;
    use crate::binding::Hand;

    #[test]
    fn fail_next_creation_fails_exactly_one_call() {
        let mut adapter = MockXrAdapter::new();
        adapter.fail_next_creation();
        assert!(adapter.create_action_set("s", "S", 0).is_err());
        assert!(adapter.create_action_set("s", "S", 0).is_ok());
    }

    #[test]
    fn haptic_feedback_tracks_active_state_per_hand() {
        let mut adapter = MockXrAdapter::new();
        let set = adapter.create_action_set("s", "S", 0).unwrap();
        let action = adapter.create_haptic_action(set, "buzz", "Buzz").unwrap();
        adapter.apply_haptic_feedback(action, Hand::Left, 1_000_000, 1.0, 1.0).unwrap();
        assert_eq!(adapter.haptics_active.get(&(action, Hand::Left)), Some(&true));
        assert_eq!(adapter.haptics_active.get(&(action, Hand::Right)), None);
        adapter.stop_haptic_feedback(action, Hand::Left);
        assert_eq!(adapter.haptics_active.get(&(action, Hand::Left)), Some(&false));
    }

    #[test]
    fn locate_space_falls_back_to_identity_for_unset_pose() {
        let mut adapter = MockXrAdapter::new();
        let space = adapter.create_pose_space(XrActionId(1), Hand::Left).unwrap();
        assert_eq!(adapter.locate_space(space, 0).unwrap(), Pose::IDENTITY);
    }
}
