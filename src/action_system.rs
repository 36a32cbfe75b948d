//! The top-level coordinator: owns every `ActionSet`, the OS adapter, and
//! the XR adapter, and implements the per-frame dispatch loop. Grounded on
//! xrizer's `Input<C>` (owns `InputSessionData`, a map of
//! legacy action sets, and drives `state_from_bindings`-style priority
//! resolution) and `OpenXrData`'s session-state-changed wiring in
//! `openxr_data.rs`, generalized from its SteamVR-emulation specifics to
//! the plain priority/visibility model this crate exposes directly.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::action::{ActionMeta, BoolAction, FloatAction, HapticAction, PoseAction, Vec2Action};
use crate::action_set::ActionSet;
use crate::binding::{
    keymap, paths, profiles, BoolBinding, FloatBinding, HapticBinding, Hand, InteractionProfile,
    MouseButton, MouseButtonBinding, MouseWheelAxis, Vec2Binding,
};
use crate::config::{ActionSetConfig, ActionSystemConfig};
use crate::error::ActionError;
use crate::os_adapter::{OsAdapter, RawInputEvent, WHEEL_DELTA};
use crate::xr_adapter::{XrAdapter, XrSessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Constructed,
    SetUp,
    Attached,
    TornDown,
}

/// Per-button double-click bookkeeping. `last_down_ms` drives the
/// click/double-click decision on the next down; the set of currently-active
/// bool actions (system-wide, not per-button) drives the up-symmetry rule.
#[derive(Debug, Default)]
struct DoubleClickState {
    last_down_ms: HashMap<MouseButton, i64>,
}

pub struct ActionSystem {
    state: State,
    action_sets: HashMap<String, ActionSet>,
    interaction_profiles: Vec<InteractionProfile>,
    xr_adapter: Box<dyn XrAdapter>,
    os_adapter: Box<dyn OsAdapter>,
    double_click_window_ms: i64,
    double_click: DoubleClickState,
    active_bool_bindings: HashSet<BoolBinding>,
    mouse_moved_delta: Vec2,
    scroll_delta: Vec2,
    last_absolute_cursor_position: (f32, f32),
}

impl ActionSystem {
    pub fn new(
        config: ActionSystemConfig,
        xr_adapter: Box<dyn XrAdapter>,
        os_adapter: Box<dyn OsAdapter>,
        double_click_window_ms: i64,
    ) -> Result<Self, ActionError> {
        let mut action_sets = HashMap::new();
        for set_config in config.action_sets {
            let (name, set) = build_action_set(set_config)?;
            action_sets.insert(name, set);
        }
        Ok(Self {
            state: State::Constructed,
            action_sets,
            interaction_profiles: config.xr_interaction_profiles,
            xr_adapter,
            os_adapter,
            double_click_window_ms,
            double_click: DoubleClickState::default(),
            active_bool_bindings: HashSet::new(),
            mouse_moved_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            last_absolute_cursor_position: (0.0, 0.0),
        })
    }

    pub fn action_set(&self, name: &str) -> Option<&ActionSet> {
        self.action_sets.get(name)
    }

    pub fn action_set_mut(&mut self, name: &str) -> Option<&mut ActionSet> {
        self.action_sets.get_mut(name)
    }

    /// Disables the named set, cancelling any haptic pulse it has running
    /// and resetting its input actions. `ActionSet::disable` alone can't
    /// reach the adapter that owns haptic output, so this is the entry
    /// point callers must use instead of `action_set_mut(name).disable()`
    /// whenever the set might have an active haptic action.
    pub fn disable_action_set(&mut self, name: &str) -> bool {
        let Some(set) = self.action_sets.get(name) else { return false };
        let handles: Vec<_> = set
            .haptic_action_names()
            .filter_map(|n| set.haptic_action(n))
            .filter_map(|a| a.xr_action_handle().map(|h| (h, a.binding().hand)))
            .collect();
        for (handle, hand) in handles {
            self.xr_adapter.stop_haptic_feedback(handle, hand);
        }
        self.action_sets.get_mut(name).unwrap().disable();
        true
    }

    /// Registers OS input sources and, if any action is XR-visible, creates
    /// XR action sets/actions and suggests bindings per declared profile.
    /// OS registration failure is fatal; XR failures degrade to OS-only
    /// input rather than aborting.
    pub fn setup(&mut self) -> Result<(), ActionError> {
        if self.state != State::Constructed {
            return Err(ActionError::AlreadySetUp);
        }
        self.os_adapter.register()?;

        for set in self.action_sets.values_mut() {
            if let Err(e) = set.setup_xr_actions(self.xr_adapter.as_mut()) {
                log::error!("XR setup degraded for action set {:?}: {e}", set.name);
            }
        }

        let interaction_profiles = self.interaction_profiles.clone();
        for profile in &interaction_profiles {
            if let Err(e) = self.suggest_bindings_for_profile(*profile) {
                log::error!("failed to suggest bindings for {:?}: {e}", profile);
            }
        }

        self.state = State::SetUp;
        Ok(())
    }

    /// Tears down XR handles before deregistering OS sources, then returns
    /// to `Constructed` so `setup` can run again.
    pub fn reset_setup(&mut self) {
        for set in self.action_sets.values_mut() {
            set.destroy_xr_spaces(self.xr_adapter.as_mut());
            if let Some(handle) = set.xr_action_set_handle() {
                self.xr_adapter.destroy_action_set(handle);
            }
            set.reset_xr_actions();
        }
        self.os_adapter.deregister();
        self.state = State::Constructed;
    }

    fn suggest_bindings_for_profile(&mut self, profile: InteractionProfile) -> Result<(), ActionError> {
        let legal = profiles::xr_interaction_profile_bindings(profile);
        let mut flat_bindings: Vec<(crate::xr_handle::XrActionId, &'static str)> = Vec::new();

        for set in self.action_sets.values() {
            for name in set.bool_action_names() {
                let action = set.bool_action(name).unwrap();
                if let Some(handle) = action.xr_action_handle() {
                    for b in action.bindings() {
                        if legal.bools.contains(b) {
                            flat_bindings.push((handle, paths::xr_path_name_bool(*b)));
                        }
                    }
                }
            }
            for name in set.float_action_names() {
                let action = set.float_action(name).unwrap();
                if let Some(handle) = action.xr_action_handle() {
                    for b in action.bindings() {
                        if legal.floats.contains(b) {
                            flat_bindings.push((handle, paths::xr_path_name_float(*b)));
                        }
                    }
                }
            }
            for name in set.vec2_action_names() {
                let action = set.vec2_action(name).unwrap();
                if let Some(handle) = action.xr_action_handle() {
                    for b in action.bindings() {
                        if legal.vec2s.contains(b) {
                            flat_bindings.push((handle, paths::xr_path_name_vec2(*b)));
                        }
                    }
                }
            }
            for name in set.pose_action_names() {
                let action = set.pose_action(name).unwrap();
                if let Some(handle) = action.xr_action_handle() {
                    if legal.poses.contains(&action.binding()) {
                        flat_bindings.push((handle, paths::xr_path_name_pose(action.binding())));
                    }
                }
            }
            for name in set.haptic_action_names() {
                let action = set.haptic_action(name).unwrap();
                if let Some(handle) = action.xr_action_handle() {
                    if legal.haptics.contains(&action.binding()) {
                        flat_bindings.push((handle, paths::xr_path_name_haptic(action.binding())));
                    }
                }
            }
        }

        if flat_bindings.is_empty() {
            return Ok(());
        }
        self.xr_adapter.suggest_bindings(profile.profile_path(), &flat_bindings)
    }

    /// Drives the OpenXR session-state-changed hook. Entering a running
    /// state creates pose spaces and attaches the action sets; leaving it
    /// tears both down.
    pub fn session_state_changed(&mut self, state: XrSessionState) {
        match state {
            XrSessionState::Running => {
                let handles: Vec<_> = self
                    .action_sets
                    .values()
                    .filter_map(|s| s.xr_action_set_handle())
                    .collect();
                if let Err(e) = self.xr_adapter.attach_action_sets(&handles) {
                    log::error!("failed to attach action sets: {e}");
                    return;
                }
                for set in self.action_sets.values_mut() {
                    set.create_xr_spaces(self.xr_adapter.as_mut());
                }
                self.state = State::Attached;
            }
            XrSessionState::Stopping | XrSessionState::Exiting | XrSessionState::LossPending => {
                for set in self.action_sets.values_mut() {
                    set.destroy_xr_spaces(self.xr_adapter.as_mut());
                }
                if self.state == State::Attached {
                    self.state = State::SetUp;
                }
            }
            XrSessionState::Idle | XrSessionState::Ready => {}
        }
    }

    /// Besides snapshotting `value_last_frame` for change detection, this
    /// also resets the relative accumulator actions (`MouseMoved`, the two
    /// wheel axes) back to zero - they only get fanned out a fresh value
    /// when `process_events` sees a nonzero delta this frame, so a quiet
    /// frame following a frame with motion must not leave them reporting
    /// the previous frame's total forever.
    pub fn new_frame_started(&mut self) {
        for set in self.action_sets.values_mut() {
            for a in set.bool_actions_mut() {
                a.new_frame_started();
            }
            for a in set.float_actions_mut() {
                a.new_frame_started();
            }
            for a in set.vec2_actions_mut() {
                a.new_frame_started();
            }
        }
        self.mouse_moved_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;

        for set in self.action_sets.values_mut() {
            set.reset_vec2_binding(Vec2Binding::MouseMoved);
            set.reset_float_binding(FloatBinding::Mouse(MouseWheelAxis::Vertical));
            set.reset_float_binding(FloatBinding::Mouse(MouseWheelAxis::Horizontal));
        }
    }

    /// Dispatches one OS-originated raw event, applying priority
    /// arbitration, double-click detection and accumulator bookkeeping.
    /// Relative events (motion, wheel) are accumulated here and fanned out
    /// later by `process_events`; everything else is dispatched immediately.
    pub fn process_os_event(&mut self, event: RawInputEvent) {
        match event {
            RawInputEvent::KeyDown(code) => {
                let binding = keymap::translate_key_code(code);
                self.trigger_bool_with_priority(binding, true);
            }
            RawInputEvent::KeyUp(code) => {
                let binding = keymap::translate_key_code(code);
                self.trigger_bool_with_priority(binding, false);
            }
            RawInputEvent::MouseButtonDown(button) => {
                if !self.os_adapter.cursor_in_client_area() {
                    return;
                }
                self.mouse_button_down(button);
            }
            RawInputEvent::MouseButtonUp(button) => {
                if !self.os_adapter.cursor_in_client_area() {
                    return;
                }
                self.mouse_button_up(button);
            }
            RawInputEvent::MouseMotion(motion) => {
                if !self.os_adapter.cursor_in_client_area() {
                    return;
                }
                self.mouse_motion(motion);
            }
            RawInputEvent::MouseWheel { horizontal, raw_delta } => {
                if !self.os_adapter.cursor_in_client_area() {
                    return;
                }
                let scaled = raw_delta as f32 / WHEEL_DELTA;
                if horizontal {
                    self.scroll_delta.x += scaled;
                } else {
                    self.scroll_delta.y += scaled;
                }
            }
        }
    }

    fn mouse_button_down(&mut self, button: MouseButton) {
        let now_ms = self.os_adapter.now_ms();
        self.mouse_button_down_at(button, now_ms);
    }

    /// Timestamped variant used by tests and by hosts that track their own
    /// clock - the double-click window is measured in elapsed wall time
    /// between down events, not frame count.
    pub fn mouse_button_down_at(&mut self, button: MouseButton, now_ms: i64) {
        let is_double = match self.double_click.last_down_ms.get(&button) {
            Some(last) => now_ms - last < self.double_click_window_ms,
            None => false,
        };
        self.double_click.last_down_ms.insert(button, now_ms);
        let binding = if is_double {
            BoolBinding::Mouse(MouseButtonBinding::double(button))
        } else {
            BoolBinding::Mouse(MouseButtonBinding::single(button))
        };
        self.trigger_bool_with_priority(binding, true);
    }

    fn mouse_button_up(&mut self, button: MouseButton) {
        let double_binding = BoolBinding::Mouse(MouseButtonBinding::double(button));
        let single_binding = BoolBinding::Mouse(MouseButtonBinding::single(button));
        if self.active_bool_bindings.contains(&double_binding) {
            self.trigger_bool_with_priority(double_binding, false);
        } else {
            self.trigger_bool_with_priority(single_binding, false);
        }
    }

    fn mouse_motion(&mut self, motion: crate::os_adapter::MouseMotion) {
        if motion.is_absolute {
            let new_pos = (motion.client_x, motion.client_y);
            let delta = Vec2::new(
                new_pos.0 - self.last_absolute_cursor_position.0,
                new_pos.1 - self.last_absolute_cursor_position.1,
            );
            self.last_absolute_cursor_position = new_pos;
            self.mouse_moved_delta += delta;
            self.trigger_vec2_with_priority(Vec2Binding::MousePosition, Vec2::new(new_pos.0, new_pos.1));
        } else {
            self.mouse_moved_delta += Vec2::new(motion.dx, motion.dy);
            let pos = self.os_adapter.absolute_cursor_position();
            self.last_absolute_cursor_position = pos;
            self.trigger_vec2_with_priority(Vec2Binding::MousePosition, Vec2::new(pos.0, pos.1));
        }
    }

    /// Fans out the frame's accumulated relative actions. Called once per
    /// frame, after XR sync and before application code reads values.
    pub fn process_events(&mut self) {
        if self.mouse_moved_delta != Vec2::ZERO {
            self.trigger_vec2_with_priority(Vec2Binding::MouseMoved, self.mouse_moved_delta);
        }
        if self.scroll_delta.y != 0.0 {
            self.trigger_float_with_priority(FloatBinding::Mouse(MouseWheelAxis::Vertical), self.scroll_delta.y);
        }
        if self.scroll_delta.x != 0.0 {
            self.trigger_float_with_priority(FloatBinding::Mouse(MouseWheelAxis::Horizontal), self.scroll_delta.x);
        }
    }

    /// Reads every XR-visible action's current runtime state and overwrites
    /// matching action values when the runtime reports a change - XR values
    /// win over OS values for the same frame. Called after OS events,
    /// before `process_events`.
    pub fn sync_xr_actions(&mut self) {
        if self.state != State::Attached {
            return;
        }
        let set_handles: Vec<_> = self
            .action_sets
            .values()
            .filter_map(|s| s.xr_action_set_handle())
            .collect();
        if let Err(e) = self.xr_adapter.sync_actions(&set_handles) {
            log::warn!("XR sync_actions failed, skipping this frame's XR read: {e}");
            return;
        }

        for set in self.action_sets.values_mut() {
            for a in set.bool_actions_mut() {
                let Some(handle) = a.xr_action_handle() else { continue };
                for hand in Hand::both() {
                    match self.xr_adapter.bool_state(handle, hand) {
                        Ok(state) if state.is_active && state.changed_since_last_sync => {
                            a.apply_xr_sync(state.current_state);
                        }
                        Ok(_) => {}
                        Err(e) => log::warn!("bool_state read failed: {e}"),
                    }
                }
            }
            for a in set.float_actions_mut() {
                let Some(handle) = a.xr_action_handle() else { continue };
                for hand in Hand::both() {
                    match self.xr_adapter.float_state(handle, hand) {
                        Ok(state) if state.is_active && state.changed_since_last_sync => {
                            a.apply_xr_sync(state.current_state);
                        }
                        Ok(_) => {}
                        Err(e) => log::warn!("float_state read failed: {e}"),
                    }
                }
            }
            for a in set.vec2_actions_mut() {
                let Some(handle) = a.xr_action_handle() else { continue };
                for hand in Hand::both() {
                    match self.xr_adapter.vec2_state(handle, hand) {
                        Ok(state) if state.is_active && state.changed_since_last_sync => {
                            a.apply_xr_sync(Vec2::new(state.current_state.0, state.current_state.1));
                        }
                        Ok(_) => {}
                        Err(e) => log::warn!("vec2_state read failed: {e}"),
                    }
                }
            }
        }
    }

    /// Resolves every pose action's space (or the view space, for HMD
    /// bindings) at `display_time_ns` and applies the result via `trigger`.
    pub fn resolve_poses(&mut self, display_time_ns: i64) {
        for set in self.action_sets.values_mut() {
            for a in set.pose_actions_mut() {
                if a.binding().is_hmd() {
                    match self.xr_adapter.locate_view(display_time_ns) {
                        Ok(pose) => a.apply_xr_sync(pose),
                        Err(e) => log::warn!("locate_view failed: {e}"),
                    }
                    continue;
                }
                let Some(space) = a.xr_space_handle() else { continue };
                match self.xr_adapter.locate_space(space, display_time_ns) {
                    Ok(pose) => a.apply_xr_sync(pose),
                    Err(e) => log::warn!("locate_space failed for {:?}: {e}", a.meta.name),
                }
            }
        }
    }

    pub fn trigger_haptic_action(
        &mut self,
        set_name: &str,
        action_name: &str,
        duration_ns: i64,
        frequency_hz: f32,
        amplitude: f32,
    ) {
        let Some(set) = self.action_sets.get(set_name) else { return };
        if !set.is_enabled() {
            return;
        }
        let Some(action) = set.haptic_action(action_name) else { return };
        if !action.is_enabled() {
            return;
        }
        let Some(handle) = action.xr_action_handle() else { return };
        let amplitude = HapticAction::clamp_amplitude(amplitude);
        let hand = action.binding().hand;
        if let Err(e) = self
            .xr_adapter
            .apply_haptic_feedback(handle, hand, duration_ns, frequency_hz, amplitude)
        {
            log::warn!("haptic feedback failed for {action_name:?}: {e}");
        }
    }

    pub fn stop_haptic_action(&mut self, set_name: &str, action_name: &str) {
        let Some(set) = self.action_sets.get(set_name) else { return };
        let Some(action) = set.haptic_action(action_name) else { return };
        let Some(handle) = action.xr_action_handle() else { return };
        let hand = action.binding().hand;
        self.xr_adapter.stop_haptic_feedback(handle, hand);
    }

    /// Priority arbitration: find the maximum-priority sets containing
    /// `binding`, including disabled sets in the scan, then trigger only
    /// those. `ActionSet::trigger_*` itself
    /// no-ops when the set is disabled, so a disabled top-priority set
    /// suppresses the event entirely.
    fn trigger_bool_with_priority(&mut self, binding: BoolBinding, value: bool) {
        if value {
            self.active_bool_bindings.insert(binding);
        } else {
            self.active_bool_bindings.remove(&binding);
        }
        for name in self.max_priority_sets(|s| s.contains_bool_binding(binding)) {
            self.action_sets.get_mut(&name).unwrap().trigger_bool_input_action(binding, value);
        }
    }

    fn trigger_float_with_priority(&mut self, binding: FloatBinding, value: f32) {
        for name in self.max_priority_sets(|s| s.contains_float_binding(binding)) {
            self.action_sets.get_mut(&name).unwrap().trigger_float_input_action(binding, value);
        }
    }

    fn trigger_vec2_with_priority(&mut self, binding: Vec2Binding, value: Vec2) {
        for name in self.max_priority_sets(|s| s.contains_vec2_binding(binding)) {
            self.action_sets.get_mut(&name).unwrap().trigger_vec2_input_action(binding, value);
        }
    }

    fn max_priority_sets(&self, contains: impl Fn(&ActionSet) -> bool) -> Vec<String> {
        let mut max_prio = 0u32;
        let mut at_max = Vec::new();
        let mut seen_any = false;
        for (name, set) in &self.action_sets {
            if !contains(set) {
                continue;
            }
            let p = set.priority();
            if !seen_any || p > max_prio {
                at_max.clear();
                max_prio = p;
                seen_any = true;
            }
            if p == max_prio {
                at_max.push(name.clone());
            }
        }
        at_max
    }
}

fn build_action_set(config: ActionSetConfig) -> Result<(String, ActionSet), ActionError> {
    crate::config::validate_name(&config.name, "action_set.name")?;
    crate::config::validate_localized_name(&config.localized_name, "action_set.localized_name")?;
    let mut set = ActionSet::new(config.name.clone(), config.localized_name, config.priority);

    for a in config.bool_input_actions {
        match ActionMeta::new(a.name.clone(), a.localized_name, a.xr_visibility.into()) {
            Ok(meta) => set.add_bool_action(BoolAction::new(meta, a.bindings)),
            Err(e) => log::warn!("skipping bool action {:?}: {e}", a.name),
        }
    }
    for a in config.float_input_actions {
        match ActionMeta::new(a.name.clone(), a.localized_name, a.xr_visibility.into()) {
            Ok(meta) => set.add_float_action(FloatAction::new(meta, a.bindings)),
            Err(e) => log::warn!("skipping float action {:?}: {e}", a.name),
        }
    }
    for a in config.vec2_input_actions {
        match ActionMeta::new(a.name.clone(), a.localized_name, a.xr_visibility.into()) {
            Ok(meta) => set.add_vec2_action(Vec2Action::new(meta, a.bindings)),
            Err(e) => log::warn!("skipping vec2 action {:?}: {e}", a.name),
        }
    }
    for a in config.pose_input_actions {
        match ActionMeta::new(a.name.clone(), a.localized_name, a.xr_visibility.into()) {
            Ok(meta) => set.add_pose_action(PoseAction::new(meta, a.binding)),
            Err(e) => log::warn!("skipping pose action {:?}: {e}", a.name),
        }
    }
    for a in config.haptic_output_actions {
        match ActionMeta::new(a.name.clone(), a.localized_name, a.xr_visibility.into()) {
            Ok(meta) => {
                let binding = a.bindings.into_iter().next().unwrap_or(HapticBinding { hand: Hand::Left });
                set.add_haptic_action(HapticAction::new(meta, binding));
            }
            Err(e) => log::warn!("skipping haptic action {:?}: {e}", a.name),
        }
    }

    Ok((config.name, set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionConfig, ActionSetConfig, ActionSystemConfig, XrVisibilityConfig};
    use crate::os_adapter::NullOsAdapter;
    use crate::xr_adapter::mock::MockXrAdapter;

    fn system_with_haptic() -> ActionSystem {
        let config = ActionSystemConfig {
            action_sets: vec![ActionSetConfig {
                name: "main".into(),
                localized_name: "Main".into(),
                priority: 0,
                haptic_output_actions: vec![ActionConfig {
                    name: "buzz".into(),
                    localized_name: "Buzz".into(),
                    xr_visibility: XrVisibilityConfig::Auto,
                    bindings: vec![HapticBinding { hand: Hand::Left }],
                }],
                ..Default::default()
            }],
            xr_interaction_profiles: vec![],
        };
        ActionSystem::new(
            config,
            Box::new(MockXrAdapter::new()),
            Box::new(NullOsAdapter::new()),
            500,
        )
        .unwrap()
    }

    /// Disabling a set with an in-flight haptic pulse must stop it at the
    /// adapter, not just reset the set's input actions - `ActionSet::disable`
    /// alone has no handle to the adapter to do this itself.
    #[test]
    fn disable_action_set_stops_an_active_haptic_pulse() {
        let mut sys = system_with_haptic();
        sys.setup().unwrap();

        let handle = sys.action_set("main").unwrap().haptic_action("buzz").unwrap().xr_action_handle().unwrap();
        sys.trigger_haptic_action("main", "buzz", 1_000_000, 1.0, 1.0);
        {
            let mock = sys.xr_adapter.as_any_mut().downcast_mut::<MockXrAdapter>().unwrap();
            assert_eq!(mock.haptics_active.get(&(handle, Hand::Left)), Some(&true));
        }

        assert!(sys.disable_action_set("main"));
        let mock = sys.xr_adapter.as_any_mut().downcast_mut::<MockXrAdapter>().unwrap();
        assert_eq!(mock.haptics_active.get(&(handle, Hand::Left)), Some(&false));
        assert!(!sys.action_set("main").unwrap().is_enabled());
    }

    #[test]
    fn disable_action_set_reports_unknown_set() {
        let mut sys = system_with_haptic();
        assert!(!sys.disable_action_set("nope"));
    }
}
