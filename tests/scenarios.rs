//! Integration coverage for behavior that spans multiple modules:
//! double-click arbitration, relative-delta accumulation, XR auto-visibility,
//! session-gated pose space lifecycle, and scroll-wheel scaling. Each test
//! drives `ActionSystem` purely through its public surface, using
//! `MockXrAdapter` (exposed here via the `test-utils` feature) in place of a
//! real OpenXR runtime and `NullOsAdapter` in place of a real window.

use action_system::binding::{
    BoolBinding, FloatBinding, Hand, KeyboardKey, MouseButton, MouseButtonBinding, MouseWheelAxis,
    PoseBinding, PoseWhich, Vec2Binding, XrBoolBinding, XrButton, XrButtonPhase,
};
use action_system::{
    ActionConfig, ActionSetConfig, ActionSystem, ActionSystemConfig, MockXrAdapter, MouseMotion,
    NullOsAdapter, PoseActionConfig, RawInputEvent, XrSessionState, XrVisibilityConfig,
};

fn bool_config(name: &str, bindings: Vec<BoolBinding>) -> ActionConfig<BoolBinding> {
    ActionConfig {
        name: name.into(),
        localized_name: name.into(),
        xr_visibility: XrVisibilityConfig::Auto,
        bindings,
    }
}

fn float_config(name: &str, bindings: Vec<FloatBinding>) -> ActionConfig<FloatBinding> {
    ActionConfig {
        name: name.into(),
        localized_name: name.into(),
        xr_visibility: XrVisibilityConfig::Never,
        bindings,
    }
}

fn build(action_set: ActionSetConfig, cursor_inside: bool) -> ActionSystem {
    let mut os = NullOsAdapter::new();
    os.set_cursor_inside(cursor_inside);
    let config = ActionSystemConfig {
        action_sets: vec![action_set],
        xr_interaction_profiles: vec![],
    };
    ActionSystem::new(config, Box::new(MockXrAdapter::new()), Box::new(os), 500).unwrap()
}

/// A down/up/down/up sequence inside the double-click window resolves
/// to a single click, then a double click, with up-event symmetry matching
/// whichever variant the preceding down fired.
#[test]
fn double_click_within_window_resolves_to_double_click() {
    let mut sys = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            bool_input_actions: vec![
                bool_config(
                    "click_l",
                    vec![BoolBinding::Mouse(MouseButtonBinding::LeftClick)],
                ),
                bool_config(
                    "double_click_l",
                    vec![BoolBinding::Mouse(MouseButtonBinding::LeftDoubleClick)],
                ),
            ],
            ..Default::default()
        },
        true,
    );
    sys.setup().unwrap();

    sys.mouse_button_down_at(MouseButton::Left, 0);
    assert!(sys.action_set("main").unwrap().bool_action("click_l").unwrap().get_value());
    assert!(!sys.action_set("main").unwrap().bool_action("double_click_l").unwrap().get_value());

    sys.process_os_event(RawInputEvent::MouseButtonUp(MouseButton::Left));
    assert!(!sys.action_set("main").unwrap().bool_action("click_l").unwrap().get_value());

    sys.mouse_button_down_at(MouseButton::Left, 200);
    assert!(sys.action_set("main").unwrap().bool_action("double_click_l").unwrap().get_value());
    assert!(!sys.action_set("main").unwrap().bool_action("click_l").unwrap().get_value());

    sys.process_os_event(RawInputEvent::MouseButtonUp(MouseButton::Left));
    assert!(!sys.action_set("main").unwrap().bool_action("double_click_l").unwrap().get_value());
}

/// Relative mouse motion accumulates within a frame and is fanned out
/// once by `process_events`; a fresh frame with no motion does not carry the
/// previous frame's accumulator forward into the next commit.
#[test]
fn mouse_moved_accumulates_within_a_frame_and_resets_across_frames() {
    use glam::Vec2;

    let mut sys = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            vec2_input_actions: vec![ActionConfig {
                name: "mouse_moved".into(),
                localized_name: "Mouse Moved".into(),
                xr_visibility: XrVisibilityConfig::Never,
                bindings: vec![Vec2Binding::MouseMoved],
            }],
            ..Default::default()
        },
        true,
    );
    sys.setup().unwrap();

    sys.new_frame_started();
    for (dx, dy) in [(3.0, 0.0), (-1.0, 2.0), (0.0, 4.0)] {
        sys.process_os_event(RawInputEvent::MouseMotion(MouseMotion {
            is_absolute: false,
            is_virtual_desktop: false,
            dx,
            dy,
            client_x: 0.0,
            client_y: 0.0,
        }));
    }
    sys.process_events();
    assert_eq!(
        sys.action_set("main").unwrap().vec2_action("mouse_moved").unwrap().get_value(),
        Vec2::new(2.0, 6.0)
    );

    sys.new_frame_started();
    sys.process_os_event(RawInputEvent::MouseMotion(MouseMotion {
        is_absolute: false,
        is_virtual_desktop: false,
        dx: 5.0,
        dy: -1.0,
        client_x: 0.0,
        client_y: 0.0,
    }));
    sys.process_events();
    assert_eq!(
        sys.action_set("main").unwrap().vec2_action("mouse_moved").unwrap().get_value(),
        Vec2::new(5.0, -1.0),
        "this frame's delta must not carry the previous frame's accumulator forward"
    );

    sys.new_frame_started();
    sys.process_events();
    assert_eq!(
        sys.action_set("main").unwrap().vec2_action("mouse_moved").unwrap().get_value(),
        Vec2::ZERO,
        "a frame with no motion must report zero, not the previous frame's total"
    );
}

/// An `Auto`-visibility action only gets an XR action handle once at
/// least one of its bindings falls in the XR region.
#[test]
fn auto_visibility_gains_an_xr_handle_only_once_an_xr_binding_is_present() {
    let mut desktop_only = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            bool_input_actions: vec![bool_config(
                "confirm",
                vec![BoolBinding::Keyboard(KeyboardKey::W)],
            )],
            ..Default::default()
        },
        false,
    );
    desktop_only.setup().unwrap();
    assert!(desktop_only
        .action_set("main")
        .unwrap()
        .bool_action("confirm")
        .unwrap()
        .xr_action_handle()
        .is_none());

    let mut with_xr_binding = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            bool_input_actions: vec![bool_config(
                "confirm",
                vec![
                    BoolBinding::Keyboard(KeyboardKey::W),
                    BoolBinding::XrController(XrBoolBinding::new(
                        Hand::Left,
                        XrButton::A,
                        XrButtonPhase::Click,
                    )),
                ],
            )],
            ..Default::default()
        },
        false,
    );
    with_xr_binding.setup().unwrap();
    assert!(with_xr_binding
        .action_set("main")
        .unwrap()
        .bool_action("confirm")
        .unwrap()
        .xr_action_handle()
        .is_some());
}

/// A pose action's space is created when the session enters a running
/// state and torn down when it stops, and can be recreated on a subsequent
/// run.
#[test]
fn pose_space_lifecycle_follows_session_state() {
    let mut sys = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            pose_input_actions: vec![PoseActionConfig {
                name: "grip".into(),
                localized_name: "Grip".into(),
                xr_visibility: XrVisibilityConfig::Auto,
                binding: PoseBinding::xr(Hand::Left, PoseWhich::Grip),
            }],
            ..Default::default()
        },
        false,
    );
    sys.setup().unwrap();
    let set = sys.action_set("main").unwrap();
    assert!(set.pose_action("grip").unwrap().xr_action_handle().is_some());
    assert!(set.pose_action("grip").unwrap().xr_space_handle().is_none());

    sys.session_state_changed(XrSessionState::Running);
    assert!(sys.action_set("main").unwrap().pose_action("grip").unwrap().xr_space_handle().is_some());

    sys.session_state_changed(XrSessionState::Stopping);
    assert!(sys.action_set("main").unwrap().pose_action("grip").unwrap().xr_space_handle().is_none());

    sys.session_state_changed(XrSessionState::Running);
    assert!(sys.action_set("main").unwrap().pose_action("grip").unwrap().xr_space_handle().is_some());
}

/// Raw wheel delta is scaled by the platform wheel-unit constant (120)
/// before reaching the bound float action, independently per axis.
#[test]
fn wheel_delta_is_scaled_by_the_platform_notch_constant() {
    let mut sys = build(
        ActionSetConfig {
            name: "main".into(),
            localized_name: "Main".into(),
            priority: 0,
            float_input_actions: vec![
                float_config("scroll_v", vec![FloatBinding::Mouse(MouseWheelAxis::Vertical)]),
                float_config("scroll_h", vec![FloatBinding::Mouse(MouseWheelAxis::Horizontal)]),
            ],
            ..Default::default()
        },
        true,
    );
    sys.setup().unwrap();

    sys.new_frame_started();
    sys.process_os_event(RawInputEvent::MouseWheel { horizontal: false, raw_delta: 240 });
    sys.process_events();
    assert_eq!(sys.action_set("main").unwrap().float_action("scroll_v").unwrap().get_value(), 2.0);

    sys.new_frame_started();
    sys.process_os_event(RawInputEvent::MouseWheel { horizontal: true, raw_delta: -120 });
    sys.process_events();
    assert_eq!(sys.action_set("main").unwrap().float_action("scroll_h").unwrap().get_value(), -1.0);

    sys.new_frame_started();
    sys.process_events();
    assert_eq!(
        sys.action_set("main").unwrap().float_action("scroll_v").unwrap().get_value(),
        0.0,
        "a frame with no wheel events must zero both axes, not keep a stale total"
    );
    assert_eq!(sys.action_set("main").unwrap().float_action("scroll_h").unwrap().get_value(), 0.0);
}
