#![deny(clippy::all)]

//! Mediates raw device input (keyboard, mouse, XR controllers, HMD pose)
//! into typed, priority-arbitrated actions, and bridges the desktop input
//! model with the OpenXR action model (binding suggestion, session-gated
//! action-set attachment, per-frame sync, haptic output).
//!
//! See [`ActionSystem`] for the top-level entry point, [`ActionSetConfig`]
//! and [`ActionSystemConfig`] for the declarative configuration surface,
//! and [`binding`] for the closed input vocabulary.

mod action;
mod action_set;
mod action_system;
pub mod binding;
mod config;
mod error;
mod os_adapter;
mod pose;
mod xr_adapter;
mod xr_handle;

pub use action::{ActionMeta, BoolAction, FloatAction, HapticAction, PoseAction, Vec2Action, XrVisibility};
pub use action_set::ActionSet;
pub use action_system::ActionSystem;
pub use config::{
    ActionConfig, ActionSetConfig, ActionSystemConfig, PoseActionConfig, XrVisibilityConfig,
};
pub use error::ActionError;
pub use os_adapter::{MouseMotion, NullOsAdapter, OsAdapter, RawInputEvent};
pub use pose::Pose;
pub use xr_adapter::{RealXrAdapter, XrAdapter, XrActionState, XrSessionState};
pub use xr_handle::{XrActionId, XrActionSetId, XrSpaceId};

#[cfg(feature = "test-utils")]
pub use xr_adapter::mock::MockXrAdapter;

#[cfg(all(windows, feature = "win32"))]
pub use os_adapter::win32::Win32OsAdapter;

#[cfg(feature = "tracing")]
macro_rules! tracy_span {
    ($($tt:tt)*) => {
        let _span = tracy_client::span!($($tt)*);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tracy_span {
    ($($tt:tt)*) => {};
}

pub(crate) use tracy_span;

#[cfg(feature = "tracing")]
tracy_client::register_demangler!();

/// One-time, env-configurable logger init. Applications embedding this
/// crate may skip this and install their own `log` backend instead; it
/// exists for standalone tests and examples the way `lib.rs`'s
/// `init_logging` served the compatibility layer's own binaries.
pub fn init_logging() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        // safety: formatting local time is best-effort; a soundness
        // violation here only means the log timestamp falls back to UTC.
        unsafe {
            time::util::local_offset::set_soundness(time::util::local_offset::Soundness::Unsound)
        };

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .is_test(cfg!(test))
            .format(|buf, record| {
                use std::io::Write;
                use time::macros::format_description;

                let style = buf.default_level_style(record.level());
                let now = time::OffsetDateTime::now_local()
                    .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
                let now = now
                    .format(format_description!(
                        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]"
                    ))
                    .unwrap();

                write!(buf, "[{now} {style}{:5}{style:#}", record.level())?;
                if let Some(path) = record.module_path() {
                    write!(buf, " {}", path)?;
                }
                writeln!(buf, " {:?}] {}", std::thread::current().id(), record.args())
            })
            .init();

        log::info!("action-system logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{BoolBinding, InteractionProfile, KeyboardKey};
    use crate::config::{ActionConfig, ActionSetConfig, ActionSystemConfig, XrVisibilityConfig};
    use crate::os_adapter::NullOsAdapter;
    use crate::xr_adapter::mock::MockXrAdapter;

    fn system_with_two_sets() -> ActionSystem {
        let config = ActionSystemConfig {
            action_sets: vec![
                ActionSetConfig {
                    name: "high".into(),
                    localized_name: "High".into(),
                    priority: 10,
                    bool_input_actions: vec![ActionConfig {
                        name: "jump".into(),
                        localized_name: "Jump".into(),
                        xr_visibility: XrVisibilityConfig::Never,
                        bindings: vec![BoolBinding::Keyboard(KeyboardKey::Space)],
                    }],
                    ..Default::default()
                },
                ActionSetConfig {
                    name: "low".into(),
                    localized_name: "Low".into(),
                    priority: 5,
                    bool_input_actions: vec![ActionConfig {
                        name: "jump".into(),
                        localized_name: "Jump".into(),
                        xr_visibility: XrVisibilityConfig::Never,
                        bindings: vec![BoolBinding::Keyboard(KeyboardKey::Space)],
                    }],
                    ..Default::default()
                },
            ],
            xr_interaction_profiles: vec![InteractionProfile::SimpleController],
        };
        ActionSystem::new(
            config,
            Box::new(MockXrAdapter::new()),
            Box::new(NullOsAdapter::new()),
            500,
        )
        .unwrap()
    }

    /// A higher-priority disabled set suppresses a lower-priority enabled
    /// one entirely, rather than letting arbitration fall through to it.
    #[test]
    fn priority_arbitration_suppresses_lower_priority_sets() {
        let mut sys = system_with_two_sets();
        sys.setup().unwrap();
        sys.process_os_event(RawInputEvent::KeyDown(0x20));
        assert!(sys.action_set("high").unwrap().bool_action("jump").unwrap().get_value());
        assert!(!sys.action_set("low").unwrap().bool_action("jump").unwrap().get_value());

        sys.action_set_mut("high").unwrap().disable();
        sys.process_os_event(RawInputEvent::KeyUp(0x20));
        sys.process_os_event(RawInputEvent::KeyDown(0x20));
        assert!(!sys.action_set("high").unwrap().bool_action("jump").unwrap().get_value());
        assert!(!sys.action_set("low").unwrap().bool_action("jump").unwrap().get_value());
    }
}
