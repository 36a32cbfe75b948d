//! The declarative configuration surface: plain value records an
//! application builds (by hand, or by deserializing them with `serde`) and
//! hands to `ActionSystem::new`, which deep-copies them into its owned
//! model. There is no file format or persistence concern here - deserialize
//! support is not the same as the crate owning a save/load path.
//!
//! Grounded on xrizer's `action_manifest.rs`, which deserializes a SteamVR
//! action manifest into a similar action-set/action/bindings tree with
//! `serde`; the config/destroy deep-clone dance from the original C headers
//! collapses here to ordinary `Clone`.

use serde::{Deserialize, Serialize};

use crate::binding::{BoolBinding, FloatBinding, HapticBinding, InteractionProfile, PoseBinding, Vec2Binding};
use crate::error::ActionError;

const MAX_NAME_LEN: usize = 64;
const MAX_LOCALIZED_NAME_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XrVisibilityConfig {
    Auto,
    Always,
    Never,
}

impl Default for XrVisibilityConfig {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<XrVisibilityConfig> for crate::action::XrVisibility {
    fn from(value: XrVisibilityConfig) -> Self {
        match value {
            XrVisibilityConfig::Auto => Self::Auto,
            XrVisibilityConfig::Always => Self::Always,
            XrVisibilityConfig::Never => Self::Never,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionConfig<T> {
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub xr_visibility: XrVisibilityConfig,
    pub bindings: Vec<T>,
}

/// A pose action has exactly one binding, so this is a scalar field rather
/// than a `bindings: Vec<T>` like the other four action configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseActionConfig {
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub xr_visibility: XrVisibilityConfig,
    pub binding: PoseBinding,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionSetConfig {
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub bool_input_actions: Vec<ActionConfig<BoolBinding>>,
    #[serde(default)]
    pub float_input_actions: Vec<ActionConfig<FloatBinding>>,
    #[serde(default)]
    pub vec2_input_actions: Vec<ActionConfig<Vec2Binding>>,
    #[serde(default)]
    pub pose_input_actions: Vec<PoseActionConfig>,
    #[serde(default)]
    pub haptic_output_actions: Vec<ActionConfig<HapticBinding>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionSystemConfig {
    pub action_sets: Vec<ActionSetConfig>,
    #[serde(default)]
    pub xr_interaction_profiles: Vec<InteractionProfile>,
}

pub(crate) fn validate_name(name: &str, field: &str) -> Result<(), ActionError> {
    if name.is_empty() {
        return Err(ActionError::InvalidArgument(format!("{field} must not be empty")));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ActionError::InvalidArgument(format!(
            "{field} {name:?} exceeds {MAX_NAME_LEN} bytes"
        )));
    }
    if !name.is_ascii() {
        return Err(ActionError::InvalidArgument(format!("{field} {name:?} must be ASCII")));
    }
    Ok(())
}

pub(crate) fn validate_localized_name(name: &str, field: &str) -> Result<(), ActionError> {
    if name.len() > MAX_LOCALIZED_NAME_LEN {
        return Err(ActionError::InvalidArgument(format!(
            "{field} {name:?} exceeds {MAX_LOCALIZED_NAME_LEN} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_over_64_bytes_is_rejected() {
        let name = "a".repeat(65);
        assert!(validate_name(&name, "action_set.name").is_err());
    }

    #[test]
    fn localized_name_over_128_bytes_is_rejected() {
        let name = "a".repeat(129);
        assert!(validate_localized_name(&name, "action_set.localized_name").is_err());
    }

    #[test]
    fn action_set_config_deserializes_from_json() {
        let json = r#"{
            "name": "main",
            "localized_name": "Main",
            "priority": 10,
            "bool_input_actions": [
                {"name": "jump", "localized_name": "Jump", "bindings": [{"Keyboard": "Space"}]}
            ]
        }"#;
        let cfg: ActionSetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.priority, 10);
        assert_eq!(cfg.bool_input_actions[0].name, "jump");
        assert_eq!(cfg.bool_input_actions[0].xr_visibility, XrVisibilityConfig::Auto);
    }

    #[test]
    fn config_round_trips_through_clone() {
        let cfg = ActionSystemConfig {
            action_sets: vec![ActionSetConfig {
                name: "main".into(),
                localized_name: "Main".into(),
                priority: 10,
                ..Default::default()
            }],
            xr_interaction_profiles: vec![InteractionProfile::SimpleController],
        };
        let cloned = cfg.clone();
        assert_eq!(cloned.action_sets[0].name, cfg.action_sets[0].name);
        assert_eq!(cloned.action_sets.len(), cfg.action_sets.len());
    }
}
