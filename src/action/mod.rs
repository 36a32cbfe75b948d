//! Typed actions: the five concrete value kinds an `Action` can hold.
//!
//! Kept as five parallel structs rather than one polymorphic type: a single
//! enum-or-trait-object action would hide the type-specific operations
//! (`trigger`, `get_value`, `activate`) behind a match or a vtable at every
//! call site. The enum-keyed dispatch lives one level up, in `ActionSet`'s
//! five typed maps.

mod bool_action;
mod float_action;
mod haptic_action;
mod pose_action;
mod vec2_action;

pub use bool_action::BoolAction;
pub use float_action::FloatAction;
pub use haptic_action::HapticAction;
pub use pose_action::PoseAction;
pub use vec2_action::Vec2Action;

use crate::error::ActionError;

/// Controls whether an action participates in XR binding suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum XrVisibility {
    /// Visible to XR iff at least one declared binding falls in the XR
    /// region.
    Auto,
    /// Always visible to XR, even with zero XR bindings declared.
    Always,
    /// Never visible to XR, regardless of bindings.
    Never,
}

impl Default for XrVisibility {
    fn default() -> Self {
        XrVisibility::Auto
    }
}

/// Name/label/visibility shared by every action, factored out instead of
/// duplicated across the five typed structs.
#[derive(Debug, Clone)]
pub struct ActionMeta {
    pub name: String,
    pub localized_name: String,
    pub xr_visibility: XrVisibility,
}

impl ActionMeta {
    pub fn new(
        name: impl Into<String>,
        localized_name: impl Into<String>,
        xr_visibility: XrVisibility,
    ) -> Result<Self, ActionError> {
        let name = name.into();
        validate_action_name(&name)?;
        Ok(Self {
            name,
            localized_name: localized_name.into(),
            xr_visibility,
        })
    }
}

/// Non-empty is enforced; the XR runtime's recommended charset
/// (lowercase alphanumeric, `_`, `-`) is only advisory, so a violation is
/// logged and skipped rather than rejected outright.
pub(crate) fn validate_action_name(name: &str) -> Result<(), ActionError> {
    if name.is_empty() {
        return Err(ActionError::InvalidArgument(
            "action name must not be empty".into(),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        log::warn!(
            "action name {name:?} uses characters outside the XR runtime's recommended \
             lowercase-alphanumeric-and-[_-] charset"
        );
    }
    Ok(())
}

/// Whether a binding set (of any one value type) makes an `Auto`-visibility
/// action XR-visible: true iff at least one binding is in the XR region.
pub(crate) fn auto_visible(xr_visibility: XrVisibility, any_xr_binding: bool) -> bool {
    match xr_visibility {
        XrVisibility::Always => true,
        XrVisibility::Never => false,
        XrVisibility::Auto => any_xr_binding,
    }
}
