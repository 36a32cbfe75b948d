//! Opaque XR handle identifiers.
//!
//! Actions and action sets never touch the `openxr` crate's types
//! directly - they hold one of these IDs, assigned and resolved by
//! whichever `XrAdapter` implementation is plugged into the
//! `ActionSystem` (see `xr_adapter`). That indirection is what lets the
//! dispatcher, priority arbitration and frame bookkeeping be unit tested
//! with `xr_adapter::mock::MockXrAdapter` instead of a real OpenXR
//! runtime, the idiomatic replacement for a C-level ICD-loader test
//! double.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XrActionSetId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XrActionId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XrSpaceId(pub(crate) u64);
