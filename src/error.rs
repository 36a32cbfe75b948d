use derive_more::Display;

/// The error surface for the whole crate.
///
/// `NotFound` is deliberately absent: a missing action or set is returned
/// as `None` from lookup methods, never as an error.
#[derive(Debug, Display)]
pub enum ActionError {
    #[display("invalid argument: {_0}")]
    InvalidArgument(String),
    #[display("action system is already set up")]
    AlreadySetUp,
    #[display("action system has not been set up")]
    NotSetUp,
    #[display("openxr call failed: {_0}")]
    XrFailure(openxr::sys::Result),
    #[display("os input registration failed: {_0}")]
    OsFailure(String),
}

impl std::error::Error for ActionError {}

impl From<openxr::sys::Result> for ActionError {
    fn from(value: openxr::sys::Result) -> Self {
        ActionError::XrFailure(value)
    }
}
