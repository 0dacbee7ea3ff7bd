//! The error taxonomy described in §7 of `SPEC_FULL.md`: a `SyntaxError`
//! and `StepLoadingError` surfaced to the caller, and a `HandlerFailure`
//! captured into the result model rather than returned as an `Err`.

mod loader;
mod parse;
mod step;

pub use loader::{IoFailure, LoaderError};
pub use parse::SyntaxError;
pub use step::{HandlerFailure, StepLoadingError};
