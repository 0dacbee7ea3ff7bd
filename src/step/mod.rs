//! Step registration, resolution, and the types that connect a matched
//! pattern to a running handler (§4.3, §4.4).

mod context;
mod location;
mod regex;
mod registry;
mod resolver;

pub use context::Captures;
pub use location::Location;
pub use regex::HashableRegex;
pub use registry::{clear, len, register, resolve as resolve_sentence, Handler, Resolved, StepResult};
pub use resolver::resolve;

/// A non-owning reference to a step within its owning scenario's position in
/// a feature's scenario list, standing in for a raw back-pointer field on
/// [`Step`](crate::model::Step) (§9 Design Notes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepHandle {
    pub scenario_index: usize,
    pub step_index: usize,
}
