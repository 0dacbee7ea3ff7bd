//! A Gherkin-style feature parser coupled to a synchronous step-execution
//! runtime: parse feature text into `Feature`/`Scenario`/`Step` trees,
//! register handlers against regular expressions, and run scenarios with
//! lifecycle hooks, tag filtering, and a skip cascade on the first failed or
//! undefined step.

pub mod error;
pub mod hooks;
pub mod loader;
pub mod model;
pub mod parser;
pub mod result;
pub mod runner;
pub mod step;
pub mod world;

pub use error::{HandlerFailure, IoFailure, LoaderError, StepLoadingError, SyntaxError};
pub use loader::{FeatureLoader, FilesystemFeatureLoader};
pub use model::{EvaluatedOutline, ExampleBlock, Feature, Keyword, Scenario, Step, StepTable};
pub use result::{FeatureResult, RunResult, ScenarioResult, StepOutcome, StepRecord};
pub use runner::{behave_as, given, then, when, RunConfig, Runner};
pub use world::World;
