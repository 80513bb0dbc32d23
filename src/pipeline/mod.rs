pub mod rules;
pub mod prediction;
pub mod validation;
pub mod classify;
pub mod severity;
pub mod recommendations;
pub mod message;
pub mod orchestrator;

pub use rules::*;
pub use prediction::*;
pub use validation::*;
pub use classify::*;
pub use severity::*;
pub use recommendations::*;
pub use message::*;
pub use orchestrator::*;
