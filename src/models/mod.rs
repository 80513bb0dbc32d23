pub mod diagnosis;
pub mod enums;
pub mod symptom;

pub use diagnosis::*;
pub use enums::*;
pub use symptom::*;
