//! Function metadata: identities, classifications, descriptors and their registry.
pub mod descriptor;
pub mod registry;
pub mod types;

pub use descriptor::{FunctionDescriptor, ReturnIndices};
pub use registry::FunctionRegistry;
pub use types::{EvalMode, FunctionId, Level, LevelPair, MeasureType};
