//! Measure-type and level inference for columns computed by functions.
//!
//! Every function has a [`FunctionDescriptor`] in a [`FunctionRegistry`]. The
//! descriptor declares an output measure type and the argument positions that can
//! override it. At evaluation time the descriptor resolves the output type from
//! the arguments' types. For text outputs it also resolves the levels, keeping
//! only the labels the function actually produced.

pub mod compute;
pub mod store;
pub mod type_system;

pub use compute::{Argument, CellValue, Column, ValueSource};
pub use store::{EvalMode, FunctionDescriptor, FunctionId, FunctionRegistry, Level, LevelPair, MeasureType};
pub use type_system::{LevelUsage, MetaError};

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Confirms the Rust core is callable from Python.
#[cfg(feature = "python")]
#[pyfunction]
fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(core_version, m)?)?;
    m.add_class::<bindings::python::PyFunctionRegistry>()?;
    Ok(())
}
