//! Python bindings for the function registry.
//!
//! Arguments cross the boundary as plain data: a measure type name, plus level
//! labels for levelled columns. Produced values arrive as text or `None`.

use crate::compute::{CellValue, Column};
use crate::store::{FunctionRegistry, MeasureType};
use crate::type_system::MetaError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: MetaError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_measure_type(name: &str) -> PyResult<MeasureType> {
    name.parse().map_err(to_py_err)
}

#[pyclass(name = "_FunctionRegistry")]
#[derive(Debug, Clone, Default)]
pub struct PyFunctionRegistry {
    inner: FunctionRegistry,
}

#[pymethods]
impl PyFunctionRegistry {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    #[pyo3(signature = (name, measure_type, returns = Vec::new()))]
    pub fn returns(&mut self, name: String, measure_type: &str, returns: Vec<usize>) -> PyResult<()> {
        let mt = parse_measure_type(measure_type)?;
        self.inner.returns(name, mt, returns);
        Ok(())
    }

    pub fn row_wise(&mut self, name: String) {
        self.inner.row_wise(name);
    }

    pub fn column_wise(&mut self, name: String) {
        self.inner.column_wise(name);
    }

    pub fn is_row_wise(&self, name: &str) -> PyResult<bool> {
        let d = self.inner.descriptor(name).map_err(to_py_err)?;
        Ok(d.mode().is_row_wise())
    }

    pub fn is_column_wise(&self, name: &str) -> PyResult<bool> {
        let d = self.inner.descriptor(name).map_err(to_py_err)?;
        Ok(d.mode().is_column_wise())
    }

    pub fn describe(&self, name: &str) -> PyResult<String> {
        let d = self.inner.descriptor(name).map_err(to_py_err)?;
        Ok(d.to_string())
    }

    /// Output measure type for arguments given by measure type name.
    pub fn resolve_type(&self, name: &str, arg_types: Vec<String>) -> PyResult<String> {
        let args = arg_types
            .iter()
            .map(|t| parse_measure_type(t))
            .collect::<PyResult<Vec<_>>>()?;
        let mt = self.inner.resolve_type(name, &args).map_err(to_py_err)?;
        Ok(mt.to_string())
    }

    /// Output levels. `args` holds one `(measure_type, labels)` pair per argument.
    pub fn resolve_levels(
        &self,
        name: &str,
        args: Vec<(String, Vec<String>)>,
        values: Vec<Option<String>>,
    ) -> PyResult<Vec<(String, String)>> {
        let columns = args
            .into_iter()
            .enumerate()
            .map(|(i, (mt, labels))| -> PyResult<Column> {
                Ok(Column::new(format!("arg{}", i), parse_measure_type(&mt)?).with_labels(labels))
            })
            .collect::<PyResult<Vec<_>>>()?;
        let output: Vec<CellValue> = values.into_iter().map(CellValue::from).collect();
        self.inner
            .resolve_levels(name, &columns, &output)
            .map_err(to_py_err)
    }

    pub fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        let inner = FunctionRegistry::from_json(json).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn __contains__(&self, name: &str) -> bool {
        self.inner.contains(name)
    }
}
