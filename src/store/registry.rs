use super::descriptor::FunctionDescriptor;
use super::types::{FunctionId, LevelPair, MeasureType};
use crate::compute::{Argument, ValueSource};
use crate::type_system::MetaError;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// One descriptor per function, in registration order.
///
/// Setup mutates through `&mut self`; resolution only needs `&self`, so once
/// configuration is done the registry can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRegistry {
    descriptors: IndexMap<FunctionId, FunctionDescriptor>,
}

impl FunctionRegistry {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.descriptors.len() }
    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }

    /// Returns the descriptor for `id`, creating a default one on first use.
    pub fn get_or_create(&mut self, id: impl Into<FunctionId>) -> &mut FunctionDescriptor {
        match self.descriptors.entry(id.into()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                debug!(function = %slot.key(), "registered function");
                let descriptor = FunctionDescriptor::new(slot.key().clone());
                slot.insert(descriptor)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&FunctionDescriptor> {
        self.descriptors.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut FunctionDescriptor> {
        self.descriptors.get_mut(id)
    }

    /// Strict lookup for hosts that register every function up front.
    pub fn descriptor(&self, id: &str) -> Result<&FunctionDescriptor, MetaError> {
        self.get(id)
            .ok_or_else(|| MetaError::UnknownFunction(FunctionId::from(id)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.descriptors.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionDescriptor> + '_ {
        self.descriptors.values()
    }

    /// Declares the output type and the return indices of `id`.
    pub fn returns(
        &mut self,
        id: impl Into<FunctionId>,
        measure_type: MeasureType,
        returns: impl IntoIterator<Item = usize>,
    ) -> &mut FunctionDescriptor {
        self.get_or_create(id).configure(measure_type, returns)
    }

    /// Like `returns`, but `id` must already be registered.
    pub fn configure_existing(
        &mut self,
        id: &str,
        measure_type: MeasureType,
        returns: impl IntoIterator<Item = usize>,
    ) -> Result<&mut FunctionDescriptor, MetaError> {
        let descriptor = self
            .descriptors
            .get_mut(id)
            .ok_or_else(|| MetaError::UnknownFunction(FunctionId::from(id)))?;
        Ok(descriptor.configure(measure_type, returns))
    }

    pub fn row_wise(&mut self, id: impl Into<FunctionId>) -> &mut FunctionDescriptor {
        self.get_or_create(id).set_row_wise()
    }

    pub fn column_wise(&mut self, id: impl Into<FunctionId>) -> &mut FunctionDescriptor {
        self.get_or_create(id).set_column_wise()
    }

    pub fn resolve_type<A: Argument>(&self, id: &str, args: &[A]) -> Result<MeasureType, MetaError> {
        Ok(self.descriptor(id)?.resolve_type(args))
    }

    pub fn resolve_levels<A, S>(&self, id: &str, args: &[A], output: &S) -> Result<Vec<LevelPair>, MetaError>
    where
        A: Argument,
        S: ValueSource + ?Sized,
    {
        Ok(self.descriptor(id)?.resolve_levels(args, output))
    }

    /// Loads a function table: a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, MetaError> {
        let table: Vec<FunctionDescriptor> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for descriptor in table {
            match registry.descriptors.entry(descriptor.id().clone()) {
                Entry::Occupied(slot) => return Err(MetaError::DuplicateFunction(slot.key().clone())),
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }
        debug!(functions = registry.len(), "loaded function table");
        Ok(registry)
    }

    /// Writes the registry in the format `from_json` reads.
    pub fn to_json(&self) -> Result<String, MetaError> {
        let table: Vec<&FunctionDescriptor> = self.iter().collect();
        Ok(serde_json::to_string_pretty(&table)?)
    }
}
