//! Type registry: the name to converter mapping handed to the parser.

use indexmap::IndexMap;
use log::debug;

use crate::{Converter, Error, Result};

/// Converters by type name.
///
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Converter>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `converter` under `name`, returning the converter it replaces.
    pub fn insert(&mut self, name: impl Into<String>, converter: Converter) -> Option<Converter> {
        let name = name.into();
        let previous = self.types.insert(name.clone(), converter);
        if previous.is_some() {
            debug!("type registry: replaced converter for '{name}'");
        }
        previous
    }

    /// Insert `converter` under its own name.
    pub fn register(&mut self, converter: Converter) -> Result<()> {
        let name = converter.name().ok_or(Error::UnnamedConverter)?.to_owned();
        self.insert(name, converter);
        Ok(())
    }

    /// Merge all entries of `other`, replacing entries with the same name.
    pub fn extend(&mut self, other: TypeRegistry) {
        for (name, converter) in other.types {
            self.insert(name, converter);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Converter> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Converter)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = (&'a String, &'a Converter);
    type IntoIter = indexmap::map::Iter<'a, String, Converter>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

/// Build a registry from named converters.
///
/// Every converter must have a name. A later converter replaces an earlier
/// one with the same name.
pub fn build_type_dict<I>(converters: I) -> Result<TypeRegistry>
where
    I: IntoIterator<Item = Converter>,
{
    let mut registry = TypeRegistry::new();
    for converter in converters {
        registry.register(converter)?;
    }
    Ok(registry)
}
