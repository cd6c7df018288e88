//! Array-backed names.

use crate::contract::{check_clone_law, check_index, check_insert_index};
use crate::error::Result;
use crate::escape::{DEFAULT_DELIMITER, parse_components};
use crate::name::{Name, check_delimiter};
use crate::string_name::StringName;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A name stored as a vector of unmasked components.
///
/// Component access and mutation are O(1) (amortized for insertion at the
/// end). Masking only happens when the name is rendered, so the stored
/// components never carry escape sequences.
#[derive(Debug)]
pub struct StringArrayName {
    delimiter: char,
    components: Vec<String>,
}

impl StringArrayName {
    /// Create a name from raw (unmasked) components.
    ///
    /// The components are moved or copied into the name; the caller's
    /// collection is never shared.
    pub fn new<I, S>(components: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiter = check_delimiter(delimiter)?;
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        tracing::debug!(len = components.len(), %delimiter, "new array name");
        Ok(Self {
            delimiter,
            components,
        })
    }

    /// Create a name with the default delimiter.
    pub fn with_default_delimiter<I, S>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(components, DEFAULT_DELIMITER)
    }

    /// Parse a data string that was masked against `delimiter`.
    pub fn parse(data: &str, delimiter: char) -> Result<Self> {
        let delimiter = check_delimiter(delimiter)?;
        Self::new(parse_components(data, delimiter), delimiter)
    }

    /// Clone with the clone law checked.
    pub fn try_clone(&self) -> Result<Self> {
        let cloned = Self {
            delimiter: self.delimiter,
            components: self.components.clone(),
        };
        check_clone_law(self, &cloned)?;
        Ok(cloned)
    }
}

impl Name for StringArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn component(&self, index: usize) -> Result<String> {
        check_index(index, self.components.len())?;
        Ok(self.components[index].clone())
    }

    fn components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn set_component(&mut self, index: usize, component: &str) -> Result<()> {
        check_index(index, self.components.len())?;
        tracing::trace!(index, component, "set component");
        self.components[index] = component.to_string();
        Ok(())
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<()> {
        check_insert_index(index, self.components.len())?;
        tracing::trace!(index, component, "insert component");
        self.components.insert(index, component.to_string());
        Ok(())
    }

    fn append(&mut self, component: &str) -> Result<()> {
        self.insert(self.components.len(), component)
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        check_index(index, self.components.len())?;
        tracing::trace!(index, "remove component");
        self.components.remove(index);
        Ok(())
    }

    fn clone_name(&self) -> Result<Box<dyn Name>> {
        Ok(Box::new(self.try_clone()?))
    }
}

impl PartialEq for StringArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for StringArrayName {}

impl PartialEq<StringName> for StringArrayName {
    fn eq(&self, other: &StringName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for StringArrayName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl fmt::Display for StringArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_data_string())
    }
}

impl FromStr for StringArrayName {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DEFAULT_DELIMITER)
    }
}

impl From<&StringName> for StringArrayName {
    fn from(name: &StringName) -> Self {
        Self {
            delimiter: name.delimiter(),
            components: name.components(),
        }
    }
}

impl Serialize for StringArrayName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StringArrayName", 3)?;
        state.serialize_field("delimiter", &self.delimiter)?;
        state.serialize_field("data", &self.as_data_string())?;
        state.serialize_field("components", &self.components)?;
        state.end()
    }
}
