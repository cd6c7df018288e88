//! String-backed names.

use crate::array_name::StringArrayName;
use crate::contract::{assert_postcondition, check_clone_law, check_index, check_insert_index};
use crate::error::{Error, Result};
use crate::escape::{DEFAULT_DELIMITER, join_masked, mask, split_masked, unmask};
use crate::name::{Name, check_delimiter};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A name stored as one masked data string.
///
/// The component count is cached, so [`Name::len`] is O(1). Every other
/// component access re-splits the string and costs O(n) in its length.
#[derive(Debug)]
pub struct StringName {
    delimiter: char,
    name: String,
    no_components: usize,
}

impl StringName {
    /// Create a name from a data string masked against `delimiter`.
    ///
    /// The empty string is one empty component. Each part is re-masked, so
    /// the stored string is canonical: a trailing escape in the source is
    /// kept as a literal `\` and can never escape a delimiter added later.
    pub fn new(source: &str, delimiter: char) -> Result<Self> {
        let delimiter = check_delimiter(delimiter)?;
        let parts: Vec<String> = split_masked(source, delimiter)
            .iter()
            .map(|part| mask(&unmask(part, delimiter), delimiter))
            .collect();
        tracing::debug!(len = parts.len(), %delimiter, "new string name");
        Ok(Self {
            delimiter,
            name: join_masked(&parts, delimiter),
            no_components: parts.len(),
        })
    }

    /// Create a name with the default delimiter.
    pub fn with_default_delimiter(source: &str) -> Result<Self> {
        Self::new(source, DEFAULT_DELIMITER)
    }

    /// Create a name from raw (unmasked) components.
    pub fn from_components<S: AsRef<str>>(components: &[S], delimiter: char) -> Result<Self> {
        let delimiter = check_delimiter(delimiter)?;
        let masked: Vec<String> = components
            .iter()
            .map(|c| mask(c.as_ref(), delimiter))
            .collect();
        Ok(Self {
            delimiter,
            name: join_masked(&masked, delimiter),
            no_components: masked.len(),
        })
    }

    /// The backing data string as stored.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Clone with the clone law checked.
    pub fn try_clone(&self) -> Result<Self> {
        let cloned = Self {
            delimiter: self.delimiter,
            name: self.name.clone(),
            no_components: self.no_components,
        };
        check_clone_law(self, &cloned)?;
        Ok(cloned)
    }

    // An empty name and a name with one empty component share the backing
    // string "", only the cached count tells them apart.
    fn masked_parts(&self) -> Vec<String> {
        if self.no_components == 0 {
            Vec::new()
        } else {
            split_masked(&self.name, self.delimiter)
        }
    }

    fn store_parts(&mut self, parts: &[String]) -> Result<()> {
        self.name = join_masked(parts, self.delimiter);
        self.no_components = parts.len();
        self.check_count()
    }

    // The cached count must match what a re-split of the stored string finds.
    fn check_count(&self) -> Result<()> {
        let found = if self.no_components == 0 {
            0
        } else {
            split_masked(&self.name, self.delimiter).len()
        };
        assert_postcondition(
            found == self.no_components,
            "stored string must split into the cached number of components",
        )
    }
}

impl Name for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn len(&self) -> usize {
        self.no_components
    }

    fn component(&self, index: usize) -> Result<String> {
        check_index(index, self.no_components)?;
        let parts = self.masked_parts();
        let part = parts.get(index).ok_or_else(|| {
            Error::postcondition("stored string has fewer components than cached")
        })?;
        Ok(unmask(part, self.delimiter))
    }

    fn components(&self) -> Vec<String> {
        self.masked_parts()
            .iter()
            .map(|part| unmask(part, self.delimiter))
            .collect()
    }

    fn set_component(&mut self, index: usize, component: &str) -> Result<()> {
        check_index(index, self.no_components)?;
        tracing::trace!(index, component, "set component");
        let mut parts = self.masked_parts();
        parts[index] = mask(component, self.delimiter);
        self.store_parts(&parts)
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<()> {
        check_insert_index(index, self.no_components)?;
        tracing::trace!(index, component, "insert component");
        let mut parts = self.masked_parts();
        parts.insert(index, mask(component, self.delimiter));
        self.store_parts(&parts)
    }

    fn append(&mut self, component: &str) -> Result<()> {
        tracing::trace!(component, "append component");
        let masked = mask(component, self.delimiter);
        if self.no_components == 0 {
            self.name = masked;
        } else {
            self.name.push(self.delimiter);
            self.name.push_str(&masked);
        }
        self.no_components += 1;
        self.check_count()
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        check_index(index, self.no_components)?;
        tracing::trace!(index, "remove component");
        let mut parts = self.masked_parts();
        parts.remove(index);
        self.store_parts(&parts)
    }

    fn clone_name(&self) -> Result<Box<dyn Name>> {
        Ok(Box::new(self.try_clone()?))
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for StringName {}

impl PartialEq<StringArrayName> for StringName {
    fn eq(&self, other: &StringArrayName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with StringArrayName, which hashes its Vec<String>
        self.components().hash(state);
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_data_string())
    }
}

impl FromStr for StringName {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, DEFAULT_DELIMITER)
    }
}

impl From<&StringArrayName> for StringName {
    fn from(name: &StringArrayName) -> Self {
        Self {
            delimiter: name.delimiter(),
            name: name.as_data_string(),
            no_components: name.len(),
        }
    }
}

impl Serialize for StringName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StringName", 3)?;
        state.serialize_field("delimiter", &self.delimiter)?;
        state.serialize_field("data", &self.as_data_string())?;
        state.serialize_field("components", &self.components())?;
        state.end()
    }
}
