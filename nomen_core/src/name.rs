//! The name contract shared by every representation.

use crate::contract::assert_argument;
use crate::error::{Error, Result};
use crate::escape::{ESCAPE_CHARACTER, join_masked, mask};
use std::fmt;

/// A hierarchical name: an ordered sequence of components joined by a
/// single-character delimiter.
///
/// Implementors supply the storage primitives; everything else (rendering,
/// equality, hashing, concatenation) is provided on top of them, so two
/// implementations holding the same components are indistinguishable.
///
/// Mutators validate their arguments first. A rejected call leaves the name
/// unchanged.
pub trait Name: fmt::Debug {
    /// The delimiter this name was constructed with.
    fn delimiter(&self) -> char;

    /// Number of components.
    fn len(&self) -> usize;

    /// The unmasked component at `index`.
    fn component(&self, index: usize) -> Result<String>;

    /// All components, unmasked, in order.
    fn components(&self) -> Vec<String>;

    /// Replace the component at `index`.
    fn set_component(&mut self, index: usize, component: &str) -> Result<()>;

    /// Insert a component before `index`; `index == len()` appends.
    fn insert(&mut self, index: usize, component: &str) -> Result<()>;

    /// Add a component at the end.
    fn append(&mut self, component: &str) -> Result<()>;

    /// Remove the component at `index`.
    fn remove(&mut self, index: usize) -> Result<()>;

    /// An independent copy that is equal to `self`.
    fn clone_name(&self) -> Result<Box<dyn Name>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render for display, masking against `delimiter` instead of the
    /// name's own.
    fn as_string_with(&self, delimiter: char) -> String {
        let masked: Vec<String> = self
            .components()
            .iter()
            .map(|c| mask(c, delimiter))
            .collect();
        join_masked(&masked, delimiter)
    }

    fn as_string(&self) -> String {
        self.as_string_with(self.delimiter())
    }

    /// The machine-readable form. Parsing it with [`Name::delimiter`] gives
    /// back an equal name.
    fn as_data_string(&self) -> String {
        self.as_string_with(self.delimiter())
    }

    /// Component-wise equality. The delimiter does not take part.
    fn is_equal(&self, other: &dyn Name) -> bool {
        self.len() == other.len() && self.components() == other.components()
    }

    /// Polynomial hash (`h * 31 + unit`) over the UTF-16 units of every
    /// component. Equal names hash equally.
    fn hash_code(&self) -> u32 {
        let mut hash: u32 = 0;
        for component in self.components() {
            for unit in component.encode_utf16() {
                hash = hash.wrapping_mul(31).wrapping_add(u32::from(unit));
            }
        }
        hash
    }

    /// Append every component of `other` to `self`.
    fn concat(&mut self, other: &dyn Name) -> Result<()> {
        tracing::trace!(
            target_len = self.len(),
            other_len = other.len(),
            "concat"
        );
        for component in other.components() {
            self.append(&component)?;
        }
        Ok(())
    }
}

impl PartialEq for dyn Name + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for dyn Name + '_ {}

/// Parse a delimiter argument: exactly one character, not the escape
/// character.
pub fn parse_delimiter(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => check_delimiter(c),
        _ => Err(Error::precondition(format!(
            "delimiter must be exactly one character, got {:?}",
            s
        ))),
    }
}

/// Reject delimiters that would make data strings ambiguous.
pub fn check_delimiter(delimiter: char) -> Result<char> {
    assert_argument(
        delimiter != ESCAPE_CHARACTER,
        "delimiter must not be the escape character",
    )?;
    Ok(delimiter)
}
