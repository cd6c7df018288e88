//! Assertion helpers for design-by-contract checks.
//!
//! Each helper is a no-op when its condition holds and otherwise returns the
//! matching [`Error`] variant, so call sites read as `assert_argument(..)?`.

use crate::error::{Error, Result};
use crate::name::Name;

/// Fail with a precondition error unless `cond` holds.
pub fn assert_argument(cond: bool, message: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::precondition(message))
    }
}

/// Fail with a postcondition error unless `cond` holds.
pub fn assert_postcondition(cond: bool, message: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        tracing::warn!(reason = message, "postcondition failed");
        Err(Error::postcondition(message))
    }
}

/// Fail with an invalid-state error unless `cond` holds.
pub fn assert_state(cond: bool, message: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::invalid_state(message))
    }
}

/// Index valid for reading, replacing or removing: `[0, len)`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::precondition(format!(
            "index {} out of bounds for {} components",
            index, len
        )))
    }
}

/// Index valid for inserting: `[0, len]`.
pub fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::precondition(format!(
            "insert index {} out of bounds for {} components",
            index, len
        )))
    }
}

/// A fresh clone must be equal to its source.
pub fn check_clone_law(source: &dyn Name, clone: &dyn Name) -> Result<()> {
    assert_postcondition(clone.is_equal(source), "clone must be equal to original")?;
    assert_postcondition(
        clone.delimiter() == source.delimiter(),
        "clone must keep the delimiter of the original",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_name::StringArrayName;
    use crate::error::ErrorKind;

    #[test]
    fn test_assertions_pass_when_true() {
        assert!(assert_argument(true, "unused").is_ok());
        assert!(assert_postcondition(true, "unused").is_ok());
        assert!(assert_state(true, "unused").is_ok());
    }

    #[test]
    fn test_assertions_raise_matching_kind() {
        let err = assert_argument(false, "bad arg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert_eq!(err.message(), "bad arg");

        let err = assert_postcondition(false, "broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Postcondition);

        let err = assert_state(false, "file must be open").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert!(check_index(1, 1).is_err());
        assert!(check_index(0, 0).is_err());
        assert!(check_index(usize::MAX, 3).is_err());
    }

    #[test]
    fn test_check_insert_index_bounds() {
        assert!(check_insert_index(0, 0).is_ok());
        assert!(check_insert_index(3, 3).is_ok());
        assert!(check_insert_index(4, 3).is_err());
    }

    #[test]
    fn test_check_clone_law_detects_difference() {
        let a = StringArrayName::new(["a", "b"], '.').unwrap();
        let b = StringArrayName::new(["a", "c"], '.').unwrap();
        let c = StringArrayName::new(["a", "b"], '/').unwrap();

        assert!(check_clone_law(&a, &a).is_ok());
        assert_eq!(
            check_clone_law(&a, &b).unwrap_err().kind(),
            ErrorKind::Postcondition
        );
        assert_eq!(
            check_clone_law(&a, &c).unwrap_err().kind(),
            ErrorKind::Postcondition
        );
    }
}
