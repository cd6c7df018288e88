//! # Nomen Core
//!
//! Hierarchical, escape-aware structured names.
//!
//! A name is an ordered sequence of text components joined by a
//! single-character delimiter (`.` by default). Components may contain the
//! delimiter or the escape character `\`; they are masked whenever the name is
//! rendered as a data string, so the data string can always be parsed back.
//!
//! ## Features
//!
//! - Two interchangeable representations behind one [`Name`] trait:
//!   [`StringArrayName`] (vector of components) and [`StringName`] (one masked
//!   string)
//! - Lossless mask/unmask codec in [`escape`]
//! - Contract checks with typed failures: [`ErrorKind::Precondition`],
//!   [`ErrorKind::Postcondition`], [`ErrorKind::InvalidState`]
//!
//! ## Example
//!
//! ```
//! use nomen_core::{Name, StringArrayName, StringName};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut host = StringArrayName::new(["oss", "cs", "fau", "de"], '.')?;
//! assert_eq!(host.as_data_string(), "oss.cs.fau.de");
//!
//! host.set_component(0, "www.oss")?;
//! assert_eq!(host.as_data_string(), "www\\.oss.cs.fau.de");
//!
//! // Parse the data string into the other representation
//! let parsed = StringName::new(&host.as_data_string(), '.')?;
//! assert!(parsed.is_equal(&host));
//! assert_eq!(parsed.component(0)?, "www.oss");
//! # Ok(())
//! # }
//! ```

mod array_name;
pub mod contract;
mod error;
pub mod escape;
mod name;
mod string_name;

pub use array_name::StringArrayName;
pub use error::{Error, ErrorKind, Result};
pub use escape::{DEFAULT_DELIMITER, ESCAPE_CHARACTER, mask, unmask};
pub use name::{Name, check_delimiter, parse_delimiter};
pub use string_name::StringName;
