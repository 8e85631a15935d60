//! Organisation hierarchies for survey reporting
//!
//! Respondents are placed in an organisation tree through dotted numeric codes
//! such as `N01.02.03`. This crate parses those codes, renders them in
//! canonical form and orders them so that sorting yields a pre-order walk of
//! the tree.

pub mod domain;
pub use domain::{Config, ConfigError, FormattedCode, HierarchyCode, HierarchyCodeError};

/// Parsing of hierarchy codes from a column of tabular data.
pub mod column;
pub use column::{CodeColumn, Error as ColumnError};
