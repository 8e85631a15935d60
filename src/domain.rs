//! Domain models for organisation hierarchies.
//!
//! This module contains the hierarchy code value type and the configuration
//! that ties it to a column of survey data.

/// Hierarchy code parsing, formatting and ordering.
pub mod hierarchy_code;
pub use hierarchy_code::{Error as HierarchyCodeError, FormattedCode, HierarchyCode};

mod config;
pub use config::{Config, Error as ConfigError};
