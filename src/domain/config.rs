use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::hierarchy_code::CANONICAL_DIGITS;

/// Configuration for reading and rendering hierarchy codes.
///
/// The configuration is always supplied as text by the caller; this type never
/// touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The name of the column holding hierarchy codes.
    ///
    /// The key is opaque here. It is only carried through to column parsing
    /// and error messages.
    org_node_column: String,

    /// The width each level is zero-padded to when rendering codes.
    ///
    /// For example, 'N01.02' (2 digits) or 'N001.002' (3 digits).
    digits: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org_node_column: default_org_node_column(),
            digits: default_digits(),
        }
    }
}

impl Config {
    /// Creates a configuration for the given column, with default rendering.
    #[must_use]
    pub fn new(org_node_column: impl Into<String>) -> Self {
        Self {
            org_node_column: org_node_column.into(),
            ..Self::default()
        }
    }

    /// Reads the hierarchy column name from an external schema document.
    ///
    /// Only the top-level `org_node_column` key is read. Every other key
    /// (questions, demographics, ...) belongs to the schema's owner and is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or has no
    /// `org_node_column` string.
    pub fn from_schema_yaml(yaml: &str) -> Result<Self, Error> {
        let header: SchemaHeader = serde_yaml::from_str(yaml)?;
        tracing::debug!(
            "Read hierarchy column '{}' from schema",
            header.org_node_column
        );
        Ok(Self::new(header.org_node_column))
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the name of the column holding hierarchy codes.
    #[must_use]
    pub fn org_node_column(&self) -> &str {
        &self.org_node_column
    }

    /// Returns the number of digits levels are padded to.
    #[must_use]
    pub const fn digits(&self) -> u16 {
        self.digits
    }

    /// Sets the number of digits levels are padded to.
    pub const fn set_digits(&mut self, digits: u16) {
        self.digits = digits;
    }
}

impl FromStr for Config {
    type Err = Error;

    /// Parses a TOML configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        tracing::debug!(
            "Loaded config: column '{}', {} digits",
            config.org_node_column,
            config.digits
        );
        Ok(config)
    }
}

/// Errors that can occur while reading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The TOML configuration could not be parsed.
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The schema document could not be parsed.
    #[error("Failed to parse schema: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn default_org_node_column() -> String {
    "org_node".to_string()
}

const fn default_digits() -> u16 {
    CANONICAL_DIGITS
}

#[derive(Debug, Deserialize)]
struct SchemaHeader {
    org_node_column: String,
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_org_node_column")]
        org_node_column: String,

        /// The width levels are zero-padded to.
        #[serde(default = "default_digits")]
        digits: u16,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                org_node_column,
                digits,
            } => Self {
                org_node_column,
                digits,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            org_node_column: config.org_node_column,
            digits: config.digits,
        }
    }
}
