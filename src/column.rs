//! Hierarchy codes read from a single column of tabular data
//!
//! Whoever owns the table hands over the raw cell values of the column named
//! by [`Config::org_node_column`]. A [`CodeColumn`] parses every cell up front
//! and fails on the first bad one, naming the column and row so the offending
//! input can be shown to the user.

use std::collections::BTreeSet;

use tracing::instrument;

use crate::domain::{Config, HierarchyCode, HierarchyCodeError};

/// The parsed hierarchy codes of one column, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeColumn {
    name: String,
    codes: Vec<HierarchyCode>,
}

impl CodeColumn {
    /// Parses the raw cells of the named column.
    ///
    /// # Errors
    ///
    /// Returns an error for the first cell that is not a valid hierarchy code.
    #[instrument(skip(cells))]
    pub fn parse<I, S>(name: &str, cells: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = cells
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                let raw = cell.as_ref();
                raw.parse::<HierarchyCode>().map_err(|source| {
                    tracing::debug!("Rejected hierarchy code '{raw}' at row {row}: {source}");
                    Error {
                        column: name.to_string(),
                        row,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!("Parsed {} hierarchy codes", codes.len());

        Ok(Self {
            name: name.to_string(),
            codes,
        })
    }

    /// Parses the raw cells of the column named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for the first cell that is not a valid hierarchy code.
    pub fn from_config<I, S>(config: &Config, cells: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(config.org_node_column(), cells)
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the codes in row order.
    #[must_use]
    pub fn codes(&self) -> &[HierarchyCode] {
        &self.codes
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the codes in hierarchy order.
    ///
    /// The sort is stable, so duplicate codes keep their row order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&HierarchyCode> {
        let mut codes: Vec<_> = self.codes.iter().collect();
        codes.sort();
        codes
    }

    /// Returns the distinct top-level units present in the column, in order.
    #[must_use]
    pub fn roots(&self) -> Vec<HierarchyCode> {
        self.codes
            .iter()
            .map(HierarchyCode::root)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the codes below `ancestor`, in hierarchy order.
    ///
    /// `ancestor` itself is not included.
    #[must_use]
    pub fn descendants_of(&self, ancestor: &HierarchyCode) -> Vec<&HierarchyCode> {
        let mut codes: Vec<_> = self
            .codes
            .iter()
            .filter(|code| code.is_descendant_of(ancestor))
            .collect();
        codes.sort();
        codes
    }

    /// Renders every code, in row order, with levels padded to the
    /// configured width.
    #[must_use]
    pub fn to_strings(&self, config: &Config) -> Vec<String> {
        self.codes
            .iter()
            .map(|code| code.display(config.digits()).to_string())
            .collect()
    }

    /// Consumes the column, returning the codes in row order.
    #[must_use]
    pub fn into_codes(self) -> Vec<HierarchyCode> {
        self.codes
    }
}

/// A cell of a hierarchy column could not be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid hierarchy code in column '{column}' at row {row}: {source}")]
pub struct Error {
    column: String,
    row: usize,
    source: HierarchyCodeError,
}

impl Error {
    /// Returns the name of the column.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the zero-based row index of the bad cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the underlying parse error, which carries the raw input.
    #[must_use]
    pub const fn code_error(&self) -> &HierarchyCodeError {
        &self.source
    }
}
