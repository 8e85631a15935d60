use std::{any::Any, cmp::Ordering, fmt, fmt::Write as _, str::FromStr};

use nonempty::NonEmpty;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The character every hierarchy code string starts with.
pub const MARKER: char = 'N';

/// The minimum width each level is zero-padded to in canonical form.
pub const CANONICAL_DIGITS: u16 = 2;

/// A node (or unit) in an organisation structure.
///
/// Depending on how a company is structured, a node can stand for a business
/// unit (Marketing, Finance) or for a person (a manager and their reports).
///
/// Format:
/// `N{LEVEL}.{LEVEL}...`, where each `LEVEL` is a non-negative integer. The
/// first level is the topmost unit and every following level selects a child
/// within its parent.
///
/// Examples: `N01`, `N01.02`, `N02.00.01`
///
/// Codes are totally ordered so that sorting a collection yields a pre-order
/// walk of the tree: a parent comes immediately before its whole subtree and
/// sibling subtrees are ordered by level value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HierarchyCode {
    levels: Vec<u64>,
}

impl HierarchyCode {
    /// Create a code from a non-empty sequence of levels.
    ///
    /// This is an infallible constructor that takes pre-validated levels.
    #[must_use]
    pub fn new(levels: NonEmpty<u64>) -> Self {
        Self {
            levels: levels.into(),
        }
    }

    /// Returns the levels, topmost first.
    #[must_use]
    pub fn levels(&self) -> &[u64] {
        &self.levels
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the depth-1 code this code descends from (or itself, if it is
    /// already a root).
    #[must_use]
    pub fn root(&self) -> Self {
        Self {
            levels: self.levels[..1].to_vec(),
        }
    }

    /// Returns the immediate parent, or `None` for a root code.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        (self.depth() > 1).then(|| Self {
            levels: self.levels[..self.depth() - 1].to_vec(),
        })
    }

    /// Returns the code one level below this one.
    #[must_use]
    pub fn child(&self, level: u64) -> Self {
        let mut levels = Vec::with_capacity(self.depth() + 1);
        levels.extend_from_slice(&self.levels);
        levels.push(level);
        Self { levels }
    }

    /// Iterates over the ancestors of this code, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> + '_ {
        (1..self.depth()).rev().map(|len| Self {
            levels: self.levels[..len].to_vec(),
        })
    }

    /// Whether this code's levels are a proper prefix of `other`'s.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.depth() < other.depth() && other.levels.starts_with(&self.levels)
    }

    /// Whether `other`'s levels are a proper prefix of this code's.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Self) -> bool {
        other.is_ancestor_of(self)
    }

    /// Equality against a value of any type.
    ///
    /// Returns `false` for anything that is not a [`HierarchyCode`]. Ordering
    /// has no such counterpart; it is only defined between two codes.
    #[must_use]
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Returns a displayable representation with every level zero-padded to
    /// the given width.
    ///
    /// The canonical form (used by [`fmt::Display`]) pads to
    /// [`CANONICAL_DIGITS`]. Any width parses back to the same code.
    ///
    /// # Examples
    ///
    /// ```
    /// use elastic_calculator::HierarchyCode;
    ///
    /// let code: HierarchyCode = "N1.2.30".parse().unwrap();
    ///
    /// assert_eq!(code.to_string(), "N01.02.30");
    /// assert_eq!(code.display(3).to_string(), "N001.002.030");
    /// assert_eq!(code.display(0).to_string(), "N1.2.30");
    /// ```
    #[must_use]
    pub const fn display(&self, digits: u16) -> FormattedCode<'_> {
        FormattedCode { code: self, digits }
    }
}

/// A wrapper type that formats a code with a specified level width.
///
/// This type is returned by [`HierarchyCode::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedCode<'a> {
    code: &'a HierarchyCode,
    digits: u16,
}

impl fmt::Display for FormattedCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(MARKER)?;
        for (i, level) in self.code.levels.iter().enumerate() {
            if i > 0 {
                f.write_char('.')?;
            }
            write!(f, "{level:0width$}", width = usize::from(self.digits))?;
        }
        Ok(())
    }
}

impl fmt::Display for HierarchyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display(CANONICAL_DIGITS), f)
    }
}

impl fmt::Debug for HierarchyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HierarchyCode({self})")
    }
}

impl Ord for HierarchyCode {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        // The first differing level decides. With none, one code is an
        // ancestor of the other and the shallower one goes first.
        self.levels
            .iter()
            .zip(&other.levels)
            .map(|(a, b)| a.cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.depth().cmp(&other.depth()))
    }
}

impl PartialOrd for HierarchyCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Errors that can occur while parsing or constructing a code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input held no levels at all.
    #[error("Cannot construct hierarchy code from empty input")]
    EmptyInput,

    /// A segment was not a non-negative integer, or the structure around it
    /// was malformed.
    #[error("Cannot construct hierarchy code from value '{0}'")]
    MalformedSegment(String),
}

fn parse_level(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for HierarchyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }

        let body = s
            .strip_prefix(MARKER)
            .ok_or_else(|| Error::MalformedSegment(s.to_string()))?;

        // A single trailing dot is allowed
        let body = body.strip_suffix('.').unwrap_or(body);
        if body.is_empty() {
            return Err(Error::EmptyInput);
        }

        let levels = body
            .split('.')
            .map(|segment| {
                parse_level(segment).ok_or_else(|| Error::MalformedSegment(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }
}

impl TryFrom<&str> for HierarchyCode {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<Vec<u64>> for HierarchyCode {
    type Error = Error;

    fn try_from(levels: Vec<u64>) -> Result<Self, Self::Error> {
        NonEmpty::from_vec(levels)
            .map(Self::new)
            .ok_or(Error::EmptyInput)
    }
}

impl From<NonEmpty<u64>> for HierarchyCode {
    fn from(levels: NonEmpty<u64>) -> Self {
        Self::new(levels)
    }
}

impl Serialize for HierarchyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HierarchyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
