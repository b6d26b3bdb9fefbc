//! Domain identifier newtypes.
//!
//! Strong types over raw strings keep origin names and filter prefixes from
//! being mixed up at call sites, and put validation at construction
//! boundaries instead of deep inside generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Validated workbook origin name.
///
/// The origin name identifies one generation run, usually the spreadsheet
/// file stem. It appears in the generated banner and, with its first
/// character upper-cased, names the aggregating container type. Construction
/// rejects input that is empty after trimming.
///
/// # Examples
///
/// ```
/// use sheetdef_core::OriginName;
///
/// let origin = OriginName::new("items")?;
/// assert_eq!(origin.as_str(), "items");
/// assert_eq!(origin.container_name(), "Items");
///
/// assert!(OriginName::new("").is_err());
/// assert!(OriginName::new("   ").is_err());
/// # Ok::<(), sheetdef_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OriginName(String);

impl OriginName {
    /// Creates a validated origin name. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the name is empty after
    /// trimming.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::ValidationError {
                field: "origin name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the origin name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the newtype and returns the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Derives the container type name: the origin name with only its first
    /// character upper-cased, remaining characters untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetdef_core::OriginName;
    ///
    /// assert_eq!(OriginName::new("items")?.container_name(), "Items");
    /// assert_eq!(OriginName::new("gameData")?.container_name(), "GameData");
    /// assert_eq!(OriginName::new("X")?.container_name(), "X");
    /// # Ok::<(), sheetdef_core::Error>(())
    /// ```
    #[must_use]
    pub fn container_name(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for OriginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OriginName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for OriginName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

/// Name-prefix exclusion filter.
///
/// One prefix governs both filtering levels: a sheet whose name starts with
/// it is dropped entirely (no class block, no container member), and a
/// column whose name starts with it is dropped from its sheet's field list.
/// An empty prefix disables filtering.
///
/// # Examples
///
/// ```
/// use sheetdef_core::ExcludePrefix;
///
/// let prefix = ExcludePrefix::new("tmp_");
/// assert!(prefix.excludes("tmp_scratch"));
/// assert!(!prefix.excludes("Item"));
///
/// let disabled = ExcludePrefix::disabled();
/// assert!(disabled.is_disabled());
/// assert!(!disabled.excludes("tmp_scratch"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcludePrefix(String);

impl ExcludePrefix {
    /// Creates a prefix filter. An empty string disables filtering.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Creates a disabled filter (empty prefix).
    #[must_use]
    pub const fn disabled() -> Self {
        Self(String::new())
    }

    /// Returns `true` if filtering is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if filtering is enabled and `name` starts with the
    /// prefix.
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        !self.0.is_empty() && name.starts_with(&self.0)
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExcludePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExcludePrefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ExcludePrefix {
    fn from(s: String) -> Self {
        Self(s)
    }
}
