//! Country database codes.
//!
//! Every SEOZoom request targets one country-specific search index, selected
//! by the `db` query parameter. Only a fixed set of codes is accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated SEOZoom country database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// Italy.
    #[default]
    It,
    /// Spain.
    Es,
    /// France.
    Fr,
    /// Germany.
    De,
    /// United Kingdom.
    Uk,
}

impl Database {
    /// All databases, sorted by code.
    pub const ALL: [Database; 5] = [Database::De, Database::Es, Database::Fr, Database::It, Database::Uk];

    /// The wire code sent as `db`.
    pub fn as_str(self) -> &'static str {
        match self {
            Database::It => "it",
            Database::Es => "es",
            Database::Fr => "fr",
            Database::De => "de",
            Database::Uk => "uk",
        }
    }

    /// Resolve an optional caller-supplied code against a default.
    ///
    /// An absent code yields `default`; a present one must be an exact,
    /// case-sensitive match of a known code.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the rejected value and listing the
    /// valid codes.
    pub fn resolve(requested: Option<&str>, default: Database) -> Result<Database, Error> {
        match requested {
            Some(code) => code.parse(),
            None => Ok(default),
        }
    }

    fn valid_codes() -> String {
        Self::ALL.iter().map(|db| db.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|db| db.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("invalid database '{s}'. Valid values: {}", Self::valid_codes())))
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
