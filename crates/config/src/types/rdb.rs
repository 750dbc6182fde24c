//! Supported relational database kinds.
//!
//! Responsibilities:
//! - Define the closed set of database kinds the backend can connect to.
//! - Map each kind to its connection scheme and its human-readable name.
//! - Parse a configured scheme string into a typed kind.
//!
//! Does NOT handle:
//! - Building connection strings (see `Settings::db_uri`).
//! - Opening database connections.
//!
//! Invariants:
//! - Parsing matches the scheme string exactly (case-sensitive, no trimming).
//! - `Display` prints the scheme, not the human-readable name.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A relational database kind, keyed by its connection scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdbName {
    /// MySQL through the PyMySQL-compatible driver scheme.
    MySql,
}

impl RdbName {
    /// All supported kinds.
    pub const ALL: &'static [RdbName] = &[RdbName::MySql];

    /// Connection scheme used in database URIs.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::MySql => "mysql+pymysql",
        }
    }

    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
        }
    }
}

impl fmt::Display for RdbName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Returned when a configured database kind matches no supported scheme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a supported database type (expected one of: {})", supported_schemes())]
pub struct ParseRdbNameError {
    pub value: String,
}

fn supported_schemes() -> String {
    RdbName::ALL
        .iter()
        .map(|kind| kind.scheme())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for RdbName {
    type Err = ParseRdbNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RdbName::ALL
            .iter()
            .copied()
            .find(|kind| kind.scheme() == s)
            .ok_or_else(|| ParseRdbNameError {
                value: s.to_string(),
            })
    }
}
