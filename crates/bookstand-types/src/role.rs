use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Account role.
///
/// Authors publish books; readers browse, favorite, and review them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Author,
    Reader,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Author => write!(f, "Author"),
            Self::Reader => write!(f, "Reader"),
        }
    }
}

impl FromStr for Role {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Author" => Ok(Self::Author),
            "Reader" => Ok(Self::Reader),
            other => Err(TypeError::InvalidRole(other.to_string())),
        }
    }
}
