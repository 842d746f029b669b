//! Group join codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Join code length in characters.
pub const JOIN_CODE_LEN: usize = 6;

/// Join code alphabet: uppercase ASCII letters followed by digits.
pub const JOIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidJoinCode {
    #[error("join code must be {JOIN_CODE_LEN} characters, got {0}")]
    Length(usize),
    #[error("join code contains invalid character {0:?}")]
    Character(char),
}

/// Short public identifier other users type in to find a group.
///
/// Always exactly [`JOIN_CODE_LEN`] characters from [`JOIN_CODE_ALPHABET`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JoinCode(String);

impl JoinCode {
    pub fn parse(s: &str) -> Result<Self, InvalidJoinCode> {
        let len = s.chars().count();
        if len != JOIN_CODE_LEN {
            return Err(InvalidJoinCode::Length(len));
        }
        if let Some(c) = s
            .chars()
            .find(|c| !c.is_ascii() || !JOIN_CODE_ALPHABET.contains(&(*c as u8)))
        {
            return Err(InvalidJoinCode::Character(c));
        }
        Ok(Self(s.to_owned()))
    }

    /// Build a code from alphabet indices. Indices wrap modulo the alphabet size.
    pub fn from_indices(indices: [usize; JOIN_CODE_LEN]) -> Self {
        Self(
            indices
                .iter()
                .map(|&i| JOIN_CODE_ALPHABET[i % JOIN_CODE_ALPHABET.len()] as char)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JoinCode {
    type Err = InvalidJoinCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for JoinCode {
    type Error = InvalidJoinCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<JoinCode> for String {
    fn from(code: JoinCode) -> Self {
        code.0
    }
}
