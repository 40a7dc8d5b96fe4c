use std::fmt::Display;
use std::str::FromStr;

/// A menu build version: a short hexadecimal tag supplied by the operator,
/// eg. `0x1001`.
///
/// The value is stored normalized (lowercase, no `0x` prefix) and displayed
/// bare; [BuildVersion::to_prefixed] restores the conventional prefix used
/// in directory and file names.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuildVersion(String);

impl BuildVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the version with the leading `0x` marker, eg. `0x1001`.
    pub fn to_prefixed(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl Display for BuildVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BuildVersion {
    type Err = BuildVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or(s.strip_prefix("0X")).unwrap_or(s);
        if digits.is_empty() == true {
            return Err(BuildVersionError::Empty);
        }
        if let Some(c) = digits.chars().find(|c| c.is_ascii_hexdigit() == false) {
            return Err(BuildVersionError::InvalidChar(c));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BuildVersionError {
    #[error("empty build version")]
    Empty,
    #[error("invalid hexadecimal character '{0}' in build version")]
    InvalidChar(char),
}
