use std::fmt::Display;
use std::str::FromStr;

use crate::util::anyerror::AnyError;

/// Board family shared by all supported targets.
pub const BOARD_FAMILY: &str = "mp7";

/// Firmware flavor produced by this tool.
pub const FIRMWARE_TYPE: &str = "ugt";

/// The supported MP7 board variants.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BoardType {
    Mp7_690es,
    Mp7xe690,
}

impl BoardType {
    /// Short alias recorded in the build manifest's device section.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Mp7_690es => "r1",
            Self::Mp7xe690 => "xe",
        }
    }

    pub fn choices() -> [&'static str; 2] {
        ["mp7_690es", "mp7xe_690"]
    }
}

impl Default for BoardType {
    fn default() -> Self {
        Self::Mp7xe690
    }
}

impl Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mp7_690es => write!(f, "mp7_690es"),
            Self::Mp7xe690 => write!(f, "mp7xe_690"),
        }
    }
}

impl FromStr for BoardType {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp7_690es" => Ok(Self::Mp7_690es),
            "mp7xe_690" => Ok(Self::Mp7xe690),
            _ => Err(AnyError(format!(
                "unknown board type '{}' (expects one of: {})",
                s,
                Self::choices().join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(BoardType::Mp7_690es.alias(), "r1");
        assert_eq!(BoardType::Mp7xe690.alias(), "xe");
    }

    #[test]
    fn from_str_round_trip() {
        for name in BoardType::choices() {
            let board = BoardType::from_str(name).unwrap();
            assert_eq!(board.to_string(), name);
        }
        assert!(BoardType::from_str("mp7xe_960").is_err());
    }

    #[test]
    fn default_board() {
        assert_eq!(BoardType::default(), BoardType::Mp7xe690);
    }
}
