//! Catalog sort modes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown sort mode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort mode '{0}' (expected none, ascending or descending)")]
pub struct InvalidSortMode(pub String);

/// Order in which the catalog is displayed.
///
/// Only affects the display copy of the catalog, never the catalog itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    None,
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortMode {
    /// Every mode, in the order the sort selector lists them.
    pub const ALL: [Self; 3] = [Self::None, Self::Ascending, Self::Descending];

    /// The form value for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Human-readable label for the sort selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::Ascending => "Price: Low to High",
            Self::Descending => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = InvalidSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            _ => Err(InvalidSortMode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("none".parse::<SortMode>().unwrap(), SortMode::None);
        assert_eq!("ascending".parse::<SortMode>().unwrap(), SortMode::Ascending);
        assert_eq!(
            "descending".parse::<SortMode>().unwrap(),
            SortMode::Descending
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Ascending ".parse::<SortMode>().unwrap(), SortMode::Ascending);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "cheapest".parse::<SortMode>().unwrap_err();
        assert_eq!(err, InvalidSortMode("cheapest".to_string()));
        assert!(err.to_string().contains("cheapest"));
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SortMode::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
    }
}
