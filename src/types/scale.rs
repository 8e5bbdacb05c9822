//! Rendering scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A rendering resolution multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "1x")]
    X1,
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
    #[serde(rename = "4x")]
    X4,
    #[serde(rename = "6x")]
    X6,
}

impl Scale {
    /// Every scale, lowest first.
    pub const ALL: [Scale; 5] = [Scale::X1, Scale::X2, Scale::X3, Scale::X4, Scale::X6];

    /// The scale slices are measured at.
    pub const REFERENCE: Scale = Scale::X6;

    /// Integer multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X3 => 3,
            Scale::X4 => 4,
            Scale::X6 => 6,
        }
    }

    /// File name component, e.g. `6_0`.
    pub fn name_component(self) -> &'static str {
        match self {
            Scale::X1 => "1_0",
            Scale::X2 => "2_0",
            Scale::X3 => "3_0",
            Scale::X4 => "4_0",
            Scale::X6 => "6_0",
        }
    }

    pub fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }

    /// Look up a scale by its file name component.
    pub fn from_name_component(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.name_component() == s)
    }

    /// The default global scale list.
    pub fn defaults() -> Vec<Scale> {
        Self::ALL.to_vec()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

impl FromStr for Scale {
    type Err = String;

    /// Parse `6x`, `6` or `6_0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Some(scale) = Self::from_name_component(&s) {
            return Ok(scale);
        }
        let digits = s.strip_suffix('x').unwrap_or(&s);
        Self::ALL
            .into_iter()
            .find(|scale| scale.factor().to_string() == digits)
            .ok_or_else(|| format!("Unknown scale '{}' (expected one of 1x, 2x, 3x, 4x, 6x)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_six() {
        assert_eq!(Scale::REFERENCE.factor(), 6);
        assert!(Scale::X6.is_reference());
        assert!(!Scale::X4.is_reference());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("6x".parse::<Scale>().unwrap(), Scale::X6);
        assert_eq!("2".parse::<Scale>().unwrap(), Scale::X2);
        assert_eq!("3_0".parse::<Scale>().unwrap(), Scale::X3);
        assert_eq!(" 4X ".parse::<Scale>().unwrap(), Scale::X4);
        assert!("5x".parse::<Scale>().is_err());
    }

    #[test]
    fn test_name_component_roundtrip() {
        for scale in Scale::ALL {
            assert_eq!(Scale::from_name_component(scale.name_component()), Some(scale));
        }
    }

    #[test]
    fn test_serde_names() {
        let scales: Vec<Scale> = serde_yaml::from_str("[1x, 6x]").unwrap();
        assert_eq!(scales, vec![Scale::X1, Scale::X6]);
    }
}
