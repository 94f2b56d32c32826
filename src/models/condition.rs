//! Sky condition derived from WMO weather codes

use serde::{Deserialize, Serialize};

/// Sky condition reported by the forecast model
///
/// See: <https://open-meteo.com/en/docs> for the WMO code reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Clear sky (WMO 0)
    Clear,
    /// Mainly clear to overcast (WMO 1, 2, 3)
    Cloudy,
    /// Fog and depositing rime fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Snow fall (WMO 71, 73, 75)
    Snow,
    /// Thunderstorm, with or without hail (WMO 95, 96, 99)
    Thunderstorm,
    /// Any code outside the mapped groups
    Unknown,
}

impl Condition {
    /// Convert a WMO weather code to a `Condition`
    ///
    /// Total over the whole code domain; unmapped codes fall back to
    /// [`Condition::Unknown`].
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 | 3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            71 | 73 | 75 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Display glyph for the condition
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Cloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌧️",
            Self::Rain => "☔",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⚡",
            Self::Unknown => "🌡️",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // The fallback renders as its glyph alone
            Self::Unknown => write!(f, "{}", self.glyph()),
            _ => write!(f, "{} {}", self.glyph(), self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Condition::Clear)]
    #[case(1, Condition::Cloudy)]
    #[case(2, Condition::Cloudy)]
    #[case(3, Condition::Cloudy)]
    #[case(45, Condition::Fog)]
    #[case(48, Condition::Fog)]
    #[case(51, Condition::Drizzle)]
    #[case(53, Condition::Drizzle)]
    #[case(55, Condition::Drizzle)]
    #[case(61, Condition::Rain)]
    #[case(63, Condition::Rain)]
    #[case(65, Condition::Rain)]
    #[case(71, Condition::Snow)]
    #[case(73, Condition::Snow)]
    #[case(75, Condition::Snow)]
    #[case(95, Condition::Thunderstorm)]
    #[case(96, Condition::Thunderstorm)]
    #[case(99, Condition::Thunderstorm)]
    fn test_mapped_codes(#[case] code: u8, #[case] expected: Condition) {
        assert_eq!(Condition::from_wmo_code(code), expected);
    }

    #[rstest]
    #[case(4)]
    #[case(44)]
    #[case(56)]
    #[case(66)]
    #[case(77)]
    #[case(80)]
    #[case(85)]
    #[case(94)]
    #[case(100)]
    #[case(255)]
    fn test_unmapped_codes_fall_back(#[case] code: u8) {
        assert_eq!(Condition::from_wmo_code(code), Condition::Unknown);
    }

    #[test]
    fn test_mapping_total_over_domain() {
        // Every possible code must map to something; the fallback arm
        // guarantees this, but exercise the whole domain anyway.
        for code in u8::MIN..=u8::MAX {
            let _ = Condition::from_wmo_code(code);
        }
    }

    #[test]
    fn test_display_includes_glyph_and_label() {
        assert_eq!(Condition::Clear.to_string(), "☀️ Clear");
        assert_eq!(Condition::Rain.to_string(), "☔ Rain");
        assert_eq!(Condition::Unknown.to_string(), "🌡️");
    }
}
