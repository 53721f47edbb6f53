use std::fmt;

// ---------------------------------------------------------------------------
// Air-quality verdict against the WHO 2021 guideline
// ---------------------------------------------------------------------------

/// WHO 2021 24-hour NO₂ guideline value (µg/m³).
pub const WHO_GUIDELINE_UG_M3: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQuality {
    Good,
    Bad,
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirQuality::Good => write!(f, "Good"),
            AirQuality::Bad => write!(f, "Bad"),
        }
    }
}

/// A classified concentration with its human-readable explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub quality: AirQuality,
    pub description: String,
}

/// Classify a standardized concentration (µg/m³). Total function: every
/// finite input gets a verdict, the guideline value itself counts as Good.
pub fn classify(ug_per_m3: f64) -> Verdict {
    if ug_per_m3 <= WHO_GUIDELINE_UG_M3 {
        Verdict {
            quality: AirQuality::Good,
            description: "Air quality is safe per WHO guideline (≤25 µg/m³).".to_string(),
        }
    } else {
        Verdict {
            quality: AirQuality::Bad,
            description: "Air quality exceeds the WHO safe limit (>25 µg/m³).".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guideline_boundary() {
        assert_eq!(classify(25.0).quality, AirQuality::Good);
        assert_eq!(classify(25.000_000_1).quality, AirQuality::Bad);
        assert_eq!(classify(0.0).quality, AirQuality::Good);
    }

    #[test]
    fn descriptions_name_the_limit() {
        assert!(classify(10.0).description.contains("≤25"));
        assert!(classify(40.0).description.contains(">25"));
    }
}
