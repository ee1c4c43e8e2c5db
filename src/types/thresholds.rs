//! Air-quality bands and vital-sign limits

use serde::{Deserialize, Serialize};

/// PM2.5 concentration band boundaries (µg/m³).
///
/// Bands follow the EPA AQI breakpoints the dashboard displays. Each bound
/// is the inclusive upper edge of its band; everything above
/// `VERY_UNHEALTHY_MAX` is hazardous.
pub mod pm25_bands {
    /// Good air quality upper bound (µg/m³)
    pub const GOOD_MAX: f64 = 12.0;
    /// Moderate air quality upper bound (µg/m³)
    pub const MODERATE_MAX: f64 = 35.0;
    /// Unhealthy-for-sensitive-groups upper bound (µg/m³)
    pub const SENSITIVE_MAX: f64 = 55.0;
    /// Unhealthy upper bound (µg/m³)
    pub const UNHEALTHY_MAX: f64 = 150.0;
    /// Very unhealthy upper bound (µg/m³); above this is hazardous
    pub const VERY_UNHEALTHY_MAX: f64 = 250.0;
}

/// Vital-sign classification limits.
pub mod vitals {
    /// Resting heart rate below this is low (BPM)
    pub const HEART_RATE_LOW: f64 = 60.0;
    /// Resting heart rate above this is elevated (BPM)
    pub const HEART_RATE_HIGH: f64 = 100.0;
    /// Blood oxygen saturation below this is low (%)
    pub const SPO2_LOW: f64 = 95.0;
}

/// Severity band for a PM2.5 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityBand {
    /// Classify a PM2.5 concentration into its band.
    ///
    /// Boundaries are inclusive on the upper end; every non-negative value
    /// maps to exactly one band.
    pub fn classify(pm25: f64) -> Self {
        if pm25 <= pm25_bands::GOOD_MAX {
            Self::Good
        } else if pm25 <= pm25_bands::MODERATE_MAX {
            Self::Moderate
        } else if pm25 <= pm25_bands::SENSITIVE_MAX {
            Self::UnhealthySensitive
        } else if pm25 <= pm25_bands::UNHEALTHY_MAX {
            Self::Unhealthy
        } else if pm25 <= pm25_bands::VERY_UNHEALTHY_MAX {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }
}

impl std::fmt::Display for AirQualityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Moderate => write!(f, "moderate"),
            Self::UnhealthySensitive => write!(f, "unhealthy for sensitive groups"),
            Self::Unhealthy => write!(f, "unhealthy"),
            Self::VeryUnhealthy => write!(f, "very unhealthy"),
            Self::Hazardous => write!(f, "hazardous"),
        }
    }
}
