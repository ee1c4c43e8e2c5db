//! Keyword-triggered local responders
//!
//! Each rule maps a trigger phrase to a response computed at evaluation
//! time from the latest sensor reading. Rules are evaluated in a fixed
//! order with first-trigger-contained-wins semantics; a missing reading
//! yields the rule's explicit no-data message, never a guess.

use crate::types::{
    thresholds::{vitals, AirQualityBand},
    Reading,
};

/// A keyword-triggered responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordRule {
    /// Severity-banded guidance keyed by PM2.5 concentration
    AirQuality,
    /// Heart-rate and blood-oxygen guidance, one sentence per axis
    Health,
    /// Formatted readout of the latest reading
    SensorReadout,
}

/// Trigger phrases in evaluation order.
const TRIGGERS: &[(&str, KeywordRule)] = &[
    ("air quality advice", KeywordRule::AirQuality),
    ("health advice", KeywordRule::Health),
    ("sensor data", KeywordRule::SensorReadout),
];

impl KeywordRule {
    /// First rule whose trigger phrase is contained in the lower-cased input.
    pub fn match_input(lowered: &str) -> Option<Self> {
        TRIGGERS
            .iter()
            .find(|(trigger, _)| lowered.contains(trigger))
            .map(|&(_, rule)| rule)
    }

    /// Compute this rule's response from the latest reading.
    pub fn respond(self, reading: Option<&Reading>) -> String {
        match self {
            KeywordRule::AirQuality => air_quality_advice(reading),
            KeywordRule::Health => health_advice(reading),
            KeywordRule::SensorReadout => sensor_readout(reading),
        }
    }
}

// ============================================================================
// Responders
// ============================================================================

fn air_quality_advice(reading: Option<&Reading>) -> String {
    let Some(reading) = reading else {
        return "No air quality data available.".to_string();
    };

    let pm25 = reading.pm25;
    match AirQualityBand::classify(pm25) {
        AirQualityBand::Good => format!(
            "The air quality is good (PM2.5: {pm25:.2} µg/m³). It's a great time for outdoor activities!"
        ),
        AirQualityBand::Moderate => format!(
            "The air quality is moderate (PM2.5: {pm25:.2} µg/m³). Sensitive individuals should consider reducing prolonged outdoor exertion."
        ),
        AirQualityBand::UnhealthySensitive => format!(
            "The air quality is unhealthy for sensitive groups (PM2.5: {pm25:.2} µg/m³). Consider staying indoors and running your air purifier."
        ),
        AirQualityBand::Unhealthy => format!(
            "The air quality is unhealthy (PM2.5: {pm25:.2} µg/m³). Avoid prolonged outdoor activities and use your air purifier indoors."
        ),
        AirQualityBand::VeryUnhealthy => format!(
            "The air quality is very unhealthy (PM2.5: {pm25:.2} µg/m³). Stay indoors, close windows, and run your air purifier on high."
        ),
        AirQualityBand::Hazardous => format!(
            "The air quality is hazardous (PM2.5: {pm25:.2} µg/m³). Avoid all outdoor activities and stay indoors with air purifiers running."
        ),
    }
}

fn health_advice(reading: Option<&Reading>) -> String {
    let Some(reading) = reading else {
        return "No health data available.".to_string();
    };

    let mut advice = String::from("Based on your current readings:\n");

    // Heart rate and SpO2 are assessed independently, heart rate first.
    if reading.heart_rate < vitals::HEART_RATE_LOW {
        advice.push_str(
            "Your heart rate is low. This could be normal if you're very fit or resting, \
             but consult a doctor if you feel unwell.\n",
        );
    } else if reading.heart_rate > vitals::HEART_RATE_HIGH {
        advice.push_str(
            "Your heart rate is elevated. This could be due to exercise, stress, or other \
             factors. If it persists at rest, consider consulting a doctor.\n",
        );
    } else {
        advice.push_str("Your heart rate is within a normal range.\n");
    }

    if reading.spo2 < vitals::SPO2_LOW {
        advice.push_str(
            "Your blood oxygen level is lower than normal. If this persists or you feel \
             short of breath, please consult a healthcare professional.\n",
        );
    } else {
        advice.push_str("Your blood oxygen level is within a normal range.\n");
    }

    advice
}

fn sensor_readout(reading: Option<&Reading>) -> String {
    let Some(reading) = reading else {
        return "No sensor data available.".to_string();
    };

    format!(
        "PM2.5: {:.2} µg/m³\nHumidity: {:.1}%\nTemperature: {:.1}°C\nHeart Rate: {:.0} BPM\nSpO2: {:.1}%",
        reading.pm25, reading.humidity, reading.temperature, reading.heart_rate, reading.spo2
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(pm25: f64, heart_rate: f64, spo2: f64) -> Reading {
        Reading {
            pm25,
            humidity: 48.2,
            temperature: 22.5,
            heart_rate,
            spo2,
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn test_trigger_matching_order() {
        assert_eq!(
            KeywordRule::match_input("give me some air quality advice please"),
            Some(KeywordRule::AirQuality)
        );
        assert_eq!(
            KeywordRule::match_input("health advice"),
            Some(KeywordRule::Health)
        );
        assert_eq!(
            KeywordRule::match_input("show sensor data now"),
            Some(KeywordRule::SensorReadout)
        );
        assert_eq!(KeywordRule::match_input("what's for dinner"), None);

        // Two triggers present: the earlier rule in the table wins.
        assert_eq!(
            KeywordRule::match_input("sensor data and air quality advice"),
            Some(KeywordRule::AirQuality)
        );
    }

    #[test]
    fn test_every_rule_has_no_data_text() {
        assert_eq!(
            KeywordRule::AirQuality.respond(None),
            "No air quality data available."
        );
        assert_eq!(
            KeywordRule::Health.respond(None),
            "No health data available."
        );
        assert_eq!(
            KeywordRule::SensorReadout.respond(None),
            "No sensor data available."
        );
    }

    #[test]
    fn test_air_quality_band_texts() {
        let cases = [
            (8.0, "good"),
            (20.0, "moderate"),
            (45.0, "unhealthy for sensitive groups"),
            (100.0, "unhealthy"),
            (200.0, "very unhealthy"),
            (300.0, "hazardous"),
        ];
        for (pm25, expected) in cases {
            let r = reading(pm25, 72.0, 97.0);
            let advice = KeywordRule::AirQuality.respond(Some(&r));
            assert!(
                advice.contains(&format!("The air quality is {expected}")),
                "pm25 {pm25} should be {expected}, got: {advice}"
            );
        }
    }

    #[test]
    fn test_air_quality_advice_embeds_concentration() {
        let r = reading(14.257, 72.0, 97.0);
        let advice = KeywordRule::AirQuality.respond(Some(&r));
        assert!(advice.contains("PM2.5: 14.26 µg/m³"));
    }

    #[test]
    fn test_health_advice_axes_are_independent() {
        // Elevated heart rate + normal oxygen
        let r = reading(10.0, 105.0, 97.0);
        let advice = KeywordRule::Health.respond(Some(&r));
        assert!(advice.contains("Your heart rate is elevated."));
        assert!(advice.contains("Your blood oxygen level is within a normal range."));

        let hr_pos = advice.find("heart rate").expect("heart rate sentence");
        let ox_pos = advice.find("blood oxygen").expect("oxygen sentence");
        assert!(hr_pos < ox_pos, "heart rate sentence comes first");

        // Low heart rate + low oxygen
        let r = reading(10.0, 52.0, 91.5);
        let advice = KeywordRule::Health.respond(Some(&r));
        assert!(advice.contains("Your heart rate is low."));
        assert!(advice.contains("Your blood oxygen level is lower than normal."));

        // Both normal, boundary values: 60 and 100 BPM are in range, 95% is normal
        for hr in [60.0, 100.0] {
            let r = reading(10.0, hr, 95.0);
            let advice = KeywordRule::Health.respond(Some(&r));
            assert!(advice.contains("Your heart rate is within a normal range."));
            assert!(advice.contains("Your blood oxygen level is within a normal range."));
        }
    }

    #[test]
    fn test_sensor_readout_precision() {
        let r = Reading {
            pm25: 14.257,
            humidity: 48.26,
            temperature: 22.53,
            heart_rate: 72.4,
            spo2: 97.56,
            captured_at: Utc::now(),
        };
        let readout = KeywordRule::SensorReadout.respond(Some(&r));
        assert_eq!(
            readout,
            "PM2.5: 14.26 µg/m³\nHumidity: 48.3%\nTemperature: 22.5°C\nHeart Rate: 72 BPM\nSpO2: 97.6%"
        );
    }
}
