//! Beach day evaluation: UV classification, star scoring, and formatting
//!
//! Everything in this module is a pure function over a single
//! [`WeatherObservation`]; nothing here performs I/O.

use crate::models::WeatherObservation;

/// Maximum number of stars a day can earn
pub const MAX_SCORE: u8 = 5;

/// Classify a UV index into a danger label, prefixed with the numeric value
///
/// Bands are inclusive on both ends; fractional values falling between two
/// bands (e.g. 2.5) land in the extreme bucket.
pub fn uv_warning(uv_index: f64) -> String {
    if uv_index <= 2.0 {
        format!("{uv_index} - Low Danger, No Protection Required")
    } else if (3.0..=5.0).contains(&uv_index) {
        format!("{uv_index} - Medium Danger, Some Protection Required")
    } else if (6.0..=7.0).contains(&uv_index) {
        format!("{uv_index} - High Danger, Some Protection Required")
    } else if (8.0..=10.0).contains(&uv_index) {
        format!("{uv_index} - Very High Danger, Extra Protection Required")
    } else {
        format!("{uv_index} - Extreme Danger, Be Well Protected!")
    }
}

/// Score an observation: one point per satisfied comfort/safety criterion
///
/// All five checks are evaluated unconditionally and independently.
pub fn beach_day_score(obs: &WeatherObservation) -> u8 {
    let criteria = [
        (75.0..=90.0).contains(&obs.temperature),
        (obs.temperature - obs.feels_like).abs() <= 5.0,
        (0.0..=10.0).contains(&obs.wind_speed),
        (20.0..=60.0).contains(&obs.humidity),
        obs.precipitation_probability < 20.0,
    ];

    criteria.iter().filter(|&&passed| passed).count() as u8
}

/// Render a score as that many star glyphs
pub fn stars(score: u8) -> String {
    "⭐".repeat(score as usize)
}

/// Verdict line for a scored day; `day` is "today" or "tomorrow"
pub fn verdict(score: u8, day: &str) -> String {
    if score >= MAX_SCORE {
        format!("Yay beach day {day}!")
    } else if score == MAX_SCORE - 1 {
        format!("Maybe beach day {day}.")
    } else {
        format!("No beach day {day}...")
    }
}

/// Format an observation as the fixed six-line weather summary
pub fn format_observation(obs: &WeatherObservation) -> String {
    format!(
        "Sky forecast: {}\n\
         Temperature: {} Fº\n\
         Feels Like: {} Fº\n\
         Humidity: {}%\n\
         Wind Speed: {} MPH\n\
         Precipitation Probability: {}%\n",
        obs.description,
        obs.temperature,
        obs.feels_like,
        obs.humidity,
        obs.wind_speed,
        obs.precipitation_probability,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn perfect_day() -> WeatherObservation {
        WeatherObservation {
            description: "clear sky".to_string(),
            temperature: 82.0,
            feels_like: 84.0,
            humidity: 40.0,
            wind_speed: 5.0,
            uv_index: 4.0,
            precipitation_probability: 10.0,
        }
    }

    #[rstest]
    #[case(0.0, "0 - Low Danger, No Protection Required")]
    #[case(2.0, "2 - Low Danger, No Protection Required")]
    #[case(3.0, "3 - Medium Danger, Some Protection Required")]
    #[case(5.0, "5 - Medium Danger, Some Protection Required")]
    #[case(6.0, "6 - High Danger, Some Protection Required")]
    #[case(7.0, "7 - High Danger, Some Protection Required")]
    #[case(8.0, "8 - Very High Danger, Extra Protection Required")]
    #[case(10.0, "10 - Very High Danger, Extra Protection Required")]
    #[case(11.0, "11 - Extreme Danger, Be Well Protected!")]
    fn uv_band_boundaries(#[case] uv: f64, #[case] expected: &str) {
        assert_eq!(uv_warning(uv), expected);
    }

    #[test]
    fn uv_warning_keeps_fractional_values() {
        assert_eq!(
            uv_warning(9.5),
            "9.5 - Very High Danger, Extra Protection Required"
        );
    }

    #[test]
    fn score_all_criteria_pass() {
        assert_eq!(beach_day_score(&perfect_day()), 5);
    }

    // Each case toggles exactly one criterion off
    #[rstest]
    #[case::temperature_too_cold(70.0, 72.0, 5.0, 40.0, 10.0)]
    #[case::feels_like_gap(82.0, 90.0, 5.0, 40.0, 10.0)]
    #[case::too_windy(82.0, 84.0, 15.0, 40.0, 10.0)]
    #[case::too_humid(82.0, 84.0, 5.0, 80.0, 10.0)]
    #[case::too_rainy(82.0, 84.0, 5.0, 40.0, 50.0)]
    fn score_single_criterion_failures(
        #[case] temperature: f64,
        #[case] feels_like: f64,
        #[case] wind_speed: f64,
        #[case] humidity: f64,
        #[case] precipitation_probability: f64,
    ) {
        let obs = WeatherObservation {
            description: "clear sky".to_string(),
            temperature,
            feels_like,
            humidity,
            wind_speed,
            uv_index: 4.0,
            precipitation_probability,
        };
        assert_eq!(beach_day_score(&obs), 4);
    }

    #[test]
    fn score_counts_independent_criteria() {
        // Temperature in range but feels-like far off, wind too strong,
        // humidity too low, precipitation certain: only one point left.
        let obs = WeatherObservation {
            description: "thunderstorm".to_string(),
            temperature: 80.0,
            feels_like: 95.0,
            humidity: 10.0,
            wind_speed: 25.0,
            uv_index: 8.0,
            precipitation_probability: 100.0,
        };
        assert_eq!(beach_day_score(&obs), 1);
    }

    #[test]
    fn score_boundaries_are_inclusive() {
        let mut obs = perfect_day();
        obs.temperature = 75.0;
        obs.feels_like = 80.0;
        obs.wind_speed = 10.0;
        obs.humidity = 20.0;
        assert_eq!(beach_day_score(&obs), 5);

        obs.temperature = 90.0;
        obs.feels_like = 85.0;
        obs.wind_speed = 0.0;
        obs.humidity = 60.0;
        assert_eq!(beach_day_score(&obs), 5);
    }

    #[test]
    fn score_precipitation_boundary_is_exclusive() {
        let mut obs = perfect_day();
        obs.precipitation_probability = 20.0;
        assert_eq!(beach_day_score(&obs), 4);

        obs.precipitation_probability = 19.9;
        assert_eq!(beach_day_score(&obs), 5);
    }

    #[test]
    fn stars_repeat_glyph() {
        assert_eq!(stars(0), "");
        assert_eq!(stars(3), "⭐⭐⭐");
        assert_eq!(stars(5), "⭐⭐⭐⭐⭐");
    }

    #[rstest]
    #[case(5, "Yay beach day today!")]
    #[case(4, "Maybe beach day today.")]
    #[case(3, "No beach day today...")]
    #[case(0, "No beach day today...")]
    fn verdict_thresholds(#[case] score: u8, #[case] expected: &str) {
        assert_eq!(verdict(score, "today"), expected);
    }

    #[test]
    fn format_has_six_lines_with_units() {
        let summary = format_observation(&perfect_day());
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Sky forecast: clear sky");
        assert!(lines[1].starts_with("Temperature: ") && lines[1].ends_with(" Fº"));
        assert!(lines[2].starts_with("Feels Like: ") && lines[2].ends_with(" Fº"));
        assert!(lines[3].starts_with("Humidity: ") && lines[3].ends_with('%'));
        assert!(lines[4].starts_with("Wind Speed: ") && lines[4].ends_with(" MPH"));
        assert!(lines[5].starts_with("Precipitation Probability: ") && lines[5].ends_with('%'));
    }

    #[test]
    fn format_is_byte_stable() {
        let obs = perfect_day();
        assert_eq!(format_observation(&obs), format_observation(&obs));
    }
}
