//! Announcement text formatter
//!
//! Pure mapping from a weather observation to the spoken sentence.
//! No I/O and no failure modes; everything arriving here has already
//! been validated by the domain types.

use chrono::NaiveTime;
use domain::WeatherObservation;

/// Format an observation into the announcement sentence
///
/// Fixed template; the five observed values appear exactly once, in
/// this order: temperature, humidity, wind speed, wind direction,
/// pressure. `local_time` stamps the "Reported at" clause and is
/// passed in so callers (and tests) control the clock.
#[must_use]
pub fn format_announcement(observation: &WeatherObservation, local_time: NaiveTime) -> String {
    format!(
        "Current weather conditions: {}. \
         Temperature {} degrees Celsius. \
         Humidity {} percent. \
         Wind {} kilometers per hour from {}. \
         Pressure {} millibars. \
         Reported at {} local time.",
        observation.conditions_phrase(),
        observation.temperature_c,
        observation.humidity,
        observation.wind_speed_kph,
        observation.wind_direction,
        observation.pressure_mb,
        local_time.format("%H:%M"),
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain::{Humidity, WindDirection};

    use super::*;

    fn observation(
        temperature_c: f64,
        humidity: u8,
        wind_speed_kph: f64,
        wind_degrees: u16,
        pressure_mb: f64,
    ) -> WeatherObservation {
        WeatherObservation {
            temperature_c,
            humidity: Humidity::clamped(humidity),
            wind_speed_kph,
            wind_direction: WindDirection::from_degrees(wind_degrees),
            pressure_mb,
            conditions: Some("Partly Cloudy".to_string()),
            observed_at: Utc::now(),
        }
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 30, 0).unwrap()
    }

    #[test]
    fn canonical_observation_renders_exactly() {
        // 315 degrees reads as NW
        let obs = observation(72.0, 45, 5.0, 315, 30.1);

        let text = format_announcement(&obs, noon());

        assert_eq!(
            text,
            "Current weather conditions: Partly Cloudy. \
             Temperature 72 degrees Celsius. \
             Humidity 45 percent. \
             Wind 5 kilometers per hour from NW. \
             Pressure 30.1 millibars. \
             Reported at 12:30 local time."
        );
    }

    #[test]
    fn whole_numbers_render_without_decimal_point() {
        let obs = observation(20.0, 50, 10.0, 0, 1013.0);
        let text = format_announcement(&obs, noon());

        assert!(text.contains("Temperature 20 degrees"));
        assert!(text.contains("Wind 10 kilometers"));
        assert!(text.contains("Pressure 1013 millibars"));
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        let obs = observation(22.4, 45, 5.5, 180, 1019.3);
        let text = format_announcement(&obs, noon());

        assert!(text.contains("Temperature 22.4 degrees"));
        assert!(text.contains("Wind 5.5 kilometers"));
        assert!(text.contains("Pressure 1019.3 millibars"));
    }

    #[test]
    fn missing_conditions_announce_unknown() {
        let obs = WeatherObservation {
            conditions: None,
            ..observation(10.0, 80, 3.0, 90, 1000.0)
        };
        let text = format_announcement(&obs, noon());

        assert!(text.starts_with("Current weather conditions: Unknown."));
    }

    #[test]
    fn negative_temperature_is_spoken_with_sign() {
        let obs = observation(-7.5, 90, 12.0, 45, 1021.0);
        let text = format_announcement(&obs, noon());

        assert!(text.contains("Temperature -7.5 degrees Celsius."));
    }

    #[test]
    fn time_is_rendered_as_hours_and_minutes() {
        let obs = observation(20.0, 50, 10.0, 0, 1013.0);
        let early = NaiveTime::from_hms_opt(6, 5, 59).unwrap();
        let text = format_announcement(&obs, early);

        assert!(text.ends_with("Reported at 06:05 local time."));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Each clause of the template carries its value, in
            /// template order.
            #[test]
            fn clauses_appear_in_template_order(
                temp in -60.0f64..60.0,
                humidity in 0u8..=100,
                wind in 0.0f64..200.0,
                degrees in 0u16..360,
                pressure in 850.0f64..1100.0,
            ) {
                let obs = observation(temp, humidity, wind, degrees, pressure);
                let text = format_announcement(&obs, noon());

                let clauses = [
                    format!("Temperature {temp} degrees Celsius."),
                    format!("Humidity {humidity} percent."),
                    format!("Wind {wind} kilometers per hour from {}.", obs.wind_direction),
                    format!("Pressure {pressure} millibars."),
                ];

                let mut cursor = 0;
                for clause in &clauses {
                    let found = text[cursor..]
                        .find(clause.as_str())
                        .map(|i| cursor + i);
                    prop_assert!(found.is_some(), "missing clause {clause:?} in {text:?}");
                    // Order check: each clause starts after the previous one
                    cursor = found.unwrap_or(0) + clause.len();
                }

                // Each clause is unique in the full text
                for clause in &clauses {
                    prop_assert_eq!(text.matches(clause.as_str()).count(), 1);
                }
            }
        }
    }
}
