//! Weather observation and clock payloads.
//!
//! The current conditions come from an OpenWeatherMap `weather` response
//! (metric units); the local time from worldtimeapi's plain-text endpoint.
//! Fetching them is up to the caller, this module only parses the bodies.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// OpenWeatherMap response schema (only the fields the forecast reads)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct OwmResponse {
    #[serde(default)]
    wind: OwmWind,
    #[serde(default)]
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Default, Deserialize)]
struct OwmWind {
    deg: Option<f64>,
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwmMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    id: u32,
}

/// Current conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Wind bearing in degrees, 0 = north.
    pub wind_deg: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Air temperature in °C.
    pub temperature: f64,
    /// OpenWeatherMap condition codes, in response order.
    pub condition_ids: Vec<u32>,
}

impl Observation {
    /// Parse an OpenWeatherMap response body. Missing wind or temperature
    /// readings count as 0.
    pub fn from_openweathermap_json(body: &str) -> Result<Self> {
        let raw: OwmResponse = serde_json::from_str(body)?;
        Ok(Self {
            wind_deg: raw.wind.deg.unwrap_or(0.0),
            wind_speed: raw.wind.speed.unwrap_or(0.0),
            temperature: raw.main.temp.unwrap_or(0.0),
            condition_ids: raw.weather.into_iter().map(|c| c.id).collect(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clock
// ─────────────────────────────────────────────────────────────────────────────

/// Local wall-clock hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidInput(format!("{hour}:{minute:02} is not a time of day")));
        }
        Ok(Self { hour, minute })
    }

    /// Read the `datetime:` line of a worldtimeapi `.txt` response, e.g.
    /// `datetime: 2021-05-12T14:05:33.123456+02:00`.
    pub fn from_worldtime_text(body: &str) -> Result<Self> {
        let datetime = body
            .lines()
            .find_map(|line| line.trim().strip_prefix("datetime:"))
            .map(str::trim)
            .ok_or_else(|| Error::InvalidInput("worldtime body has no datetime line".into()))?;

        let field = |range: std::ops::Range<usize>| -> Result<u32> {
            datetime
                .get(range)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::InvalidInput(format!("malformed datetime {datetime:?}")))
        };
        Self::new(field(11..13)?, field(14..16)?)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    /// `"HH:MM"`.
    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidInput(format!("expected HH:MM, got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidInput(format!("expected HH:MM, got {s:?}")))
        };
        Self::new(parse(h)?, parse(m)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWM_BODY: &str = r#"{
        "coord": {"lon": 15.98, "lat": 45.81},
        "weather": [
            {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
            {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
        ],
        "main": {"temp": 12.4, "feels_like": 11.2, "pressure": 1012, "humidity": 87},
        "wind": {"speed": 4.1, "deg": 230},
        "name": "Zagreb"
    }"#;

    #[test]
    fn test_parse_openweathermap() {
        let obs = Observation::from_openweathermap_json(OWM_BODY).unwrap();
        assert_eq!(obs.wind_deg, 230.0);
        assert_eq!(obs.wind_speed, 4.1);
        assert_eq!(obs.temperature, 12.4);
        assert_eq!(obs.condition_ids, [500, 701]);
    }

    #[test]
    fn test_missing_readings_default_to_zero() {
        let obs = Observation::from_openweathermap_json(
            r#"{"wind": {}, "main": {}, "weather": [{"id": 800}]}"#,
        )
        .unwrap();
        assert_eq!(obs.wind_deg, 0.0);
        assert_eq!(obs.wind_speed, 0.0);
        assert_eq!(obs.temperature, 0.0);
        assert_eq!(obs.condition_ids, [800]);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Observation::from_openweathermap_json("not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_worldtime_text() {
        let body = "abbreviation: CEST\n\
                    client_ip: 192.0.2.1\n\
                    datetime: 2021-05-12T14:05:33.123456+02:00\n\
                    day_of_week: 3\n";
        assert_eq!(ClockTime::from_worldtime_text(body).unwrap(), ClockTime { hour: 14, minute: 5 });
        assert!(ClockTime::from_worldtime_text("abbreviation: CEST").is_err());
        assert!(ClockTime::from_worldtime_text("datetime: garbage").is_err());
    }

    #[test]
    fn test_clock_from_str() {
        assert_eq!("07:30".parse::<ClockTime>().unwrap(), ClockTime { hour: 7, minute: 30 });
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("7h30".parse::<ClockTime>().is_err());
    }
}
