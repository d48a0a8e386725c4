//! Forecast sentence for Zagreb radio, in two flavours.
//!
//! * [`ForecastKind::Text`] — for reading: digits, `°C`, punctuation.
//! * [`ForecastKind::Mbrola`] — for the synthesiser: every number spelled
//!   out, no punctuation, ready for [`crate::phoneme::encode`].
//!
//! ```text
//! Dobar dan dragi slušatelji. 14 je sati i 5 minuta. Vani je 12.4°C, lagana kiša je, te puše jugozapadni slab vjetar.
//! Dobar dan dragi slušatelji četrnaest je sati i pet minuta vani je dvanaest stupnja lagana kiša je te puše jugozapadni slab vjetar
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::{
    agreement::{hour_suffix, minute_suffix, temperature_suffix},
    error::{Error, Result},
    numerals::spoken_number,
    weather::{ClockTime, Observation},
};

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

const WIND_DIRECTIONS: [&str; 8] = [
    "sjeverni",
    "sjeveroistočni",
    "istočni",
    "jugoistočni",
    "južni",
    "jugozapadni",
    "zapadni",
    "sjeverozapadni",
];

const WIND_NAMES: [&str; 13] = [
    "tišina",
    "lahor",
    "povjetarac",
    "slab vjetar",
    "umjeren vjetar",
    "umjereno jak vjetar",
    "jak vjetar",
    "žestoki vjetar",
    "olujni vjetar",
    "jak olujni vjetar",
    "orkanski vjetar",
    "jak orkanski vjetar",
    "orkan",
];

const CONDITIONS: [(u32, &str); 54] = [
    (200, "grmljavina s malo kiše"),
    (201, "grmljavina s kišom"),
    (202, "grmljavina s obilnom kišom"),
    (210, "slaba grmljavina"),
    (211, "grmljavina"),
    (212, "razbijena grmljavina"),
    (221, "grmljavina s laganom rosuljom"),
    (231, "grmljavina s rosuljom"),
    (232, "grmljavina s jakom rosuljom"),
    (300, "slaba sitna kiša"),
    (301, "sitna kiša"),
    (302, "jaka sitna kiša"),
    (310, "slaba rosulja"),
    (311, "rosulja"),
    (312, "jaka rosulja"),
    (313, "rosulja uz pljuskove"),
    (314, "jaki pljuskovi i rosulja"),
    (321, "pljusak i rosulja"),
    (500, "lagana kiša"),
    (501, "kiša"),
    (502, "pljuskovi"),
    (503, "obilni pljuskovi"),
    (504, "ekstremni pljuskovi"),
    (511, "ledena kiša"),
    (520, "lagani pljusak"),
    (521, "pljusak"),
    (522, "jaki pljusak"),
    (531, "isprekidani pljuskovi"),
    (600, "lagani snijeg"),
    (601, "snijeg"),
    (602, "obilni snijeg"),
    (611, "susnježica"),
    (612, "promjenjivo oblačno uz laganu susnježicu"),
    (613, "promjenjivo oblačno uz susnježicu"),
    (615, "blaga susnježica"),
    (616, "susnježica"),
    (620, "promjenjivo oblačno uz lagani snijeg"),
    (621, "mećava"),
    (622, "jaka mećava"),
    (701, "izmaglica"),
    (711, "dim"),
    (721, "sumaglica"),
    (731, "pješčani ili prašinski vrtlog"),
    (741, "magla"),
    (751, "pijesak"),
    (761, "prašina"),
    (762, "vulkanski pepeo"),
    (771, "naleti vjetra"),
    (781, "tornado"),
    (800, "vedro"),
    (801, "blaga naoblaka"),
    (802, "pretežno vedro"),
    (803, "promjenjivo oblačno"),
    (804, "oblačno"),
];

static CONDITION_TEXT: Lazy<HashMap<u32, &'static str>> =
    Lazy::new(|| CONDITIONS.iter().copied().collect());

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Adjective for the direction the wind blows from, 0° = `sjeverni`.
pub fn wind_direction(angle: f64) -> &'static str {
    let sector = 360.0 / WIND_DIRECTIONS.len() as f64;
    let i = ((angle + sector / 2.0).rem_euclid(360.0) / sector) as usize;
    WIND_DIRECTIONS[i.min(WIND_DIRECTIONS.len() - 1)]
}

/// Beaufort force for a wind speed in m/s, as the sum of every matching band.
///
/// Bands 8 and 9 share the same bounds and nothing covers (20.7, 24.4], so
/// speeds in those ranges give 17 and 0.
pub fn beaufort_index(speed: f64) -> usize {
    let within = |lo: f64, hi: f64| lo < speed && speed <= hi;
    let bands: [(bool, usize); 13] = [
        (speed <= 0.3, 0),
        (within(0.3, 1.5), 1),
        (within(1.5, 3.3), 2),
        (within(3.3, 5.5), 3),
        (within(5.5, 7.9), 4),
        (within(7.9, 10.7), 5),
        (within(10.7, 13.8), 6),
        (within(13.8, 17.1), 7),
        (within(17.1, 20.7), 8),
        (within(17.1, 20.7), 9),
        (within(24.4, 28.4), 10),
        (within(28.4, 32.6), 11),
        (speed > 32.6, 12),
    ];
    bands.iter().filter(|(hit, _)| *hit).map(|(_, i)| i).sum()
}

/// Closing clause about the wind: `"."` when calm, otherwise
/// `", te puše <direction> <name>."`.
pub fn wind_clause(speed: f64, angle: f64) -> Result<String> {
    let index = beaufort_index(speed);
    if index == 0 {
        return Ok(".".to_string());
    }
    let name = WIND_NAMES.get(index).ok_or_else(|| {
        Error::InvalidInput(format!(
            "wind speed {speed} m/s gives Beaufort index {index}, which has no name"
        ))
    })?;
    Ok(format!(", te puše {} {}.", wind_direction(angle), name))
}

/// Description of the current conditions; several are joined with `" i "`.
pub fn weather_description(ids: &[u32]) -> Result<String> {
    let texts = ids
        .iter()
        .map(|&id| CONDITION_TEXT.get(&id).copied().ok_or(Error::UnknownWeatherCode(id)))
        .collect::<Result<Vec<_>>>()?;
    Ok(texts.join(" i "))
}

/// Greeting for the time of day.
pub fn intro(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Dobro jutro dragi slušatelji",
        12..=16 => "Dobar dan dragi slušatelji",
        _ => "Dobra večer dragi slušatelji",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sentence
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ForecastKind {
    Text,
    #[default]
    Mbrola,
}

#[derive(Debug, Clone)]
pub struct Forecast {
    pub observation: Observation,
    pub clock: ClockTime,
}

/// Temperature as shown in text mode: `3`, `-0.5`, `12.4`.
fn reading(value: f64) -> String {
    format!("{value}")
}

/// Drop the first and last character.
fn inner(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

impl Forecast {
    pub fn new(observation: Observation, clock: ClockTime) -> Self {
        Self { observation, clock }
    }

    pub fn render(&self, kind: ForecastKind) -> Result<String> {
        let sentence = match kind {
            ForecastKind::Text => self.render_text()?,
            ForecastKind::Mbrola => self.render_mbrola()?,
        };
        debug!(?kind, chars = sentence.chars().count(), "rendered forecast");
        Ok(sentence)
    }

    fn render_text(&self) -> Result<String> {
        let ClockTime { hour, minute } = self.clock;
        let obs = &self.observation;

        let minute_text = if minute != 0 {
            format!("i {} minut{}", minute, minute_suffix(minute.into()))
        } else {
            String::new()
        };

        Ok(format!(
            "{}. {} je sat{} {}. Vani je {}°C, {} je{}",
            intro(hour),
            hour,
            hour_suffix(hour.into()),
            minute_text,
            reading(obs.temperature),
            weather_description(&obs.condition_ids)?,
            wind_clause(obs.wind_speed, obs.wind_deg)?,
        ))
    }

    fn render_mbrola(&self) -> Result<String> {
        let ClockTime { hour, minute } = self.clock;
        let obs = &self.observation;

        let minute_text = if minute != 0 {
            format!(
                "i {} minut{}",
                spoken_number(minute.into())?,
                minute_suffix(minute.into())
            )
        } else {
            String::new()
        };

        let degrees = obs.temperature.trunc();
        if !degrees.is_finite() {
            return Err(Error::InvalidInput(format!(
                "temperature {} is not a finite number",
                obs.temperature
            )));
        }
        let degrees = degrees as i64;

        let wind = wind_clause(obs.wind_speed, obs.wind_deg)?;

        Ok(format!(
            "{} {} je sat{} {} vani je {} stup{} {} je{}",
            intro(hour),
            spoken_number(hour.into())?,
            hour_suffix(hour.into()),
            minute_text,
            spoken_number(degrees)?,
            temperature_suffix(degrees),
            weather_description(&obs.condition_ids)?,
            inner(&wind),
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(temperature: f64, wind_speed: f64, hour: u32, minute: u32) -> Forecast {
        Forecast::new(
            Observation {
                wind_deg: 230.0,
                wind_speed,
                temperature,
                condition_ids: vec![500],
            },
            ClockTime::new(hour, minute).unwrap(),
        )
    }

    #[test]
    fn test_wind_direction() {
        assert_eq!(wind_direction(0.0), "sjeverni");
        assert_eq!(wind_direction(350.0), "sjeverni");
        assert_eq!(wind_direction(45.0), "sjeveroistočni");
        assert_eq!(wind_direction(180.0), "južni");
        assert_eq!(wind_direction(230.0), "jugozapadni");
        assert_eq!(wind_direction(315.0), "sjeverozapadni");
        assert_eq!(wind_direction(-90.0), "zapadni");
    }

    #[test]
    fn test_beaufort_bands() {
        assert_eq!(beaufort_index(0.0), 0);
        assert_eq!(beaufort_index(0.3), 0);
        assert_eq!(beaufort_index(1.0), 1);
        assert_eq!(beaufort_index(4.1), 3);
        assert_eq!(beaufort_index(17.1), 7);
        assert_eq!(beaufort_index(30.0), 11);
        assert_eq!(beaufort_index(40.0), 12);
    }

    #[test]
    fn test_beaufort_overlap_and_gap() {
        assert_eq!(beaufort_index(18.0), 17);
        assert_eq!(beaufort_index(22.0), 0);
        assert!(matches!(wind_clause(18.0, 0.0), Err(Error::InvalidInput(_))));
        assert_eq!(wind_clause(22.0, 0.0).unwrap(), ".");
    }

    #[test]
    fn test_wind_clause() {
        assert_eq!(wind_clause(0.2, 90.0).unwrap(), ".");
        assert_eq!(wind_clause(4.1, 230.0).unwrap(), ", te puše jugozapadni slab vjetar.");
    }

    #[test]
    fn test_weather_description() {
        assert_eq!(weather_description(&[800]).unwrap(), "vedro");
        assert_eq!(weather_description(&[500, 701]).unwrap(), "lagana kiša i izmaglica");
        assert_eq!(weather_description(&[]).unwrap(), "");
        assert!(matches!(weather_description(&[999]), Err(Error::UnknownWeatherCode(999))));
    }

    #[test]
    fn test_intro() {
        assert_eq!(intro(4), "Dobra večer dragi slušatelji");
        assert_eq!(intro(5), "Dobro jutro dragi slušatelji");
        assert_eq!(intro(12), "Dobar dan dragi slušatelji");
        assert_eq!(intro(17), "Dobra večer dragi slušatelji");
    }

    #[test]
    fn test_render_text() {
        let out = forecast(12.4, 4.1, 14, 5).render(ForecastKind::Text).unwrap();
        assert_eq!(
            out,
            "Dobar dan dragi slušatelji. 14 je sati i 5 minuta. Vani je 12.4°C, \
             lagana kiša je, te puše jugozapadni slab vjetar."
        );
    }

    #[test]
    fn test_render_text_whole_degrees_and_calm() {
        let out = forecast(3.0, 0.0, 21, 0).render(ForecastKind::Text).unwrap();
        assert_eq!(
            out,
            "Dobra večer dragi slušatelji. 21 je sat . Vani je 3°C, lagana kiša je."
        );
    }

    #[test]
    fn test_render_mbrola() {
        let out = forecast(12.4, 4.1, 14, 5).render(ForecastKind::Mbrola).unwrap();
        assert_eq!(
            out,
            "Dobar dan dragi slušatelji četrnaest je sati i pet minuta vani je dvanaest \
             stupnja lagana kiša je te puše jugozapadni slab vjetar"
        );
    }

    #[test]
    fn test_render_mbrola_negative_and_calm() {
        let out = forecast(-1.7, 0.0, 8, 22).render(ForecastKind::Mbrola).unwrap();
        assert_eq!(
            out,
            "Dobro jutro dragi slušatelji osam je sati i dvadeset i dva minute vani je \
             minus jedan stupanj lagana kiša je"
        );
    }

    #[test]
    fn test_render_text_missing_temperature() {
        let weather = Observation::from_openweathermap_json(r#"{"weather":[{"id":800}]}"#).unwrap();
        let out = Forecast::new(weather, ClockTime::new(12, 0).unwrap())
            .render(ForecastKind::Text)
            .unwrap();
        assert_eq!(out, "Dobar dan dragi slušatelji. 12 je sati . Vani je 0°C, vedro je.");
    }

    #[test]
    fn test_render_mbrola_minus_eleven() {
        let out = forecast(-11.0, 0.0, 1, 0).render(ForecastKind::Mbrola).unwrap();
        assert_eq!(
            out,
            "Dobra večer dragi slušatelji jedan je sat  vani je minus jedanaest stupanj \
             lagana kiša je"
        );
    }

    #[test]
    fn test_mbrola_output_is_encodable() {
        for (t, w, h, m) in [(12.4, 4.1, 14, 5), (-11.0, 30.0, 0, 0), (21.9, 9.0, 23, 59)] {
            let out = forecast(t, w, h, m).render(ForecastKind::Mbrola).unwrap();
            assert!(crate::phoneme::encode(&out).is_ok(), "not encodable: {out}");
        }
    }
}
