use bevy::prelude::Resource;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use windvane::config::WeatherConfig;
use windvane::sample::WindSample;

const CURRENT_PARAMS: [&str; 2] = ["wind_speed_10m", "wind_direction_10m"];

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

impl From<ureq::Error> for WeatherError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

#[derive(Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[derive(Deserialize)]
struct CurrentConditions {
    wind_speed_10m: Option<f32>,
    wind_direction_10m: Option<f32>,
}

/// Blocking client for the forecast endpoint. Cheap to clone, meant to be
/// moved into IO pool tasks.
#[derive(Resource, Clone)]
pub struct WeatherClient {
    agent: ureq::Agent,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    pub fn forecast_url(&self, lat: f64, lng: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}",
            self.base_url,
            lat,
            lng,
            CURRENT_PARAMS.join(",")
        )
    }

    pub fn fetch_wind(&self, lat: f64, lng: f64) -> Result<WindSample, WeatherError> {
        let url = self.forecast_url(lat, lng);
        let body = self.agent.get(&url).call()?.into_string()?;
        parse_current_wind(&body)
    }
}

/// Pull the current wind out of a forecast response body
pub fn parse_current_wind(body: &str) -> Result<WindSample, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    let current = response.current.ok_or(WeatherError::MissingField("current"))?;
    let speed = current
        .wind_speed_10m
        .ok_or(WeatherError::MissingField("current.wind_speed_10m"))?;
    let direction = current
        .wind_direction_10m
        .ok_or(WeatherError::MissingField("current.wind_direction_10m"))?;
    Ok(WindSample::from_compass(direction, speed))
}
