//! Weather provider abstraction.
//!
//! The search flow only talks to [`WeatherProvider`]; the OpenWeather HTTP
//! client is the production implementation.

pub mod openweather;

use crate::errors::ServiceError;
use crate::models::weather::WeatherSnapshot;
use std::future::Future;

pub trait WeatherProvider {
    /// One attempt, no retry. Unknown cities, timeouts and transport
    /// failures all surface as [`ServiceError`].
    fn fetch(&self, city: &str) -> impl Future<Output = Result<WeatherSnapshot, ServiceError>>;
}
