//! Environmental stress scoring.
//!
//! Air quality and temperature excess grow exponentially above their
//! comfort thresholds; wind and rain mitigate the combined stressor
//! relative to their dataset means. The raw stress value is min-max
//! normalized over the whole dataset, so no row can be scored alone.

use crate::columns::{ColumnResolver, Measurement};
use crate::config::ScoringConfig;
use crate::core::errors::{Error, Result};
use crate::core::Dataset;
use crate::risk::stats::{floored_mean, min_max, MEAN_FLOOR, RANGE_EPSILON};
use crate::risk::{ENV_RISK, ENV_RISK_RAW};

/// AQI level below which air contributes no stress.
const AQI_THRESHOLD: f64 = 50.0;

/// Comfort temperature; stress grows with deviation in either direction.
const COMFORT_TEMP_C: f64 = 20.0;

const WIND_MITIGATION_SLOPE: f64 = -0.5;
const RAIN_MITIGATION_SLOPE: f64 = -0.8;

pub struct EnvironmentalRiskCalculator {
    pub beta_aqi: f64,  // Default: 0.004
    pub beta_temp: f64, // Default: 0.02
}

impl Default for EnvironmentalRiskCalculator {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl EnvironmentalRiskCalculator {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            beta_aqi: config.beta_aqi,
            beta_temp: config.beta_temp,
        }
    }

    /// Raw stress for one region given the dataset-wide wind and rain means.
    pub fn raw_risk(
        &self,
        aqi: f64,
        temp: f64,
        wind: f64,
        rain: f64,
        wind_mean: f64,
        rain_mean: f64,
    ) -> f64 {
        let aqi_excess = (self.beta_aqi * (aqi - AQI_THRESHOLD).max(0.0)).exp_m1();
        let temp_excess = (self.beta_temp * (temp - COMFORT_TEMP_C).abs()).exp_m1();
        let stressor = aqi_excess + temp_excess;

        let wind_mitigation = (WIND_MITIGATION_SLOPE * wind / wind_mean).exp();
        let rain_mitigation = (RAIN_MITIGATION_SLOPE * rain / rain_mean).exp();

        stressor * wind_mitigation * rain_mitigation
    }

    /// Compute `Env_Risk_Raw` and `Env_Risk` for every region and return
    /// the table with both columns appended. The input is not mutated.
    pub fn augment(&self, dataset: &Dataset) -> Result<Dataset> {
        if dataset.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let resolver = ColumnResolver::new(dataset);
        let aqi = resolver.required_series(Measurement::AirQuality)?;
        let temp = resolver.required_series(Measurement::Temperature)?;
        let wind = resolver.required_series(Measurement::Wind)?;
        let rain = resolver.required_series(Measurement::Rain)?;

        let wind_mean = floored_mean(&wind, MEAN_FLOOR);
        let rain_mean = floored_mean(&rain, MEAN_FLOOR);
        log::debug!("wind mean {wind_mean}, rain mean {rain_mean}");

        let raw: Vec<f64> = (0..dataset.len())
            .map(|i| self.raw_risk(aqi[i], temp[i], wind[i], rain[i], wind_mean, rain_mean))
            .collect();

        // A degenerate range collapses every normalized value to 0
        // through the epsilon floor.
        let (min, max) = min_max(raw.iter().copied()).ok_or(Error::EmptyDataset)?;
        let range = (max - min).max(RANGE_EPSILON);
        let normalized: Vec<f64> = raw.iter().map(|value| (value - min) / range).collect();

        let mut out = dataset.clone();
        out.set_numeric_column(ENV_RISK_RAW, raw);
        out.set_numeric_column(ENV_RISK, normalized);
        Ok(out)
    }
}
