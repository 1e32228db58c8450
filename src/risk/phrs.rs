//! Demographic-group PHRS scoring.
//!
//! Builds four raw scores per region (male/female × smoker/non-smoker) on
//! top of `Env_Risk`, then rescales all four columns to [1,100] with ONE
//! pooled min/max. Per-column min-max would hand each group its own scale
//! and the scores would stop being comparable across groups.

use crate::columns::{ColumnResolver, Measurement};
use crate::config::ScoringConfig;
use crate::core::errors::{Error, Result};
use crate::core::Dataset;
use crate::risk::stats::{fractional_percentile_rank, min_max, RANGE_EPSILON};
use crate::risk::{
    ENV_RISK, FEMALE_SMOKE_PENALTY, MALE_SMOKE_PENALTY, OVERALL_AVG_RISK, PHRS_FEMALE_NONSMOKER,
    PHRS_FEMALE_NONSMOKER_RAW, PHRS_FEMALE_SMOKER, PHRS_FEMALE_SMOKER_RAW, PHRS_MALE_NONSMOKER,
    PHRS_MALE_NONSMOKER_RAW, PHRS_MALE_SMOKER, PHRS_MALE_SMOKER_RAW, REG_MOD,
};

const SCALE_MIN: f64 = 1.0;
const SCALE_SPAN: f64 = 99.0;

pub struct PhrsScorer {
    pub female_factor: f64, // Default: 1.17
    pub s_weight: f64,      // Default: 0.5
}

impl Default for PhrsScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl PhrsScorer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            female_factor: config.female_factor,
            s_weight: config.s_weight,
        }
    }

    /// log1p penalty dampens extreme smoking percentages.
    fn smoke_penalty(&self, pct: f64) -> f64 {
        (pct * self.s_weight / 100.0).ln_1p()
    }

    /// Compute penalties, the capacity modifier, the four group scores and
    /// their [1,100] rescaling, and the overall average. Requires the
    /// environmental stage's `Env_Risk` column.
    pub fn augment(&self, dataset: &Dataset) -> Result<Dataset> {
        let env_index = dataset.column_index(ENV_RISK).ok_or_else(|| {
            Error::PrecursorMissing(format!(
                "{ENV_RISK} column not present; run the environmental stage first"
            ))
        })?;
        let env = dataset.numeric_column(env_index)?;

        let resolver = ColumnResolver::new(dataset);
        let male_pct = resolver.series_or_default(Measurement::MaleSmoking)?;
        let female_pct = resolver.series_or_default(Measurement::FemaleSmoking)?;
        let beds = resolver.optional_series(Measurement::BedCapacity)?;

        let male_penalty: Vec<f64> = male_pct.iter().map(|&p| self.smoke_penalty(p)).collect();
        let female_penalty: Vec<f64> = female_pct.iter().map(|&p| self.smoke_penalty(p)).collect();
        let reg_mod = fractional_percentile_rank(&beds);

        let rows = dataset.len();
        let mut male_nonsmoker = Vec::with_capacity(rows);
        let mut female_nonsmoker = Vec::with_capacity(rows);
        let mut male_smoker = Vec::with_capacity(rows);
        let mut female_smoker = Vec::with_capacity(rows);
        for i in 0..rows {
            let base = env[i] * (1.0 - reg_mod[i]);
            male_nonsmoker.push(base);
            female_nonsmoker.push(base * self.female_factor);
            male_smoker.push(env[i] * (1.0 + male_penalty[i] - reg_mod[i]));
            female_smoker.push(env[i] * (1.0 + female_penalty[i] - reg_mod[i]) * self.female_factor);
        }

        // Pool all four raw columns into one min/max so the final scores
        // share a single [1,100] scale.
        let pooled = male_nonsmoker
            .iter()
            .chain(&female_nonsmoker)
            .chain(&male_smoker)
            .chain(&female_smoker)
            .copied();
        let (min, max) = min_max(pooled).ok_or_else(|| {
            Error::PrecursorMissing("no raw scores to rescale; dataset has no rows".to_string())
        })?;
        let range = (max - min).max(RANGE_EPSILON);
        log::debug!("pooled raw score range [{min}, {max}]");

        let rescale = |raw: &[f64]| -> Vec<f64> {
            raw.iter()
                .map(|value| SCALE_MIN + SCALE_SPAN * (value - min) / range)
                .collect()
        };
        let male_nonsmoker_final = rescale(&male_nonsmoker);
        let female_nonsmoker_final = rescale(&female_nonsmoker);
        let male_smoker_final = rescale(&male_smoker);
        let female_smoker_final = rescale(&female_smoker);

        let overall: Vec<f64> = (0..rows)
            .map(|i| {
                (male_nonsmoker_final[i]
                    + female_nonsmoker_final[i]
                    + male_smoker_final[i]
                    + female_smoker_final[i])
                    / 4.0
            })
            .collect();

        let mut out = dataset.clone();
        out.set_numeric_column(MALE_SMOKE_PENALTY, male_penalty);
        out.set_numeric_column(FEMALE_SMOKE_PENALTY, female_penalty);
        out.set_numeric_column(REG_MOD, reg_mod);
        out.set_numeric_column(PHRS_MALE_NONSMOKER_RAW, male_nonsmoker);
        out.set_numeric_column(PHRS_FEMALE_NONSMOKER_RAW, female_nonsmoker);
        out.set_numeric_column(PHRS_MALE_SMOKER_RAW, male_smoker);
        out.set_numeric_column(PHRS_FEMALE_SMOKER_RAW, female_smoker);
        out.set_numeric_column(PHRS_MALE_NONSMOKER, male_nonsmoker_final);
        out.set_numeric_column(PHRS_FEMALE_NONSMOKER, female_nonsmoker_final);
        out.set_numeric_column(PHRS_MALE_SMOKER, male_smoker_final);
        out.set_numeric_column(PHRS_FEMALE_SMOKER, female_smoker_final);
        out.set_numeric_column(OVERALL_AVG_RISK, overall);
        Ok(out)
    }
}
