//! Ordered-alias resolution for logical measurement columns.
//!
//! Input tables arrive from different upstream sources that do not agree on
//! column names, so every logical measurement carries an ordered list of
//! accepted aliases. Resolution picks the first alias present in the table;
//! optional measurements fall back to a numeric default instead of failing.

use crate::core::errors::{Error, Result};
use crate::core::Dataset;

/// The logical measurements the scoring pipeline reads from the input table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    AirQuality,
    Temperature,
    Wind,
    Rain,
    MaleSmoking,
    FemaleSmoking,
    BedCapacity,
}

impl Measurement {
    /// Human-readable field name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::AirQuality => "air quality",
            Measurement::Temperature => "temperature",
            Measurement::Wind => "wind",
            Measurement::Rain => "rain",
            Measurement::MaleSmoking => "male smoking",
            Measurement::FemaleSmoking => "female smoking",
            Measurement::BedCapacity => "bed capacity",
        }
    }

    /// Accepted column names, first preferred.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Measurement::AirQuality => &["AQI", "PM2.5"],
            Measurement::Temperature => &["Temperature", "Temp"],
            Measurement::Wind => &["Wind_Speed", "Wind"],
            Measurement::Rain => &["Rainfall", "Rain"],
            Measurement::MaleSmoking => &["Male_Smoking_%", "Male_Smoking_rate"],
            Measurement::FemaleSmoking => &["Female_Smoking_%", "Female_Smoking_rate"],
            Measurement::BedCapacity => &["Beds_per_1000"],
        }
    }

    /// Value assumed when no alias is present. Required measurements have
    /// no default and fail resolution instead.
    pub fn default_value(self) -> Option<f64> {
        match self {
            Measurement::MaleSmoking | Measurement::FemaleSmoking | Measurement::BedCapacity => {
                Some(0.0)
            }
            _ => None,
        }
    }
}

/// Outcome of resolving one measurement against a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The measurement is backed by this column index.
    Column(usize),
    /// No alias is present; every row takes this value.
    Default(f64),
}

/// Pure lookup from logical measurements to table columns.
pub struct ColumnResolver<'a> {
    dataset: &'a Dataset,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn resolve(&self, measurement: Measurement) -> Result<Resolution> {
        for &alias in measurement.aliases() {
            if let Some(index) = self.dataset.column_index(alias) {
                log::debug!("resolved {} to column {alias:?}", measurement.label());
                return Ok(Resolution::Column(index));
            }
        }
        match measurement.default_value() {
            Some(value) => {
                log::debug!(
                    "no column for {}; defaulting to {value}",
                    measurement.label()
                );
                Ok(Resolution::Default(value))
            }
            None => Err(Error::MissingColumn {
                field: measurement.label(),
                aliases: measurement.aliases().to_vec(),
            }),
        }
    }

    /// Series for a required measurement; empty cells are not acceptable
    /// in the cleaned input and surface as coercion errors.
    pub fn required_series(&self, measurement: Measurement) -> Result<Vec<f64>> {
        match self.resolve(measurement)? {
            Resolution::Column(index) => self.dataset.numeric_column(index),
            Resolution::Default(value) => Ok(vec![value; self.dataset.len()]),
        }
    }

    /// Series for an optional measurement, with empty cells and an absent
    /// column both collapsing to the measurement default.
    pub fn series_or_default(&self, measurement: Measurement) -> Result<Vec<f64>> {
        let default = measurement.default_value().unwrap_or(0.0);
        match self.resolve(measurement)? {
            Resolution::Column(index) => Ok(self
                .dataset
                .nullable_numeric_column(index)?
                .into_iter()
                .map(|value| value.unwrap_or(default))
                .collect()),
            Resolution::Default(value) => Ok(vec![value; self.dataset.len()]),
        }
    }

    /// Series for an optional measurement where genuinely missing values
    /// must stay distinguishable (bed capacity: missing rows are excluded
    /// from the rank denominator).
    pub fn optional_series(&self, measurement: Measurement) -> Result<Vec<Option<f64>>> {
        match self.resolve(measurement)? {
            Resolution::Column(index) => self.dataset.nullable_numeric_column(index),
            Resolution::Default(value) => Ok(vec![Some(value); self.dataset.len()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn table(columns: &[&str], row: Vec<Cell>) -> Dataset {
        Dataset::from_rows(columns.to_vec(), vec![row])
    }

    #[test]
    fn prefers_primary_alias_when_both_present() {
        let dataset = table(&["PM2.5", "AQI"], vec![Cell::from(10.0), Cell::from(90.0)]);
        let resolver = ColumnResolver::new(&dataset);
        assert_eq!(
            resolver.resolve(Measurement::AirQuality).unwrap(),
            Resolution::Column(1)
        );
    }

    #[test]
    fn falls_back_to_secondary_alias() {
        let dataset = table(&["PM2.5"], vec![Cell::from(10.0)]);
        let resolver = ColumnResolver::new(&dataset);
        assert_eq!(
            resolver.resolve(Measurement::AirQuality).unwrap(),
            Resolution::Column(0)
        );
        assert_eq!(
            resolver.required_series(Measurement::AirQuality).unwrap(),
            vec![10.0]
        );
    }

    #[test]
    fn missing_required_measurement_names_field_and_aliases() {
        let dataset = table(&["Temperature"], vec![Cell::from(25.0)]);
        let resolver = ColumnResolver::new(&dataset);
        let err = resolver.resolve(Measurement::AirQuality).unwrap_err();
        match err {
            Error::MissingColumn { field, aliases } => {
                assert_eq!(field, "air quality");
                assert_eq!(aliases, vec!["AQI", "PM2.5"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn optional_measurement_defaults_when_absent() {
        let dataset = table(&["AQI"], vec![Cell::from(90.0)]);
        let resolver = ColumnResolver::new(&dataset);
        assert_eq!(
            resolver.resolve(Measurement::MaleSmoking).unwrap(),
            Resolution::Default(0.0)
        );
        assert_eq!(
            resolver.series_or_default(Measurement::MaleSmoking).unwrap(),
            vec![0.0]
        );
        assert_eq!(
            resolver.optional_series(Measurement::BedCapacity).unwrap(),
            vec![Some(0.0)]
        );
    }

    #[test]
    fn empty_cell_in_optional_column_takes_default() {
        let dataset = table(
            &["AQI", "Female_Smoking_%"],
            vec![Cell::from(90.0), Cell::Empty],
        );
        let resolver = ColumnResolver::new(&dataset);
        assert_eq!(
            resolver
                .series_or_default(Measurement::FemaleSmoking)
                .unwrap(),
            vec![0.0]
        );
    }

    #[test]
    fn empty_cell_in_bed_capacity_stays_missing() {
        let dataset = table(
            &["AQI", "Beds_per_1000"],
            vec![Cell::from(90.0), Cell::Empty],
        );
        let resolver = ColumnResolver::new(&dataset);
        assert_eq!(
            resolver.optional_series(Measurement::BedCapacity).unwrap(),
            vec![None]
        );
    }

    #[test]
    fn non_numeric_text_is_a_coercion_error() {
        let dataset = table(&["AQI"], vec![Cell::from("poor")]);
        let resolver = ColumnResolver::new(&dataset);
        let err = resolver.required_series(Measurement::AirQuality).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeCoercion { ref column, row: 0, .. } if column == "AQI"
        ));
    }

    #[test]
    fn empty_cell_in_required_column_is_a_coercion_error() {
        let dataset = table(&["AQI"], vec![Cell::Empty]);
        let resolver = ColumnResolver::new(&dataset);
        let err = resolver.required_series(Measurement::AirQuality).unwrap_err();
        assert!(matches!(err, Error::TypeCoercion { .. }));
    }
}
