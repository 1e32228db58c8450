pub mod environmental;
pub mod phrs;
pub mod stats;

use crate::config::ScoringConfig;
use crate::core::errors::Result;
use crate::core::Dataset;

pub use environmental::EnvironmentalRiskCalculator;
pub use phrs::PhrsScorer;

// Computed column names, in the order the pipeline appends them.
pub const ENV_RISK_RAW: &str = "Env_Risk_Raw";
pub const ENV_RISK: &str = "Env_Risk";
pub const MALE_SMOKE_PENALTY: &str = "Male_Smoke_Penalty";
pub const FEMALE_SMOKE_PENALTY: &str = "Female_Smoke_Penalty";
pub const REG_MOD: &str = "Reg_Mod";
pub const PHRS_MALE_NONSMOKER_RAW: &str = "PHRS_Male_NonSmoker_raw";
pub const PHRS_FEMALE_NONSMOKER_RAW: &str = "PHRS_Female_NonSmoker_raw";
pub const PHRS_MALE_SMOKER_RAW: &str = "PHRS_Male_Smoker_raw";
pub const PHRS_FEMALE_SMOKER_RAW: &str = "PHRS_Female_Smoker_raw";
pub const PHRS_MALE_NONSMOKER: &str = "PHRS_Male_NonSmoker";
pub const PHRS_FEMALE_NONSMOKER: &str = "PHRS_Female_NonSmoker";
pub const PHRS_MALE_SMOKER: &str = "PHRS_Male_Smoker";
pub const PHRS_FEMALE_SMOKER: &str = "PHRS_Female_Smoker";
pub const OVERALL_AVG_RISK: &str = "Overall_Avg_Risk";

/// The four final score columns.
pub const PHRS_COLUMNS: [&str; 4] = [
    PHRS_MALE_NONSMOKER,
    PHRS_FEMALE_NONSMOKER,
    PHRS_MALE_SMOKER,
    PHRS_FEMALE_SMOKER,
];

/// Run the full two-stage pipeline: environmental stress, then group
/// scoring. Returns the input table with all computed columns appended.
pub fn score_dataset(dataset: &Dataset, config: &ScoringConfig) -> Result<Dataset> {
    let with_env = EnvironmentalRiskCalculator::from_config(config).augment(dataset)?;
    PhrsScorer::from_config(config).augment(&with_env)
}
