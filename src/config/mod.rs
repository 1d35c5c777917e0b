//! Legal rule-set configuration for the training duration engine.
//!
//! The constants of §§ 7a and 8 BBiG are modelled as a [`LegalRules`] value
//! that is handed to the calculator. [`ConfigLoader`] can read an adjusted
//! rule set from YAML; without one the statutory defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use training_duration_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bbig").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FAMILY_CARE_CREDIT_MONTHS, HIGHER_EDUCATION_ENTRY_CREDIT_MONTHS, INTERMEDIATE_SCHOOL_CREDIT_MONTHS,
    InputBounds, LegalRules, MAX_BASE_MONTHS, MAX_FULL_TIME_HOURS, MAX_PART_TIME_PERCENTAGE,
    MAX_TOTAL_SHORTENING_MONTHS, MIN_BASE_MONTHS, MIN_FULL_TIME_HOURS, MIN_PART_TIME_PERCENTAGE,
    NO_DISADVANTAGE_TOLERANCE_MONTHS, OVER_21_CREDIT_MONTHS, PRIOR_EXPERIENCE_CREDIT_MONTHS,
    PartTimeRules, RuleSetMetadata, ShorteningRules, UPPER_BOUND_FACTOR,
};
