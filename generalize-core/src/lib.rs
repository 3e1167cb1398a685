pub mod schema;

// Re-export commonly used items
pub use schema::{
    generalize, generalize_from_strings, generalize_opt, GeneralizeConfig, GeneralizeResult,
    Kind, Schema, TypeSet,
};

/// Helper function to generalize a schema over a collection of JSON strings
pub fn generalize_json(
    json_strings: &[String],
    config: Option<GeneralizeConfig>,
) -> Result<GeneralizeResult, String> {
    generalize_from_strings(json_strings, config.unwrap_or_default())
}

/// Create a default generalization configuration
pub fn default_config() -> GeneralizeConfig {
    GeneralizeConfig::default()
}
