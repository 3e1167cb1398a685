pub mod core;
pub mod kind;
pub mod union;

pub use self::core::{GeneralizeConfig, GeneralizeResult, DEFAULT_MAX_DEPTH};
pub use self::kind::Kind;
pub use self::union::{generalize, generalize_opt, Schema, TypeSet};

use serde_json::Value;

/// Generalize a schema over a collection of JSON strings.
///
/// Each string holds either one instance, an NDJSON batch of instances
/// (when `config.delimiter` is set), or a top-level array treated as a
/// stream of instances (when `config.ignore_outer_array` is set).
pub fn generalize_from_strings(
    json_strings: &[String],
    config: GeneralizeConfig,
) -> Result<GeneralizeResult, String> {
    if json_strings.is_empty() {
        return Err("No JSON strings provided".to_string());
    }

    let mut schema = Schema::default();
    let mut processed_count = 0;

    for json_str in json_strings {
        if json_str.trim().is_empty() {
            continue;
        }

        for document in split_documents(json_str, &config) {
            let instance: Value = serde_json::from_str(document)
                .map_err(|e| format!("Invalid JSON input: {}", e))?;

            match instance {
                Value::Array(elements) if config.ignore_outer_array => {
                    for element in &elements {
                        schema.union(element, &config)?;
                        processed_count += 1;
                    }
                }
                other => {
                    schema.union(&other, &config)?;
                    processed_count += 1;
                }
            }
        }
    }

    Ok(GeneralizeResult {
        schema,
        processed_count,
    })
}

/// Split one input string into its JSON documents: NDJSON rows when a
/// delimiter is configured, otherwise the whole string as one document.
fn split_documents<'a>(
    json_str: &'a str,
    config: &GeneralizeConfig,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match config.delimiter {
        Some(delimiter) => Box::new(
            json_str
                .split(delimiter as char)
                .filter(|row| !row.trim().is_empty()),
        ),
        None => Box::new(std::iter::once(json_str)),
    }
}
