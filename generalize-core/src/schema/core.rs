use serde::{Deserialize, Serialize};

use crate::schema::union::Schema;

/// Default bound on instance nesting depth, see
/// [`GeneralizeConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizeConfig {
    /// Whether to treat top-level arrays as streams of instances
    pub ignore_outer_array: bool,
    /// Delimiter for NDJSON format (None for regular JSON)
    pub delimiter: Option<u8>,
    /// Maximum instance nesting depth the union engine will follow.
    /// Instances nested deeper than this fail fast with an error instead
    /// of overflowing the stack. Cyclic inputs cannot be expressed in
    /// `serde_json::Value`, so this bound only matters for very deep
    /// (possibly adversarial) trees.
    pub max_depth: usize,
    /// Enable debug output. When `true`, prints each tag-widening
    /// decision to stderr as instances are folded in.
    pub debug: bool,
}

impl Default for GeneralizeConfig {
    fn default() -> Self {
        Self {
            ignore_outer_array: true,
            delimiter: None,
            max_depth: DEFAULT_MAX_DEPTH,
            debug: false,
        }
    }
}

impl GeneralizeConfig {
    pub fn debug(&self, args: std::fmt::Arguments) {
        if self.debug {
            eprintln!("{}", args);
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($cfg:expr, $($arg:tt)*) => {
        $cfg.debug(format_args!($($arg)*))
    };
}

/// Outcome of generalizing a batch of JSON strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizeResult {
    pub schema: Schema,
    pub processed_count: usize,
}
