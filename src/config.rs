//==============================================================================
// Demo configuration
//==============================================================================
//
// The binary always runs with `DemoConfig::default()`; library users can
// load overrides from TOML with `DemoConfig::from_toml_str`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BUFFER_CAPACITY: usize = 100;
pub const DEFAULT_SCRATCH_CAPACITY: usize = 99;
pub const DEFAULT_SCRATCH_LITERAL: &str = "Non-sensitive data";
pub const DEFAULT_READ_FAILURE_MESSAGE: &str = "fgets() failed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Size of the input buffer and of its duplicate.
    pub buffer_capacity: usize,
    pub scratch_capacity: usize,
    pub scratch_literal: String,
    /// Written to the output, without a newline, when the line read fails.
    pub read_failure_message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
            scratch_literal: DEFAULT_SCRATCH_LITERAL.to_string(),
            read_failure_message: DEFAULT_READ_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { field: "buffer_capacity" });
        }
        if self.scratch_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { field: "scratch_capacity" });
        }
        // +1 for the NUL terminator
        if self.scratch_literal.len() + 1 > self.scratch_capacity {
            return Err(ConfigError::LiteralTooLong {
                len: self.scratch_literal.len(),
                capacity: self.scratch_capacity,
            });
        }
        Ok(())
    }
}
