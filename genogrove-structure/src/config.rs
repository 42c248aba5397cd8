use std::fs::read_to_string;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLOCK_SIZE, DEFAULT_ORDER, MIN_ORDER};
use crate::errors::{GroveError, GroveResult};

/// Construction parameters for a [`Grove`](crate::Grove).
///
/// Both fields are optional in a TOML file; missing ones take their defaults.
///
/// ```toml
/// order = 32
/// block_size = 4096
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GroveConfig {
    /// Maximum number of children per internal node; leaves hold `order - 1` intervals.
    pub order: usize,
    /// Number of records per arena block.
    pub block_size: usize,
}

impl Default for GroveConfig {
    fn default() -> Self {
        GroveConfig {
            order: DEFAULT_ORDER,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl GroveConfig {
    pub fn with_order(order: usize) -> Self {
        GroveConfig {
            order,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> GroveResult<()> {
        if self.order < MIN_ORDER {
            return Err(GroveError::InvalidOrder(self.order));
        }
        if self.block_size == 0 {
            return Err(GroveError::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for GroveConfig {
    type Error = GroveError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: GroveConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        info!(
            "loaded grove config from {}: order={}, block_size={}",
            path.display(),
            config.order,
            config.block_size
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_defaults() {
        let config = GroveConfig::default();
        assert_eq!(config.order, 3);
        assert_eq!(config.block_size, 1024);
        assert_eq!(config.validate().is_ok(), true);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn test_validate_rejects_small_order(#[case] order: usize) {
        let result = GroveConfig::with_order(order).validate();
        assert_eq!(matches!(result, Err(GroveError::InvalidOrder(o)) if o == order), true);
    }

    #[rstest]
    fn test_validate_rejects_empty_blocks() {
        let config = GroveConfig {
            order: 3,
            block_size: 0,
        };
        assert_eq!(
            matches!(config.validate(), Err(GroveError::InvalidBlockSize(0))),
            true
        );
    }

    #[rstest]
    fn test_try_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grove.toml");
        std::fs::write(&path, "order = 64\n").unwrap();

        let config = GroveConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config, GroveConfig::with_order(64));
    }

    #[rstest]
    fn test_try_from_toml_invalid_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grove.toml");
        std::fs::write(&path, "order = 2\nblock_size = 16\n").unwrap();

        let result = GroveConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(GroveError::InvalidOrder(2))), true);
    }

    #[rstest]
    fn test_try_from_missing_file() {
        let result = GroveConfig::try_from(Path::new("no/such/grove.toml"));
        assert_eq!(matches!(result, Err(GroveError::Io(_))), true);
    }
}
