//! Pipeline configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.
//!
//! ```yaml
//! resolution: 4.0
//! grid:
//!   extend_area: 1.0
//!   enclose_origin: false
//!   error_policy: best_effort   # or strict
//!   flood_fill: reference       # or symmetric
//! scan:
//!   min_range: 5.0
//!   max_range: 4000.0
//!   noise_gate: true
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::types::{
    DEFAULT_EXTEND_AREA, DEFAULT_MAX_RANGE, DEFAULT_MIN_RANGE, DEFAULT_RESOLUTION, GridError,
};

/// What to do when a ray leaves the grid while free space is traced.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop tracing at the first out-of-bounds cell and keep what was written.
    #[default]
    BestEffort,
    /// Return [`GridError::OutOfBounds`].
    Strict,
}

/// Neighbour handling of the region fill.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodFillMode {
    /// East neighbours are explored but not marked free.
    ///
    /// This leaves cells that are only reachable by an eastward step unknown.
    /// It is most likely an omission in the algorithm this mode reproduces;
    /// use [`FloodFillMode::Symmetric`] for a classic 4-connected fill.
    #[default]
    Reference,
    /// All four neighbours are marked free.
    Symmetric,
}

/// Geometry and propagation settings for grid construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Total padding added across each axis, in world units.
    pub extend_area: f64,
    /// Also include the sensor origin in the grid extents. Off by default, so
    /// the extents come from the obstacles alone.
    pub enclose_origin: bool,
    pub error_policy: ErrorPolicy,
    pub flood_fill: FloodFillMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extend_area: DEFAULT_EXTEND_AREA,
            enclose_origin: false,
            error_policy: ErrorPolicy::BestEffort,
            flood_fill: FloodFillMode::Reference,
        }
    }
}

impl GridConfig {
    pub fn strict() -> Self {
        Self {
            error_policy: ErrorPolicy::Strict,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.extend_area.is_finite() || self.extend_area < 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "extend_area must be finite and non-negative, got {}",
                self.extend_area
            )));
        }
        Ok(())
    }
}

/// Scan sample filtering applied while loading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub min_range: f64,
    pub max_range: f64,
    /// Drop samples whose coefficient is not above the mean-centred mean.
    pub noise_gate: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_range: DEFAULT_MIN_RANGE,
            max_range: DEFAULT_MAX_RANGE,
            noise_gate: true,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if !(self.min_range.is_finite() && self.max_range.is_finite())
            || self.min_range >= self.max_range
        {
            return Err(GridError::InvalidConfig(format!(
                "range limits must be finite with min < max, got [{}, {}]",
                self.min_range, self.max_range
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// World units per cell.
    pub resolution: f64,
    pub grid: GridConfig,
    pub scan: ScanConfig,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            grid: GridConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl MapperConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GridError> {
        // An empty document deserializes to unit, not to a mapping.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(GridError::InvalidResolution(self.resolution));
        }
        self.grid.validate()?;
        self.scan.validate()
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<MapperConfig, GridError> {
    let yaml = std::fs::read_to_string(path.as_ref())?;
    MapperConfig::from_yaml_str(&yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = MapperConfig::from_yaml_str("").unwrap();
        assert_eq!(config, MapperConfig::default());
        assert_eq!(config.grid.extend_area, 1.0);
        assert_eq!(config.grid.error_policy, ErrorPolicy::BestEffort);
        assert_eq!(config.grid.flood_fill, FloodFillMode::Reference);
        assert!(!config.grid.enclose_origin);
    }

    #[test]
    fn enclose_origin_is_opt_in() {
        let config = MapperConfig::from_yaml_str("grid:\n  enclose_origin: true\n").unwrap();
        assert!(config.grid.enclose_origin);
        assert_eq!(config.grid.extend_area, 1.0);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let yaml = "resolution: 0.5\ngrid:\n  error_policy: strict\n  flood_fill: symmetric\n";
        let config = MapperConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.resolution, 0.5);
        assert_eq!(config.grid.error_policy, ErrorPolicy::Strict);
        assert_eq!(config.grid.flood_fill, FloodFillMode::Symmetric);
        assert!(!config.grid.enclose_origin);
        assert_eq!(config.scan, ScanConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            MapperConfig::from_yaml_str("resolution: 0.0"),
            Err(GridError::InvalidResolution(_))
        ));
        assert!(matches!(
            MapperConfig::from_yaml_str("grid:\n  extend_area: -1.0"),
            Err(GridError::InvalidConfig(_))
        ));
        assert!(matches!(
            MapperConfig::from_yaml_str("scan:\n  min_range: 10.0\n  max_range: 5.0"),
            Err(GridError::InvalidConfig(_))
        ));
        assert!(matches!(
            MapperConfig::from_yaml_str("grid:\n  flood_fill: sideways"),
            Err(GridError::Yaml(_))
        ));
    }
}
