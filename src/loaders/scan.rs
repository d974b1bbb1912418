//! Reader for bracketed LIDAR scan dumps.
//!
//! A dump is one or more bracketed groups written back to back, each holding
//! `(coefficient, angle, distance)` samples:
//!
//! ```text
//! [(12, 0.0, 850), (15, 0.0175, 842)][(9, 0.0349, 3.0), ...]
//! ```
//!
//! Angles are radians. Samples may also be written as `[c, a, d]`.

use std::path::Path;

use log::debug;

use crate::config::ScanConfig;
use crate::types::GridError;

/// One return of the range finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPoint {
    /// Signal weighting reported by the sensor.
    pub coefficient: f64,
    /// Beam angle in radians.
    pub angle: f64,
    pub range: f64,
}

impl ScanPoint {
    /// Cartesian hit position with the sensor at the origin: `(sin a * r, cos a * r)`.
    pub fn to_cartesian(&self) -> (f64, f64) {
        let (sin, cos) = self.angle.sin_cos();
        (sin * self.range, cos * self.range)
    }
}

/// A filtered scan, ready to be turned into obstacle coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LidarScan {
    points: Vec<ScanPoint>,
}

impl LidarScan {
    pub fn new(points: Vec<ScanPoint>) -> Self {
        Self { points }
    }

    /// Clamp ranges and apply the noise gate to raw samples.
    ///
    /// Fails with [`GridError::InvalidConfig`] when the range limits are not
    /// finite or `min_range >= max_range`.
    pub fn from_samples(samples: Vec<ScanPoint>, config: &ScanConfig) -> Result<Self, GridError> {
        config.validate()?;

        let mut points: Vec<ScanPoint> = samples
            .into_iter()
            .map(|p| ScanPoint {
                range: p.range.clamp(config.min_range, config.max_range),
                ..p
            })
            .collect();

        if config.noise_gate && !points.is_empty() {
            let gate = noise_gate(&points);
            let before = points.len();
            points.retain(|p| p.coefficient > gate);
            debug!(
                "noise gate {gate} kept {} of {before} samples",
                points.len()
            );
        }

        Ok(Self { points })
    }

    pub fn parse(input: &str, config: &ScanConfig) -> Result<Self, GridError> {
        Self::from_samples(parse_samples(input)?, config)
    }

    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Parallel obstacle x and y coordinates in scan order.
    pub fn to_obstacles(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(ScanPoint::to_cartesian).unzip()
    }
}

/// Mean of the mean-centred coefficients.
fn noise_gate(points: &[ScanPoint]) -> f64 {
    let n = points.len() as f64;
    let mean = points.iter().map(|p| p.coefficient).sum::<f64>() / n;
    points.iter().map(|p| p.coefficient - mean).sum::<f64>() / n
}

pub fn load_scan(path: impl AsRef<Path>, config: &ScanConfig) -> Result<LidarScan, GridError> {
    config.validate()?;
    let input = std::fs::read_to_string(path.as_ref())?;
    LidarScan::parse(&input, config)
}

/// Parse every sample of a dump without clamping or filtering.
pub fn parse_samples(input: &str) -> Result<Vec<ScanPoint>, GridError> {
    let body = input
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| GridError::ScanParse("scan must be enclosed in brackets".to_string()))?;

    let mut samples = Vec::new();
    for group in body.split("][") {
        parse_group(group, &mut samples)?;
    }
    Ok(samples)
}

fn parse_group(group: &str, out: &mut Vec<ScanPoint>) -> Result<(), GridError> {
    let mut rest = group.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    while !rest.is_empty() {
        let close = match rest.chars().next() {
            Some('(') => ')',
            Some('[') => ']',
            _ => {
                return Err(GridError::ScanParse(format!(
                    "expected a sample tuple at {:?}",
                    truncate(rest)
                )));
            }
        };
        let end = rest
            .find(close)
            .ok_or_else(|| GridError::ScanParse(format!("unterminated sample {:?}", truncate(rest))))?;
        out.push(parse_sample(&rest[1..end])?);
        rest = rest[end + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    }
    Ok(())
}

fn parse_sample(fields: &str) -> Result<ScanPoint, GridError> {
    let values = fields
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| {
            f.parse::<f64>()
                .map_err(|err| GridError::ScanParse(format!("invalid number {f:?}: {err}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        &[coefficient, angle, range] => Ok(ScanPoint {
            coefficient,
            angle,
            range,
        }),
        _ => Err(GridError::ScanParse(format!(
            "expected 3 values per sample, got {} in {fields:?}",
            values.len()
        ))),
    }
}

fn truncate(s: &str) -> &str {
    match s.char_indices().nth(24) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
