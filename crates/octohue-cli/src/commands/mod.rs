//! CLI command implementations

pub mod adapt;
pub mod convert;
pub mod path;
pub mod spaces;
pub mod state;
pub mod xy;

use anyhow::{Context, Result};
use octohue_core::{ColorSpaceId, Illuminant, Observer};

/// Parses a colour space name.
pub fn parse_space(name: &str) -> Result<ColorSpaceId> {
    name.parse()
        .with_context(|| format!("Unknown colour space: {name}"))
}

/// Parses an illuminant key such as `d65`.
pub fn parse_illuminant(key: &str) -> Result<Illuminant> {
    key.parse()
        .with_context(|| format!("Unknown illuminant: {key}"))
}

/// Parses an observer angle.
pub fn parse_observer(angle: &str) -> Result<Observer> {
    angle
        .parse()
        .with_context(|| format!("Invalid observer: {angle}"))
}

/// Formats channel values as `name=value` pairs.
pub fn format_channels(space: ColorSpaceId, values: &[f64]) -> String {
    space
        .channel_names()
        .iter()
        .zip(values)
        .map(|(name, v)| format!("{name}={v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}
