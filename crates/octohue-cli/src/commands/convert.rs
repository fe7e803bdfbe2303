//! Colour conversion command.
//!
//! Builds a value from channel values or a hex string and converts it
//! through the engine, printing the result and the path taken.

use anyhow::{Context, Result, bail};
use octohue_color::{ConversionEngine, ConvertOptions};
use octohue_core::{ColorValue, IlluminantInfo};
use serde_json::json;
use tracing::trace;

use super::{format_channels, parse_illuminant, parse_observer, parse_space};
use crate::ConvertArgs;

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, "convert::run");

    let engine = ConversionEngine::default();
    let input = build_input(&args)?;
    let target = parse_space(&args.to)?;

    let mut options = ConvertOptions::default();
    if let Some(rgb) = &args.through_rgb {
        options = options.through_rgb(parse_space(rgb)?);
    }
    if let Some(key) = &args.target_illuminant {
        options = options.target_illuminant(parse_illuminant(key)?);
    }

    let output = engine
        .convert_with(&input, target, options)
        .with_context(|| format!("Failed to convert {} to {}", input.space(), target))?;

    if args.json {
        let mut report = json!({
            "space": output.space().name(),
            "values": output.values(),
        });
        if let Some(info) = output.illuminant() {
            report["illuminant"] = json!(info.illuminant.key());
            report["observer"] = json!(info.observer.degrees());
        }
        if let Some(hex) = output.to_hex() {
            report["hex"] = json!(hex);
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose > 0 {
        let path = engine.resolve(input.space(), target)?;
        let nodes: Vec<_> = path.nodes.iter().map(|n| n.name()).collect();
        println!("Input: {input}");
        println!("Path:  {}", nodes.join(" -> "));
    }
    println!("{output}");
    println!("  {}", format_channels(output.space(), output.values()));
    if let Some(hex) = output.to_hex() {
        println!("  hex={hex}");
    }
    Ok(())
}

fn build_input(args: &ConvertArgs) -> Result<ColorValue> {
    let space = parse_space(&args.from)?;

    let mut value = match &args.hex {
        Some(hex) => {
            if !space.is_rgb() {
                bail!("Hex input needs an RGB source space, got {space}");
            }
            ColorValue::from_hex(space, hex)?
        }
        None => ColorValue::new(space, &args.values)?,
    };

    if let Some(key) = &args.illuminant {
        let info = IlluminantInfo::new(parse_illuminant(key)?, parse_observer(&args.observer)?);
        value = value
            .with_illuminant(info)
            .with_context(|| format!("{space} does not take an illuminant"))?;
    }
    Ok(value)
}
