//! xy chromaticity command.

use anyhow::{Context, Result};
use octohue_color::{ConversionEngine, hex_to_xy};
use serde_json::json;
use tracing::trace;

use crate::XyArgs;

pub fn run(args: XyArgs, verbose: u8) -> Result<()> {
    trace!(count = args.hex.len(), "xy::run");
    let engine = ConversionEngine::default();

    let mut rows = Vec::with_capacity(args.hex.len());
    for hex in &args.hex {
        let xy = hex_to_xy(&engine, hex).with_context(|| format!("Invalid colour: {hex}"))?;
        rows.push((hex.as_str(), xy));
    }

    if args.json {
        let report: Vec<_> = rows
            .iter()
            .map(|(hex, xy)| json!({ "hex": hex, "xy": xy.to_array() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (hex, xy) in rows {
        if verbose > 0 {
            println!("{hex}: x={:.9} y={:.9}", xy.x, xy.y);
        } else {
            println!("{hex}: {xy}");
        }
    }
    Ok(())
}
