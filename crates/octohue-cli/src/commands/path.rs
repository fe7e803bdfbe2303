//! Conversion chain command.

use anyhow::Result;
use octohue_color::ConversionEngine;
use tracing::trace;

use super::parse_space;
use crate::PathArgs;

pub fn run(args: PathArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, "path::run");

    let engine = ConversionEngine::default();
    let from = parse_space(&args.from)?;
    let to = parse_space(&args.to)?;
    let path = engine.resolve(from, to)?;

    if path.is_identity() {
        println!("{from}: identity");
        return Ok(());
    }

    let nodes: Vec<_> = path.nodes.iter().map(|n| n.name()).collect();
    println!("{}", nodes.join(" -> "));
    if verbose > 0 {
        println!("{} step(s)", path.len());
    }
    Ok(())
}
