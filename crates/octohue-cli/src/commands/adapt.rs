//! Chromatic adaptation command.

use anyhow::{Result, bail};
use octohue_color::{AdaptationMethod, adapt};
use tracing::trace;

use super::{parse_illuminant, parse_observer};
use crate::AdaptArgs;

pub fn run(args: AdaptArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, method = %args.method, "adapt::run");

    let [x, y, z] = args.xyz[..] else {
        bail!("Expected 3 XYZ values, got {}", args.xyz.len());
    };
    let src = parse_illuminant(&args.from)?;
    let dst = parse_illuminant(&args.to)?;
    let observer = parse_observer(&args.observer)?;
    let method: AdaptationMethod = args.method.parse()?;

    let out = adapt([x, y, z], src, dst, observer, method)?;

    if verbose > 0 {
        println!("{src} -> {dst} ({method}, {observer})");
    }
    println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);
    Ok(())
}
