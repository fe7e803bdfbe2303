//! Colour space listing command.

use anyhow::Result;
use octohue_color::ConversionEngine;
use octohue_core::ColorSpaceId;

pub fn run(verbose: u8) -> Result<()> {
    let engine = ConversionEngine::default();
    let registry = engine.registry();

    println!("{:<10} {:<12} {}", "Space", "Channels", "Illuminant");
    for space in ColorSpaceId::CONCRETE {
        let white = if space.has_reference_white() { "yes" } else { "-" };
        println!(
            "{:<10} {:<12} {}",
            space.name(),
            space.channel_names().join(","),
            white
        );
        if verbose > 0 {
            let next: Vec<_> = registry
                .neighbors(space.canonical())
                .map(|edge| edge.to.name())
                .collect();
            println!("           -> {}", next.join(", "));
        }
    }
    println!();
    println!("RGB default: {}", engine.default_rgb());
    Ok(())
}
