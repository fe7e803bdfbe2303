//! Light state commands.
//!
//! Prints the JSON body a bridge would receive. Delays are reported, not
//! waited on.

use std::path::Path;

use anyhow::{Result, bail};
use octohue_color::{ConversionEngine, toggle_state};
use serde_json::json;
use tracing::{info, trace};

use crate::config::Config;
use crate::{StateArgs, ToggleArgs};

pub fn run(args: StateArgs, config: Option<&Path>, verbose: u8) -> Result<()> {
    trace!(event = %args.event, "state::run");

    let config = Config::load_or_default(config)?;
    let Some(mapping) = config.event(&args.event) else {
        let known: Vec<_> = config.events.iter().map(|m| m.event.as_str()).collect();
        bail!(
            "No mapping for event '{}'. Configured: {}",
            args.event,
            known.join(", ")
        );
    };

    let engine = ConversionEngine::default();
    let state = mapping.state(&engine, &config)?;
    info!(event = %mapping.event, delay = mapping.delay, "Matched event");

    if verbose > 0 {
        println!("Event: {} (delay {}s)", mapping.event, mapping.delay);
    }
    let report = json!({ "delay": mapping.delay, "state": state });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn run_toggle(args: ToggleArgs, config: Option<&Path>) -> Result<()> {
    trace!(on = args.on, "state::run_toggle");

    let config = Config::load_or_default(config)?;
    let state = toggle_state(args.on, config.default_brightness);
    println!("{}", serde_json::to_string(&state)?);
    Ok(())
}
