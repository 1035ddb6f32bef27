use anyhow::{Context, Result};
use clap::Parser;

use inputmask::cli::{CliArgs, RunConfig};
use inputmask::config::MaskConfig;
use inputmask::field::MaskedField;
use inputmask::mask::MaskEngine;
use inputmask::replay::{apply_event, render_with_caret, ReplayStep};

fn main() -> Result<()> {
    inputmask::tracing::init();

    let args = CliArgs::parse();
    let config_path = args.config.clone();
    let mut config = match &config_path {
        Some(path) => MaskConfig::load_from(path).map_err(|e| anyhow::anyhow!(e))?,
        None => MaskConfig::load(),
    };

    let run = args
        .into_config(&config)
        .map_err(|e| anyhow::anyhow!(e))?;

    if let (Some(name), Some(mask)) = (&run.save_preset, &run.mask) {
        config.set_preset(name, mask);
        let saved = match &config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        saved.map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!(preset = %name, "preset saved");
    }

    run_replay(&run)
}

fn run_replay(run: &RunConfig) -> Result<()> {
    let engine = MaskEngine::from_optional(run.mask.as_deref(), run.options)
        .context("Cannot start without a mask (pass MASK or --preset)")?;
    let mut field = MaskedField::from_engine(engine);

    let initial = ReplayStep {
        event: "init".to_string(),
        text: field.text().to_string(),
        caret: field.caret(),
        selection: (field.selection().start, field.selection().end),
        value: field.value().clone(),
        outcome: None,
    };
    print_step(&initial, run.json)?;

    for event in &run.events {
        let step = apply_event(&mut field, event);
        print_step(&step, run.json)?;
    }

    Ok(())
}

fn print_step(step: &ReplayStep, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(step)?);
    } else {
        println!(
            "{:<16} {:<24} value={}",
            step.event,
            render_with_caret(&step.text, step.selection),
            step.value
        );
    }
    Ok(())
}
