//! Subcommands of the `navicue` binary.
//!
//! Lookup commands print plain keys on stdout; batch commands print JSON.
//! Logs always go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use navicue_core::{ArousalState, HeatLevel, NavicueConfig, Schema};
use navicue_enhance::io::{read_cues, to_json, write_json};
use navicue_enhance::{batch_statistics, validate_batch, EnhancedNaviCue, Enhancer, RawNaviCue};
use navicue_gate::{
    allowed_families_for_arousal, is_heat_level_safe, resolve_heat_level, ArousalThresholds,
    StateGate,
};
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the heat level of a family, optionally adjusted by a schema
    Heat {
        /// Family key, e.g. grip_scan
        #[arg(short, long)]
        family: String,
        /// Schema key, e.g. shame
        #[arg(short, long)]
        schema: Option<String>,
    },

    /// Check whether content at a heat level is safe for an arousal state
    Check {
        /// Heat level (low, medium, high)
        #[arg(long)]
        heat: HeatLevel,
        /// Arousal state (green, amber, red)
        #[arg(long)]
        state: ArousalState,
    },

    /// List the families allowed in an arousal state
    Allowed {
        /// Arousal state (green, amber, red)
        #[arg(long)]
        state: ArousalState,
    },

    /// Show the pillar a schema belongs to
    Pillar {
        #[arg(short, long)]
        schema: Schema,
    },

    /// Classify a 0-10 resistance score into an arousal state
    Classify {
        #[arg(short, long)]
        resistance: f32,
    },

    /// Fill in schema, KBE, heat, pillar and tags for a raw batch
    Enhance {
        /// JSON array of raw NaviCues
        #[arg(short, long)]
        input: PathBuf,
        /// Batch number (1, 2 or 3)
        #[arg(short, long)]
        batch: u32,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an enhanced batch; exits non-zero if any cue fails
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print per-axis counts for an enhanced batch
    Stats {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the cues of an enhanced batch that pass the gate for a state
    Gate {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        state: ArousalState,
    },
}

pub fn run(command: Commands, config: &NavicueConfig) -> Result<()> {
    match command {
        Commands::Heat { family, schema } => {
            let resolution = resolve_heat_level(&family, schema.as_deref());
            println!("{}", resolution.level);
        }
        Commands::Check { heat, state } => {
            let verdict = if is_heat_level_safe(heat, state) { "allow" } else { "deny" };
            println!("{verdict}");
        }
        Commands::Allowed { state } => {
            for family in allowed_families_for_arousal(state) {
                println!("{family}");
            }
        }
        Commands::Pillar { schema } => {
            let pillar = schema.pillar();
            println!("{} {}", pillar.id(), pillar.name());
        }
        Commands::Classify { resistance } => {
            let thresholds = ArousalThresholds::from_config(&config.thresholds);
            println!("{}", thresholds.classify(resistance));
        }
        Commands::Enhance { input, batch, output } => {
            let raws: Vec<RawNaviCue> = read_cues(&input)?;
            let enhancer = Enhancer::new(config.enhance.clone());
            let enhanced = enhancer.enhance_batch(raws, batch);
            emit(&enhanced, output.as_deref())?;
        }
        Commands::Validate { input } => {
            let cues: Vec<EnhancedNaviCue> = read_cues(&input)?;
            let result = validate_batch(&cues);
            println!("{}", to_json(&result)?);
            if !result.is_valid() {
                bail!(
                    "{} of {} cues failed validation",
                    result.invalid_count,
                    result.total_count
                );
            }
        }
        Commands::Stats { input } => {
            let cues: Vec<EnhancedNaviCue> = read_cues(&input)?;
            println!("{}", to_json(&batch_statistics(&cues))?);
        }
        Commands::Gate { input, state } => {
            let cues: Vec<EnhancedNaviCue> = read_cues(&input)?;
            let gate = StateGate::new(config.gating.clone());
            let passed = gate.filter(&cues, state);
            println!("{}", to_json(&passed)?);
        }
    }
    Ok(())
}

fn emit(cues: &[EnhancedNaviCue], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_json(path, cues)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} cues to {}", cues.len(), path.display());
        }
        None => println!("{}", to_json(cues)?),
    }
    Ok(())
}
