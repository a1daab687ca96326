use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lagoon::api::{
    draw_skyline, render_plan, solve, BarCount, DecodeMode, PlanCfg, ReplayToken, SolveCfg,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod sink;

use sink::TracingSink;

#[derive(Parser)]
#[command(name = "lagoon")]
#[command(about = "Lagoon area of a trench dig plan")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the lagoon area of a dig plan
    Solve {
        /// Dig plan, one move per line
        #[arg(long, env = "LAGOON_DATA")]
        data: Option<PathBuf>,
        /// Decode moves from the hex payload instead of the literal tokens
        #[arg(long)]
        part2: bool,
        /// Optional JSON result file (a provenance sidecar is written next to it)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random closed dig plan
    Generate {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Bars in the skyline, clamped to 1..=4096
        #[arg(long, default_value_t = 16)]
        bars: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct Outcome {
    part: u8,
    moves: usize,
    area: u128,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { data, part2, out } => run_solve(data, part2, out),
        Action::Generate {
            seed,
            index,
            bars,
            out,
        } => generate(seed, index, bars, out),
        Action::Report => report(),
    }
}

fn run_solve(data: Option<PathBuf>, part2: bool, out: Option<PathBuf>) -> Result<()> {
    let mode = if part2 {
        DecodeMode::Alternate
    } else {
        DecodeMode::Primary
    };
    tracing::info!(data = ?data, part = mode.part(), "solve");
    let cfg = SolveCfg {
        data: data.clone(),
        mode,
    };
    let mut sink = TracingSink::default();
    let area = solve(&cfg, &mut sink)?;

    if let Some(out) = out {
        let moves = sink.last.map(|r| r.moves).unwrap_or_default();
        let outcome = Outcome {
            part: mode.part(),
            moves,
            area,
        };
        create_parent(&out)?;
        std::fs::write(&out, serde_json::to_vec_pretty(&outcome)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "data": data,
            "part": mode.part(),
        });
        provenance::write_sidecar(&out, params)?;
    }
    println!("{area}");
    Ok(())
}

fn generate(seed: u64, index: u64, bars: usize, out: PathBuf) -> Result<()> {
    tracing::info!(seed, index, bars, out = %out.display(), "generate");
    let cfg = PlanCfg {
        bars: BarCount::Fixed(bars),
        ..PlanCfg::default()
    };
    let moves = draw_skyline(cfg, ReplayToken { seed, index });
    create_parent(&out)?;
    std::fs::write(&out, render_plan(&moves))
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
