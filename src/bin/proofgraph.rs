use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "proofgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in proofs.
    List,
    /// Print the reveal schedule of the transition into a step, as JSON.
    Plan(PlanArgs),
    /// Render one instant of a step transition as SVG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct TimingArgs {
    /// JSON timing config (`{"unit": 600, "edge_offset": 250}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the slot spacing in milliseconds.
    #[arg(long)]
    unit_ms: Option<u64>,

    /// Override the edge lag in milliseconds.
    #[arg(long)]
    edge_offset_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Built-in proof id or path to a proof JSON file.
    #[arg(long)]
    proof: String,

    /// Target step (0-based); step 0 plans the opening animation.
    #[arg(long)]
    step: usize,

    #[command(flatten)]
    timing: TimingArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Built-in proof id or path to a proof JSON file.
    #[arg(long)]
    proof: String,

    /// Target step (0-based).
    #[arg(long)]
    step: usize,

    /// Milliseconds after the transition started.
    #[arg(long, default_value_t = u64::MAX)]
    at_ms: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    timing: TimingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_timing(args: &TimingArgs) -> anyhow::Result<proofgraph::Timing> {
    let mut timing = match &args.config {
        Some(path) => proofgraph::Timing::from_path(path)?,
        None => proofgraph::Timing::default(),
    };
    if let Some(ms) = args.unit_ms {
        timing.unit = proofgraph::Millis(ms);
    }
    if let Some(ms) = args.edge_offset_ms {
        timing.edge_offset = proofgraph::Millis(ms);
    }
    timing.validate()?;
    Ok(timing)
}

/// Sequencer positioned at the start of the transition into `step`.
fn start_transition(
    proof: &proofgraph::Proof,
    step: usize,
    timing: proofgraph::Timing,
) -> anyhow::Result<(proofgraph::Sequencer, proofgraph::TransitionReport)> {
    let target = proof.step(step).with_context(|| {
        format!(
            "proof '{}' has {} steps, no step {step}",
            proof.id,
            proof.len()
        )
    })?;

    let mut seq = proofgraph::Sequencer::new(timing)?;
    let report = match step.checked_sub(1).and_then(|i| proof.step(i)) {
        Some(prev) => {
            seq.snap_to(prev.graph_state.clone());
            seq.transition_to(target.graph_state.clone())
        }
        None => seq.open(target.graph_state.clone()),
    };
    Ok((seq, report))
}

fn cmd_list() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for proof in proofgraph::builtins()? {
        writeln!(out, "{}\t{} ({} steps)", proof.id, proof.title, proof.len())?;
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let timing = load_timing(&args.timing)?;
    let proof = proofgraph::resolve(&args.proof)?;
    let (_, report) = start_transition(&proof, args.step, timing)?;

    let out = std::io::stdout().lock();
    serde_json::to_writer_pretty(out, &report.plan).context("write plan JSON")?;
    println!();
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timing = load_timing(&args.timing)?;
    let proof = proofgraph::resolve(&args.proof)?;
    let (mut seq, _) = start_transition(&proof, args.step, timing)?;
    let _ = seq.advance(proofgraph::Millis(args.at_ms));

    let svg = proofgraph::build_scene(seq.target(), seq.visible()).to_svg();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
