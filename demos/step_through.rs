//! Steps through a built-in proof and prints every reveal as it fires.
//!
//! `cargo run --example step_through -- tree-two-leaves`

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "longest-path-cycle".to_string());
    let proof = proofgraph::builtin(&id)?;
    println!("{} ({} steps)", proof.title, proof.len());

    let mut session = proofgraph::ProofSession::open(proof, proofgraph::Timing::default())?;
    loop {
        let step = session.step_index();
        if let Some(s) = session.current_step() {
            println!("\n[{step}] {}", s.title);
        }
        for fired in session.finish() {
            println!(
                "  {:>6}  {:?} {}",
                fired.at.to_string(),
                fired.event.kind,
                fired.event.id
            );
        }
        match session.next_step() {
            Some(report) => {
                let removed = &report.plan.hidden;
                println!(
                    "  -> plays {:.2}s",
                    report.plan.duration().as_secs_f64()
                );
                if !removed.is_empty() {
                    println!(
                        "  removed: vertices {:?}, edges {:?}",
                        removed.vertices, removed.edges
                    );
                }
            }
            None => break,
        }
    }
    Ok(())
}
