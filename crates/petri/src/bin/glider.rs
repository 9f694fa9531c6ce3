//! The default demo: a glider on a 10×10 bounded grid.
//!
//! Seeds the classic 5-cell glider, redraws the terminal every 200 ms,
//! and exits once two consecutive generations compare equal — on this
//! grid the glider reaches the rim, decays, and leaves a still life.

use std::process::ExitCode;

use petri::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::new(10, 10, patterns::GLIDER.coords());
    let interval = config.tick_interval;
    let automaton = match Automaton::new(config) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut driver = Driver::new(automaton, TerminalSink::stdout(), interval);
    match driver.run() {
        Ok(summary) => {
            println!(
                "settled after {} generations ({} cells alive, {:.1?} elapsed)",
                summary.generations, summary.final_population, summary.elapsed
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("render failed: {err}");
            ExitCode::FAILURE
        }
    }
}
