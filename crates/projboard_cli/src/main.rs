//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projboard_core` linkage and print a deterministic probe.
//! - Run a short board session and print its rendered lists and snapshot.

use projboard_core::{init_from_config, AppConfig, ProjectBoard, ProjectInput, ProjectStatus};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut board = ProjectBoard::new();
    let first = board
        .submit(&ProjectInput::new("Build UI", "Initial version", "3"))?
        .id;
    board.submit(&ProjectInput::new("Write tests", "Cover store", "2"))?;

    if let Err(err) = board.submit(&ProjectInput::new("", "missing title", "1")) {
        println!("rejected input: {err}");
    }

    let outcome = board.drop_on(ProjectStatus::Finished, &first.to_string());
    log::info!(
        "event=demo_drop module=cli status=ok moved={}",
        outcome.is_moved()
    );

    println!();
    println!("{}", board.render());
    println!();
    println!("{}", serde_json::to_string_pretty(&board.store().snapshot())?);
    Ok(())
}
