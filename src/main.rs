use std::path::Path;

use anyhow::Result;
use clap::Parser;

use npm_release::command::SystemRunner;
use npm_release::release::ReleaseWorkflow;
use npm_release::ui::{self, Prompt, TerminalPrompt};
use npm_release::{manifest, ReleaseError};

#[derive(clap::Parser)]
#[command(
    name = "npm-release",
    about = "Guided npm release: version bump, publish, and tag push"
)]
struct Args {
    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("npm-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // The manifest must be readable before anything is mutated
    let manifest = match manifest::load(Path::new(".")) {
        Ok(manifest) => manifest,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let current_version = manifest.version_or_default();

    ui::display_banner(&current_version);

    let mut prompt = TerminalPrompt::new();
    let mode = match prompt.select_mode() {
        Ok(mode) => mode,
        Err(ReleaseError::UserCancelled) => {
            println!("Operation cancelled by user.");
            return Ok(());
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_status(&format!("Release type: {}", mode.label()));

    let runner = SystemRunner::new();
    let mut workflow = ReleaseWorkflow::new(&runner, &mut prompt);
    match workflow.run(mode, &current_version) {
        Ok(report) => {
            ui::display_report(&report);
            if report.publish_succeeded {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
        Err(ReleaseError::UserCancelled) => {
            println!("Operation cancelled by user.");
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
