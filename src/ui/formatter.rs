//! Output rendering separated from user interaction.
//!
//! Everything here only prints; no function reads input or touches the
//! repository.

use console::style;

use crate::release::{ReleaseMode, ReleaseReport};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning; warnings go to stderr like errors.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Startup banner: tool title, the version being released from, and the
/// release-type menu.
pub fn display_banner(current_version: &str) {
    println!("{}", rule());
    println!("{}", style("  npm release").bold());
    println!("{}", rule());
    println!("Current version: {}", style(current_version).cyan());
    println!();
    println!("Release types:");
    println!("  1. patch  - bug fix          x.y.z -> x.y.(z+1)");
    println!("  2. minor  - feature update   x.y.z -> x.(y+1).0");
    println!("  3. major  - breaking change  x.y.z -> (x+1).0.0");
    println!("  4. direct - publish the current version as-is");
    println!();
}

/// List the entries behind a dirty working tree, verbatim from porcelain.
pub fn display_changed_paths(paths: &[String]) {
    for path in paths {
        println!("    {}", style(path).dim());
    }
}

/// Echo captured command output, indented and dimmed. Silent commands print
/// nothing.
pub fn display_command_output(output: &str) {
    let text = output.trim();
    if text.is_empty() {
        return;
    }
    for line in text.lines() {
        println!("    {}", style(line).dim());
    }
}

/// Final summary: what was released, where it stands, and how to recover
/// from whatever failed.
pub fn display_report(report: &ReleaseReport) {
    println!();
    println!("{}", rule());
    println!("{}", style("  Release summary").bold());
    println!("{}", rule());
    println!("Release type: {}", report.mode.label());
    if report.mode == ReleaseMode::Direct {
        println!("Version:      {} (unchanged)", report.final_version);
    } else {
        println!("New version:  {}", report.final_version);
    }
    println!();

    if report.publish_succeeded {
        display_success("published to npm");
    } else {
        display_error("npm publish failed");
        if report.mode == ReleaseMode::Direct {
            println!(
                "  Publish manually with: {}",
                style("npm publish --access public").cyan()
            );
        } else {
            println!("  The version bump is already committed; publish manually with:");
            println!("  {}", style("npm publish --access public").cyan());
        }
    }

    if report.push_succeeded {
        display_success("commits and tags pushed");
    } else if report.publish_succeeded {
        display_warning("push failed; push manually with:");
        println!("  {}", style("git push --follow-tags").cyan());
    } else {
        display_status("push skipped (publish did not succeed)");
    }

    println!("{}", rule());
}
