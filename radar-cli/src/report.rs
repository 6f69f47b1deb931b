//! Terminal output for runs and their results

use colored::*;
use radar_client::BucketVerdict;
use radar_core::domain::outcome::RunOutcome;
use radar_core::domain::run::{RunDescriptor, RunResult};

/// Print a run as returned by the trigger call
pub fn print_run_summary(run: &RunDescriptor) {
    println!("  {} {}", "▸".cyan(), run.display_name().bold());
    println!("    Run:         {}", run.test_run_id.dimmed());
    if let Some(environment) = &run.environment_name {
        println!("    Environment: {}", environment);
    }
    if let Some(agent) = &run.agent {
        println!("    Agent:       {}", agent.dimmed());
    }
    if let Some(url) = &run.test_run_url {
        println!("    URL:         {}", url.dimmed());
    }
    println!();
}

/// Print a one-line result, marked against the expected outcome
pub fn print_result_row(result: &RunResult, expected: &RunOutcome) {
    let mark = if result.result().matches(expected) {
        "✓".green()
    } else {
        "✗".red()
    };

    let duration = result
        .duration()
        .map(|d| format!("{:.1}s", d.num_milliseconds() as f64 / 1000.0))
        .unwrap_or_default();

    println!(
        "  {} {:<40} {:<8} {:>4}/{:<4} {}",
        mark,
        result.run.display_name(),
        colorize_outcome(result.result()),
        result.detail.assertions_passed,
        result.detail.assertions_defined,
        duration.dimmed()
    );
}

/// Print everything known about a single run
pub fn print_result_details(result: &RunResult) {
    println!("{}", "Run Details:".bold());
    println!("  Bucket:     {}", result.run.bucket_key.dimmed());
    println!("  Test:       {}", result.run.test_id.cyan());
    println!("  Run:        {}", result.run.test_run_id.cyan());
    println!("  Result:     {}", colorize_outcome(result.result()));

    if let Some(started) = result.started_at_utc() {
        println!("  Started:    {}", started.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(finished) = result.finished_at_utc() {
        println!("  Finished:   {}", finished.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(duration) = result.duration() {
        println!("  Duration:   {}s", duration.num_seconds());
    }

    let detail = &result.detail;
    println!("\n{}", "Counts:".bold());
    println!("  Requests:   {}", detail.requests_executed);
    println!(
        "  Assertions: {} passed, {} failed of {}",
        detail.assertions_passed, detail.assertions_failed, detail.assertions_defined
    );
    println!(
        "  Scripts:    {} passed, {} failed of {}",
        detail.scripts_passed, detail.scripts_failed, detail.scripts_defined
    );
    println!(
        "  Variables:  {} passed, {} failed of {}",
        detail.variables_passed, detail.variables_failed, detail.variables_defined
    );

    if !detail.requests.is_empty() {
        println!("\n{}", "Requests:".bold());
        for request in &detail.requests {
            println!(
                "  {} {} {}",
                request.method.as_deref().unwrap_or("-"),
                request.url.as_deref().unwrap_or("-"),
                request.result.as_deref().unwrap_or("-").dimmed()
            );
        }
    }
}

/// Print the `name: result - url` line of every mismatching run
pub fn print_mismatches(verdict: &BucketVerdict) {
    println!("{}", verdict.summary().red());
    for line in verdict.report_lines() {
        println!("  {}", line);
    }
}

/// Colorize a run outcome for display
fn colorize_outcome(outcome: &RunOutcome) -> ColoredString {
    match outcome {
        RunOutcome::Pass => outcome.as_str().green(),
        RunOutcome::Fail => outcome.as_str().red(),
        RunOutcome::Working => outcome.as_str().yellow(),
        RunOutcome::Other(value) => value.as_str().dimmed(),
    }
}
