//! Refscope CLI binary
//!
//! This is the main entry point for the refscope command-line interface.
//! The CLI is a thin adapter over existing APIs - NO logic is implemented here.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = refscope::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    // Execute command
    let result = match cli.command {
        refscope::cli::Commands::Analyze {
            symbol,
            glob,
            group_by,
        } => execute_analyze(&symbol, &glob, group_by, cli.json),

        refscope::cli::Commands::Classify { line, start, end } => {
            execute_classify(&line, start, end, cli.json)
        }
    };

    // Handle result
    match result {
        Ok(msg) => {
            println!("{}", msg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                let payload = refscope::cli::CliErrorPayload::from_error(&e);
                match serde_json::to_string_pretty(&payload) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("Error: {}", e),
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(1)
        }
    }
}

/// Execute the analyze command.
///
/// This function is a thin adapter that:
/// 1. Builds the glob search provider and filesystem line source
/// 2. Runs the analysis (provider failure recovers to zero occurrences)
/// 3. Stores the result in a holder and renders the grouped tree
///
/// All logic is delegated to existing APIs.
fn execute_analyze(
    symbol: &str,
    glob_pattern: &str,
    group_by: refscope::cli::GroupBy,
    json: bool,
) -> Result<String, refscope::RefscopeError> {
    use refscope::analyze::ResultHolder;
    use refscope::provider::{run_analysis, FileLineSource};
    use refscope::search::GlobSearchProvider;
    use refscope::tree::{build_tree, render_text, summary};

    // Step 1: Build collaborators
    let provider = GlobSearchProvider::new(glob_pattern.to_string());
    let lines = FileLineSource::new();

    // Step 2: Run the analysis
    let mut holder = ResultHolder::new();
    let result = holder.set(run_analysis(&provider, &lines, symbol));

    // Step 3: Render the grouped tree
    let nodes = build_tree(result, group_by.to_group_mode());
    let message = summary(result);

    if json {
        let payload = refscope::cli::CliSuccessPayload::with_data(
            message,
            serde_json::json!({
                "result": result,
                "tree": nodes,
            }),
        );
        return serde_json::to_string_pretty(&payload)
            .map_err(|e| refscope::RefscopeError::Other(e.to_string()));
    }

    if result.total_references == 0 {
        return Ok(format!("No references to '{}' found", symbol));
    }

    Ok(format!("{}\n{}", message, render_text(&nodes).trim_end()))
}

/// Execute the classify command.
///
/// Direct classifier probe: classify one line/span pair and print the
/// category. Span violations are hard errors here, per the classify contract.
fn execute_classify(
    line: &str,
    start: usize,
    end: usize,
    json: bool,
) -> Result<String, refscope::RefscopeError> {
    use refscope::classify::classify;

    let kind = classify(line, start, end)?;

    if json {
        let payload = refscope::cli::CliSuccessPayload::with_data(
            kind.as_str().to_string(),
            serde_json::json!({ "kind": kind }),
        );
        return serde_json::to_string_pretty(&payload)
            .map_err(|e| refscope::RefscopeError::Other(e.to_string()));
    }

    Ok(kind.as_str().to_string())
}
