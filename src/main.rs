//! Refolio: PDF folio correction CLI
//!
//! Picks a correction CSV from the base directory, previews the renames it
//! implies, asks for confirmation and applies them.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use refolio::cli::{
    confirm_renames, default_base_dir, prompt_base_dir, prompt_csv_choice, sole_csv_candidate,
    Cli, RunConfig,
};
use refolio::ingest::{ingest, require_csv_files, validate_base_dir};
use refolio::planner::{execute_with, plan};
use refolio::report::{
    display_execution_summary, display_preview, export_execution_report, export_plan_report,
    format_record, RunMetadata,
};
use refolio::utils::{
    create_rename_bar, create_spinner, finish_rename_bar, finish_with_success, print_banner,
    print_completion, print_config, print_info, print_rows_read, print_step_header, print_success,
    print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    print_banner(env!("CARGO_PKG_VERSION"));

    let config = resolve_config(&cli)?;
    run(&config)
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Turn arguments and prompt answers into an explicit run configuration
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let interactive = !cli.no_confirm;

    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None if interactive => prompt_base_dir(&default_base_dir())?,
        None => default_base_dir(),
    };
    validate_base_dir(&base_dir)?;

    let csv_path = match cli.csv_path(&base_dir) {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("CSV file not found: {}", path.display());
            }
            path
        }
        None => {
            let candidates = require_csv_files(&base_dir)?;
            if interactive {
                prompt_csv_choice(&candidates)?
            } else {
                sole_csv_candidate(&candidates)?
            }
        }
    };

    Ok(RunConfig {
        base_dir,
        csv_path,
        dry_run: cli.dry_run,
        confirm: interactive,
        report: cli.report.clone(),
    })
}

fn run(config: &RunConfig) -> Result<()> {
    print_config(&config.base_dir, &config.csv_path, config.dry_run);

    // Step 1: Read the correction table
    print_step_header(1, "Read Correction Table");

    let spinner = create_spinner("Reading CSV...");
    let ingested = ingest(&config.csv_path)
        .with_context(|| format!("Failed to ingest {}", config.csv_path.display()))?;
    finish_with_success(
        &spinner,
        &format!("Read CSV ({} delimiter)", ingested.dialect.delimiter_name()),
    );

    for warning in &ingested.warnings {
        print_warning(&warning.to_string());
    }

    if ingested.records.is_empty() {
        print_info("No valid rows in the CSV. Nothing to do.");
        return Ok(());
    }
    print_rows_read(ingested.records.len(), ingested.warnings.len());

    // Step 2: Plan and preview
    print_step_header(2, "Preview");

    let plan = plan(&config.base_dir, &ingested.records);
    display_preview(&plan);

    if config.dry_run {
        if let Some(path) = &config.report {
            let metadata = RunMetadata::new(&config.base_dir, &config.csv_path, true);
            export_plan_report(&plan, metadata, path)?;
            print_success(&format!("Report saved to {}", path.display()));
        }
        print_info("Dry run: no files were changed.");
        return Ok(());
    }

    if plan.counts.ready == 0 {
        print_info("Nothing to rename.");
    } else if config.confirm && !confirm_renames(plan.counts.ready)? {
        print_info("Operation cancelled. No changes were made.");
        return Ok(());
    }

    // Step 3: Apply renames
    print_step_header(3, "Apply Renames");

    let pb = create_rename_bar(plan.entries.len());
    let report = execute_with(plan.entries, |record| {
        pb.suspend(|| println!("    {}", format_record(record)));
        pb.inc(1);
    });
    finish_rename_bar(&pb, report.skipped);

    display_execution_summary(&report);

    if let Some(path) = &config.report {
        let metadata = RunMetadata::new(&config.base_dir, &config.csv_path, false);
        export_execution_report(&report, metadata, path)?;
        print_success(&format!("Report saved to {}", path.display()));
    }

    print_completion();

    Ok(())
}
