//! Application orchestrator.
//! Loads/merges config, initializes logging, picks the overwrite decision,
//! runs the swap and turns the outcome into user output and an exit code.

use anyhow::{anyhow, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info};

use swap_names::cli::Args;
use swap_names::config::{create_template_config, load_config, CONFIG_ENV};
use swap_names::output as out;
use swap_names::{
    default_config_path, swap_with_options, OverwriteDecision, OverwritePolicy, SwapError,
    SwapOutcome, SwapPlan,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Config-location commands run before logging init
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }
    if args.init_config {
        let path = default_config_path()?;
        create_template_config(&path)?;
        out::print_success(&format!("A template swap_names config was written to: {}", path.display()));
        return Ok(ExitCode::SUCCESS);
    }

    // Config file values, then CLI overrides (CLI wins)
    let (mut cfg, cfg_source) = load_config()?;
    args.apply_overrides(&mut cfg);

    // Held until return so the non-blocking file writer flushes
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!(
        config = %cfg_source.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "<defaults>".into()),
        overwrite = %cfg.overwrite,
        rollback = cfg.rollback,
        dry_run = cfg.dry_run,
        "Starting swap-names"
    );

    let (first, second) = args
        .resolved_paths()
        .ok_or_else(|| anyhow!("two file paths are required"))?;

    if cfg.dry_run {
        return Ok(match dry_run(&first, &second, cfg.overwrite) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report_failure(&e),
        });
    }

    let mut decision = decision_for(cfg.overwrite);
    match swap_with_options(&first, &second, decision.as_mut(), &cfg.swap_options()) {
        Ok(SwapOutcome::Swapped { first: now_first, second: now_second }) => {
            info!(
                first = %first.display(),
                second = %second.display(),
                "Swap completed"
            );
            out::print_success(&format!(
                "swapped '{}' <-> '{}'",
                first.display(),
                second.display()
            ));
            debug!(first = %now_first.display(), second = %now_second.display(), "final paths");
            Ok(ExitCode::SUCCESS)
        }
        Ok(SwapOutcome::Declined { path }) => {
            out::print_info(&format!(
                "not performed: '{}' already exists and was not replaced",
                path.display()
            ));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

fn print_config_location() {
    if let Some(cfg_env) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}\n",
            Path::new(&cfg_env).display()
        ));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default swap_names config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

/// Map the configured policy to a decision. `Ask` prompts when a human is at
/// the terminal and declines otherwise (the safe answer, like a dialog's default "No").
fn decision_for(policy: OverwritePolicy) -> Box<dyn OverwriteDecision> {
    match policy {
        OverwritePolicy::Always | OverwritePolicy::Never => Box::new(policy),
        OverwritePolicy::Ask if out::stdin_is_interactive() => Box::new(|dest: &Path| {
            let question = format!(
                "'{}' already exists. Replace it? Its current content will be lost.",
                dest.display()
            );
            out::confirm(&question).unwrap_or_else(|e| {
                out::print_warn(&format!("Could not read an answer ({e}); not replacing."));
                false
            })
        }),
        OverwritePolicy::Ask => Box::new(|dest: &Path| {
            out::print_warn(&format!(
                "'{}' already exists and stdin is not a terminal; not replacing (use --yes-to-overwrite to allow).",
                dest.display()
            ));
            false
        }),
    }
}

/// Validate and print the plan without touching the filesystem.
fn dry_run(first: &Path, second: &Path, policy: OverwritePolicy) -> Result<(), SwapError> {
    let plan = SwapPlan::new(first, second)?;
    if plan.is_noop() {
        out::print_info("dry-run: both files already have the same name; nothing to do");
        return Ok(());
    }
    out::print_info(&format!(
        "dry-run: would rename '{}' -> '{}'",
        plan.first.path().display(),
        plan.first_dest.display()
    ));
    out::print_info(&format!(
        "dry-run: would rename '{}' -> '{}'",
        plan.second.path().display(),
        plan.second_dest.display()
    ));
    for dest in plan.conflicts()? {
        out::print_info(&format!(
            "dry-run: '{}' already exists and would be replaced only if allowed (overwrite policy: {})",
            dest.display(),
            policy
        ));
    }
    Ok(())
}

fn report_failure(e: &SwapError) -> ExitCode {
    let code = e.code();
    let kind = e.kind();
    match e {
        SwapError::Io { op, path, source } => {
            error!(code, kind, op = *op, path = %path.display(), error = %source, "Swap failed")
        }
        SwapError::Incomplete { step, removed, rolled_back, stranded, .. } => {
            error!(
                code,
                kind,
                %step,
                removed = removed.len(),
                rolled_back = *rolled_back,
                stranded = stranded.len(),
                "Swap left incomplete"
            )
        }
        _ => error!(code, kind, error = %e, "Swap refused"),
    }

    out::print_error(&e.to_string());
    if !e.stranded().is_empty() {
        out::print_warn("Rename the stranded files back to their original names to recover.");
    }
    ExitCode::from(code)
}
