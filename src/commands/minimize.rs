//! PATH minimization command implementation
//!
//! Reads the PATH-like value, hides and keeps the requested commands, and
//! writes the reduced value to the given output.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::core::{
    dedup_dirs, ensure_preserved, get_iteration_limit, get_variable_name, read_dirs_from_env,
    split_dirs, FileConfig, MinimizeOutcome, PathMinimizer,
};
use crate::oracle::{ResolutionOracle, SystemOracle};

/// CLI arguments for the minimize command
#[derive(Clone, Debug, Default)]
pub struct MinimizeArgs {
    /// Commands that must keep resolving to the same executable
    pub commands: Vec<String>,
    /// Commands that must stop resolving
    pub hide: Vec<String>,
    /// Variable to read (--var)
    pub variable: Option<String>,
    /// Literal value used instead of the environment (--path)
    pub path_value: Option<String>,
    /// Iteration budget (--limit)
    pub limit: Option<usize>,
    /// Verify resolutions before printing (--check)
    pub check: bool,
    /// Explicit config file (--config)
    pub config: Option<PathBuf>,
}

/// Fully resolved inputs for one run
#[derive(Clone, Debug, PartialEq)]
pub struct MinimizePlan {
    pub variable: String,
    pub dirs: Vec<String>,
    pub keep: Vec<String>,
    pub hide: Vec<String>,
    pub limit: usize,
    pub check: bool,
}

impl MinimizePlan {
    /// Merges CLI arguments with the config file and reads the starting list
    pub fn from_args(args: &MinimizeArgs, file: &FileConfig) -> Result<Self> {
        let variable = get_variable_name(args.variable.as_deref(), file);
        let dirs = match &args.path_value {
            Some(value) => dedup_dirs(split_dirs(value)),
            None => read_dirs_from_env(&variable)?,
        };

        let keep = dedup_dirs(args.commands.iter().chain(&file.commands).cloned().collect());
        let hide = dedup_dirs(args.hide.iter().chain(&file.hide).cloned().collect());

        Ok(Self {
            variable,
            dirs,
            keep,
            hide,
            limit: get_iteration_limit(args.limit, file),
            check: args.check,
        })
    }
}

/// Runs a plan against the given oracle
pub fn execute_plan(oracle: &dyn ResolutionOracle, plan: &MinimizePlan) -> Result<MinimizeOutcome> {
    let minimizer = PathMinimizer::new(oracle).with_limit(plan.limit);
    let outcome = minimizer.run(plan.dirs.clone(), &plan.hide, &plan.keep)?;

    if plan.check {
        let baseline = if plan.hide.is_empty() {
            plan.dirs.clone()
        } else {
            minimizer.hide(plan.dirs.clone(), &plan.hide)?.dirs
        };
        ensure_preserved(oracle, &plan.keep, &baseline, &outcome.dirs)
            .context("Minimized list does not preserve command resolution")?;
    }

    info!(
        "Kept {} of {} directories in {} ({} of {} passes)",
        outcome.dirs.len(),
        plan.dirs.len(),
        plan.variable,
        outcome.iterations,
        minimizer.limit()
    );
    Ok(outcome)
}

/// Handles the minimize command, writing the result line to `out`
pub fn handle_minimize_command(args: &MinimizeArgs, out: &mut dyn Write) -> Result<()> {
    let file = FileConfig::discover(args.config.as_deref()).context("Failed to load config")?;
    let plan = MinimizePlan::from_args(args, &file)?;

    let oracle = SystemOracle::new();
    let outcome = execute_plan(&oracle, &plan)?;

    writeln!(out, "{}", outcome.joined())?;
    out.flush()?;
    Ok(())
}
