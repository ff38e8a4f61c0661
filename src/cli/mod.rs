//! CLI command handling
//!
//! Resolves the effective runner settings and dispatches to the runner.

use crate::commands::{Commands, RunnerOptions};
use crate::common::config::{Config, RunnerConfig};
use crate::common::Result;
use crate::testing::{list_manifest, run_manifest, Manifest, ProcessExecutor};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, opts: RunnerOptions) -> Result<()> {
    if opts.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(opts.config.as_deref())?;
    let settings = resolve(config.runner, &opts);
    tracing::debug!(?settings, "Resolved runner settings");

    let manifest = Manifest::load(&settings.manifest)?;
    let mut stdout = std::io::stdout();

    match command {
        Commands::List => list_manifest(&manifest, &mut stdout),

        Commands::Run => {
            let mut executor = ProcessExecutor::new(&settings.executable);
            if let Some(launcher) = &settings.launcher {
                executor = executor.with_launcher(launcher)?;
            }

            // Per-test failures are reported, not turned into an exit code
            run_manifest(&manifest, &settings.input_dir, &mut executor, &mut stdout).await?;
            Ok(())
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration
pub fn resolve(mut runner: RunnerConfig, opts: &RunnerOptions) -> RunnerConfig {
    if let Some(manifest) = &opts.manifest {
        runner.manifest = manifest.clone();
    }
    if let Some(executable) = &opts.executable {
        runner.executable = executable.clone();
    }
    if let Some(input_dir) = &opts.input_dir {
        runner.input_dir = input_dir.clone();
    }
    if let Some(launcher) = &opts.launcher {
        runner.launcher = Some(launcher.clone());
    }
    runner
}
