use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ColorMode;

#[derive(Parser, Debug)]
#[command(
    name = "runner-docker-hook",
    version,
    about = "Docker CLI adapter for CI job runners"
)]
pub struct Cli {
    /// Colorize diagnostics: auto|always|never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run a docker command with the runner environment policy applied
    Exec {
        /// Working directory for the docker process
        #[arg(long = "workdir", value_name = "DIR")]
        workdir: Option<PathBuf>,
        /// Extra child environment entries; ambient Docker CLI variables still win
        #[arg(long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,
        /// Forward this process's stdin to the docker process
        #[arg(long = "stdin")]
        stdin: bool,
        /// Arguments handed to docker after normalization
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            required = true,
            value_name = "ARGS"
        )]
        args: Vec<String>,
    },
    /// Verify the runner environment is usable (GITHUB_WORKSPACE present)
    Check,
    /// Reduce a value to an identifier-shaped string
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Resolve the --gpus runner_decide placeholder in container create options
    GpuOptions {
        #[arg(allow_hyphen_values = true, value_name = "CREATE_OPTIONS")]
        create_options: String,
    },
    /// Print an environment report
    Doctor,
}
