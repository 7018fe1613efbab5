use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use clap::Parser;

use runner_docker_hook::cli::{Cli, Cmd};
use runner_docker_hook::{
    check_environment, container_runtime_path, error_print, exit_code_for_hook_error,
    resolve_gpu_options, run_docker_command, sanitize, set_color_mode, HookError,
    RunDockerOptions, DOCKER_CLI_ENVS, VISIBLE_DEVICES_VAR, WORKSPACE_VAR,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        set_color_mode(mode);
    }

    match cli.command {
        Cmd::Exec {
            workdir,
            env,
            stdin,
            args,
        } => run_exec(workdir, &env, stdin, &args),
        Cmd::Check => match check_environment() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error_print(&e.to_string());
                ExitCode::from(exit_code_for_hook_error(&e))
            }
        },
        Cmd::Sanitize { value } => {
            println!("{}", sanitize(&value));
            ExitCode::SUCCESS
        }
        Cmd::GpuOptions { create_options } => {
            println!("{}", resolve_gpu_options(&create_options));
            ExitCode::SUCCESS
        }
        Cmd::Doctor => {
            run_doctor();
            ExitCode::SUCCESS
        }
    }
}

fn run_exec(workdir: Option<PathBuf>, env_pairs: &[String], stdin: bool, args: &[String]) -> ExitCode {
    let mut env_map: BTreeMap<String, String> = BTreeMap::new();
    for pair in env_pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                env_map.insert(key.to_string(), value.to_string());
            }
            _ => {
                error_print(&format!("invalid --env entry: {pair} (expected KEY=VALUE)"));
                return ExitCode::from(2);
            }
        }
    }

    let input = if stdin {
        let mut buf = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
            error_print(&format!("failed to read stdin: {e}"));
            return ExitCode::from(1);
        }
        Some(buf)
    } else {
        None
    };

    let options = RunDockerOptions {
        working_dir: workdir,
        input,
        env: Some(env_map),
    };
    match run_docker_command(args, Some(options)) {
        Ok(stdout) => {
            print!("{stdout}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                // The failure diagnostic is already on stderr; relay the
                // captured docker stderr verbatim for the caller.
                HookError::Execution { stderr, .. } => eprint!("{stderr}"),
                other => error_print(&other.to_string()),
            }
            ExitCode::from(exit_code_for_hook_error(&e))
        }
    }
}

fn run_doctor() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("runner-docker-hook doctor");
    eprintln!("  version: v{}", version);
    eprintln!(
        "  host: {} / {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    match container_runtime_path() {
        Ok(p) => {
            eprintln!("  docker: {}", p.display());
            if let Ok(out) = Command::new(&p).arg("--version").output() {
                let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if !s.is_empty() {
                    eprintln!("  docker --version: {}", s);
                }
            }
        }
        Err(e) => {
            eprintln!("  docker: not found ({e})");
        }
    }

    let workspace = std::env::var(WORKSPACE_VAR).ok().filter(|v| !v.is_empty());
    eprintln!(
        "  {}: {}",
        WORKSPACE_VAR,
        workspace.as_deref().unwrap_or("(not set)")
    );
    let devices = std::env::var(VISIBLE_DEVICES_VAR)
        .ok()
        .filter(|v| !v.is_empty());
    eprintln!(
        "  {}: {}",
        VISIBLE_DEVICES_VAR,
        devices.as_deref().unwrap_or("(not set)")
    );

    let forwarded: Vec<&str> = DOCKER_CLI_ENVS
        .iter()
        .copied()
        .filter(|k| std::env::var(k).is_ok())
        .collect();
    if forwarded.is_empty() {
        eprintln!("  forwarded docker env: (none set)");
    } else {
        eprintln!("  forwarded docker env: {}", forwarded.join(", "));
    }
}
