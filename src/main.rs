// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, warn};

use demake::{
    Buildfile, DryRunner, Executor, ProcessRunner, Result, SystemRunner, Variables,
    Variant,
};

/// Builds the demo program, runs its Python checks and lints the Python sources
#[derive(Parser)]
#[command(name = "demake", version, about, long_about = None)]
struct Cli {
    /// Targets to bring up to date (default: all) and NAME=VALUE variable overrides
    #[arg(value_name = "TARGET|NAME=VALUE")]
    words: Vec<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Set of targets to use
    #[arg(long, value_enum, default_value = "full", env = "DEMAKE_VARIANT")]
    variant: VariantArg,

    /// Print the commands that would run without running them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// List the targets and exit
    #[arg(short, long)]
    list: bool,

    /// Print the target list as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// build, check and lint
    Full,
    /// build and lint, no check target
    Lean,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => Variant::Full,
            VariantArg::Lean => Variant::Lean,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("demake: *** {error}");
            let code = error.exit_code();
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let buildfile = Buildfile::new(cli.variant.into());

    if cli.list {
        return list(&buildfile, cli.json);
    }

    load_dotenv(&cli.directory);
    let mut variables = Variables::from_env();
    let mut goals = Vec::new();
    for word in &cli.words {
        if word.contains('=') {
            variables.apply_assignment(word)?;
        } else {
            goals.push(word.as_str());
        }
    }

    if cli.dry_run {
        execute(&buildfile, &variables, DryRunner, &cli.directory, &goals)
    } else {
        execute(&buildfile, &variables, SystemRunner, &cli.directory, &goals)
    }
}

fn execute<R: ProcessRunner>(
    buildfile: &Buildfile,
    variables: &Variables,
    runner: R,
    directory: &Path,
    goals: &[&str],
) -> Result<()> {
    let executor = Executor::new(buildfile, variables, runner, directory);
    let report = executor.run(goals)?;
    if report.nothing_done() {
        let goals = if goals.is_empty() {
            buildfile.default_goal().to_string()
        } else {
            goals.join(" ")
        };
        println!("demake: Nothing to be done for '{goals}'.");
    }
    Ok(())
}

fn list(buildfile: &Buildfile, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(buildfile)?);
    } else {
        for target in buildfile.targets() {
            let marker = if target.phony { "" } else { "  (file)" };
            println!("{target}{marker}");
        }
    }
    Ok(())
}

/// Values from `.env` never override variables already set in the environment.
fn load_dotenv(directory: &Path) {
    match dotenvy::from_path(directory.join(".env")) {
        Ok(()) => debug!("Loaded variables from '{}'", directory.join(".env").display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring '.env' file: {e}"),
    }
}
