//! Builds the solver binaries and aggregates their benchmark reports.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, ensure, Context, Result};
use lib::cli::Report;
use serde::Deserialize;

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options. Everything after `--` is forwarded to the solvers.
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let mut solvers = build_solvers()?;
    solvers.sort_by(|a, b| a.name.cmp(&b.name));

    let mut total = Report::default();

    for solver in &solvers {
        total += run_solver(&opts, solver)?;
    }

    println!("total: {total}");
    Ok(())
}

/// A built solver binary.
struct Solver {
    name: String,
    path: PathBuf,
}

/// One line of `cargo build --message-format json` output. Non-artifact
/// lines carry neither target nor executable.
#[derive(Deserialize)]
struct BuildLine {
    reason: String,
    #[serde(default)]
    target: Option<Target>,
    #[serde(default)]
    executable: Option<PathBuf>,
}

#[derive(Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

/// Build the solver package and collect its binary artifacts.
fn build_solvers() -> Result<Vec<Solver>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release", "-p", "aoc2023"]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let output = child.stdout.take().context("missing stdout")?;

    let mut solvers = Vec::new();

    for line in serde_json::Deserializer::from_reader(output).into_iter::<BuildLine>() {
        let line = line?;

        if line.reason != "compiler-artifact" {
            continue;
        }

        let Some(target) = line.target else {
            continue;
        };

        if !target.kind.iter().any(|kind| kind == "bin") {
            continue;
        }

        let path = line.executable.context("missing executable")?;

        solvers.push(Solver {
            name: target.name,
            path,
        });
    }

    let status = child.wait()?;
    ensure!(status.success(), "cargo build: {status}");
    Ok(solvers)
}

/// One line of a solver's `--json` output.
#[derive(Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum SolverLine {
    Message(Message),
    Report(Report),
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

/// Run one solver with `--json` and sum the reports it emits.
fn run_solver(opts: &Opts, solver: &Solver) -> Result<Report> {
    let mut cmd = Command::new(&solver.path);
    cmd.stdout(Stdio::piped());
    cmd.args(&opts.args[..]);
    cmd.arg("--json");

    let mut child = cmd.spawn()?;
    let output = child.stdout.take().context("missing stdout")?;

    let mut total = Report::default();

    for line in serde_json::Deserializer::from_reader(output).into_iter::<SolverLine>() {
        match line? {
            SolverLine::Report(report) => {
                if !opts.quiet {
                    println!("{name}: {report}", name = solver.name);
                }

                total += report;
            }
            SolverLine::Message(message) => {
                if opts.is_verbose() || message.kind == "error" {
                    println!(
                        "{name}: {kind}: {output}",
                        name = solver.name,
                        kind = message.kind,
                        output = message.output
                    );
                }
            }
        }
    }

    let status = child.wait()?;
    ensure!(status.success(), "{name}: {status}", name = solver.name);
    Ok(total)
}
