//! Tally CLI - replays administrator commands against an election ledger.
//!
//! ```text
//! tally <script.toml> [--report <path>] [--admin <identity>]
//! ```
//!
//! # Flow
//!
//! 1. Load `~/.tally/config.toml` (or `TALLY_CONFIG`)
//! 2. Initialize file logging
//! 3. Resolve the administrator: `--admin`, then the script, then config
//! 4. Run every step against a fresh ledger, printing one line per step
//! 5. Print the final standing and optionally write a JSON report

mod report;
mod script;

use anyhow::{Context, Result, bail};
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{Write, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tally_config::TallyConfig;
use tally_core::{Identity, LedgerSnapshot, SharedLedger};

use crate::report::Report;
use crate::script::Script;

const USAGE: &str = "usage: tally <script.toml> [--report <path>] [--admin <identity>]";

fn init_tracing(config: Option<&TallyConfig>) {
    let configured = config
        .and_then(TallyConfig::log_filter)
        .unwrap_or_else(|| "info".to_string());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&configured))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (log_file, init_warnings) = open_tally_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Step output goes to stdout; never interleave logs with it.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_tally_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in tally_log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn tally_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, e.g. ~/.tally/logs/tally.log
    if let Some(config_dir) = TallyConfig::path().and_then(|p| p.parent().map(PathBuf::from)) {
        candidates.push(config_dir.join("logs").join("tally.log"));
    }

    // Fallback: ./.tally/logs/tally.log
    candidates.push(PathBuf::from(".tally").join("logs").join("tally.log"));

    candidates
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    script: PathBuf,
    report: Option<PathBuf>,
    admin: Option<Identity>,
}

impl Args {
    fn parse(raw: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut script = None;
        let mut report = None;
        let mut admin = None;
        let mut raw = raw.into_iter();

        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--report" => {
                    let value = raw.next().context("--report needs a path")?;
                    report = Some(PathBuf::from(value));
                }
                "--admin" => {
                    let value = raw.next().context("--admin needs an identity")?;
                    admin = Some(Identity::new(value));
                }
                "-h" | "--help" => bail!("{USAGE}"),
                other if other.starts_with("--") => bail!("unknown option {other}\n{USAGE}"),
                other => {
                    if script.is_some() {
                        bail!("unexpected argument {other}\n{USAGE}");
                    }
                    script = Some(PathBuf::from(other));
                }
            }
        }

        Ok(Self {
            script: script.context(USAGE)?,
            report,
            admin,
        })
    }
}

fn standing(snapshot: &LedgerSnapshot) -> String {
    format!(
        "leader={} seats_a={} seats_b={} phase={} regions={}",
        snapshot.leader,
        snapshot.seats.a,
        snapshot.seats.b,
        snapshot.phase.as_str(),
        snapshot.regions.len()
    )
}

fn main() -> Result<()> {
    let (config, config_error) = match TallyConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (None, Some(err)),
    };
    init_tracing(config.as_ref());
    if let Some(err) = config_error {
        eprintln!("Warning: {err}");
    }

    let args = Args::parse(env::args().skip(1))?;
    let script = Script::load(&args.script)?;

    let administrator = args
        .admin
        .or_else(|| script.administrator.clone())
        .or_else(|| config.as_ref().and_then(TallyConfig::administrator))
        .context(
            "no administrator: pass --admin, set `administrator` in the script, \
             or set [election] administrator in the config",
        )?;
    tracing::info!(
        script = %args.script.display(),
        administrator = %administrator,
        steps = script.steps.len(),
        "Running script"
    );

    let ledger = SharedLedger::new(administrator);
    let outcomes = script::run(&ledger, &script);
    let snapshot = ledger.snapshot();

    let mut out = stdout().lock();
    for outcome in &outcomes {
        writeln!(out, "{outcome}")?;
    }
    writeln!(out, "{}", standing(&snapshot))?;
    out.flush()?;

    if let Some(path) = args
        .report
        .or_else(|| config.as_ref().and_then(TallyConfig::report_path))
    {
        Report::new(&ledger, &snapshot, &outcomes).write(&path)?;
    }

    Ok(())
}
