//! CLI entrypoint for the kernlibc conformance harness.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use kernlibc_harness::execute::SUPPORTED_FUNCTIONS;
use kernlibc_harness::fixtures::{self, FixtureSet};
use kernlibc_harness::structured_log::{
    self, ArtifactIndex, LogEmitter, LogEntry, LogLevel, validate_log_file,
};
use kernlibc_harness::verify::{self, VerificationSummary};
use kernlibc_harness::{ConformanceReport, HarnessError, TestRunner};

const CAMPAIGN: &str = "fixture-verify";

/// Conformance tooling for kernlibc.
#[derive(Debug, Parser)]
#[command(name = "kernlibc-harness")]
#[command(about = "Conformance testing harness for kernlibc")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the implementation against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a JSON twin and an artifact index
        /// are written next to it).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// List fixture sets, their case counts, and functions without fixtures.
    List {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        path: PathBuf,
    },
}

fn load_fixture_sets(dir: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    let mut sets = Vec::new();
    for path in fixtures::fixture_paths(dir)? {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {err}", path.display()),
        }
    }
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }
    Ok(sets)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = load_fixture_sets(&fixture)?;
            let run_id = format!("run-{}", std::process::id());
            let runner = TestRunner::new(CAMPAIGN);

            let mut emitter = match &log {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    Some(LogEmitter::to_file(path, CAMPAIGN, &run_id)?)
                }
                None => None,
            };

            let mut results = Vec::new();
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "campaign_start")?;
                for set in &fixture_sets {
                    results.extend(runner.run_logged(set, emitter)?);
                }
            } else {
                for set in &fixture_sets {
                    results.extend(runner.run(set));
                }
            }

            verify::sort_results(&mut results);
            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("kernlibc Conformance Report"),
                campaign: String::from(CAMPAIGN),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {} / {}", failure.function, failure.case_name);
                if let Some(diff) = &failure.diff {
                    eprint!("{diff}");
                }
            }

            if let Some(emitter) = emitter.as_mut() {
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "campaign_end").with_details(
                        serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        }),
                    ),
                )?;
                emitter.flush()?;
            }

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;

                let mut index = ArtifactIndex::new(&run_id, CAMPAIGN);
                index.add_file(&report_path, "report_markdown")?;
                index.add_file(&json_path, "report_json")?;
                if let Some(log_path) = &log {
                    index.add_file(log_path, "log")?;
                }
                let index_path = report_path.with_extension("artifacts.json");
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", index_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::List { fixture } => {
            let fixture_sets = load_fixture_sets(&fixture)?;
            let mut covered = std::collections::BTreeSet::new();
            for set in &fixture_sets {
                println!("{} ({}): {} case(s)", set.family, set.version, set.cases.len());
                covered.extend(set.cases.iter().map(|case| case.function.as_str()));
            }
            let uncovered: Vec<_> = SUPPORTED_FUNCTIONS
                .iter()
                .filter(|function| !covered.contains(**function))
                .collect();
            if uncovered.is_empty() {
                println!("every supported function has fixtures");
            } else {
                println!("without fixtures: {uncovered:?}");
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            if !errors.is_empty() {
                return Err(format!("{} error(s) in {lines} line(s)", errors.len()).into());
            }
            eprintln!("{}: {lines} valid line(s)", path.display());
        }
    }

    Ok(())
}
