//! Test execution engine.

use std::time::Instant;

use crate::diff;
use crate::error::HarnessError;
use crate::execute::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| execute_case(&fixture_set.family, case))
            .collect()
    }

    /// Like [`run`](Self::run), also writing one `case_result` log line per
    /// case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        emitter: &mut LogEmitter,
    ) -> Result<Vec<VerificationResult>, HarnessError> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let started = Instant::now();
            let result = execute_case(&fixture_set.family, case);
            let elapsed = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else if result.actual.starts_with("unsupported:") {
                (LogLevel::Error, Outcome::Error)
            } else {
                (LogLevel::Warn, Outcome::Fail)
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_campaign(&self.campaign)
                .with_symbol(&fixture_set.family, &case.function)
                .with_case(&case.name)
                .with_outcome(outcome)
                .with_duration_us(elapsed);
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            emitter.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }
}

fn execute_case(family: &str, case: &FixtureCase) -> VerificationResult {
    let (actual, diff) = match execute_fixture_case(&case.function, &case.inputs) {
        Ok(run) => {
            let diff = if run.output != case.expected_output {
                Some(diff::render_diff(&case.expected_output, &run.output))
            } else {
                run.note
            };
            (run.output, diff)
        }
        Err(err) => {
            let actual = format!("unsupported:{err}");
            let diff = Some(diff::render_diff(&case.expected_output, &actual));
            (actual, diff)
        }
    };

    VerificationResult {
        family: family.to_string(),
        case_name: case.name.clone(),
        function: case.function.clone(),
        standard_ref: case.standard_ref.clone(),
        passed: actual == case.expected_output,
        expected: case.expected_output.clone(),
        actual,
        diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_log::validate_log_line;

    fn fixture() -> FixtureSet {
        FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {"name":"copy","function":"memcpy","standard_ref":"C11 7.24.2.1","inputs":{"src":[1,2,3],"dst_len":3,"n":2},"expected_output":"[1, 2, 0]"},
                    {"name":"len","function":"strlen","standard_ref":"C11 7.24.6.3","inputs":{"s":"kernel"},"expected_output":"6"},
                    {"name":"wrong","function":"strlen","inputs":{"s":"ab"},"expected_output":"3"},
                    {"name":"unknown","function":"gets","inputs":{},"expected_output":"x"}
                ]
            }"#,
        )
        .expect("valid fixture json")
    }

    #[test]
    fn runner_executes_every_case() {
        let results = TestRunner::new("smoke").run(&fixture());
        assert_eq!(results.len(), 4);
        assert!(results[0].passed);
        assert!(results[1].passed);
        assert!(!results[2].passed);
        assert!(results[2].diff.as_deref().unwrap().contains("-3\n+2\n"));
        assert!(results[3].actual.starts_with("unsupported:"));
        assert!(results.iter().all(|r| r.family == "string"));
    }

    #[test]
    fn logged_run_writes_valid_lines() {
        let mut emitter = LogEmitter::to_buffer("smoke", "run-1");
        let results = TestRunner::new("smoke").run_logged(&fixture(), &mut emitter).unwrap();
        assert_eq!(results.len(), 4);

        let lines: Vec<_> = emitter.buffer_contents().unwrap().lines().map(String::from).collect();
        assert_eq!(lines.len(), 4);
        let entries: Vec<_> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| validate_log_line(line, i + 1).unwrap())
            .collect();
        assert_eq!(entries[0].outcome, Some(Outcome::Pass));
        assert_eq!(entries[2].outcome, Some(Outcome::Fail));
        assert_eq!(entries[3].outcome, Some(Outcome::Error));
        assert_eq!(entries[2].details.as_ref().unwrap()["actual"], "2");
        assert_eq!(entries[3].trace_id, "smoke::run-1::004");
    }
}
