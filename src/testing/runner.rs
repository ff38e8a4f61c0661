//! Test runner implementation
//!
//! Walks the manifest in order, one subprocess at a time, and prints a
//! verdict per entry. Mismatches never stop the run; only fatal errors do.

use std::io::Write;
use std::path::Path;

use super::classify::classify;
use super::executor::Executor;
use super::manifest::{Manifest, ManifestRecord};
use crate::common::Result;

/// Counts for a completed run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Run every manifest entry through `executor`, writing results to `out`
pub async fn run_manifest<E, W>(
    manifest: &Manifest,
    input_dir: &Path,
    executor: &mut E,
    out: &mut W,
) -> Result<RunReport>
where
    E: Executor,
    W: Write,
{
    let mut report = RunReport::default();

    for record in &manifest.records {
        let entry = match record {
            ManifestRecord::Entry(entry) => entry,
            ManifestRecord::Comment { name, line } => {
                tracing::trace!(name = %name, line, "Skipping commented entry");
                report.skipped += 1;
                continue;
            }
        };

        writeln!(out, "running : {}", entry.name)?;
        out.flush()?;

        let output = executor.capture(&input_dir.join(&entry.name)).await?;
        let verdict = classify(&entry.expected, &output);
        verdict.render(&entry.name, out)?;

        report.executed += 1;
        if verdict.passed() {
            report.passed += 1;
        } else {
            tracing::debug!(name = %entry.name, ?verdict, "Entry failed");
            report.failed += 1;
        }
    }

    tracing::info!(
        manifest = %manifest.path.display(),
        executed = report.executed,
        passed = report.passed,
        failed = report.failed,
        skipped = report.skipped,
        "Run complete"
    );

    Ok(report)
}

/// Write the parsed manifest without executing anything
pub fn list_manifest<W: Write>(manifest: &Manifest, out: &mut W) -> Result<()> {
    for record in &manifest.records {
        match record {
            ManifestRecord::Entry(entry) => {
                if entry.expected.is_empty() {
                    writeln!(out, "{:>4}  {}  (no report)", entry.line, entry.name)?;
                } else {
                    writeln!(
                        out,
                        "{:>4}  {}  expects \"{}\"",
                        entry.line, entry.name, entry.expected
                    )?;
                }
            }
            ManifestRecord::Comment { name, line } => {
                writeln!(out, "{:>4}  {}  (skipped)", line, name)?;
            }
        }
    }
    writeln!(
        out,
        "{} entries, {} skipped",
        manifest.entries().count(),
        manifest.skipped()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    use async_trait::async_trait;

    use crate::common::Error;

    /// Replays canned output per input path and records every invocation
    #[derive(Default)]
    struct FakeExecutor {
        outputs: HashMap<PathBuf, Vec<String>>,
        invoked: Vec<PathBuf>,
    }

    impl FakeExecutor {
        fn with(mut self, input: &str, lines: &[&str]) -> Self {
            self.outputs.insert(
                Path::new("inputs").join(input),
                lines.iter().map(|s| s.to_string()).collect(),
            );
            self
        }
    }

    #[async_trait]
    impl Executor for FakeExecutor {
        async fn capture(&mut self, input: &Path) -> Result<Vec<String>> {
            self.invoked.push(input.to_path_buf());
            self.outputs
                .get(input)
                .cloned()
                .ok_or_else(|| Error::Internal(format!("no canned output for {}", input.display())))
        }
    }

    fn manifest(content: &str) -> Manifest {
        Manifest::parse(Path::new("systemTestsList.txt"), content).unwrap()
    }

    async fn run(content: &str, exec: &mut FakeExecutor) -> (RunReport, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let report = run_manifest(&manifest(content), Path::new("inputs"), exec, &mut out)
            .await
            .unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_comment_entries_are_never_invoked() {
        let mut exec = FakeExecutor::default().with("ok1.txt", &["bugreport 0.1"]);
        let (report, out) = run("#skip.txt,anything\nok1.txt,\n", &mut exec).await;

        assert_eq!(exec.invoked, vec![PathBuf::from("inputs/ok1.txt")]);
        assert_eq!(out, "running : ok1.txt\nOK.\n");
        assert_eq!(
            report,
            RunReport {
                executed: 1,
                passed: 1,
                failed: 0,
                skipped: 1
            }
        );
    }

    #[tokio::test]
    async fn test_prefix_match_reports_ok() {
        let mut exec = FakeExecutor::default()
            .with("crash1.txt", &["cmd echo", "Segmentation fault detected"]);
        let (report, out) = run("crash1.txt,Segmentation fault\n", &mut exec).await;

        assert_eq!(out, "running : crash1.txt\nOK.\n");
        assert_eq!(report.passed, 1);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_run() {
        let mut exec = FakeExecutor::default()
            .with("a.txt", &["bugreport 0.1"])
            .with("b.txt", &["bugreport 0.1", "OOB at EIP 0x1", "OOB at EIP 0x2"])
            .with("c.txt", &["bugreport 0.1"]);
        let (report, out) = run("a.txt,OOB\nb.txt,OOB at EIP 0x1\nc.txt,\n", &mut exec).await;

        assert_eq!(
            out,
            "running : a.txt\n\
             ERROR: a.txt expected == OOB got nothing.\n\
             running : b.txt\n\
             ERROR: expected \"OOB at EIP 0x1\" got \n\
             \tOOB at EIP 0x1\n\
             \tOOB at EIP 0x2\n\
             running : c.txt\n\
             OK.\n"
        );
        assert_eq!(
            report,
            RunReport {
                executed: 3,
                passed: 1,
                failed: 2,
                skipped: 0
            }
        );
    }

    #[tokio::test]
    async fn test_invocations_match_non_comment_lines() {
        let mut exec = FakeExecutor::default()
            .with("1.txt", &["b"])
            .with("2.txt", &["b"])
            .with("3.txt", &["b"]);
        let content = "1.txt,\n#x.txt,\n2.txt,\n#y.txt,z\n3.txt,\n";
        let (report, _) = run(content, &mut exec).await;

        assert_eq!(exec.invoked.len(), 3);
        assert_eq!(report.executed + report.skipped, 5);
    }

    #[tokio::test]
    async fn test_executor_error_aborts() {
        colored::control::set_override(false);
        let mut exec = FakeExecutor::default().with("a.txt", &["b"]);
        let mut out = Vec::new();
        let result = run_manifest(
            &manifest("a.txt,\nmissing.txt,\n"),
            Path::new("inputs"),
            &mut exec,
            &mut out,
        )
        .await;

        assert!(matches!(result, Err(Error::Internal(_))));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "running : a.txt\nOK.\nrunning : missing.txt\n"
        );
    }

    #[test]
    fn test_list_manifest() {
        let mut out = Vec::new();
        list_manifest(&manifest("ok1.txt,\n#skip.txt,x\nheap2.txt,OOB\n"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "   1  ok1.txt  (no report)\n   2  #skip.txt  (skipped)\n   3  heap2.txt  expects \"OOB\"\n2 entries, 1 skipped\n"
        );
    }
}
