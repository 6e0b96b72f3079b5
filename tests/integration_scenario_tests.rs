//! # End-to-End Scenario Tests / 端到端场景测试
//!
//! Drives the report API the way a runner does, from an empty suite to a
//! file on disk, and checks the console summary of the result.

mod common;

use common::is_three_decimal;
use serde_json::Value;
use std::fs;
use suite_report::reporting::console::{summary_lines, SummaryRow, TestStatus};
use suite_report::{
    get_serializer, save_report, Failure, OperationReport, OperationType, StepReport, SuiteReport,
    TestReport,
};
use tempfile::TempDir;

/// Runs the smoke scenario and returns the closed suite.
fn run_smoke(fail: bool) -> SuiteReport {
    let mut suite = SuiteReport::new("smoke");

    let mut test = TestReport::new("t1", false, "ns1", false, false);
    let mut step = StepReport::new("step1");
    let mut op = OperationReport::new("op1", OperationType::Apply);
    op.set_result("success");
    op.mark_end();
    step.add_operation(op);
    test.add_step(step);
    if fail {
        test.attach_failure(Failure::new("boom", "AssertionError"));
    }
    test.mark_end();
    suite.add_test(test);

    suite.close();
    suite
}

#[test]
fn test_smoke_scenario_to_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let suite = run_smoke(false);
    assert_eq!(suite.failures(), 0);

    let serializer = get_serializer("JSON").unwrap();
    let path = temp_dir.path().join("smoke.json");
    save_report(&suite, serializer.as_ref(), &path).unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["failures"], 0);
    assert_eq!(doc["reports"][0]["name"], "t1");
    assert_eq!(
        doc["reports"][0]["steps"][0]["results"][0]["operationType"],
        "apply"
    );
    assert!(is_three_decimal(doc["time"].as_str().unwrap()));
}

#[test]
fn test_failure_scenario_to_xml_file() {
    let temp_dir = TempDir::new().unwrap();
    let suite = run_smoke(true);
    assert_eq!(suite.failures(), 1);

    let path = suite
        .save_as("XML", temp_dir.path().join("smoke").to_str().unwrap())
        .unwrap();
    assert_eq!(path.extension().unwrap(), "xml");

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains("failures=\"1\""));
    assert!(xml.contains("message=\"boom\""));
    assert!(xml.contains("type=\"AssertionError\""));
}

#[test]
fn test_parallel_tests_collected_by_one_writer() {
    use std::sync::mpsc;
    use std::thread;

    let (tx, rx) = mpsc::channel();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tx = tx.clone();
            thread::spawn(move || {
                let failure = (i % 2 == 1).then(|| Failure::new("odd", "Error"));
                tx.send(common::finished_test(
                    &format!("worker-{}", i),
                    OperationType::Command,
                    failure,
                ))
                .unwrap();
            })
        })
        .collect();
    drop(tx);

    let mut suite = SuiteReport::new("parallel");
    for test in rx {
        suite.add_test(test);
    }
    for handle in handles {
        handle.join().unwrap();
    }
    suite.close();

    assert_eq!(suite.reports().len(), 4);
    assert_eq!(suite.failures(), 2);
}

#[test]
fn test_summary_lines() {
    let mut suite = SuiteReport::new("mixed");
    suite.add_test(common::finished_test("ok", OperationType::Apply, None));
    suite.add_test(common::finished_test(
        "bad",
        OperationType::Assert,
        Some(Failure::new("boom", "AssertionError")),
    ));
    let mut skipped = TestReport::new("later", false, "", true, false);
    skipped.mark_end();
    suite.add_test(skipped);
    suite.add_test(TestReport::new("unfinished", false, "", false, false));
    suite.close();

    let statuses: Vec<_> = suite.reports().iter().map(TestStatus::of).collect();
    assert_eq!(
        statuses,
        [
            TestStatus::Passed,
            TestStatus::Failed,
            TestStatus::Skipped,
            TestStatus::Passed
        ]
    );

    let lines = summary_lines(&suite);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "--- mixed ---");
    assert!(lines[1].contains("Passed") && lines[1].contains("ok"));
    assert!(lines[2].contains("(AssertionError: boom)"));
    assert!(lines[3].contains("Skipped"));
    assert!(lines[4].contains("N/A"));
    assert!(lines[5].starts_with("4 tests, 1 failed, total "));
}

#[test]
fn test_summary_of_open_suite_counts_failed_tests() {
    let mut suite = SuiteReport::new("open");
    suite.add_test(common::finished_test("ok", OperationType::Create, None));
    suite.add_test(common::finished_test(
        "bad",
        OperationType::Error,
        Some(Failure::new("exit status 1", "ScriptError")),
    ));
    assert_eq!(suite.failures(), 0);

    let lines = summary_lines(&suite);
    assert_eq!(lines.last().unwrap(), "2 tests, 1 failed, total N/A");
    for (line, test) in lines[1..=2].iter().zip(suite.reports()) {
        assert_eq!(*line, SummaryRow::of(test).plain());
    }
    let bad = SummaryRow::of(&suite.reports()[1]);
    assert_eq!(bad.status, TestStatus::Failed);
    assert_eq!(bad.detail.as_deref(), Some("  (ScriptError: exit status 1)"));
}
