// Shared test helpers for integration tests
#![allow(dead_code)]

use suite_report::{Failure, OperationReport, OperationType, StepReport, SuiteReport, TestReport};

/// Builds a finished test with one step holding one finished operation.
pub fn finished_test(name: &str, kind: OperationType, failure: Option<Failure>) -> TestReport {
    let mut op = OperationReport::new(format!("{}-op", name), kind);
    op.set_result("success");
    op.mark_end();

    let mut step = StepReport::new(format!("{}-step", name));
    step.add_operation(op);

    let mut test = TestReport::new(name, false, "", false, false);
    test.add_step(step);
    if let Some(failure) = failure {
        test.attach_failure(failure);
    }
    test.mark_end();
    test
}

/// The "smoke" scenario: one test, one step, one `apply` operation.
/// When `failure` is set it is attached to the test before the suite closes.
pub fn smoke_suite(failure: Option<Failure>) -> SuiteReport {
    let mut suite = SuiteReport::new("smoke");
    let mut test = TestReport::new("t1", false, "ns1", false, false);
    let mut step = StepReport::new("step1");
    let mut op = OperationReport::new("op1", OperationType::Apply);
    op.mark_end();
    step.add_operation(op);
    test.add_step(step);
    if let Some(failure) = failure {
        test.attach_failure(failure);
    }
    test.mark_end();
    suite.add_test(test);
    suite.close();
    suite
}

/// A closed suite of `total` tests where the first `failed` carry a failure.
pub fn suite_with_failures(total: usize, failed: usize) -> SuiteReport {
    let mut suite = SuiteReport::new("mixed");
    for i in 0..total {
        let failure = (i < failed).then(|| Failure::new(format!("case {} broke", i), "Error"));
        suite.add_test(finished_test(&format!("test-{}", i), OperationType::Assert, failure));
    }
    suite.close();
    suite
}

/// True if `s` matches `-?\d+\.\d{3}`.
pub fn is_three_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && int.chars().all(|c| c.is_ascii_digit())
                && frac.len() == 3
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
