//! # XML Reporting Module / XML 报告模块
//!
//! Renders a suite report as an indented markup document. Scalar fields are
//! attributes; `reports`, `steps` and `results` are repeated child elements;
//! `failure` and `message` are child elements written only when present.
//!
//! 将套件报告渲染为带缩进的标记文档。标量字段作为属性；
//! `reports`、`steps` 和 `results` 作为重复的子元素；
//! `failure` 和 `message` 仅在存在时作为子元素写出。
//!
//! ```xml
//! <TestsReport name="smoke" startTime="..." endTime="..." time="0.412" failures="1">
//!   <reports name="t1" startTime="..." endTime="..." time="0.400" namespace="ns1">
//!     <failure message="boom" type="AssertionError"/>
//!     <steps name="step1">
//!       <results name="op1" startTime="..." endTime="..." time="0.010" result="fail" operationType="assert">
//!         <message>expected 3 replicas</message>
//!       </results>
//!     </steps>
//!   </reports>
//! </TestsReport>
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::core::error::ReportError;
use crate::core::models::{OperationReport, StepReport, SuiteReport, TestReport};
use crate::reporting::serializer::ReportSerializer;

const ROOT_TAG: &str = "TestsReport";
const TEST_TAG: &str = "reports";
const STEP_TAG: &str = "steps";
const OPERATION_TAG: &str = "results";

type XmlWriter = Writer<Vec<u8>>;

/// Indented XML with two-space indentation and no XML declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl ReportSerializer for XmlSerializer {
    fn serialize(&self, report: &SuiteReport) -> Result<Vec<u8>, ReportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_suite(&mut writer, report)?;
        Ok(writer.into_inner())
    }
}

/// True for characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Replaces characters XML cannot carry (e.g. the ESC of ANSI colour codes)
/// with U+FFFD, so the document stays well-formed.
pub fn xml_safe(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(
            value
                .chars()
                .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
                .collect(),
        )
    }
}

/// Every attribute value goes through here.
fn attr(elem: &mut BytesStart<'_>, key: &str, value: &str) {
    elem.push_attribute((key, xml_safe(value).as_ref()));
}

fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn push_timing(
    elem: &mut BytesStart<'_>,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    time: &str,
) {
    attr(elem, "startTime", timestamp(start).as_str());
    if let Some(end) = end {
        attr(elem, "endTime", timestamp(end).as_str());
    }
    attr(elem, "time", time);
}

/// Writes `elem` as an empty tag when it has no children, otherwise as
/// start tag, children, end tag.
fn write_element<F>(
    writer: &mut XmlWriter,
    tag: &str,
    elem: BytesStart<'_>,
    has_children: bool,
    children: F,
) -> quick_xml::Result<()>
where
    F: FnOnce(&mut XmlWriter) -> quick_xml::Result<()>,
{
    if !has_children {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }
    writer.write_event(Event::Start(elem))?;
    children(writer)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_suite(writer: &mut XmlWriter, report: &SuiteReport) -> quick_xml::Result<()> {
    let mut root = BytesStart::new(ROOT_TAG);
    attr(&mut root, "name", report.name());
    push_timing(&mut root, report.start_time(), report.end_time(), report.time());
    attr(&mut root, "failures", report.failures().to_string().as_str());

    // The root is always written as a start/end pair, even for an empty suite.
    writer.write_event(Event::Start(root))?;
    for test in report.reports() {
        write_test(writer, test)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    Ok(())
}

fn write_test(writer: &mut XmlWriter, test: &TestReport) -> quick_xml::Result<()> {
    let mut elem = BytesStart::new(TEST_TAG);
    attr(&mut elem, "name", test.name());
    push_timing(&mut elem, test.start_time(), test.end_time(), test.time());
    if test.is_concurrent() {
        attr(&mut elem, "concurrent", "true");
    }
    if !test.namespace().is_empty() {
        attr(&mut elem, "namespace", test.namespace());
    }
    if test.is_skipped() {
        attr(&mut elem, "skip", "true");
    }
    if test.skip_delete() {
        attr(&mut elem, "skipDelete", "true");
    }

    let has_children = test.failure().is_some() || !test.steps().is_empty();
    write_element(writer, TEST_TAG, elem, has_children, |writer| {
        if let Some(failure) = test.failure() {
            let mut node = BytesStart::new("failure");
            attr(&mut node, "message", failure.message.as_str());
            attr(&mut node, "type", failure.kind.as_str());
            writer.write_event(Event::Empty(node))?;
        }
        for step in test.steps() {
            write_step(writer, step)?;
        }
        Ok(())
    })
}

fn write_step(writer: &mut XmlWriter, step: &StepReport) -> quick_xml::Result<()> {
    let mut elem = BytesStart::new(STEP_TAG);
    if !step.name().is_empty() {
        attr(&mut elem, "name", step.name());
    }
    write_element(writer, STEP_TAG, elem, !step.results().is_empty(), |writer| {
        for operation in step.results() {
            write_operation(writer, operation)?;
        }
        Ok(())
    })
}

fn write_operation(writer: &mut XmlWriter, operation: &OperationReport) -> quick_xml::Result<()> {
    let mut elem = BytesStart::new(OPERATION_TAG);
    attr(&mut elem, "name", operation.name());
    push_timing(
        &mut elem,
        operation.start_time(),
        operation.end_time(),
        operation.time(),
    );
    attr(&mut elem, "result", operation.result());
    attr(&mut elem, "operationType", operation.operation_type().as_str());

    write_element(writer, OPERATION_TAG, elem, operation.message().is_some(), |writer| {
        if let Some(message) = operation.message() {
            writer.write_event(Event::Start(BytesStart::new("message")))?;
            writer.write_event(Event::Text(BytesText::new(&xml_safe(message))))?;
            writer.write_event(Event::End(BytesEnd::new("message")))?;
        }
        Ok(())
    })
}
