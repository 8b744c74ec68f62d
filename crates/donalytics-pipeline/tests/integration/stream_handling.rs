//! Input stream edge cases: blank lines, terminators, short rows, odd bytes.

use crate::common::{SAMPLE_ITCONT, SAMPLE_OUTPUT_P30, fec_line, pipeline, run_to_string};
use donalytics_pipeline::RunCounters;

#[test]
fn test_blank_lines_are_not_counted() {
    let input = format!("\n\n{}\n\n", SAMPLE_ITCONT.replace('\n', "\n\n"));
    let (output, counters) = run_to_string(30, input.as_bytes());
    assert_eq!(output, SAMPLE_OUTPUT_P30);
    assert_eq!(counters.total, 7);
}

#[test]
fn test_crlf_terminators() {
    let input = SAMPLE_ITCONT.replace('\n', "\r\n");
    let (output, counters) = run_to_string(30, input.as_bytes());
    assert_eq!(output, SAMPLE_OUTPUT_P30);
    assert_eq!(counters.valid, 6);
}

#[test]
fn test_bare_carriage_return_terminators() {
    let input = SAMPLE_ITCONT.replace('\n', "\r");
    let (output, counters) = run_to_string(30, input.as_bytes());
    assert_eq!(output, SAMPLE_OUTPUT_P30);
    assert_eq!(counters.total, 7);

    let mut p = pipeline(30);
    assert_eq!(p.process_text(&input).unwrap().len(), 7);
    assert_eq!(p.counters(), counters);
}

#[test]
fn test_short_rows_are_dropped_not_fatal() {
    let input = format!("C00384516|N|M2|P\n{SAMPLE_ITCONT}only-one-field\n");
    let (output, counters) = run_to_string(30, input.as_bytes());
    assert_eq!(output, SAMPLE_OUTPUT_P30);
    assert_eq!(
        counters,
        RunCounters {
            total: 9,
            valid: 6,
            repeat: 2
        }
    );
}

#[test]
fn test_exactly_sixteen_fields_with_empty_last() {
    let row = |date: &str| format!("C00000001|N|M2|P|X|15|IND|A|CITY|ST|10001|E|O|{date}|5|");
    let input = format!("{}\n{}\n", row("01012016"), row("01012017"));
    let (output, counters) = run_to_string(50, input.as_bytes());
    assert_eq!(output, "C00000001|10001|2017|5|5|1\n");
    assert_eq!(counters.valid, 2);
}

#[test]
fn test_quotes_in_names_are_data() {
    let input = [
        fec_line("C00000001", "SMITH, JOHN \"JACK\"", "10001", "01012016", "1"),
        fec_line("C00000001", "SMITH, JOHN \"JACK\"", "10001", "01012017", "3"),
    ]
    .join("\n");
    let (output, _) = run_to_string(50, input.as_bytes());
    assert_eq!(output, "C00000001|10001|2017|3|3|1\n");
}

#[test]
fn test_non_utf8_bytes_do_not_abort() {
    let mut input = fec_line("C00000001", "MU\u{00D1}OZ, ANA", "10001", "01012016", "1")
        .replace('\u{00D1}', "#")
        .into_bytes();
    // Latin-1 N-tilde in place of the marker.
    let at = input.iter().position(|b| *b == b'#').unwrap();
    input[at] = 0xD1;
    input.push(b'\n');
    let mut second = input.clone();
    let date_at = second
        .windows(8)
        .position(|w| w == b"01012016")
        .unwrap();
    second[date_at..date_at + 8].copy_from_slice(b"01012017");
    input.extend_from_slice(&second);

    let (output, counters) = run_to_string(50, &input);

    assert_eq!(output, "C00000001|10001|2017|1|1|1\n");
    assert_eq!(counters.valid, 2);
}

#[test]
fn test_empty_input() {
    let (output, counters) = run_to_string(50, b"");
    assert_eq!(output, "");
    assert_eq!(counters, RunCounters::default());
}
