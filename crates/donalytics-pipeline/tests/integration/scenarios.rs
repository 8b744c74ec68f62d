//! End-to-end scenarios over small contribution streams.

use crate::common::{SAMPLE_ITCONT, SAMPLE_OUTPUT_P30, fec_line, fec_line_with_other, run_to_string};
use donalytics_pipeline::RunCounters;

#[test]
fn test_sample_file_at_30th_percentile() {
    let (output, counters) = run_to_string(30, SAMPLE_ITCONT.as_bytes());
    assert_eq!(output, SAMPLE_OUTPUT_P30);
    assert_eq!(
        counters,
        RunCounters {
            total: 7,
            valid: 6,
            repeat: 2
        }
    );
    assert_eq!(counters.invalid(), 1);
}

#[test]
fn test_repeat_donor_across_years() {
    let input = [
        fec_line("C00384516", "JOHN SMITH", "221820001", "03152016", "100"),
        fec_line("C00384516", "JOHN SMITH", "221820001", "03152017", "200"),
    ]
    .join("\n");

    let (output, counters) = run_to_string(30, input.as_bytes());

    // The 2016 row never entered the aggregator.
    assert_eq!(output, "C00384516|22182|2017|200|200|1\n");
    assert_eq!(counters.repeat, 1);
}

#[test]
fn test_stale_record_is_valid_but_silent() {
    let input = [
        fec_line("C00384516", "JOHN SMITH", "22182", "03152018", "100"),
        fec_line("C00384516", "JOHN SMITH", "22182", "03152017", "200"),
    ]
    .join("\n");

    let (output, counters) = run_to_string(30, input.as_bytes());

    assert_eq!(output, "");
    assert_eq!(
        counters,
        RunCounters {
            total: 2,
            valid: 2,
            repeat: 0
        }
    );
}

#[test]
fn test_percentile_recomputed_per_append() {
    let mut rows = vec![
        fec_line("C00000001", "A", "10001", "01012016", "1"),
        fec_line("C00000001", "B", "10001", "01012016", "1"),
        fec_line("C00000001", "C", "10001", "01012016", "1"),
    ];
    rows.push(fec_line("C00000001", "A", "10001", "01012017", "10"));
    rows.push(fec_line("C00000001", "B", "10001", "01012017", "20"));
    rows.push(fec_line("C00000001", "C", "10001", "01012017", "30"));

    let (output, counters) = run_to_string(50, rows.join("\n").as_bytes());

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "C00000001|10001|2017|10|10|1",
            "C00000001|10001|2017|10|30|2",
            "C00000001|10001|2017|20|60|3",
        ]
    );
    assert_eq!(counters.repeat, 3);
}

#[test]
fn test_first_year_is_fixed_for_the_run() {
    // First seen in 2015: both later years repeat, even out of order.
    let input = [
        fec_line("C00000001", "DOE, JANE", "30004", "01012015", "5"),
        fec_line("C00000001", "DOE, JANE", "30004", "01012018", "50"),
        fec_line("C00000001", "DOE, JANE", "30004", "01012017", "70"),
    ]
    .join("\n");

    let (output, _) = run_to_string(100, input.as_bytes());

    assert_eq!(
        output,
        "C00000001|30004|2018|50|50|1\nC00000001|30004|2017|70|70|1\n"
    );
}

#[test]
fn test_fractional_amounts_round_half_up() {
    let input = [
        fec_line("C00000001", "A", "10001", "01012016", "1"),
        fec_line("C00000001", "A", "10001", "01012017", "12.5"),
        fec_line("C00000002", "B", "10001", "01012016", "1"),
        fec_line("C00000002", "B", "10001", "01012017", "12.49"),
    ]
    .join("\n");

    let (output, _) = run_to_string(50, input.as_bytes());

    assert_eq!(
        output,
        "C00000001|10001|2017|13|12.5|1\nC00000002|10001|2017|12|12.49|1\n"
    );
}

#[test]
fn test_fractional_sum_has_no_binary_error() {
    let input = [
        fec_line("C00000001", "A", "10001", "01012016", "1"),
        fec_line("C00000001", "A", "10001", "01012017", "0.1"),
        fec_line("C00000001", "A", "10001", "01012017", "0.2"),
    ]
    .join("\n");

    let (output, _) = run_to_string(30, input.as_bytes());

    assert_eq!(
        output,
        "C00000001|10001|2017|0|0.1|1\nC00000001|10001|2017|0|0.3|2\n"
    );
}

#[test]
fn test_amounts_beyond_f64_precision_stay_exact() {
    let input = [
        fec_line("C00000001", "A", "10001", "01012016", "1"),
        fec_line("C00000001", "A", "10001", "01012017", "20000000000000000000"),
        fec_line("C00000001", "A", "10001", "01012017", "9007199254740993"),
    ]
    .join("\n");

    let (output, _) = run_to_string(100, input.as_bytes());

    assert_eq!(
        output,
        "C00000001|10001|2017|20000000000000000000|20000000000000000000|1\n\
         C00000001|10001|2017|20000000000000000000|20009007199254740993|2\n"
    );
}

#[test]
fn test_invalid_rows_never_reach_the_ledger() {
    let input = [
        // Invalid date in the first row: the donor is not recorded.
        fec_line("C00000001", "A", "10001", "02302016", "1"),
        fec_line("C00000001", "A", "10001", "01012017", "5"),
        fec_line("C00000001", "A", "10001", "01012018", "7"),
        // OTHER_ID populated.
        fec_line_with_other("C00000001", "A", "10001", "01012019", "9", "H6CA34245"),
    ]
    .join("\n");

    let (output, counters) = run_to_string(50, input.as_bytes());

    assert_eq!(output, "C00000001|10001|2018|7|7|1\n");
    assert_eq!(
        counters,
        RunCounters {
            total: 4,
            valid: 2,
            repeat: 1
        }
    );
}

#[test]
fn test_zone_groups_by_first_five_digits() {
    let input = [
        fec_line("C00000001", "A", "100011111", "01012016", "1"),
        fec_line("C00000001", "A", "10001", "01012017", "4"),
        fec_line("C00000001", "B", "100019999", "01012016", "1"),
        fec_line("C00000001", "B", "100012222", "01012017", "6"),
    ]
    .join("\n");

    let (output, _) = run_to_string(100, input.as_bytes());

    assert_eq!(
        output,
        "C00000001|10001|2017|4|4|1\nC00000001|10001|2017|6|10|2\n"
    );
}
