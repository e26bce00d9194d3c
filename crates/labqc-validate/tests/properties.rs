//! Property tests for the check predicates over arbitrary tables.

use polars::prelude::{DataFrame, df};
use proptest::prelude::{Just, Strategy, prop_oneof, proptest};

use labqc_validate::{Findings, ResultStore, run_checks};

type RawRow = (Option<f64>, Option<f64>, Option<f64>);

fn opt_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        4 => (-100.0f64..100.0).prop_map(Some),
    ]
}

fn build_table(rows: &[RawRow]) -> DataFrame {
    let ids: Vec<i64> = (0..rows.len() as i64).collect();
    let result: Vec<Option<f64>> = rows.iter().map(|r| r.0).collect();
    let lower: Vec<Option<f64>> = rows.iter().map(|r| r.1).collect();
    let upper: Vec<Option<f64>> = rows.iter().map(|r| r.2).collect();
    df!(
        "row_id" => ids,
        "result" => result,
        "lower_ref" => lower,
        "upper_ref" => upper,
    )
    .unwrap()
}

fn check(rows: &[RawRow]) -> Findings {
    let mut store = ResultStore::new();
    store.load(&build_table(rows));
    run_checks(&mut store).unwrap()
}

fn row_ids(df: &DataFrame) -> Vec<i64> {
    df.column("row_id")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

proptest! {
    #[test]
    fn blank_results_are_exactly_the_null_results(rows in proptest::collection::vec(
        (opt_value(), opt_value(), opt_value()), 1..40)) {
        let findings = check(&rows);
        let expected: Vec<i64> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.0.is_none())
            .map(|(i, _)| i as i64)
            .collect();
        assert_eq!(row_ids(&findings.blank_results), expected);
    }

    #[test]
    fn missing_range_is_exactly_the_null_bounds(rows in proptest::collection::vec(
        (opt_value(), opt_value(), opt_value()), 1..40)) {
        let findings = check(&rows);
        let expected: Vec<i64> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.1.is_none() || row.2.is_none())
            .map(|(i, _)| i as i64)
            .collect();
        assert_eq!(row_ids(&findings.missing_range), expected);
    }

    // SQL three-valued logic: a null comparison is no match, but the other
    // side of the OR can still fire. A row with a null result never matches.
    #[test]
    fn out_of_range_follows_sql_null_semantics(rows in proptest::collection::vec(
        (opt_value(), opt_value(), opt_value()), 1..40)) {
        let findings = check(&rows);
        let expected: Vec<i64> = rows
            .iter()
            .enumerate()
            .filter(|&(_, &(result, lower, upper))| {
                let below = matches!((result, lower), (Some(r), Some(l)) if r < l);
                let above = matches!((result, upper), (Some(r), Some(u)) if r > u);
                below || above
            })
            .map(|(i, _)| i as i64)
            .collect();
        assert_eq!(row_ids(&findings.out_of_range), expected);
    }

    #[test]
    fn fully_populated_rows_match_iff_outside_bounds(rows in proptest::collection::vec(
        ((-100.0f64..100.0), (-100.0f64..100.0), (-100.0f64..100.0)), 1..40)) {
        let raw: Vec<RawRow> = rows
            .iter()
            .map(|&(r, l, u)| (Some(r), Some(l), Some(u)))
            .collect();
        let findings = check(&raw);
        let expected: Vec<i64> = rows
            .iter()
            .enumerate()
            .filter(|&(_, &(r, l, u))| r < l || r > u)
            .map(|(i, _)| i as i64)
            .collect();
        assert_eq!(row_ids(&findings.out_of_range), expected);
        assert!(findings.blank_results.is_empty());
        assert!(findings.missing_range.is_empty());
    }
}
