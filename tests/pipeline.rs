//! End-to-end run of all four stages with a simulated external shuffle.
//!
//! Between a mapper and its reducer the external harness text-sorts the
//! mapper output; a plain lexicographic line sort reproduces that here,
//! which is all the reducers rely on (equal keys arrive contiguously).

use mrplace::engine::{run_mapper, run_reducer};
use mrplace::workload;
use std::io::Cursor;

fn map_stage(name: &str, input: &str) -> String {
    let stage = workload::named(name).unwrap();
    let mut mapper = (stage.mapper)().unwrap();
    let mut out = Vec::new();
    run_mapper(mapper.as_mut(), Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn reduce_stage(name: &str, input: &str) -> String {
    let stage = workload::named(name).unwrap();
    let mut reducer = (stage.reducer)();
    let mut out = Vec::new();
    run_reducer(reducer.as_mut(), Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn external_sort(input: &str) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort_unstable();
    let mut sorted = lines.join("\n");
    if !sorted.is_empty() {
        sorted.push('\n');
    }
    sorted
}

#[test]
fn full_pipeline_ranks_active_users() {
    const BASE_TS: i64 = 1_648_817_050_000;

    // User 1: six moves over 20 minutes (diff 1_200_000 -> max_moves 5).
    // User 2: twelve moves over 50 minutes (diff 3_000_000 -> max_moves 11).
    // User 4: a single move (zero span) -- filtered out.
    // User 9: a moderator -- never mapped.
    let mut raw = String::from("time,user_id,x,y,color,mod\n");
    for (offset, user, is_mod) in [
        (0_i64, 1, 0),
        (5_000, 2, 0),
        (300_000, 1, 0),
        (600_000, 1, 0),
        (700_000, 9, 1),
        (800_000, 4, 0),
        (900_000, 1, 0),
        (1_080_000, 1, 0),
        (1_200_000, 1, 0),
    ] {
        raw.push_str(&format!("{offset},{user},10,10,3,{is_mod}\n"));
    }
    for i in 1..=10 {
        raw.push_str(&format!("{},2,10,10,3,0\n", 5_000 + i * 250_000));
    }
    raw.push_str("3005000,2,10,10,3,0\n");

    let keyed = map_stage("user", &raw);
    let spans = reduce_stage("user", &external_sort(&keyed));

    let sorted_spans = external_sort(&spans);
    assert_eq!(
        sorted_spans,
        format!(
            "1\t{}#{}\t6\n2\t{}#{}\t12\n4\t{}#{}\t1\n",
            BASE_TS,
            BASE_TS + 1_200_000,
            BASE_TS + 5_000,
            BASE_TS + 3_005_000,
            BASE_TS + 800_000,
            BASE_TS + 800_000,
        )
    );

    let quantities = map_stage("quantity", &sorted_spans);
    let filtered = reduce_stage("quantity", &quantities);
    assert_eq!(filtered, "1\t1200000\t5\t6\n2\t3000000\t11\t12\n");

    let ranked = map_stage("move-sorter", &filtered);
    let final_out = reduce_stage("move-sorter", &external_sort(&ranked));
    assert_eq!(final_out, "1\t0001200000\t5\t6\n2\t0003000000\t11\t12\n");
}

#[test]
fn malformed_mid_stream_line_aborts_the_pass() {
    let stage = workload::named("quantity").unwrap();
    let mut reducer = (stage.reducer)();
    let input = "2\t3000000\t11\t12\nnot\ta\trecord\tline\n";
    let mut out = Vec::new();
    let err = run_reducer(reducer.as_mut(), Cursor::new(input), &mut out);
    assert!(err.is_err());
    // Output already written stays written; nothing after the bad line.
    assert_eq!(String::from_utf8(out).unwrap(), "2\t3000000\t11\t12\n");
}
