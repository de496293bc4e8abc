//! Embedded measurement dataset
//!
//! The RUDP client/server latency harness was run four times with increasing
//! frame counts; these are the per-run stats and RTT histograms exactly as
//! logged. Bucket labels stay in log order, which is why the records are kept
//! as JSON objects rather than sorted maps.

use serde_json::{json, Value};

/// The measurement records, in log order
pub fn embedded_runs() -> Vec<Value> {
    vec![
        json!({
            "Frames": 10000,
            "Samples": 10000,
            "Min RTT (ms)": 0.108,
            "Max RTT (ms)": 2.816,
            "Average RTT (ms)": 0.154,
            "Histogram": {
                "0-1 ms": 9999,
                "2-3 ms": 1
            }
        }),
        json!({
            "Frames": 100000,
            "Samples": 100000,
            "Min RTT (ms)": 0.107,
            "Max RTT (ms)": 3.241,
            "Average RTT (ms)": 0.158,
            "Histogram": {
                "0-1 ms": 99994,
                "1-2 ms": 5,
                "3-4 ms": 1
            }
        }),
        json!({
            "Frames": 1000000,
            "Samples": 1000000,
            "Min RTT (ms)": 0.106,
            "Max RTT (ms)": 4.744,
            "Average RTT (ms)": 0.154,
            "Histogram": {
                "0-1 ms": 999986,
                "1-2 ms": 7,
                "2-3 ms": 5,
                "3-4 ms": 1,
                "4-5 ms": 1
            }
        }),
        json!({
            "Frames": 10000000,
            "Samples": 10000000,
            "Min RTT (ms)": 0.104,
            "Max RTT (ms)": 20.132,
            "Average RTT (ms)": 0.161,
            "Histogram": {
                "0-1 ms": 9999736,
                "1-2 ms": 174,
                "2-3 ms": 29,
                "3-4 ms": 17,
                "4-5 ms": 17,
                "5-6 ms": 13,
                "6-7 ms": 4,
                "7-8 ms": 4,
                "8-9 ms": 1,
                "9-10 ms": 1,
                "10-11 ms": 2,
                "18-19 ms": 1,
                "20-21 ms": 1
            }
        }),
    ]
}
