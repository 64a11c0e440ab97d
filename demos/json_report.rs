//! Structured JSON Reports
//!
//! `ErrorReport` serializes to the record shipped to log pipelines: chains
//! carry `msg`, `code`, `trace` and `fields`; plain errors carry `msg` only.
//!
//! Run with: cargo run --example json_report --features serde

use error_trail::{attach_code, tag_op, ErrorCode, ErrorReport};

fn main() {
    let err = attach_code("unique constraint violated", ErrorCode::ALREADY_EXISTS, "accounts.insert")
        .with_message("an account with this email already exists")
        .with_field("email", "a@example.com")
        .with_field("attempt", 1);
    let err = tag_op("http.sign_up", err);

    match serde_json::to_string_pretty(&ErrorReport::new(&err)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }

    let plain = std::io::Error::other("disk quota exceeded");
    match serde_json::to_string(&ErrorReport::new(&plain)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    };
    // Output: {"msg":"disk quota exceeded"}
}
