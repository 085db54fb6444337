//! Example: render a JSON grid payload to an HTML fragment on stdout
//!
//! Run with: cargo run --example render_html -- path/to/payload.json
//! With no argument, a small built-in payload is rendered instead.

#![allow(clippy::expect_used, clippy::indexing_slicing, clippy::exit)]

use std::env;
use std::fs;

use gridview::{render_html, GridData, GridOptions};

const BUILTIN_PAYLOAD: &str = r#"{
    "rows": [[1, 2], [3, 4]],
    "colHeaders": ["A", "B"],
    "rowHeaders": ["X", "Y"]
}"#;

fn main() {
    let args: Vec<String> = env::args().collect();

    let payload = if args.len() < 2 {
        BUILTIN_PAYLOAD.to_string()
    } else {
        fs::read_to_string(&args[1]).expect("Failed to read payload file")
    };

    let data = match GridData::from_json(&payload) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to decode payload: {}", e);
            std::process::exit(1);
        }
    };
    let options = GridOptions {
        caption: args.get(2).cloned(),
        append_table: false,
    };

    match render_html(&data, &options) {
        Ok(html) => {
            println!("{}", html);
            eprintln!(
                "({} rows x {} cols)",
                data.row_count(),
                data.column_count()
            );
        }
        Err(e) => {
            eprintln!("Failed to render grid: {}", e);
            std::process::exit(1);
        }
    }
}
