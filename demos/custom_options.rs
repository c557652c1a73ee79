//! Customizing parsing and output with TablerOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use tabler::{parse_with_options, serialize_with_options, table, LonePercent, TablerOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let input = b"%off:50\n%%note:\n%done\n%%\n";

    // Default: a lone `%` at line start is kept
    println!("Preserve lone %:");
    let table = parse_with_options(input, &TablerOptions::new())?;
    println!("{:?}\n", table[0]);

    // Legacy readers dropped it
    println!("Drop lone % (legacy):");
    let legacy = TablerOptions::new().with_lone_percent(LonePercent::Drop);
    let table = parse_with_options(input, &legacy)?;
    println!("{:?}\n", table[0]);
    assert_eq!(table[0].get("off"), Some("50"));

    // Sorted keys give stable output regardless of insertion order
    println!("Sorted keys:");
    let rows = table![{ "zone" => "eu", "app" => "web", "mode" => "prod" }];
    let sorted = TablerOptions::new().with_sorted_keys(true);
    println!("{}", String::from_utf8(serialize_with_options(&rows, &sorted))?);

    Ok(())
}
