//! Basic tabler serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use std::error::Error;
use tabler::{from_str, to_string};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    bio: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            bio: "Likes parsers.\nWrites: Rust".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            bio: "# not a comment".to_string(),
        },
    ];

    // Serialize to tabler text
    let text = to_string(&users)?;
    println!("tabler output:\n{}", text);

    // Deserialize back to structs
    let users_back: Vec<User> = from_str(&text)?;
    assert_eq!(users, users_back);
    println!("Round-trip successful");

    // Hand-written input may mix simple and multi-line pairs
    let table = tabler::parse(b"# hosts\nname:db\nport:5432\n\n%%motd:\nWelcome!\n%%\n")?;
    for (index, record) in table.iter().enumerate() {
        println!("record {}: {:?}", index, record);
    }

    Ok(())
}
