//! Pattern 4: Building Paths from JSON
//! Example: Decoding a Route from an In-Memory Document
//!
//! Run with: cargo run --example p4_path_from_json

use anyhow::Context;
use path_validation_patterns::{Path, PathValidator, Step};

fn main() -> anyhow::Result<()> {
    println!("=== Paths from JSON ===\n");

    // A route is just an array of step names.
    let document = r#"["forward", "left", "forward", "right"]"#;
    let route: Path = serde_json::from_str(document).context("decoding route")?;
    println!("Decoded {} steps from {}", route.len(), document);

    // Traverse the decoded route; the claims come from the same document.
    let claims: Vec<Step> = (&route).into_iter().collect();
    let mut bot = PathValidator::new("Waypoint", route);
    for claimed in claims {
        bot.validate(claimed)
            .with_context(|| format!("replaying step {}", bot.cursor()))?;
    }
    println!("{} replayed the route: complete = {}", bot.name(), bot.is_complete());

    // Encoding goes back to the same shape.
    let encoded = serde_json::to_string(bot.path())?;
    println!("Re-encoded: {}", encoded);

    // An unknown step name fails at the decoding boundary, before any
    // validator exists.
    println!("\n=== Rejecting a Bad Document ===");
    let bad = r#"["forward", "backward"]"#;
    match serde_json::from_str::<Path>(bad) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Error (expected): {}", e),
    }

    Ok(())
}
