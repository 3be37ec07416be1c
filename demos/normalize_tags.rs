//! Normalizing and validating user-supplied tags for each provider.
//!
//! This example shows:
//! 1. Looking up a provider policy by name
//! 2. Normalizing raw tags and reading the diagnostics
//! 3. Validating tags as given, without normalization
//!
//! Run with: `cargo run --example normalize_tags`

use tag_policy::{registry, Tag};

fn main() {
    println!("=== Tag Normalization Example ===\n");

    let tags = [
        Tag::new("Cost Center", "R&D / Café 🍎"),
        Tag::new("owner?", "data-platform@example.com"),
        Tag::new("", "orphan value"),
    ];

    for name in ["aws", "azure", "gcp", "oracle"] {
        println!("--- Provider: {} ---", name);

        let policy = match registry::lookup(name) {
            Ok(policy) => policy,
            Err(e) => {
                println!("Skipped: {}\n", e);
                continue;
            }
        };

        for tag in &tags {
            match policy.validate_tag(tag) {
                Ok(()) => println!("{:?} is valid as given", tag),
                Err(v) => println!("{:?} rejected ({})", tag, v),
            }

            let prepared = policy.prepare(tag);
            println!("  normalized to {:?}", prepared.tag());
            for diagnostic in prepared.diagnostics() {
                println!("  {}", diagnostic);
            }
        }
        println!();
    }
}
