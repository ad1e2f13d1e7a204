//! Static store documents used across harnesses.

/// A small lore book in the shape the CLI and server load from disk.
pub const LORE_JSON: &str = r#"{
    "Alice": {
        "name": "Alice",
        "description": "A brave cat owner",
        "introduce": "Grew up in the northern hills; keeps three cats.",
        "sentence": {
            "content": "Curiosity never killed this cat.",
            "tone": "playful",
            "source": "Chapter 2"
        }
    },
    "Bob": {
        "name": "Bob",
        "description": "A quiet scribe",
        "sentence": {
            "content": "Hello world",
            "tone": "calm"
        }
    },
    "林黛玉": {
        "name": "林黛玉",
        "description": "多愁善感的才女，爱猫",
        "age": 16,
        "tags": ["poet", "cat"],
        "nickname": null
    },
    "Carol": "not an object, skipped by the loader"
}"#;

/// Entity names of [`LORE_JSON`] that survive loading, in document order.
pub const LORE_NAMES: &[&str] = &["Alice", "Bob", "林黛玉"];
