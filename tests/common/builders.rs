//! Test builders: ergonomic constructors for entities, stores and queries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use lore_core::{Attribute, Entity, Store};

// ---------------------------------------------------------------------------
// EntityBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Entity`] fixtures. Keys keep insertion order.
///
/// # Example
///
/// ```rust
/// let bob = EntityBuilder::new()
///     .text("description", "A quiet scribe")
///     .nested("sentence", [("content", "Hello world"), ("tone", "calm")])
///     .build();
/// ```
#[derive(Default)]
pub struct EntityBuilder {
    fields: Vec<(String, Attribute)>,
}

impl EntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.fields.push((key.to_string(), Attribute::text(value)));
        self
    }

    pub fn nested<const N: usize>(mut self, key: &str, children: [(&str, &str); N]) -> Self {
        let map = Attribute::map(children.into_iter().map(|(k, v)| (k, Attribute::text(v))));
        self.fields.push((key.to_string(), map));
        self
    }

    pub fn attribute(mut self, key: &str, value: Attribute) -> Self {
        self.fields.push((key.to_string(), value));
        self
    }

    pub fn build(self) -> Entity {
        Entity { fields: self.fields }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A store holding one entity with a single `description` leaf.
pub fn single(name: &str, description: &str) -> Store {
    Store::from_entities([(name, EntityBuilder::new().text("description", description).build())])
}

/// Parse a JSON literal into a store, panicking on malformed fixtures.
pub fn store_from_json(src: &str) -> Store {
    Store::from_json_str(src).expect("fixture store must be valid")
}

/// Build a store of `n` entities; every tenth one mentions "dragon".
pub fn build_corpus(n: usize) -> Store {
    Store::from_entities((0..n).map(|i| {
        let description = if i % 10 == 0 {
            format!("Character {i} once fought a dragon near the river")
        } else {
            format!("Character {i} keeps bees and writes letters")
        };
        let entity = EntityBuilder::new()
            .text("name", &format!("Character {i}"))
            .text("description", &description)
            .nested("sentence", [("content", "Tomorrow is another day"), ("tone", "hopeful")])
            .build();
        (format!("char-{i:05}"), entity)
    }))
}
