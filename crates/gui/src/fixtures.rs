//! Factory functions for creating test data.
//!
//! Elements, gardens and exported documents used by tests and scripted
//! sessions.

use chrono::{TimeZone, Utc};
use shared::*;

// ── Element factories ───────────────────────────────────────────

fn with(props: &[(&str, PropertyValue)]) -> Properties {
    props
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// A tree with default properties at a ground position.
pub fn tree_at(id: &str, x: f64, z: f64) -> GardenElement {
    create_element(
        ElementKind::Tree,
        id,
        "Oak Tree",
        Position::ground(x, z),
        0.0,
        with(&[("height", 8.0.into()), ("species", "Oak".into())]),
    )
}

/// A bench (furniture box) at a ground position.
pub fn bench_at(id: &str, x: f64, z: f64) -> GardenElement {
    create_element(
        ElementKind::Furniture,
        id,
        "Garden Bench",
        Position::ground(x, z),
        0.0,
        with(&[
            ("width", 1.5.into()),
            ("depth", 0.6.into()),
            ("material", "wood".into()),
        ]),
    )
}

/// A surface with a material.
pub fn lawn_at(id: &str, x: f64, z: f64) -> GardenElement {
    create_element(
        ElementKind::Surface,
        id,
        "Grass Lawn",
        Position::ground(x, z),
        0.0,
        Properties::new(),
    )
}

/// A rectangular pool.
pub fn pool_at(id: &str, x: f64, z: f64) -> GardenElement {
    create_element(
        ElementKind::Pool,
        id,
        "Swimming Pool",
        Position::ground(x, z),
        0.0,
        with(&[("shape", "rectangular".into())]),
    )
}

/// A circular pond.
pub fn pond_at(id: &str, x: f64, z: f64) -> GardenElement {
    create_element(
        ElementKind::Pond,
        id,
        "Small Pond",
        Position::ground(x, z),
        0.0,
        with(&[("shape", "circular".into()), ("radius", 1.5.into())]),
    )
}

// ── Garden factories ────────────────────────────────────────────

/// A garden with fixed metadata.
pub fn garden(id: &str, name: &str, elements: Vec<GardenElement>) -> Garden {
    Garden {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        elements,
        last_modified: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}

/// Backyard with a lawn, a tree, a bench and a pond.
pub fn backyard() -> Garden {
    garden(
        "garden_backyard",
        "Backyard",
        vec![
            lawn_at("lawn", 0.0, 0.0),
            tree_at("oak", -4.0, -4.0),
            bench_at("bench", 2.0, 1.0),
            pond_at("pond", 5.0, -3.0),
        ],
    )
}

/// Exported JSON of `backyard()`.
pub fn backyard_json() -> String {
    serde_json::to_string_pretty(&backyard()).unwrap_or_default()
}

/// Starter template document (`{"elements": [...]}`).
pub fn starter_template_json() -> String {
    serde_json::json!({
        "elements": [
            tree_at("t1", -3.0, 0.0).to_json(),
            tree_at("t2", 3.0, 0.0).to_json(),
            pool_at("p1", 0.0, 4.0).to_json(),
        ]
    })
    .to_string()
}
