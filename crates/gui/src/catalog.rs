//! Built-in element catalog
//!
//! Templates are grouped into categories shown as tabs in the catalog panel.
//! Template ids are unique across all categories.

use shared::{ElementKind, ElementTemplate, Properties, PropertyValue};

/// A catalog tab
pub struct Category {
    pub id: &'static str,
    pub templates: Vec<ElementTemplate>,
}

/// Read-only template registry
pub struct Catalog {
    categories: Vec<Category>,
}

fn template(
    id: &str,
    name: &str,
    kind: &str,
    thumbnail: &str,
    properties: &[(&str, PropertyValue)],
) -> ElementTemplate {
    ElementTemplate {
        id: id.to_string(),
        name: name.to_string(),
        kind: ElementKind::from(kind),
        thumbnail: format!("elements/{thumbnail}.svg"),
        properties: properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<Properties>(),
    }
}

fn n(v: f64) -> PropertyValue {
    PropertyValue::Number(v)
}

fn s(v: &str) -> PropertyValue {
    PropertyValue::Text(v.to_string())
}

fn b(v: bool) -> PropertyValue {
    PropertyValue::Bool(v)
}

impl Catalog {
    /// The bundled catalog
    pub fn builtin() -> Self {
        let garden_plan = vec![
            template(
                "grass-lawn",
                "Grass Lawn",
                "surface",
                "grass-lawn",
                &[
                    ("width", n(5.0)),
                    ("depth", n(5.0)),
                    ("material", s("grass")),
                ],
            ),
            template(
                "concrete-patio",
                "Concrete Patio",
                "surface",
                "concrete-patio",
                &[
                    ("width", n(3.0)),
                    ("depth", n(3.0)),
                    ("material", s("concrete")),
                ],
            ),
            template(
                "brick-path",
                "Brick Path",
                "path",
                "brick-path",
                &[
                    ("width", n(0.8)),
                    ("length", n(3.0)),
                    ("material", s("brick")),
                ],
            ),
            template(
                "wooden-deck",
                "Wooden Deck",
                "surface",
                "wooden-deck",
                &[
                    ("width", n(4.0)),
                    ("depth", n(3.0)),
                    ("material", s("wood")),
                ],
            ),
            template(
                "gravel-area",
                "Gravel Area",
                "surface",
                "gravel-area",
                &[
                    ("width", n(2.0)),
                    ("depth", n(2.0)),
                    ("material", s("gravel")),
                ],
            ),
        ];

        let plot = vec![
            template(
                "square-garden-bed",
                "Square Garden Bed",
                "plot",
                "square-garden-bed",
                &[
                    ("width", n(2.0)),
                    ("depth", n(2.0)),
                    ("height", n(0.3)),
                    ("material", s("soil")),
                ],
            ),
            template(
                "rectangular-garden-bed",
                "Rectangular Garden Bed",
                "plot",
                "rectangular-garden-bed",
                &[
                    ("width", n(3.0)),
                    ("depth", n(1.5)),
                    ("height", n(0.3)),
                    ("material", s("soil")),
                ],
            ),
            template(
                "raised-garden-bed",
                "Raised Garden Bed",
                "plot",
                "raised-garden-bed",
                &[
                    ("width", n(2.0)),
                    ("depth", n(1.0)),
                    ("height", n(0.6)),
                    ("material", s("wood")),
                ],
            ),
            template(
                "circular-garden-bed",
                "Circular Garden Bed",
                "plot",
                "circular-garden-bed",
                &[
                    ("radius", n(1.2)),
                    ("height", n(0.3)),
                    ("material", s("soil")),
                ],
            ),
            template(
                "vegetable-plot",
                "Vegetable Plot",
                "plot",
                "vegetable-plot",
                &[
                    ("width", n(2.5)),
                    ("depth", n(1.5)),
                    ("height", n(0.3)),
                    ("material", s("soil")),
                ],
            ),
        ];

        let houses = vec![
            template(
                "small-house",
                "Small House",
                "house",
                "small-house",
                &[
                    ("width", n(8.0)),
                    ("depth", n(6.0)),
                    ("height", n(3.0)),
                    ("stories", n(1.0)),
                ],
            ),
            template(
                "garage",
                "Garage",
                "house",
                "garage",
                &[
                    ("width", n(4.0)),
                    ("depth", n(6.0)),
                    ("height", n(2.5)),
                    ("type", s("garage")),
                ],
            ),
            template(
                "garden-shed",
                "Garden Shed",
                "house",
                "garden-shed",
                &[
                    ("width", n(2.5)),
                    ("depth", n(2.0)),
                    ("height", n(2.2)),
                    ("type", s("shed")),
                ],
            ),
            template(
                "greenhouse",
                "Greenhouse",
                "house",
                "greenhouse",
                &[
                    ("width", n(3.0)),
                    ("depth", n(2.0)),
                    ("height", n(2.2)),
                    ("type", s("greenhouse")),
                ],
            ),
            template(
                "gazebo",
                "Gazebo",
                "house",
                "gazebo",
                &[
                    ("width", n(3.0)),
                    ("depth", n(3.0)),
                    ("height", n(3.0)),
                    ("type", s("gazebo")),
                ],
            ),
        ];

        let plants = vec![
            template(
                "oak-tree",
                "Oak Tree",
                "tree",
                "oak-tree",
                &[
                    ("height", n(8.0)),
                    ("canopy", n(5.0)),
                    ("species", s("Oak")),
                ],
            ),
            template(
                "pine-tree",
                "Pine Tree",
                "tree",
                "pine-tree",
                &[
                    ("height", n(10.0)),
                    ("canopy", n(3.0)),
                    ("species", s("Pine")),
                ],
            ),
            template(
                "apple-tree",
                "Apple Tree",
                "tree",
                "apple-tree",
                &[
                    ("height", n(4.0)),
                    ("canopy", n(3.0)),
                    ("species", s("Apple")),
                    ("fruit", b(true)),
                ],
            ),
            template(
                "rose-bush",
                "Rose Bush",
                "bush",
                "rose-bush",
                &[
                    ("height", n(1.0)),
                    ("width", n(0.8)),
                    ("species", s("Rose")),
                    ("flowering", b(true)),
                ],
            ),
            template(
                "lavender",
                "Lavender",
                "flower",
                "lavender",
                &[
                    ("height", n(0.5)),
                    ("spacing", n(0.3)),
                    ("species", s("Lavender")),
                    ("flowering", b(true)),
                ],
            ),
            template(
                "tulips",
                "Tulips",
                "flower",
                "tulips",
                &[
                    ("height", n(0.4)),
                    ("spacing", n(0.2)),
                    ("species", s("Tulip")),
                    ("flowering", b(true)),
                ],
            ),
            template(
                "hedge",
                "Hedge",
                "hedge",
                "hedge",
                &[
                    ("height", n(1.5)),
                    ("length", n(3.0)),
                    ("width", n(0.5)),
                    ("species", s("Boxwood")),
                ],
            ),
            template(
                "grass-patch",
                "Ornamental Grass",
                "grass",
                "ornamental-grass",
                &[
                    ("height", n(1.2)),
                    ("width", n(1.0)),
                    ("species", s("Pampas Grass")),
                ],
            ),
            template(
                "sunflower",
                "Sunflower",
                "flower",
                "sunflower",
                &[
                    ("height", n(2.0)),
                    ("spacing", n(0.5)),
                    ("species", s("Sunflower")),
                    ("flowering", b(true)),
                ],
            ),
            template(
                "maple-tree",
                "Maple Tree",
                "tree",
                "maple-tree",
                &[
                    ("height", n(7.0)),
                    ("canopy", n(4.0)),
                    ("species", s("Maple")),
                ],
            ),
        ];

        let furniture = vec![
            template(
                "garden-bench",
                "Garden Bench",
                "furniture",
                "garden-bench",
                &[
                    ("width", n(1.5)),
                    ("depth", n(0.6)),
                    ("height", n(0.8)),
                    ("material", s("wood")),
                ],
            ),
            template(
                "dining-set",
                "Outdoor Dining Set",
                "furniture",
                "dining-set",
                &[
                    ("width", n(2.0)),
                    ("depth", n(2.0)),
                    ("height", n(0.75)),
                    ("seating", n(4.0)),
                ],
            ),
            template(
                "lounge-chair",
                "Lounge Chair",
                "furniture",
                "lounge-chair",
                &[
                    ("width", n(0.7)),
                    ("depth", n(1.5)),
                    ("height", n(0.4)),
                    ("material", s("wood")),
                ],
            ),
            template(
                "grill",
                "BBQ Grill",
                "furniture",
                "grill",
                &[
                    ("width", n(0.8)),
                    ("depth", n(0.6)),
                    ("height", n(1.0)),
                    ("type", s("grill")),
                ],
            ),
            template(
                "umbrella",
                "Patio Umbrella",
                "furniture",
                "umbrella",
                &[
                    ("width", n(3.0)),
                    ("depth", n(3.0)),
                    ("height", n(2.5)),
                    ("color", s("blue")),
                ],
            ),
        ];

        let ponds = vec![
            template(
                "small-pond",
                "Small Pond",
                "pond",
                "small-pond",
                &[
                    ("radius", n(1.0)),
                    ("depth", n(0.5)),
                    ("shape", s("circular")),
                ],
            ),
            template(
                "large-pond",
                "Large Pond",
                "pond",
                "large-pond",
                &[
                    ("width", n(3.0)),
                    ("depth", n(1.0)),
                    ("length", n(4.0)),
                    ("shape", s("irregular")),
                ],
            ),
            template(
                "fountain",
                "Fountain",
                "fountain",
                "fountain",
                &[
                    ("radius", n(0.8)),
                    ("height", n(1.5)),
                    ("type", s("tiered")),
                ],
            ),
            template(
                "swimming-pool",
                "Swimming Pool",
                "pool",
                "swimming-pool",
                &[
                    ("width", n(5.0)),
                    ("length", n(8.0)),
                    ("depth", n(1.8)),
                    ("shape", s("rectangular")),
                ],
            ),
            template(
                "hot-tub",
                "Hot Tub",
                "pool",
                "hot-tub",
                &[
                    ("radius", n(1.2)),
                    ("depth", n(0.8)),
                    ("shape", s("circular")),
                ],
            ),
        ];

        let notes = vec![
            template(
                "text-note",
                "Text Note",
                "note",
                "text-note",
                &[
                    ("text", s("Edit this note")),
                    ("fontSize", n(14.0)),
                    ("color", s("black")),
                ],
            ),
            template(
                "measurement",
                "Measurement",
                "measurement",
                "measurement",
                &[("length", n(2.0)), ("unit", s("m")), ("color", s("red"))],
            ),
            template(
                "arrow",
                "Arrow",
                "arrow",
                "arrow",
                &[
                    ("length", n(1.5)),
                    ("color", s("black")),
                    ("width", n(0.1)),
                ],
            ),
        ];

        Self {
            categories: vec![
                Category {
                    id: "garden-plan",
                    templates: garden_plan,
                },
                Category {
                    id: "plot",
                    templates: plot,
                },
                Category {
                    id: "houses",
                    templates: houses,
                },
                Category {
                    id: "plants",
                    templates: plants,
                },
                Category {
                    id: "furniture",
                    templates: furniture,
                },
                Category {
                    id: "ponds",
                    templates: ponds,
                },
                Category {
                    id: "notes",
                    templates: notes,
                },
            ],
        }
    }

    /// Category ids in display order
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.id)
    }

    /// Templates of one category; empty for an unknown category
    pub fn elements_by_category(&self, category: &str) -> &[ElementTemplate] {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .map(|c| c.templates.as_slice())
            .unwrap_or(&[])
    }

    /// Find a template by id across all categories
    pub fn element_by_id(&self, id: &str) -> Option<&ElementTemplate> {
        self.all().find(|t| t.id == id)
    }

    /// Case-insensitive match on name or species, in catalog order
    pub fn search(&self, term: &str) -> Vec<&ElementTemplate> {
        let term = term.to_lowercase();
        self.all()
            .filter(|t| {
                t.name.to_lowercase().contains(&term)
                    || t
                        .properties
                        .get("species")
                        .and_then(PropertyValue::as_str)
                        .is_some_and(|species| species.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Every template in catalog order
    pub fn all(&self) -> impl Iterator<Item = &ElementTemplate> {
        self.categories.iter().flat_map(|c| c.templates.iter())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
