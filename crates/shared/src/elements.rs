use serde_json::Value;

use crate::{ElementId, ElementKind, GardenElement, Position, Properties, PropertyValue};

/// Новый уникальный идентификатор (UUID v7, упорядочен по времени создания)
pub fn new_element_id() -> ElementId {
    uuid::Uuid::now_v7().to_string()
}

fn props<const N: usize>(entries: [(&str, PropertyValue); N]) -> Properties {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Свойства по умолчанию для типа элемента
///
/// Для водных объектов набор зависит от формы: круглая форма получает
/// `radius`, любая другая: `width` и `length`. Форма берётся из `overrides`.
pub fn default_properties(kind: &ElementKind, overrides: &Properties) -> Properties {
    match kind {
        ElementKind::Surface => props([
            ("width", 5.0.into()),
            ("depth", 5.0.into()),
            ("material", "grass".into()),
        ]),
        ElementKind::Path => props([
            ("width", 0.8.into()),
            ("length", 3.0.into()),
            ("material", "gravel".into()),
            ("curved", false.into()),
        ]),
        ElementKind::Tree => props([
            ("height", 5.0.into()),
            ("width", 1.0.into()),
            ("canopy", 3.0.into()),
            ("species", "Unknown".into()),
            ("mature", false.into()),
            ("flowering", false.into()),
        ]),
        ElementKind::Bush => props([
            ("height", 1.2.into()),
            ("width", 1.5.into()),
            ("species", "Unknown".into()),
            ("mature", false.into()),
            ("flowering", false.into()),
        ]),
        ElementKind::Flower => props([
            ("height", 0.3.into()),
            ("width", 1.0.into()),
            ("spacing", 0.2.into()),
            ("species", "Unknown".into()),
            ("mature", false.into()),
            ("flowering", true.into()),
        ]),
        ElementKind::House => props([
            ("width", 8.0.into()),
            ("depth", 6.0.into()),
            ("height", 3.0.into()),
            ("stories", 1.0.into()),
            ("roofType", "gable".into()),
            ("color", "#e5e5e5".into()),
        ]),
        ElementKind::Furniture => props([
            ("width", 1.0.into()),
            ("depth", 1.0.into()),
            ("height", 0.5.into()),
            ("material", "wood".into()),
            ("color", "#CD853F".into()),
        ]),
        ElementKind::Pond | ElementKind::Pool | ElementKind::Fountain => {
            let shape = overrides
                .get("shape")
                .and_then(PropertyValue::as_str)
                .unwrap_or("circular");
            let mut defaults = props([("shape", "circular".into()), ("depth", 0.5.into())]);
            if shape == "circular" {
                defaults.insert("radius".to_string(), 1.5.into());
            } else {
                defaults.insert("width".to_string(), 3.0.into());
                defaults.insert("length".to_string(), 3.0.into());
            }
            defaults
        }
        ElementKind::Note => props([
            ("text", "Note".into()),
            ("fontSize", 14.0.into()),
            ("color", "black".into()),
        ]),
        ElementKind::Other(_) => Properties::new(),
    }
}

/// Фабрика элементов: свойства по умолчанию + переданные значения
///
/// Переданные значения имеют приоритет. Неизвестный тип получает только
/// переданные свойства. Пустой `id` заменяется новым.
pub fn create_element(
    kind: ElementKind,
    id: impl Into<ElementId>,
    name: impl Into<String>,
    position: Position,
    rotation: f64,
    overrides: Properties,
) -> GardenElement {
    let mut properties = default_properties(&kind, &overrides);
    properties.extend(overrides);

    let id = id.into();
    GardenElement {
        id: if id.is_empty() { new_element_id() } else { id },
        name: name.into(),
        kind,
        position,
        rotation,
        properties,
    }
}

impl GardenElement {
    /// Структурная форма элемента
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Восстановить элемент из структурной формы через фабрику
    pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
        let parsed: GardenElement = serde_json::from_value(value.clone())?;
        Ok(create_element(
            parsed.kind,
            parsed.id,
            parsed.name,
            parsed.position,
            parsed.rotation,
            parsed.properties,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(properties: &Properties) -> Vec<&str> {
        properties.keys().map(String::as_str).collect()
    }

    fn sorted(mut list: Vec<&'static str>) -> Vec<&'static str> {
        list.sort();
        list
    }

    fn empty(kind: ElementKind) -> GardenElement {
        create_element(kind, "id", "Name", Position::default(), 0.0, Properties::new())
    }

    #[test]
    fn test_defaults_have_documented_keys() {
        let cases: Vec<(ElementKind, Vec<&'static str>)> = vec![
            (ElementKind::Surface, vec!["width", "depth", "material"]),
            (ElementKind::Path, vec!["width", "length", "material", "curved"]),
            (
                ElementKind::Tree,
                vec!["height", "width", "canopy", "species", "mature", "flowering"],
            ),
            (
                ElementKind::Bush,
                vec!["height", "width", "species", "mature", "flowering"],
            ),
            (
                ElementKind::Flower,
                vec!["height", "width", "spacing", "species", "mature", "flowering"],
            ),
            (
                ElementKind::House,
                vec!["width", "depth", "height", "stories", "roofType", "color"],
            ),
            (
                ElementKind::Furniture,
                vec!["width", "depth", "height", "material", "color"],
            ),
            (ElementKind::Pond, vec!["shape", "depth", "radius"]),
            (ElementKind::Pool, vec!["shape", "depth", "radius"]),
            (ElementKind::Fountain, vec!["shape", "depth", "radius"]),
            (ElementKind::Note, vec!["text", "fontSize", "color"]),
        ];

        for (kind, expected) in cases {
            let element = empty(kind.clone());
            assert_eq!(keys(&element.properties), sorted(expected), "{kind}");
        }
    }

    #[test]
    fn test_overrides_win() {
        let mut overrides = Properties::new();
        overrides.insert("height".to_string(), 8.0.into());
        overrides.insert("species".to_string(), "Oak".into());
        let tree = create_element(
            ElementKind::Tree,
            "t1",
            "Oak Tree",
            Position::default(),
            0.0,
            overrides,
        );
        assert_eq!(tree.number("height"), Some(8.0));
        assert_eq!(tree.text("species"), Some("Oak"));
        assert_eq!(tree.number("canopy"), Some(3.0));
    }

    #[test]
    fn test_rectangular_water_gets_width_and_length() {
        let mut overrides = Properties::new();
        overrides.insert("shape".to_string(), "rectangular".into());
        let pool = create_element(
            ElementKind::Pool,
            "p1",
            "Pool",
            Position::default(),
            0.0,
            overrides,
        );
        assert_eq!(pool.number("width"), Some(3.0));
        assert_eq!(pool.number("length"), Some(3.0));
        assert!(pool.number("radius").is_none());
        assert_eq!(pool.text("shape"), Some("rectangular"));
    }

    #[test]
    fn test_unknown_type_gets_no_defaults() {
        let mut overrides = Properties::new();
        overrides.insert("length".to_string(), 2.0.into());
        let element = create_element(
            ElementKind::from("measurement"),
            "m1",
            "Measurement",
            Position::default(),
            0.0,
            overrides.clone(),
        );
        assert_eq!(element.properties, overrides);
        assert_eq!(element.kind.as_str(), "measurement");
    }

    #[test]
    fn test_empty_id_is_generated() {
        let note = || {
            create_element(
                ElementKind::Note,
                "",
                "Note",
                Position::default(),
                0.0,
                Properties::new(),
            )
        };
        let a = note();
        let b = note();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_roundtrip_preserves_everything() {
        let mut overrides = Properties::new();
        overrides.insert("fruit".to_string(), true.into());
        overrides.insert("height".to_string(), 4.125.into());
        let element = create_element(
            ElementKind::Tree,
            "apple-1",
            "Apple Tree",
            Position::new(1.5, 0.0, -3.25),
            45.0,
            overrides,
        );

        let back = GardenElement::from_json(&element.to_json()).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let value = serde_json::json!({
            "id": "s1",
            "name": "Patio",
            "type": "surface",
            "position": {"x": 0.0, "y": 0.0, "z": 0.0},
            "rotation": 0.0,
            "properties": {"material": "concrete"}
        });
        let element = GardenElement::from_json(&value).unwrap();
        assert_eq!(element.text("material"), Some("concrete"));
        assert_eq!(element.number("width"), Some(5.0));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let value = serde_json::json!({"name": 3});
        assert!(GardenElement::from_json(&value).is_err());
    }
}
