//! Проверка элементов перед приёмом внешних данных (импорт)
//!
//! Проверка рекомендательная: фабрика элементов её не применяет.

use serde_json::Value;

use crate::{GardenElement, Properties, PropertyValue};

/// Обязательные числовые свойства для типа.
/// `None`: тип проверяется отдельно (водные объекты) или не проверяется.
fn required_numbers(kind: &str) -> Option<&'static [&'static str]> {
    match kind {
        "surface" => Some(&["width", "depth"]),
        "path" => Some(&["width", "length"]),
        "tree" | "bush" | "flower" => Some(&["height"]),
        "house" => Some(&["width", "depth", "height"]),
        "furniture" => Some(&["width", "depth"]),
        _ => None,
    }
}

fn check_properties(kind: &str, is_number: impl Fn(&str) -> bool, shape: Option<&str>) -> bool {
    if let Some(required) = required_numbers(kind) {
        return required.iter().all(|key| is_number(key));
    }
    match kind {
        "pond" | "pool" => {
            if shape == Some("circular") {
                is_number("radius")
            } else {
                is_number("width") && is_number("length")
            }
        }
        _ => true,
    }
}

/// Проверить типизированный элемент
pub fn validate_element(element: &GardenElement) -> bool {
    if element.id.is_empty() || element.name.is_empty() || element.kind.as_str().is_empty() {
        return false;
    }
    if !element.position.x.is_finite() || !element.position.z.is_finite() {
        return false;
    }

    let properties: &Properties = &element.properties;
    check_properties(
        element.kind.as_str(),
        |key| matches!(properties.get(key), Some(PropertyValue::Number(_))),
        properties.get("shape").and_then(PropertyValue::as_str),
    )
}

fn non_empty_str(value: &Value, key: &str) -> bool {
    value
        .get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Проверить элемент в сыром JSON-виде (до десериализации)
pub fn validate_element_value(value: &Value) -> bool {
    if !non_empty_str(value, "id")
        || !non_empty_str(value, "type")
        || !non_empty_str(value, "name")
    {
        return false;
    }

    let Some(position) = value.get("position") else {
        return false;
    };
    if !position.get("x").is_some_and(Value::is_number)
        || !position.get("z").is_some_and(Value::is_number)
    {
        return false;
    }

    let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
    let properties = value.get("properties");
    if required_numbers(kind).is_some() || matches!(kind, "pond" | "pool") {
        let Some(properties) = properties.filter(|p| p.is_object()) else {
            return false;
        };
        return check_properties(
            kind,
            |key| properties.get(key).is_some_and(Value::is_number),
            properties.get("shape").and_then(Value::as_str),
        );
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_element, ElementKind, Position};
    use serde_json::json;

    fn element(kind: &str, properties: Value) -> Value {
        json!({
            "id": "e1",
            "name": "Element",
            "type": kind,
            "position": {"x": 1.0, "y": 0.0, "z": 2.0},
            "rotation": 0,
            "properties": properties,
        })
    }

    #[test]
    fn test_required_fields_per_type() {
        let cases = [
            ("surface", json!({"width": 5, "depth": 5})),
            ("path", json!({"width": 0.8, "length": 3})),
            ("tree", json!({"height": 8})),
            ("bush", json!({"height": 1})),
            ("flower", json!({"height": 0.3})),
            ("house", json!({"width": 8, "depth": 6, "height": 3})),
            ("furniture", json!({"width": 1.5, "depth": 0.6})),
            ("pond", json!({"shape": "circular", "radius": 1})),
            ("pool", json!({"shape": "rectangular", "width": 5, "length": 8})),
        ];

        for (kind, properties) in cases {
            assert!(
                validate_element_value(&element(kind, properties.clone())),
                "{kind} should pass"
            );

            // Drop each required numeric key in turn
            let object = properties.as_object().unwrap();
            for key in object.keys().filter(|k| object[*k].is_number()) {
                let mut broken = object.clone();
                broken.remove(key);
                assert!(
                    !validate_element_value(&element(kind, Value::Object(broken.clone()))),
                    "{kind} without {key} should fail"
                );
                broken.insert(key.clone(), json!("5"));
                assert!(
                    !validate_element_value(&element(kind, Value::Object(broken))),
                    "{kind} with string {key} should fail"
                );
            }
        }
    }

    #[test]
    fn test_missing_identity_fails() {
        for key in ["id", "type", "name"] {
            let mut value = element("note", json!({}));
            value.as_object_mut().unwrap().remove(key);
            assert!(!validate_element_value(&value), "missing {key}");
        }
    }

    #[test]
    fn test_non_numeric_position_fails() {
        let mut value = element("note", json!({}));
        value["position"]["x"] = json!("1");
        assert!(!validate_element_value(&value));

        let mut value = element("note", json!({}));
        value.as_object_mut().unwrap().remove("position");
        assert!(!validate_element_value(&value));
    }

    #[test]
    fn test_other_types_pass_unconditionally() {
        assert!(validate_element_value(&element("fountain", json!({}))));
        assert!(validate_element_value(&element("hedge", json!({}))));
        assert!(validate_element_value(&element("note", json!(null))));
    }

    #[test]
    fn test_factory_output_is_valid() {
        for tag in [
            "surface", "path", "tree", "bush", "flower", "house", "furniture", "pond", "pool",
            "fountain", "note",
        ] {
            let e = create_element(
                ElementKind::from(tag),
                "x",
                "X",
                Position::default(),
                0.0,
                Properties::new(),
            );
            assert!(validate_element(&e), "{tag}");
            assert!(validate_element_value(&e.to_json()), "{tag} (json)");
        }
    }

    #[test]
    fn test_typed_validation_rejects_empty_name() {
        let mut e = create_element(
            ElementKind::Tree,
            "x",
            "Tree",
            Position::default(),
            0.0,
            Properties::new(),
        );
        e.name.clear();
        assert!(!validate_element(&e));
    }
}
