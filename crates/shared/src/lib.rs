use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod elements;
pub mod properties;
pub mod validation;

pub use elements::{create_element, default_properties, new_element_id};
pub use properties::{parse_angle_input, parse_property_input, PropertyInputError};
pub use validation::{validate_element, validate_element_value};

/// Уникальный идентификатор элемента сада
pub type ElementId = String;

/// Набор свойств элемента (ключ → значение)
pub type Properties = BTreeMap<String, PropertyValue>;

/// Значение свойства: число, флаг или строка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

/// Тип элемента сада
///
/// Известные типы получают свойства по умолчанию, любой другой тег
/// сохраняется как `Other` без потерь.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Surface,
    Path,
    Tree,
    Bush,
    Flower,
    House,
    Furniture,
    Pond,
    Pool,
    Fountain,
    Note,
    Other(String),
}

impl ElementKind {
    /// Строковый тег типа
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Surface => "surface",
            ElementKind::Path => "path",
            ElementKind::Tree => "tree",
            ElementKind::Bush => "bush",
            ElementKind::Flower => "flower",
            ElementKind::House => "house",
            ElementKind::Furniture => "furniture",
            ElementKind::Pond => "pond",
            ElementKind::Pool => "pool",
            ElementKind::Fountain => "fountain",
            ElementKind::Note => "note",
            ElementKind::Other(tag) => tag,
        }
    }

    /// Растения (дерево, куст, цветы)
    pub fn is_plant(&self) -> bool {
        matches!(self, ElementKind::Tree | ElementKind::Bush | ElementKind::Flower)
    }

    /// Водные объекты
    pub fn is_water(&self) -> bool {
        matches!(self, ElementKind::Pond | ElementKind::Pool | ElementKind::Fountain)
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        match tag {
            "surface" => ElementKind::Surface,
            "path" => ElementKind::Path,
            "tree" => ElementKind::Tree,
            "bush" => ElementKind::Bush,
            "flower" => ElementKind::Flower,
            "house" => ElementKind::House,
            "furniture" => ElementKind::Furniture,
            "pond" => ElementKind::Pond,
            "pool" => ElementKind::Pool,
            "fountain" => ElementKind::Fountain,
            "note" => ElementKind::Note,
            other => ElementKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        ElementKind::from(tag.as_str())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Позиция в мировых координатах (метры)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Точка на уровне земли
    pub fn ground(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }
}

/// Элемент, размещённый в саду
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenElement {
    pub id: ElementId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub position: Position,
    /// Поворот вокруг вертикальной оси, в градусах
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub properties: Properties,
}

impl GardenElement {
    /// Числовое свойство
    pub fn number(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(PropertyValue::as_f64)
    }

    /// Строковое свойство
    pub fn text(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(PropertyValue::as_str)
    }
}

/// Шаблон элемента из каталога (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub thumbnail: String,
    #[serde(default)]
    pub properties: Properties,
}

/// Сохранённый сад
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub elements: Vec<GardenElement>,
    pub last_modified: DateTime<Utc>,
}

/// Снимок списка элементов для истории изменений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub elements: Vec<GardenElement>,
    pub timestamp: DateTime<Utc>,
}

impl HistorySnapshot {
    /// Глубокая копия текущего списка элементов
    pub fn capture(elements: &[GardenElement]) -> Self {
        Self {
            elements: elements.to_vec(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(val: &T) {
        let json = serde_json::to_string(val).expect("serialize");
        let back: T = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*val, back);
    }

    #[test]
    fn test_element_kind_serde() {
        let json = serde_json::to_string(&ElementKind::Tree).unwrap();
        assert_eq!(json, r#""tree""#);
        let kind: ElementKind = serde_json::from_str(r#""hedge""#).unwrap();
        assert_eq!(kind, ElementKind::Other("hedge".to_string()));
        roundtrip(&ElementKind::Pool);
        roundtrip(&ElementKind::Other("measurement".to_string()));
    }

    #[test]
    fn test_property_value_untagged() {
        let v: PropertyValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, PropertyValue::Number(2.5));
        let v: PropertyValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, PropertyValue::Bool(true));
        let v: PropertyValue = serde_json::from_str(r#""brick""#).unwrap();
        assert_eq!(v, PropertyValue::Text("brick".to_string()));
    }

    #[test]
    fn test_element_serde_uses_type_field() {
        let mut properties = Properties::new();
        properties.insert("height".to_string(), 8.0.into());
        let element = GardenElement {
            id: "e1".to_string(),
            name: "Oak Tree".to_string(),
            kind: ElementKind::Tree,
            position: Position::ground(1.5, -2.0),
            rotation: 90.0,
            properties,
        };
        roundtrip(&element);
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains(r#""type":"tree""#));
    }

    #[test]
    fn test_element_missing_optional_fields() {
        let json = r#"{"id": "a", "name": "Lawn", "type": "surface"}"#;
        let element: GardenElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.rotation, 0.0);
        assert!(element.properties.is_empty());
        assert_eq!(element.position, Position::default());
    }

    #[test]
    fn test_garden_camel_case() {
        let garden = Garden {
            id: "g1".to_string(),
            name: "Backyard".to_string(),
            description: String::new(),
            elements: vec![],
            last_modified: Utc::now(),
        };
        roundtrip(&garden);
        let json = serde_json::to_string(&garden).unwrap();
        assert!(json.contains("lastModified"));
    }

    #[test]
    fn test_snapshot_is_deep_copy() {
        let mut elements = vec![GardenElement {
            id: "a".to_string(),
            name: "Bench".to_string(),
            kind: ElementKind::Furniture,
            position: Position::default(),
            rotation: 0.0,
            properties: Properties::new(),
        }];
        let snapshot = HistorySnapshot::capture(&elements);
        elements[0].name = "Changed".to_string();
        assert_eq!(snapshot.elements[0].name, "Bench");
    }
}
