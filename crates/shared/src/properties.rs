use evalexpr::{build_operator_tree, ContextWithMutableVariables, HashMapContext, Value};

use crate::PropertyValue;

/// Ошибки разбора значения свойства, введённого пользователем
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyInputError {
    /// Пустой ввод для числового или логического свойства
    Empty,
    /// Ошибка разбора выражения
    ParseError(String),
    /// Ошибка вычисления выражения
    EvaluationError(String),
    /// Результат не того типа
    InvalidType(String),
}

impl std::fmt::Display for PropertyInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyInputError::Empty => write!(f, "Value is empty"),
            PropertyInputError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            PropertyInputError::EvaluationError(msg) => write!(f, "Evaluation error: {}", msg),
            PropertyInputError::InvalidType(msg) => write!(f, "Invalid type: {}", msg),
        }
    }
}

impl std::error::Error for PropertyInputError {}

/// Вычислить арифметическое выражение (`2 * 1.5`, `PI * 0.5^2`)
fn evaluate_number(input: &str) -> Result<f64, PropertyInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PropertyInputError::Empty);
    }

    let mut context = HashMapContext::new();
    context
        .set_value("PI".to_string(), Value::Float(std::f64::consts::PI))
        .ok();

    let tree =
        build_operator_tree(input).map_err(|e| PropertyInputError::ParseError(e.to_string()))?;
    let value = tree
        .eval_with_context(&context)
        .map_err(|e| PropertyInputError::EvaluationError(e.to_string()))?;

    let number = match value {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        other => {
            return Err(PropertyInputError::InvalidType(format!(
                "Expected number, got {:?}",
                other
            )))
        }
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(PropertyInputError::EvaluationError(format!(
            "Result is not finite: {number}"
        )))
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Преобразовать текст из панели свойств в значение свойства
///
/// Тип определяется предыдущим значением; без него пробуются число,
/// логическое значение и строка (в этом порядке).
pub fn parse_property_input(
    input: &str,
    previous: Option<&PropertyValue>,
) -> Result<PropertyValue, PropertyInputError> {
    match previous {
        Some(PropertyValue::Number(_)) => evaluate_number(input).map(PropertyValue::Number),
        Some(PropertyValue::Bool(_)) => parse_bool(input)
            .map(PropertyValue::Bool)
            .ok_or_else(|| {
                let got = input.trim();
                PropertyInputError::InvalidType(format!("Expected true or false, got '{got}'"))
            }),
        Some(PropertyValue::Text(_)) => Ok(PropertyValue::Text(input.to_string())),
        None => {
            if let Ok(number) = evaluate_number(input) {
                Ok(PropertyValue::Number(number))
            } else if let Some(flag) = parse_bool(input) {
                Ok(PropertyValue::Bool(flag))
            } else {
                Ok(PropertyValue::Text(input.to_string()))
            }
        }
    }
}

/// Угол поворота в градусах, приведённый к диапазону [0, 360)
pub fn parse_angle_input(input: &str) -> Result<f64, PropertyInputError> {
    let degrees = evaluate_number(input)?;
    Ok(degrees.rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_expression() {
        let prev = PropertyValue::Number(1.0);
        assert_eq!(
            parse_property_input("2 * 1.5", Some(&prev)),
            Ok(PropertyValue::Number(3.0))
        );
        assert_eq!(
            parse_property_input(" 4 ", Some(&prev)),
            Ok(PropertyValue::Number(4.0))
        );
    }

    #[test]
    fn test_number_with_pi() {
        let prev = PropertyValue::Number(1.0);
        let value = parse_property_input("PI * 2.0^2", Some(&prev)).unwrap();
        let expected = std::f64::consts::PI * 4.0;
        assert!((value.as_f64().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_number_rejects_text() {
        let prev = PropertyValue::Number(1.0);
        assert!(parse_property_input("tall", Some(&prev)).is_err());
        assert_eq!(
            parse_property_input("   ", Some(&prev)),
            Err(PropertyInputError::Empty)
        );
    }

    #[test]
    fn test_bool_input() {
        let prev = PropertyValue::Bool(false);
        assert_eq!(parse_property_input("Yes", Some(&prev)), Ok(PropertyValue::Bool(true)));
        assert_eq!(parse_property_input("false", Some(&prev)), Ok(PropertyValue::Bool(false)));
        assert!(parse_property_input("maybe", Some(&prev)).is_err());
    }

    #[test]
    fn test_text_kept_verbatim() {
        let prev = PropertyValue::Text("grass".to_string());
        assert_eq!(
            parse_property_input("12", Some(&prev)),
            Ok(PropertyValue::Text("12".to_string()))
        );
    }

    #[test]
    fn test_untyped_input_inference() {
        assert_eq!(parse_property_input("3", None), Ok(PropertyValue::Number(3.0)));
        assert_eq!(parse_property_input("true", None), Ok(PropertyValue::Bool(true)));
        assert_eq!(
            parse_property_input("Boxwood", None),
            Ok(PropertyValue::Text("Boxwood".to_string()))
        );
    }

    #[test]
    fn test_angle_normalized() {
        assert_eq!(parse_angle_input("450"), Ok(90.0));
        assert_eq!(parse_angle_input("-90"), Ok(270.0));
        assert_eq!(parse_angle_input("360"), Ok(0.0));
        assert!(parse_angle_input("north").is_err());
    }
}
