//! Single-field member patch
//!
//! Only flat member columns can be patched. Each allowed field owns a literal
//! UPDATE statement, so the column name in the SQL never comes from input.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::ValidationError;

/// Mutable member column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    FullName,
    Gender,
    DateOfBirth,
    PhoneNumber,
    Email,
    Address,
    HeightCm,
    WeightKg,
    MedicalConditions,
    FitnessGoal,
}

/// JSON type a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
}

impl MemberField {
    pub const ALL: [MemberField; 10] = [
        Self::FullName,
        Self::Gender,
        Self::DateOfBirth,
        Self::PhoneNumber,
        Self::Email,
        Self::Address,
        Self::HeightCm,
        Self::WeightKg,
        Self::MedicalConditions,
        Self::FitnessGoal,
    ];

    /// Look up a field by its JSON key. Anything outside the allow-list is rejected.
    pub fn parse(key: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| ValidationError::FieldNotAllowed {
                field: key.to_owned(),
            })
    }

    /// JSON key, identical to the column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Gender => "gender",
            Self::DateOfBirth => "date_of_birth",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::Address => "address",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::MedicalConditions => "medical_conditions",
            Self::FitnessGoal => "fitness_goal",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::DateOfBirth => FieldKind::Date,
            Self::HeightCm | Self::WeightKg => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Parameterized statement: `$1` is the value, `$2` the member id.
    pub fn update_sql(&self) -> &'static str {
        match self {
            Self::FullName => "UPDATE members SET full_name = $1 WHERE id = $2",
            Self::Gender => "UPDATE members SET gender = $1 WHERE id = $2",
            Self::DateOfBirth => "UPDATE members SET date_of_birth = $1 WHERE id = $2",
            Self::PhoneNumber => "UPDATE members SET phone_number = $1 WHERE id = $2",
            Self::Email => "UPDATE members SET email = $1 WHERE id = $2",
            Self::Address => "UPDATE members SET address = $1 WHERE id = $2",
            Self::HeightCm => "UPDATE members SET height_cm = $1 WHERE id = $2",
            Self::WeightKg => "UPDATE members SET weight_kg = $1 WHERE id = $2",
            Self::MedicalConditions => "UPDATE members SET medical_conditions = $1 WHERE id = $2",
            Self::FitnessGoal => "UPDATE members SET fitness_goal = $1 WHERE id = $2",
        }
    }
}

/// Value typed for its column
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Number(f64),
}

/// Validated `{field: value}` patch body
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub field: MemberField,
    pub value: FieldValue,
}

impl FieldUpdate {
    /// Validate a patch body: exactly one key, allowed field, matching type.
    pub fn from_body(body: Map<String, Value>) -> Result<Self, ValidationError> {
        if body.len() != 1 {
            return Err(ValidationError::FieldCount { count: body.len() });
        }

        let Some((key, value)) = body.into_iter().next() else {
            return Err(ValidationError::FieldCount { count: 0 });
        };

        let field = MemberField::parse(&key)?;
        let value = match (field.kind(), value) {
            (FieldKind::Text, Value::String(s)) => FieldValue::Text(s),
            (FieldKind::Date, Value::String(s)) => {
                let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                    ValidationError::WrongType {
                        field: field.as_str(),
                        expected: "a date in YYYY-MM-DD format",
                    }
                })?;
                FieldValue::Date(date)
            }
            (FieldKind::Number, Value::Number(n)) => match n.as_f64() {
                Some(n) => FieldValue::Number(n),
                None => {
                    return Err(ValidationError::WrongType {
                        field: field.as_str(),
                        expected: "a number",
                    })
                }
            },
            (kind, _) => {
                return Err(ValidationError::WrongType {
                    field: field.as_str(),
                    expected: match kind {
                        FieldKind::Text => "a string",
                        FieldKind::Date => "a date in YYYY-MM-DD format",
                        FieldKind::Number => "a number",
                    },
                })
            }
        };

        Ok(Self { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn single_text_field() {
        let update = FieldUpdate::from_body(body(json!({ "email": "a@b.c" }))).unwrap();
        assert_eq!(update.field, MemberField::Email);
        assert_eq!(update.value, FieldValue::Text("a@b.c".into()));
    }

    #[test]
    fn numeric_and_date_fields() {
        let update = FieldUpdate::from_body(body(json!({ "weight_kg": 72 }))).unwrap();
        assert_eq!(update.value, FieldValue::Number(72.0));

        let update = FieldUpdate::from_body(body(json!({ "date_of_birth": "1990-05-01" }))).unwrap();
        assert_eq!(
            update.value,
            FieldValue::Date(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
        );
    }

    #[test]
    fn rejects_two_keys() {
        let err = FieldUpdate::from_body(body(json!({ "email": "a", "gender": "m" }))).unwrap_err();
        assert_eq!(err, ValidationError::FieldCount { count: 2 });
    }

    #[test]
    fn rejects_empty_body() {
        let err = FieldUpdate::from_body(Map::new()).unwrap_err();
        assert_eq!(err, ValidationError::FieldCount { count: 0 });
    }

    #[test]
    fn rejects_id_and_nested_fields() {
        for key in ["id", "membership", "emergency_contact", "plan", "fee_status"] {
            let mut map = Map::new();
            map.insert(key.to_owned(), json!("x"));
            let err = FieldUpdate::from_body(map).unwrap_err();
            assert!(matches!(err, ValidationError::FieldNotAllowed { .. }), "{key}");
        }
    }

    #[test]
    fn rejects_wrong_types() {
        let err = FieldUpdate::from_body(body(json!({ "height_cm": "tall" }))).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "height_cm", .. }));

        let err = FieldUpdate::from_body(body(json!({ "full_name": 5 }))).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "full_name", .. }));

        let err = FieldUpdate::from_body(body(json!({ "date_of_birth": "yesterday" }))).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { field: "date_of_birth", .. }));
    }

    #[test]
    fn statements_target_their_own_column() {
        for field in MemberField::ALL {
            let sql = field.update_sql();
            assert!(sql.starts_with("UPDATE members SET "));
            assert!(sql.contains(&format!("SET {} = $1", field.as_str())));
            assert!(sql.ends_with("WHERE id = $2"));
            assert_eq!(MemberField::parse(field.as_str()).unwrap(), field);
        }
    }
}
