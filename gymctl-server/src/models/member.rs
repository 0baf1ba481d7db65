//! Member aggregate as exchanged over the API
//!
//! The same shape is used for register/update payloads and the joined
//! single-member response. Missing fields decode to empty values so partial
//! payloads behave like zero-valued ones; `id` is never read from a body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gym member with their emergency contact and membership
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(skip_deserializing)]
    pub id: i64,
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub medical_conditions: String,
    pub fitness_goal: String,
    pub emergency_contact: EmergencyContact,
    pub membership: Membership,
}

/// Person to call for a member; has no identity of its own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone_number: String,
}

/// Plan subscription, with the plan referenced by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Membership {
    pub plan: String,
    pub joining_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub fee_amount: f64,
    pub fee_status: String,
}

/// Reduced projection returned by the member list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub plan: String,
    pub fee_status: String,
}

/// Membership plan lookup row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_decodes() {
        let member: Member = serde_json::from_value(json!({
            "full_name": "Asha Rao",
            "gender": "female",
            "date_of_birth": "1994-03-12",
            "phone_number": "555-0100",
            "email": "asha@example.com",
            "address": "12 Elm St",
            "height_cm": 165.5,
            "weight_kg": 58,
            "medical_conditions": "none",
            "fitness_goal": "endurance",
            "emergency_contact": {
                "name": "Ravi Rao",
                "relation": "brother",
                "phone_number": "555-0101"
            },
            "membership": {
                "plan": "Gold",
                "joining_date": "2024-01-01",
                "expiry_date": "2024-12-31",
                "fee_amount": 499.0,
                "fee_status": "paid"
            }
        }))
        .unwrap();

        assert_eq!(member.full_name, "Asha Rao");
        assert_eq!(member.date_of_birth, NaiveDate::from_ymd_opt(1994, 3, 12));
        assert_eq!(member.weight_kg, 58.0);
        assert_eq!(member.emergency_contact.relation, "brother");
        assert_eq!(member.membership.plan, "Gold");
        assert_eq!(
            member.membership.expiry_date,
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let member: Member = serde_json::from_value(json!({ "full_name": "A" })).unwrap();
        assert_eq!(member.full_name, "A");
        assert_eq!(member.email, "");
        assert_eq!(member.height_cm, 0.0);
        assert!(member.date_of_birth.is_none());
        assert_eq!(member.membership, Membership::default());
    }

    #[test]
    fn body_id_is_ignored() {
        let member: Member = serde_json::from_value(json!({ "id": 42, "full_name": "A" })).unwrap();
        assert_eq!(member.id, 0);
    }

    #[test]
    fn bad_date_is_rejected() {
        let result: Result<Member, _> =
            serde_json::from_value(json!({ "date_of_birth": "12/03/1994" }));
        assert!(result.is_err());
    }

    #[test]
    fn response_includes_id_and_nested_objects() {
        let member = Member {
            id: 7,
            full_name: "A".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["emergency_contact"]["name"], "");
        assert!(value["membership"]["joining_date"].is_null());
    }
}
