//! Employee (karyawan) records and their wire shapes.
//!
//! # Design
//! `EmployeeRecord` is what the server returns and what callers hold.
//! Outgoing bodies go through `EmployeeRequest`, a borrowed view with no
//! `id` field, so the server-assigned id can never leak into a create or
//! update body.
//!
//! Incoming fields are read leniently: the backend is a PHP/MySQL service
//! that may send numbers as strings, `null` for empty text and
//! `"0000-00-00"` for a missing date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-date format used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An employee as stored by the backend.
///
/// `id` is `None` until the record has been created on the server and is
/// required to address `update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::id"
    )]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "wire::text")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub department: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub position: String,
    #[serde(default, deserialize_with = "wire::salary")]
    pub salary: f64,
    #[serde(default, deserialize_with = "wire::date")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::text")]
    pub email: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub phone: String,
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRequest<'a> {
    pub employee_id: &'a str,
    pub name: &'a str,
    pub department: &'a str,
    pub position: &'a str,
    pub salary: f64,
    /// Always present on the wire; `null` when the date is unknown.
    pub hire_date: Option<NaiveDate>,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a EmployeeRecord> for EmployeeRequest<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            employee_id: &record.employee_id,
            name: &record.name,
            department: &record.department,
            position: &record.position,
            salary: record.salary,
            hire_date: record.hire_date,
            email: &record.email,
            phone: &record.phone,
        }
    }
}

mod wire {
    use std::fmt::Display;
    use std::str::FromStr;

    use chrono::NaiveDate;
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    use super::DATE_FORMAT;

    /// MySQL's zero date, sent for rows without a hire date.
    const ZERO_DATE: &str = "0000-00-00";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<T> {
        Number(T),
        Text(String),
    }

    fn parse_text<T, E>(text: &str) -> Result<T, E>
    where
        T: FromStr,
        T::Err: Display,
        E: de::Error,
    {
        text.trim()
            .parse()
            .map_err(|e| E::custom(format!("invalid number {text:?}: {e}")))
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Option::<NumberOrText<i64>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrText::Number(id)) => Ok(Some(id)),
            Some(NumberOrText::Text(text)) => parse_text(&text).map(Some),
        }
    }

    pub fn salary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<NumberOrText<f64>>::deserialize(deserializer)? {
            None => Ok(0.0),
            Some(NumberOrText::Number(salary)) => Ok(salary),
            Some(NumberOrText::Text(text)) => parse_text(&text),
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let text = text.trim();
        if text.is_empty() || text == ZERO_DATE {
            return Ok(None);
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date {text:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ann() -> EmployeeRecord {
        EmployeeRecord {
            id: Some(1),
            employee_id: "E1".to_string(),
            name: "Ann".to_string(),
            department: "Eng".to_string(),
            position: "Dev".to_string(),
            salary: 50000.0,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 15),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
        }
    }

    #[test]
    fn request_body_has_fixed_fields_without_id() {
        let record = ann();
        let body = serde_json::to_value(EmployeeRequest::from(&record)).unwrap();
        assert_eq!(
            body,
            json!({
                "employee_id": "E1",
                "name": "Ann",
                "department": "Eng",
                "position": "Dev",
                "salary": 50000.0,
                "hire_date": "2020-01-15",
                "email": "a@x.com",
                "phone": "555",
            })
        );
        assert!(body.get("id").is_none());
    }

    #[test]
    fn absent_hire_date_serializes_as_null() {
        let record = EmployeeRecord {
            hire_date: None,
            ..ann()
        };
        let body = serde_json::to_string(&EmployeeRequest::from(&record)).unwrap();
        assert!(body.contains(r#""hire_date":null"#), "{body}");
        assert!(!body.contains(r#""hire_date":"""#));
        assert!(!body.contains(r#""hire_date":"null""#));
    }

    #[test]
    fn request_echoed_back_yields_equal_record_minus_id() {
        for record in [ann(), EmployeeRecord { hire_date: None, ..ann() }] {
            let body = serde_json::to_string(&EmployeeRequest::from(&record)).unwrap();
            let echoed: EmployeeRecord = serde_json::from_str(&body).unwrap();
            assert_eq!(echoed, EmployeeRecord { id: None, ..record });
        }
    }

    #[test]
    fn incoming_record_maps_snake_case_fields() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "id": 1,
            "employee_id": "E1",
            "name": "Ann",
            "department": "Eng",
            "position": "Dev",
            "salary": 50000,
            "hire_date": "2020-01-15",
            "email": "a@x.com",
            "phone": "555",
        }))
        .unwrap();
        assert_eq!(record, ann());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "id": "7",
            "employee_id": "E7",
            "name": "Budi",
            "salary": "7500000.50",
        }))
        .unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.salary, 7_500_000.5);
    }

    #[test]
    fn nulls_and_missing_fields_become_empty() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "employee_id": "E2",
            "name": "Citra",
            "department": null,
            "email": null,
            "hire_date": null,
        }))
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.department, "");
        assert_eq!(record.position, "");
        assert_eq!(record.email, "");
        assert_eq!(record.salary, 0.0);
        assert_eq!(record.hire_date, None);
    }

    #[test]
    fn empty_and_zero_dates_are_absent() {
        for raw in ["", "0000-00-00"] {
            let record: EmployeeRecord =
                serde_json::from_value(json!({ "hire_date": raw })).unwrap();
            assert_eq!(record.hire_date, None, "{raw:?}");
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result: Result<EmployeeRecord, _> =
            serde_json::from_value(json!({ "hire_date": "15/01/2020" }));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_salary_is_rejected() {
        let result: Result<EmployeeRecord, _> =
            serde_json::from_value(json!({ "salary": "a lot" }));
        assert!(result.is_err());
    }
}
