use crate::{Result, SyncError};
use serde_json::{Map, Value};

pub type RawRecord = Map<String, Value>;

/// The four fields pulled out of one payload element, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

/// Decodes a response body into an ordered list of JSON objects.
pub fn decode_records(body: &str) -> Result<Vec<RawRecord>> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| SyncError::Decode(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(SyncError::Decode(format!(
            "expected a JSON array, found {}",
            describe(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(SyncError::Decode(format!(
                "expected user record {index} to be an object, found {}",
                describe(&other)
            ))),
        })
        .collect()
}

pub fn extract_user(index: usize, record: &RawRecord) -> Result<RawUser> {
    let address = match record.get("address") {
        Some(Value::Object(address)) => address,
        Some(_) => {
            return Err(SyncError::InvalidField {
                index,
                field: "address",
            })
        }
        None => {
            return Err(SyncError::MissingField {
                index,
                field: "address",
            })
        }
    };

    Ok(RawUser {
        name: string_field(index, record, "name")?,
        email: string_field(index, record, "email")?,
        phone: string_field(index, record, "phone")?,
        city: labeled_string_field(index, address, "city", "address.city")?,
    })
}

fn string_field(index: usize, map: &Map<String, Value>, key: &'static str) -> Result<String> {
    labeled_string_field(index, map, key, key)
}

/// `field` is the dotted path reported in errors when `map` is nested.
fn labeled_string_field(
    index: usize,
    map: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<String> {
    match map.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(SyncError::InvalidField { index, field }),
        None => Err(SyncError::MissingField { index, field }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_records, extract_user, RawUser};
    use crate::SyncError;

    const LEANNE: &str = r#"[
      {
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
          "street": "Kulas Light",
          "suite": "Apt. 556",
          "city": "Gwenborough",
          "zipcode": "92998-3874",
          "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org"
      }
    ]"#;

    #[test]
    fn decode_records_keeps_order_and_extra_fields() {
        let body = r#"[{"name":"A","n":1},{"name":"B"},{"name":"C"}]"#;
        let records = decode_records(body).expect("decode");
        let names: Vec<&str> = records
            .iter()
            .map(|record| record["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(records[0]["n"], 1);
    }

    #[test]
    fn decode_records_accepts_empty_array() {
        assert!(decode_records("[]").expect("decode").is_empty());
    }

    #[test]
    fn decode_records_rejects_malformed_json() {
        let err = decode_records("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
    }

    #[test]
    fn decode_records_rejects_non_array_bodies() {
        let err = decode_records(r#"{"users":[]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid user payload: expected a JSON array, found an object"
        );
    }

    #[test]
    fn decode_records_rejects_non_object_elements() {
        let err = decode_records(r#"[{"name":"A"}, 7]"#).unwrap_err();
        assert!(err.to_string().contains("user record 1 to be an object"));
    }

    #[test]
    fn extract_user_reads_nested_city() {
        let records = decode_records(LEANNE).expect("decode");
        let user = extract_user(0, &records[0]).expect("extract");
        assert_eq!(
            user,
            RawUser {
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                phone: "1-770-736-8031 x56442".to_string(),
                city: "Gwenborough".to_string(),
            }
        );
    }

    #[test]
    fn extract_user_reports_missing_fields() {
        let records =
            decode_records(r#"[{"name":"A","email":"a@b.co","address":{"city":"X"}}]"#)
                .expect("decode");
        let err = extract_user(4, &records[0]).unwrap_err();
        assert!(matches!(
            err,
            SyncError::MissingField {
                index: 4,
                field: "phone"
            }
        ));
    }

    #[test]
    fn extract_user_reports_missing_city() {
        let records =
            decode_records(r#"[{"name":"A","email":"a@b.co","phone":"1","address":{}}]"#)
                .expect("decode");
        let err = extract_user(0, &records[0]).unwrap_err();
        assert_eq!(err.to_string(), "user record 0 is missing field `address.city`");
    }

    #[test]
    fn extract_user_labels_top_level_fields_by_key() {
        let records = decode_records(
            r#"[{"email":"a@b.co","phone":"1","address":{"city":"X"}}, {"name":"A","email":"a@b.co","phone":7,"address":{"city":"X"}}]"#,
        )
        .expect("decode");
        let err = extract_user(0, &records[0]).unwrap_err();
        assert_eq!(err.to_string(), "user record 0 is missing field `name`");

        let err = extract_user(1, &records[1]).unwrap_err();
        assert_eq!(err.to_string(), "user record 1 has a non-string `phone`");
    }

    #[test]
    fn extract_user_reports_non_string_city_by_path() {
        let records =
            decode_records(r#"[{"name":"A","email":"a@b.co","phone":"1","address":{"city":3}}]"#)
                .expect("decode");
        let err = extract_user(0, &records[0]).unwrap_err();
        assert!(matches!(
            err,
            SyncError::InvalidField {
                index: 0,
                field: "address.city"
            }
        ));
    }

    #[test]
    fn extract_user_reports_missing_address() {
        let records = decode_records(r#"[{"name":"A","email":"a@b.co","phone":"1"}]"#)
            .expect("decode");
        let err = extract_user(0, &records[0]).unwrap_err();
        assert!(matches!(
            err,
            SyncError::MissingField {
                field: "address",
                ..
            }
        ));
    }

    #[test]
    fn extract_user_rejects_non_string_values() {
        let records = decode_records(
            r#"[{"name":"A","email":null,"phone":"1","address":{"city":"X"}}]"#,
        )
        .expect("decode");
        let err = extract_user(0, &records[0]).unwrap_err();
        assert!(matches!(
            err,
            SyncError::InvalidField {
                index: 0,
                field: "email"
            }
        ));
    }
}
