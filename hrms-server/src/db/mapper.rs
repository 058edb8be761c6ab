//! Employee Record Mapper
//!
//! Pure translations between the wire entity, request bodies and the BSON
//! filters/updates/documents the store understands. Identifier parsing here is
//! the only input validation in the service.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};

use super::models::{Employee, EmployeeDocument, EmployeePayload};
use super::{RepoError, RepoResult};

/// Parse the external 24-character hex form of an identifier
pub fn parse_identifier(id: &str) -> RepoResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|e| RepoError::InvalidIdentifier(format!("'{}' is not a valid id: {}", id, e)))
}

/// Filter matching exactly the document with `id`
pub fn equality_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// `$set` expression overwriting all mutable fields
///
/// There is no partial update: fields absent from the request body were
/// already zeroed during deserialization and are written as such.
pub fn update_document(payload: &EmployeePayload) -> Document {
    doc! {
        "$set": {
            "name": payload.name.as_str(),
            "salary": payload.salary,
            "age": payload.age,
        }
    }
}

/// Decode a stored document into the wire entity
pub fn decode_record(document: Document) -> RepoResult<Employee> {
    let record: EmployeeDocument = bson::from_document(document)?;
    let id = record
        .id
        .ok_or_else(|| RepoError::Decode("document has no _id".to_string()))?;
    Ok(Employee {
        id: id.to_hex(),
        name: record.name,
        salary: record.salary,
        age: record.age,
    })
}

/// Insertable document without `_id`, so the store assigns one
pub fn encode_for_insert(payload: &EmployeePayload) -> RepoResult<Document> {
    let record = EmployeeDocument {
        id: None,
        name: payload.name.clone(),
        salary: payload.salary,
        age: payload.age,
    };
    Ok(bson::to_document(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    const HEX_ID: &str = "64b7f3a2c9e77a1d2f3e4a5b";

    #[test]
    fn test_parse_identifier_accepts_hex() {
        let id = parse_identifier(HEX_ID).unwrap();
        assert_eq!(id.to_hex(), HEX_ID);
        assert_eq!(id.bytes().len(), 12);
    }

    #[test]
    fn test_parse_identifier_rejects_malformed() {
        for bad in [
            "",
            "not-a-valid-hex-id",
            "64b7f3a2c9e77a1d2f3e4a5",   // 23 chars
            "64b7f3a2c9e77a1d2f3e4a5b0", // 25 chars
            "64b7f3a2c9e77a1d2f3e4a5z",
        ] {
            assert!(
                matches!(parse_identifier(bad), Err(RepoError::InvalidIdentifier(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_equality_filter_shape() {
        let id = parse_identifier(HEX_ID).unwrap();
        let filter = equality_filter(id);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get_object_id("_id").unwrap(), id);
    }

    #[test]
    fn test_update_document_sets_every_field() {
        let update = update_document(&EmployeePayload {
            name: "Ada".into(),
            salary: 1200.0,
            age: 30.0,
        });
        assert_eq!(update.len(), 1);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Ada");
        assert_eq!(set.get_f64("salary").unwrap(), 1200.0);
        assert_eq!(set.get_f64("age").unwrap(), 30.0);
    }

    #[test]
    fn test_update_document_zeroes_missing_fields() {
        let payload: EmployeePayload = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        let update = update_document(&payload);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_f64("salary").unwrap(), 0.0);
        assert_eq!(set.get_f64("age").unwrap(), 0.0);
        assert!(!set.contains_key("_id"));
    }

    #[test]
    fn test_encode_for_insert_omits_id() {
        let body = r#"{"id":"64b7f3a2c9e77a1d2f3e4a5b","name":"Ada","salary":1000,"age":30}"#;
        let payload: EmployeePayload = serde_json::from_str(body).unwrap();
        let document = encode_for_insert(&payload).unwrap();
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("id"));
        assert_eq!(document.get_str("name").unwrap(), "Ada");
        assert_eq!(document.get_f64("salary").unwrap(), 1000.0);
    }

    #[test]
    fn test_decode_record() {
        let id = ObjectId::new();
        let employee = decode_record(doc! {
            "_id": id,
            "name": "Ada",
            "salary": 1000.0,
            "age": 30,
            "department": "R&D",
        })
        .unwrap();
        assert_eq!(employee.id, id.to_hex());
        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.salary, 1000.0);
        assert_eq!(employee.age, 30.0);
    }

    #[test]
    fn test_decode_record_defaults_missing_fields() {
        let id = ObjectId::new();
        let employee = decode_record(doc! { "_id": id }).unwrap();
        assert_eq!(employee.name, "");
        assert_eq!(employee.salary, 0.0);
        assert_eq!(employee.age, 0.0);
    }

    #[test]
    fn test_decode_record_rejects_bad_shapes() {
        assert!(matches!(
            decode_record(doc! { "name": "Ada" }),
            Err(RepoError::Decode(_))
        ));
        assert!(matches!(
            decode_record(doc! { "_id": "not-an-object-id", "name": "Ada" }),
            Err(RepoError::Decode(_))
        ));
        assert!(matches!(
            decode_record(doc! { "_id": ObjectId::new(), "salary": Bson::String("lots".into()) }),
            Err(RepoError::Decode(_))
        ));
    }
}
