//! Employee Model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Employee as it appears on the wire
///
/// `id` is the 24-character hex form of the store-assigned ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

/// Create / update request body
///
/// Missing or `null` fields take their zero value and unknown fields are
/// ignored, so a client-supplied `id` never reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub age: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmployeePayload {
    /// Attach an identifier, producing the wire entity
    pub fn into_employee(self, id: &ObjectId) -> Employee {
        Employee {
            id: id.to_hex(),
            name: self.name,
            salary: self.salary,
            age: self.age,
        }
    }
}

/// Employee as stored in the `employee` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: f64,
}
