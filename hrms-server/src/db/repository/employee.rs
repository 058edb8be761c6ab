//! Employee Repository

use std::sync::Arc;

use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;

use crate::db::mapper;
use crate::db::models::{Employee, EmployeePayload};
use crate::db::{DocumentStore, RepoError, RepoResult};

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    store: Arc<dyn DocumentStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find all employees, no filter and no limit
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.store
            .find(Document::new())
            .await?
            .into_iter()
            .map(mapper::decode_record)
            .collect()
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Employee>> {
        self.store
            .find_one(mapper::equality_filter(id))
            .await?
            .map(mapper::decode_record)
            .transpose()
    }

    /// Insert a new employee, returning the store-assigned id
    pub async fn insert(&self, data: &EmployeePayload) -> RepoResult<ObjectId> {
        let document = mapper::encode_for_insert(data)?;
        let inserted = self.store.insert_one(document).await?;
        inserted.as_object_id().ok_or_else(|| {
            RepoError::Decode(format!("store assigned a non-ObjectId _id: {}", inserted))
        })
    }

    /// Overwrite name, salary and age of an employee
    ///
    /// Returns the request body with `id` attached; `NotFound` when no
    /// document matched.
    pub async fn update(&self, id: ObjectId, data: EmployeePayload) -> RepoResult<Employee> {
        let matched = self
            .store
            .find_one_and_update(mapper::equality_filter(id), mapper::update_document(&data))
            .await?;
        match matched {
            Some(_) => Ok(data.into_employee(&id)),
            None => Err(RepoError::NotFound(format!("Employee {} not found", id))),
        }
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: ObjectId) -> RepoResult<()> {
        let deleted = self.store.delete_one(mapper::equality_filter(id)).await?;
        if deleted == 0 {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }
        Ok(())
    }
}
