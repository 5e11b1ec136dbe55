use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use surrealdb::{Surreal, engine::any::Any};
use tracing::debug;

use crate::error::{AppError, Result};

/// 文档仓储
///
/// 文档自带 `_id`，存储中的记录键与之相同，按 id 查询无需扫表。
#[async_trait]
pub trait Repository<T: Clone + Send + Sync>: Send + Sync {
    /// Store a new document under `id`
    async fn create(&self, id: &str, entity: &T) -> Result<T>;

    /// Fetch a document by id
    async fn get_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Merge `patch` into a document, returning the updated document
    async fn merge(&self, id: &str, patch: serde_json::Value) -> Result<Option<T>>;

    /// Delete a document, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Every document in the collection, in storage order
    async fn list(&self) -> Result<Vec<T>>;

    /// Documents whose `field` equals `value`
    async fn list_where(&self, field: &str, value: serde_json::Value) -> Result<Vec<T>>;

    /// Delete documents whose `field` equals `value`, returning how many went
    async fn delete_where(&self, field: &str, value: serde_json::Value) -> Result<u64>;
}

/// 单表的 SurrealDB 仓储实现
#[derive(Clone)]
pub struct DocumentRepository<T> {
    db: Surreal<Any>,
    table: &'static str,
    _marker: PhantomData<T>,
}

impl<T> DocumentRepository<T> {
    pub fn new(db: Surreal<Any>, table: &'static str) -> Self {
        Self {
            db,
            table,
            _marker: PhantomData,
        }
    }
}

/// Field names are spliced into queries, so only plain identifiers pass
fn checked_field(field: &str) -> Result<&str> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(field)
    } else {
        Err(AppError::Internal(format!("Invalid field name: {}", field)))
    }
}

#[async_trait]
impl<T> Repository<T> for DocumentRepository<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn create(&self, id: &str, entity: &T) -> Result<T> {
        debug!("Creating {}:{}", self.table, id);
        let query = format!(
            "CREATE type::thing('{}', $id) CONTENT $doc RETURN NONE",
            self.table
        );
        self.db
            .query(query)
            .bind(("id", id.to_string()))
            .bind(("doc", entity.clone()))
            .await?
            .check()?;
        Ok(entity.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<T>> {
        let query = format!("SELECT * OMIT id FROM type::thing('{}', $id)", self.table);
        let result: Vec<T> = self
            .db
            .query(query)
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    async fn merge(&self, id: &str, patch: serde_json::Value) -> Result<Option<T>> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        debug!("Updating {}:{}", self.table, id);
        let query = format!(
            "UPDATE type::thing('{}', $id) MERGE $patch RETURN NONE",
            self.table
        );
        self.db
            .query(query)
            .bind(("id", id.to_string()))
            .bind(("patch", patch))
            .await?
            .check()?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        debug!("Deleting {}:{}", self.table, id);
        let query = format!("DELETE type::thing('{}', $id) RETURN NONE", self.table);
        self.db
            .query(query)
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<T>> {
        let query = format!("SELECT * OMIT id FROM {}", self.table);
        let result: Vec<T> = self.db.query(query).await?.take(0)?;
        Ok(result)
    }

    async fn list_where(&self, field: &str, value: serde_json::Value) -> Result<Vec<T>> {
        let query = format!(
            "SELECT * OMIT id FROM {} WHERE {} = $value",
            self.table,
            checked_field(field)?
        );
        let result: Vec<T> = self
            .db
            .query(query)
            .bind(("value", value))
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn delete_where(&self, field: &str, value: serde_json::Value) -> Result<u64> {
        let matching = self.list_where(field, value.clone()).await?;
        if matching.is_empty() {
            return Ok(0);
        }

        debug!("Deleting {} from {} where {}", matching.len(), self.table, field);
        let query = format!(
            "DELETE {} WHERE {} = $value RETURN NONE",
            self.table,
            checked_field(field)?
        );
        self.db
            .query(query)
            .bind(("value", value))
            .await?
            .check()?;
        Ok(matching.len() as u64)
    }
}
