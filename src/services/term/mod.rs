//! 学期服务
//!
//! 学期的创建、查询与时长修改。

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::term::{Term, is_valid_term_length};
use crate::storage::repository::Repository;

/// 学期服务 trait
#[async_trait]
pub trait TermService: Send + Sync {
    /// 全部学期，按创建时间升序
    async fn list(&self) -> Result<Vec<Term>>;

    /// Fetch a term, failing with `NotFound`
    async fn get(&self, id: &str) -> Result<Term>;

    /// Create a term
    async fn create(&self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term>;

    /// Change the number of weeks in a term
    async fn update_length(&self, id: &str, term_length: u32) -> Result<Term>;
}

/// 学期服务实现
pub struct TermServiceImpl {
    repository: Arc<dyn Repository<Term>>,
}

impl TermServiceImpl {
    pub fn new(repository: Arc<dyn Repository<Term>>) -> Self {
        Self { repository }
    }
}

fn check_length(term_length: u32) -> Result<()> {
    if is_valid_term_length(term_length) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Invalid termLength (must be 1-52)".to_string(),
        ))
    }
}

#[async_trait]
impl TermService for TermServiceImpl {
    async fn list(&self) -> Result<Vec<Term>> {
        let mut terms = self.repository.list().await?;
        terms.sort_by_key(|t| t.created_at);
        Ok(terms)
    }

    async fn get(&self, id: &str) -> Result<Term> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Term not found".to_string()))
    }

    async fn create(&self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Missing or invalid name or startDate".to_string(),
            ));
        }
        check_length(term_length)?;

        let term = Term::new(name, term_length, start_date);
        self.repository.create(&term.id, &term).await
    }

    async fn update_length(&self, id: &str, term_length: u32) -> Result<Term> {
        check_length(term_length)?;

        self.repository
            .merge(id, json!({ "termLength": term_length }))
            .await?
            .ok_or_else(|| AppError::NotFound("Term not found".to_string()))
    }
}

/// 创建学期服务
pub fn create_term_service(repository: Arc<dyn Repository<Term>>) -> Box<dyn TermService> {
    Box::new(TermServiceImpl::new(repository))
}
