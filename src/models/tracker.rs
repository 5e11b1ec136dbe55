//! 追踪条目
//!
//! 作业与考试结构相同：带完成标记的条目，按日期排序，完成后可批量删除。

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// A document kind served by a tracker service
pub trait TrackedItem:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Storage table and URL segment (`/api/{COLLECTION}`)
    const COLLECTION: &'static str;
    /// Human readable name used in notices
    const DISPLAY_NAME: &'static str;

    /// Request body accepted when adding an item
    type Draft: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Build a new item, rejecting drafts with missing required fields
    fn from_draft(draft: Self::Draft) -> Result<Self>;

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn is_done(&self) -> bool;

    fn set_done(&mut self, done: bool);

    /// Listing order
    fn display_order(&self, other: &Self) -> Ordering;
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Assignment with a due date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub due_date: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub done: Option<bool>,
}

impl TrackedItem for Assignment {
    const COLLECTION: &'static str = "assignments";
    const DISPLAY_NAME: &'static str = "Assignment";

    type Draft = AssignmentDraft;

    fn from_draft(draft: AssignmentDraft) -> Result<Self> {
        match (required(draft.title), required(draft.due_date)) {
            (Some(title), Some(due_date)) => Ok(Self {
                id: Uuid::new_v4().to_string(),
                title,
                due_date,
                done: draft.done.unwrap_or(false),
            }),
            _ => Err(AppError::Validation("Missing fields".into())),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.due_date.cmp(&other.due_date)
    }
}

/// Exam with a date, a time and an optional subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExamDraft {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub done: Option<bool>,
}

impl TrackedItem for Exam {
    const COLLECTION: &'static str = "exams";
    const DISPLAY_NAME: &'static str = "Exam";

    type Draft = ExamDraft;

    fn from_draft(draft: ExamDraft) -> Result<Self> {
        match (
            required(draft.title),
            required(draft.date),
            required(draft.time),
        ) {
            (Some(title), Some(date), Some(time)) => Ok(Self {
                id: Uuid::new_v4().to_string(),
                title,
                subject: required(draft.subject),
                date,
                time,
                done: draft.done.unwrap_or(false),
            }),
            _ => Err(AppError::Validation("Missing fields".into())),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_requires_title_and_due_date() {
        let missing = AssignmentDraft {
            title: Some("Essay".into()),
            due_date: Some("   ".into()),
            done: None,
        };
        assert!(matches!(
            Assignment::from_draft(missing),
            Err(AppError::Validation(_))
        ));

        let ok = Assignment::from_draft(AssignmentDraft {
            title: Some(" Essay ".into()),
            due_date: Some("2025-02-01".into()),
            done: None,
        })
        .unwrap();
        assert_eq!(ok.title, "Essay");
        assert!(!ok.done);
        assert!(!ok.id.is_empty());
    }

    #[test]
    fn test_exam_subject_is_optional() {
        let exam = Exam::from_draft(ExamDraft {
            title: Some("Midterm".into()),
            subject: None,
            date: Some("2025-03-10".into()),
            time: Some("09:00".into()),
            done: Some(true),
        })
        .unwrap();
        assert_eq!(exam.subject, None);
        assert!(exam.done);

        let json = serde_json::to_value(&exam).unwrap();
        assert!(json.get("subject").is_none());
        assert_eq!(json["_id"], exam.id.as_str());
    }

    #[test]
    fn test_exam_order_uses_date_then_time() {
        let mk = |date: &str, time: &str| Exam {
            id: Uuid::new_v4().to_string(),
            title: "x".into(),
            subject: None,
            date: date.into(),
            time: time.into(),
            done: false,
        };
        let mut exams = vec![
            mk("2025-03-11", "08:00"),
            mk("2025-03-10", "13:00"),
            mk("2025-03-10", "09:00"),
        ];
        exams.sort_by(|a, b| a.display_order(b));
        let order: Vec<_> = exams.iter().map(|e| (e.date.as_str(), e.time.as_str())).collect();
        assert_eq!(
            order,
            vec![
                ("2025-03-10", "09:00"),
                ("2025-03-10", "13:00"),
                ("2025-03-11", "08:00"),
            ]
        );
    }
}
