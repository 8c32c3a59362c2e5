use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InterviewId, MessageRole, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Ongoing,
    Completed,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Ongoing => "ongoing",
            InterviewStatus::Completed => "completed",
        }
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(InterviewStatus::Ongoing),
            "completed" => Ok(InterviewStatus::Completed),
            _ => Err(format!("Invalid interview status: {}", s)),
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interview {
    pub id: InterviewId,
    pub owner_id: UserId,
    pub title: Option<String>,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    pub fn new(owner_id: UserId) -> Self {
        Self {
            id: InterviewId::new(),
            owner_id,
            title: None,
            status: InterviewStatus::Ongoing,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewMessage {
    pub id: Uuid,
    pub interview_id: InterviewId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl InterviewMessage {
    pub fn new(interview_id: InterviewId, role: MessageRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            interview_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }
}
