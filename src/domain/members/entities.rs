//! メンバーエンティティ
//!
//! `members` テーブルの1行と、作成・更新リクエストのペイロード

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type MemberId = i32;

/// 列の最大長（VARCHARのサイズと一致させる）
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;
pub const POSITION_MAX_LEN: usize = 50;

/// 保存済みのメンバー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
}

impl Member {
    pub fn from_draft(id: MemberId, draft: MemberDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            position: draft.position,
        }
    }
}

/// 作成・更新時に受け取るフィールド一式
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl MemberDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 列の制約に合うか検証する。値は受け取ったまま保存される
    pub fn validated(self) -> Result<Self, MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        check_length("name", Some(&self.name), NAME_MAX_LEN)?;
        check_length("email", self.email.as_deref(), EMAIL_MAX_LEN)?;
        check_length("phone", self.phone.as_deref(), PHONE_MAX_LEN)?;
        check_length("position", self.position.as_deref(), POSITION_MAX_LEN)?;

        Ok(self)
    }
}

fn check_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), MemberValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(MemberValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
impl MemberDraft {
    pub(crate) fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub(crate) fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub(crate) fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}
