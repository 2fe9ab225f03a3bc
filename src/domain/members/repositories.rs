//! メンバーリポジトリのトレイト

use super::{Member, MemberDraft, MemberId};
use async_trait::async_trait;
use thiserror::Error;

/// メンバーリポジトリのエラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database connection error: {message}")]
    ConnectionError { message: String },
    #[error("Query failed: {message}")]
    QueryFailed { message: String },
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RepositoryError {
    /// エラーが一時的なものかチェック
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ConnectionError { .. })
    }
}

/// `members` テーブルへのアクセス
///
/// 各操作は1往復で完結し、書き込みは即座にコミットされる。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// テーブルが無ければ作成する
    async fn initialize_schema(&self) -> Result<(), RepositoryError>;

    /// 全メンバーをID順で取得
    async fn list(&self) -> Result<Vec<Member>, RepositoryError>;

    /// 追加して、採番されたIDを含む行を返す
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError>;

    /// 4つのフィールドをすべて置き換え、影響行数を返す
    async fn update(&self, id: MemberId, draft: &MemberDraft) -> Result<u64, RepositoryError>;

    /// 削除して影響行数を返す。存在しないIDは0行でエラーにはならない
    async fn delete(&self, id: MemberId) -> Result<u64, RepositoryError>;
}
