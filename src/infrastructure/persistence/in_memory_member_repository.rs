use crate::domain::members::{Member, MemberDraft, MemberId, MemberRepository, RepositoryError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    last_id: MemberId,
    rows: BTreeMap<MemberId, Member>,
}

/// プロセス内に保持するメンバーリポジトリ
///
/// `run --memory-store` とテストで使う。IDは1から採番し、再利用しない。
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    table: RwLock<Table>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn initialize_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Internal {
                message: "member id space exhausted".to_string(),
            })?;

        let member = Member::from_draft(table.last_id, draft.clone());
        table.rows.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update(&self, id: MemberId, draft: &MemberDraft) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Member::from_draft(id, draft.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: MemberId) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
