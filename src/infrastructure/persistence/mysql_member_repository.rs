use crate::config::DatabaseConfig;
use crate::domain::members::{Member, MemberDraft, MemberId, MemberRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPool, MySqlPoolOptions};
use sqlx::{Connection, MySql};
use sqlx::pool::PoolConnection;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_MEMBERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS members (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100),
        phone VARCHAR(20),
        position VARCHAR(50)
    )
"#;

/// Database row for members
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i32,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    position: Option<String>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            position: row.position,
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => RepositoryError::ConnectionError {
                message: e.to_string(),
            },
            other => RepositoryError::QueryFailed {
                message: other.to_string(),
            },
        }
    }
}

/// MySQLの `members` テーブルを扱うリポジトリ
///
/// プールは遅延接続なので、DBが起動していなくても生成できる。
/// 各操作は接続を1本だけ借り、どの経路で抜けてもドロップ時にプールへ返す。
/// テーブル作成だけはプールを通さず直接接続し、接続拒否を即座に返す。
pub struct MySqlMemberRepository {
    options: MySqlConnectOptions,
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(60))
            .connect_lazy_with(options.clone());

        Self { options, pool }
    }

    async fn acquire(&self) -> Result<PoolConnection<MySql>, RepositoryError> {
        self.pool.acquire().await.map_err(RepositoryError::from)
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn initialize_schema(&self) -> Result<(), RepositoryError> {
        let mut conn = MySqlConnection::connect_with(&self.options).await?;
        sqlx::query(CREATE_MEMBERS_TABLE)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        info!("members table is ready");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
        let mut conn = self.acquire().await?;
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, position
            FROM members
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            "INSERT INTO members (name, email, phone, position) VALUES (?, ?, ?, ?)",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.position)
        .execute(&mut *conn)
        .await?;

        let id = MemberId::try_from(result.last_insert_id()).map_err(|_| {
            RepositoryError::Internal {
                message: format!("member id {} out of range", result.last_insert_id()),
            }
        })?;
        debug!(id, "Inserted member");

        Ok(Member::from_draft(id, draft.clone()))
    }

    async fn update(&self, id: MemberId, draft: &MemberDraft) -> Result<u64, RepositoryError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            "UPDATE members SET name = ?, email = ?, phone = ?, position = ? WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.position)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: MemberId) -> Result<u64, RepositoryError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
