//! メンバーリポジトリの実装

pub mod in_memory_member_repository;
pub mod mysql_member_repository;

pub use in_memory_member_repository::InMemoryMemberRepository;
pub use mysql_member_repository::MySqlMemberRepository;
