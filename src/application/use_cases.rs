pub mod capture_snapshot;
pub mod initialize_database;
pub mod run_application;

pub use capture_snapshot::CaptureSnapshotUseCase;
pub use initialize_database::InitializeDatabaseUseCase;
pub use run_application::RunApplicationUseCase;
