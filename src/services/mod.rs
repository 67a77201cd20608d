pub mod assembly_service;
pub mod ingest_service;
pub mod question_service;
pub mod seed_service;

pub use question_service::QuestionService;
pub use seed_service::{SeedReport, SeedService};
