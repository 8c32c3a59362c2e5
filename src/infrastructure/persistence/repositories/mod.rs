mod in_memory_repository;
mod pg_interview_repository;
mod pg_translation_repository;

pub use in_memory_repository::{InMemoryInterviewRepository, InMemoryTranslationRepository};
pub use pg_interview_repository::PgInterviewRepository;
pub use pg_translation_repository::PgTranslationRepository;
