mod continuation;
mod interview_service;
mod tag_parser;
mod translation_output;
mod translation_prompt;
mod translation_service;
mod translation_worker;

pub use continuation::{CONTINUE_INSTRUCTION, ContinuationLoop, ContinuationState};
pub use interview_service::{
    DEFAULT_INTERVIEWER_PROMPT, InterviewError, InterviewReply, InterviewService,
};
pub use tag_parser::TagParser;
pub use translation_output::{
    DOCUMENT_HEADING, TranslatedUnit, UNIT_SEPARATOR, combine_units, preview_title,
};
pub use translation_prompt::{chapter_prompt, initial_prompt};
pub use translation_service::{TranslationError, TranslationService};
pub use translation_worker::{TranslationMessage, TranslationWorker};
