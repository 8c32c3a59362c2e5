mod chat_message;
mod document_type;
mod interview;
mod interview_id;
mod message_role;
mod translation;
mod translation_id;
mod translation_status;
mod user_id;

pub use chat_message::ChatMessage;
pub use document_type::{DocumentType, PromptTemplate};
pub use interview::{Interview, InterviewMessage, InterviewStatus};
pub use interview_id::InterviewId;
pub use message_role::MessageRole;
pub use translation::{
    NewTranslation, PLACEHOLDER_NAME, Translation, TranslationSource, TranslationUpdate,
};
pub use translation_id::TranslationId;
pub use translation_status::TranslationStatus;
pub use user_id::UserId;
