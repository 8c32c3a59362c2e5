mod auth;
mod error_response;
mod health;
mod interviews;
mod translations;

pub use auth::{AuthenticatedUser, USER_ID_HEADER};
pub use error_response::{ErrorResponse, error_response};
pub use health::health_handler;
pub use interviews::{
    create_interview_handler, end_interview_handler, get_interview_handler,
    list_interviews_handler, list_messages_handler, respond_handler,
};
pub use translations::{
    get_translation_handler, list_translations_handler, submit_translation_handler,
};
