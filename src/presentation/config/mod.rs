mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    DatabaseSettings, InterviewSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    TranslationSettings,
};
