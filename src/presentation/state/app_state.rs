use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::CompletionClient;
use crate::application::services::{InterviewService, TranslationMessage, TranslationService};
use crate::presentation::config::ScaffoldConfig;

pub struct AppState<C>
where
    C: CompletionClient + ?Sized,
{
    pub translation_service: Arc<TranslationService<C>>,
    pub interview_service: Arc<InterviewService<C>>,
    pub translation_sender: mpsc::Sender<TranslationMessage>,
    pub scaffold_config: ScaffoldConfig,
}

impl<C> Clone for AppState<C>
where
    C: CompletionClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            translation_service: Arc::clone(&self.translation_service),
            interview_service: Arc::clone(&self.interview_service),
            translation_sender: self.translation_sender.clone(),
            scaffold_config: self.scaffold_config.clone(),
        }
    }
}
