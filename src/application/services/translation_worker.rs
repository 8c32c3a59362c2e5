use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::CompletionClient;
use crate::domain::Translation;

use super::TranslationService;

pub struct TranslationMessage {
    pub translation: Translation,
}

/// Receives accepted submissions and runs each one on its own task. Jobs
/// share nothing but the store, so they are free to overlap.
pub struct TranslationWorker<C>
where
    C: CompletionClient + ?Sized,
{
    receiver: mpsc::Receiver<TranslationMessage>,
    service: Arc<TranslationService<C>>,
}

impl<C> TranslationWorker<C>
where
    C: CompletionClient + ?Sized + 'static,
{
    pub fn new(
        receiver: mpsc::Receiver<TranslationMessage>,
        service: Arc<TranslationService<C>>,
    ) -> Self {
        Self { receiver, service }
    }

    pub async fn run(mut self) {
        tracing::info!("Translation worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "translation_job",
                translation_id = %msg.translation.id,
                owner_id = %msg.translation.owner_id,
                document_type = %msg.translation.document_type,
            );
            let service = Arc::clone(&self.service);

            tokio::spawn(
                async move {
                    if let Err(e) = service.translate(&msg.translation).await {
                        tracing::error!(error = %e, "Translation job failed");
                    }
                }
                .instrument(span),
            );
        }
        tracing::info!("Translation worker stopped: channel closed");
    }
}
