use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use konnect::application::ports::{
    CompletionClient, InterviewRepository, SpeechSynthesizer, TranscriptionEngine,
    TranslationRepository,
};
use konnect::application::services::{InterviewService, TranslationService, TranslationWorker};
use konnect::infrastructure::audio::{
    MockSpeechSynthesizer, MockTranscriptionEngine, OpenAiSpeechSynthesizer, OpenAiWhisperEngine,
};
use konnect::infrastructure::llm::{MockCompletionClient, create_openai_client};
use konnect::infrastructure::observability::{TracingConfig, init_tracing};
use konnect::infrastructure::persistence::{
    InMemoryInterviewRepository, InMemoryTranslationRepository, PgInterviewRepository,
    PgTranslationRepository, create_pool, run_migrations,
};
use konnect::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

struct Adapters {
    completion_client: Arc<dyn CompletionClient>,
    translation_repository: Arc<dyn TranslationRepository>,
    interview_repository: Arc<dyn InterviewRepository>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
}

async fn build_adapters(settings: &Settings, scaffold: &ScaffoldConfig) -> anyhow::Result<Adapters> {
    if scaffold.enabled {
        tracing::warn!(
            delay_ms = scaffold.mock_response_delay_ms,
            "Scaffold mode: in-memory stores and mock AI adapters"
        );
        return Ok(Adapters {
            completion_client: Arc::new(MockCompletionClient::new(scaffold.mock_response_delay_ms)),
            translation_repository: Arc::new(InMemoryTranslationRepository::new()),
            interview_repository: Arc::new(InMemoryInterviewRepository::new()),
            transcription_engine: Arc::new(MockTranscriptionEngine),
            speech_synthesizer: Arc::new(MockSpeechSynthesizer),
        });
    }

    if settings.llm.api_key.is_empty() {
        anyhow::bail!("llm.api_key is required unless SCAFFOLD_MODE is enabled");
    }

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;
    run_migrations(&pool).await?;

    let llm = &settings.llm;
    let interview = &settings.interview;

    Ok(Adapters {
        completion_client: Arc::new(create_openai_client(llm)?),
        translation_repository: Arc::new(PgTranslationRepository::new(pool.clone())),
        interview_repository: Arc::new(PgInterviewRepository::new(pool)),
        transcription_engine: Arc::new(OpenAiWhisperEngine::new(
            &llm.api_key,
            &llm.base_url,
            &interview.transcription_model,
        )),
        speech_synthesizer: Arc::new(OpenAiSpeechSynthesizer::new(
            &llm.api_key,
            &llm.base_url,
            &interview.speech_model,
            &interview.voice,
        )),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.enable_json,
        &settings.logging.level,
    ));

    let scaffold_config = ScaffoldConfig::from_env();
    let adapters = build_adapters(&settings, &scaffold_config).await?;

    let translation_service = Arc::new(TranslationService::new(
        Arc::clone(&adapters.completion_client),
        adapters.translation_repository,
        settings.translation.max_iterations,
    ));

    let interview_service = Arc::new(InterviewService::new(
        adapters.completion_client,
        adapters.transcription_engine,
        adapters.speech_synthesizer,
        adapters.interview_repository,
        settings.interview.interviewer_prompt.clone(),
    ));

    let (translation_sender, translation_receiver) =
        mpsc::channel(settings.translation.queue_capacity.max(1));
    let worker = TranslationWorker::new(translation_receiver, Arc::clone(&translation_service));
    tokio::spawn(worker.run());

    let state = AppState {
        translation_service,
        interview_service,
        translation_sender,
        scaffold_config,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
