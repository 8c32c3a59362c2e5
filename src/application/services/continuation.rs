use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::ChatMessage;

use super::TagParser;

pub const CONTINUE_INSTRUCTION: &str =
    "Please think step-by-step and continue translating with all relevant XML tags.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinuationState {
    /// Sentinel seen. Carries every raw response joined with newlines.
    Complete(String),
    /// Latest raw response; the model has more to say.
    Continuing(String),
    /// Iteration budget spent without a sentinel. Carries the joined
    /// responses received so far.
    Exhausted(String),
}

/// Drives one chunk through as many completion calls as it takes for the
/// model to flag `<is_done>Yes</is_done>`, up to `max_iterations` calls.
pub struct ContinuationLoop<'a, C>
where
    C: CompletionClient + ?Sized,
{
    client: &'a C,
    sentinel: &'a TagParser,
    system_prompt: &'a str,
    user_prompt: &'a str,
    max_iterations: usize,
    responses: Vec<String>,
    done: bool,
}

impl<'a, C> ContinuationLoop<'a, C>
where
    C: CompletionClient + ?Sized,
{
    pub fn new(
        client: &'a C,
        sentinel: &'a TagParser,
        system_prompt: &'a str,
        user_prompt: &'a str,
        max_iterations: usize,
    ) -> Self {
        Self {
            client,
            sentinel,
            system_prompt,
            user_prompt,
            max_iterations: max_iterations.max(1),
            responses: Vec::new(),
            done: false,
        }
    }

    pub fn iterations(&self) -> usize {
        self.responses.len()
    }

    /// Issues at most one completion call.
    pub async fn step(&mut self) -> Result<ContinuationState, CompletionError> {
        if self.done {
            return Ok(ContinuationState::Complete(self.joined()));
        }
        if self.responses.len() >= self.max_iterations {
            return Ok(ContinuationState::Exhausted(self.joined()));
        }

        let messages = self.messages();
        let response = self.client.complete(&messages).await?;
        self.done = self.sentinel.is_affirmative(&response);

        tracing::debug!(
            iteration = self.responses.len() + 1,
            done = self.done,
            chars = response.len(),
            "Completion received"
        );

        if self.done {
            self.responses.push(response);
            Ok(ContinuationState::Complete(self.joined()))
        } else {
            self.responses.push(response.clone());
            Ok(ContinuationState::Continuing(response))
        }
    }

    /// Steps until the loop completes or exhausts its budget.
    pub async fn run(mut self) -> Result<ContinuationState, CompletionError> {
        loop {
            match self.step().await? {
                ContinuationState::Continuing(_) => continue,
                terminal => return Ok(terminal),
            }
        }
    }

    fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(self.system_prompt)];
        match self.responses.last() {
            Some(previous) if !previous.is_empty() => {
                messages.push(ChatMessage::assistant(previous.as_str()));
                messages.push(ChatMessage::user(CONTINUE_INSTRUCTION));
            }
            _ => messages.push(ChatMessage::user(self.user_prompt)),
        }
        messages
    }

    fn joined(&self) -> String {
        self.responses.join("\n")
    }
}
