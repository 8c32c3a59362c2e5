use konnect::application::ports::CompletionError;
use konnect::application::services::{
    CONTINUE_INSTRUCTION, ContinuationLoop, ContinuationState, TagParser,
};
use konnect::domain::{ChatMessage, MessageRole};

use crate::helpers::{ScriptedCompletionClient, tagged_response};

fn sentinel() -> TagParser {
    TagParser::new("is_done").unwrap()
}

#[tokio::test]
async fn given_sentinel_on_third_response_when_running_then_makes_three_calls() {
    let client = ScriptedCompletionClient::new([
        tagged_response("a", false),
        tagged_response("b", false),
        tagged_response("c", true),
    ]);
    let sentinel = sentinel();

    let state = ContinuationLoop::new(&client, &sentinel, "system", "translate this", 32)
        .run()
        .await
        .unwrap();

    assert_eq!(client.call_count(), 3);
    let expected = [
        tagged_response("a", false),
        tagged_response("b", false),
        tagged_response("c", true),
    ]
    .join("\n");
    assert_eq!(state, ContinuationState::Complete(expected));
}

#[tokio::test]
async fn given_continuation_when_second_call_then_sends_previous_response_and_instruction() {
    let first = tagged_response("a", false);
    let client = ScriptedCompletionClient::new([first.clone(), tagged_response("b", true)]);
    let sentinel = sentinel();

    ContinuationLoop::new(&client, &sentinel, "system", "translate this", 32)
        .run()
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(
        calls[0],
        vec![
            ChatMessage::system("system"),
            ChatMessage::user("translate this"),
        ]
    );
    assert_eq!(
        calls[1],
        vec![
            ChatMessage::system("system"),
            ChatMessage::assistant(first.as_str()),
            ChatMessage::user(CONTINUE_INSTRUCTION),
        ]
    );
}

#[tokio::test]
async fn given_empty_previous_response_when_continuing_then_resends_user_prompt() {
    let client = ScriptedCompletionClient::new(vec![String::new(), tagged_response("b", true)]);
    let sentinel = sentinel();

    ContinuationLoop::new(&client, &sentinel, "system", "translate this", 32)
        .run()
        .await
        .unwrap();

    let second = &client.calls()[1];
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].role, MessageRole::User);
    assert_eq!(second[1].content, "translate this");
}

#[tokio::test]
async fn given_model_never_finishes_when_running_then_exhausts_after_budget() {
    let client = ScriptedCompletionClient::repeating(tagged_response("more", false));
    let sentinel = sentinel();

    let state = ContinuationLoop::new(&client, &sentinel, "system", "prompt", 4)
        .run()
        .await
        .unwrap();

    assert_eq!(client.call_count(), 4);
    assert!(matches!(state, ContinuationState::Exhausted(_)));
}

#[tokio::test]
async fn given_stepping_manually_when_not_done_then_reports_continuing_with_latest_response() {
    let client =
        ScriptedCompletionClient::new([tagged_response("a", false), tagged_response("b", true)]);
    let sentinel = sentinel();
    let mut continuation = ContinuationLoop::new(&client, &sentinel, "system", "prompt", 32);

    let first = continuation.step().await.unwrap();
    assert_eq!(first, ContinuationState::Continuing(tagged_response("a", false)));
    assert_eq!(continuation.iterations(), 1);

    let second = continuation.step().await.unwrap();
    assert!(matches!(second, ContinuationState::Complete(_)));

    let after_done = continuation.step().await.unwrap();
    assert!(matches!(after_done, ContinuationState::Complete(_)));
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn given_zero_budget_when_running_then_still_makes_one_call() {
    let client = ScriptedCompletionClient::new([tagged_response("a", true)]);
    let sentinel = sentinel();

    let state = ContinuationLoop::new(&client, &sentinel, "system", "prompt", 0)
        .run()
        .await
        .unwrap();

    assert_eq!(client.call_count(), 1);
    assert!(matches!(state, ContinuationState::Complete(_)));
}

#[tokio::test]
async fn given_completion_error_when_running_then_error_propagates() {
    let client = ScriptedCompletionClient::with_results(vec![Err(CompletionError::RateLimited)]);
    let sentinel = sentinel();

    let result = ContinuationLoop::new(&client, &sentinel, "system", "prompt", 32)
        .run()
        .await;

    assert!(matches!(result, Err(CompletionError::RateLimited)));
}
