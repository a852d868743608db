use askzen_llm::{ChatClient, ChatOptions, ChatRequest, CompletionClient, Message};
use mockito::Matcher;
use serde_json::json;

fn request() -> ChatRequest {
    ChatRequest::new(
        "test-model",
        vec![Message::system("You are a tutor."), Message::human("What is gravity?")],
    )
    .with_options(ChatOptions::new().temperature(0.3).max_tokens(100))
}

#[tokio::test]
async fn test_chat_returns_first_choice_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer secret-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "You are a tutor."},
                {"role": "user", "content": "What is gravity?"}
            ],
            "max_tokens": 100
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Gravity pulls masses together."}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CompletionClient::with_base_url("secret-key", server.url()).unwrap();
    let response = client.chat(request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "Gravity pulls masses together.");
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 17);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("{\"error\":\"invalid key\"}")
        .create_async()
        .await;

    let client = CompletionClient::with_base_url("wrong", server.url()).unwrap();
    let err = client.chat(request()).await.unwrap_err();

    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_missing_choices_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"choices\": []}")
        .create_async()
        .await;

    let client = CompletionClient::with_base_url("key", server.url()).unwrap();
    let err = client.chat(request()).await.unwrap_err();

    assert!(err.to_string().contains("Invalid response format"));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = CompletionClient::with_base_url("key", server.url()).unwrap();
    assert!(client.chat(request()).await.is_err());
}
