use chefai::pipelines::chat::{self, FALLBACK_REPLY};
use chefai::services::GeminiBackend;
use chefai::session::{Role, Session};
use mockito::{Matcher, Server};

const MODEL: &str = "gemini-1.5-flash";
const MOCK_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent?key=fake_key";

fn reply_body(text: &str) -> String {
    format!(
        r#"{{"candidates": [{{"content": {{"parts": [{{"text": "{}"}}]}}}}]}}"#,
        text
    )
}

fn session_with_recipe() -> Session {
    let mut session = Session::default();
    session
        .context
        .record_generation("title: Pasta\ningredients: egg; flour".to_string(), "egg, flour".to_string());
    session
}

#[tokio::test]
async fn test_calorie_question_uses_calorie_template() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MOCK_PATH)
        .match_body(Matcher::Regex("per-serving calories".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("About 450 kcal per serving."))
        .create();

    let backend = GeminiBackend::with_base_url(
        server.url(),
        "fake_key".to_string(),
        MODEL.to_string(),
    );
    let mut session = session_with_recipe();

    let reply = chat::process("How many calories is this?", &backend, &mut session).await;

    assert_eq!(reply, "About 450 kcal per serving.");
    mock.assert();
}

#[tokio::test]
async fn test_generic_question_carries_recipe_context() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MOCK_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Here is the recipe and ingredients: egg, flour".to_string()),
            Matcher::Regex("Can I freeze this\\?".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Yes, it freezes well."))
        .create();

    let backend = GeminiBackend::with_base_url(
        server.url(),
        "fake_key".to_string(),
        MODEL.to_string(),
    );
    let mut session = session_with_recipe();

    let reply = chat::process("Can I freeze this?", &backend, &mut session).await;

    assert_eq!(reply, "Yes, it freezes well.");
    mock.assert();
}

#[tokio::test]
async fn test_backend_error_degrades_to_apology() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MOCK_PATH)
        .with_status(500)
        .with_body("internal error")
        .create();

    let backend = GeminiBackend::with_base_url(
        server.url(),
        "fake_key".to_string(),
        MODEL.to_string(),
    );
    let mut session = Session::default();

    let reply = chat::process("hello there", &backend, &mut session).await;

    assert_eq!(reply, FALLBACK_REPLY);
    // The conversation keeps going: both turns were appended.
    let turns = session.log.turns();
    assert_eq!(turns.last().unwrap().content, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_blank_reply_degrades_to_apology() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MOCK_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("  "))
        .create();

    let backend = GeminiBackend::with_base_url(
        server.url(),
        "fake_key".to_string(),
        MODEL.to_string(),
    );
    let mut session = Session::default();

    let reply = chat::process("hello", &backend, &mut session).await;
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_each_interaction_appends_two_turns() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MOCK_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Sure."))
        .expect(3)
        .create();

    let backend = GeminiBackend::with_base_url(
        server.url(),
        "fake_key".to_string(),
        MODEL.to_string(),
    );
    let mut session = Session::default();
    let initial_len = session.log.len();

    for question in ["one", "two", "three"] {
        chat::process(question, &backend, &mut session).await;
    }

    assert_eq!(session.log.len(), initial_len + 6);
    let turns = session.log.turns();
    assert_eq!(turns[initial_len].role, Role::User);
    assert_eq!(turns[initial_len].content, "one");
    assert_eq!(turns[initial_len + 1].role, Role::Assistant);

    // Only the trailing window is surfaced for display.
    assert_eq!(session.log.recent().len(), 5);
}
