//! Lookup and session integration tests against a mock dictionary API.

use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wordlookup::db::Database;
use wordlookup::lookup::{Dictionary, DictionaryClient, Query};
use wordlookup::models::LookupOutcome;
use wordlookup::render::render;
use wordlookup::session::LookupSession;
use wordlookup::store::{MemoryStore, WordStore, LAST_WORD_KEY};

const ENTRIES_PATH: &str = "/api/v2/entries";

fn client_for(server: &MockServer) -> DictionaryClient {
    DictionaryClient::new(server.url(ENTRIES_PATH))
}

fn hello_entries() -> serde_json::Value {
    json!([
        {
            "word": "hello",
            "phonetic": "/həˈləʊ/",
            "phonetics": [
                { "text": "/həˈləʊ/", "audio": "" },
                { "text": "/hɛˈləʊ/", "audio": "https://audio.example/hello-uk.mp3" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [
                        { "definition": "Used as a greeting.", "example": "hello there, Katie!" }
                    ]
                },
                { "partOfSpeech": "noun", "definitions": [] }
            ]
        },
        { "word": "hello-secondary" }
    ])
}

fn query(word: &str) -> Query {
    Query::parse(word).expect("valid query")
}

mod dictionary_client {
    use super::*;

    #[tokio::test]
    async fn requests_english_entry_for_word() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/hello");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(hello_entries());
            })
            .await;

        let outcome = client_for(&server).lookup(&query("hello")).await;

        mock.assert_async().await;
        let LookupOutcome::Success(entries) = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "hello");
    }

    #[tokio::test]
    async fn empty_array_renders_no_results() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/zzz");
                then.status(200).json_body(json!([]));
            })
            .await;

        let outcome = client_for(&server).lookup(&query("zzz")).await;

        assert_eq!(outcome, LookupOutcome::Success(vec![]));
        assert_eq!(render(&outcome).html, "<p>No results. Try another word.</p>");
    }

    #[tokio::test]
    async fn not_found_uses_api_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/qwzx");
                then.status(404).json_body(json!({
                    "title": "No Definitions Found",
                    "message": "No Definitions Found",
                    "resolution": "You can try the search again at later time or head to the web instead."
                }));
            })
            .await;

        let outcome = client_for(&server).lookup(&query("qwzx")).await;

        assert_eq!(outcome, LookupOutcome::NotFound("No Definitions Found".into()));
        assert_eq!(render(&outcome).html, "<p>No Definitions Found</p>");
    }

    #[tokio::test]
    async fn error_message_with_markup_is_escaped() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/bad");
                then.status(400)
                    .json_body(json!({ "message": "<script>alert('x')</script>" }));
            })
            .await;

        let outcome = client_for(&server).lookup(&query("bad")).await;

        assert_eq!(
            render(&outcome).html,
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
        );
    }

    #[tokio::test]
    async fn unparsable_error_body_falls_back_to_default_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/broken");
                then.status(502).body("<html>Bad Gateway</html>");
            })
            .await;

        let outcome = client_for(&server).lookup(&query("broken")).await;

        assert_eq!(outcome, LookupOutcome::NotFound("No definitions found.".into()));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let client = DictionaryClient::new("http://127.0.0.1:1/api/v2/entries");

        let outcome = client.lookup(&query("hello")).await;

        assert_eq!(outcome, LookupOutcome::NetworkError);
        assert_eq!(
            render(&outcome).html,
            "<p>Network error. Please try again.</p>"
        );
    }
}

mod session {
    use super::*;

    #[tokio::test]
    async fn blank_input_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!([]));
            })
            .await;
        let mut session = LookupSession::new(client_for(&server), MemoryStore::new());

        session.set_input(" \t ");

        assert!(!session.submit().await);
        assert_eq!(mock.hits_async().await, 0);
        assert!(session.state().outcome.is_none());
    }

    #[tokio::test]
    async fn renders_first_entry_and_persists_word() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/hello");
                then.status(200).json_body(hello_entries());
            })
            .await;
        let store = MemoryStore::new();
        let mut session = LookupSession::new(client_for(&server), store.clone());

        session.set_input("hello ");
        assert!(session.submit().await);

        let state = session.state();
        assert!(state.status.is_none());
        assert!(state.view.html.contains("<h2>hello</h2>"));
        assert!(state.view.html.contains("<span class=\"phonetic\">/həˈləʊ/</span>"));
        assert!(state.view.html.contains("<div class=\"part-of-speech\">exclamation</div>"));
        assert!(state.view.html.contains("e.g., hello there, Katie!"));
        assert!(!state.view.html.contains("noun"));
        assert!(!state.view.html.contains("hello-secondary"));
        assert_eq!(
            state.view.audio_src.as_deref(),
            Some("https://audio.example/hello-uk.mp3")
        );
        assert_eq!(store.get(LAST_WORD_KEY).unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn not_found_keeps_previous_persisted_word() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/qwzx");
                then.status(404).json_body(json!({ "message": "No Definitions Found" }));
            })
            .await;
        let store = MemoryStore::new();
        store.set(LAST_WORD_KEY, "hello").unwrap();
        let mut session = LookupSession::new(client_for(&server), store.clone());

        session.set_input("qwzx");
        assert!(session.submit().await);

        assert_eq!(session.state().view.html, "<p>No Definitions Found</p>");
        assert_eq!(store.get(LAST_WORD_KEY).unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn fresh_session_restores_last_word_and_result() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/entries/en/hello");
                then.status(200).json_body(hello_entries());
            })
            .await;
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("wordlookup.db");

        let first_view = {
            let db = Database::open(db_path.clone()).unwrap();
            db.migrate().unwrap();
            let mut session = LookupSession::new(client_for(&server), db);
            session.set_input("hello");
            assert!(session.submit().await);
            session.state().view.clone()
        };

        let db = Database::open(db_path).unwrap();
        db.migrate().unwrap();
        let mut session = LookupSession::new(client_for(&server), db);

        assert!(session.bootstrap().await);
        assert_eq!(session.state().input, "hello");
        assert_eq!(session.state().view, first_view);
    }
}
