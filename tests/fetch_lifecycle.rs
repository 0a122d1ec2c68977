use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use octofit_cli::cli_context::CliContextBuilder;
use octofit_cli::client::ApiClient;
use octofit_cli::error::FetchError;
use octofit_cli::interactive::DashboardApp;
use octofit_cli::models::{Endpoint, Resource};
use octofit_cli::resources::view_config;
use octofit_cli::view::{spawn_fetch, ResourceView, TableBody, ViewModel, ViewState};
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn view_for(server: &MockServer, resource: Resource) -> (ResourceView, Arc<ApiClient>) {
    let mut context = CliContextBuilder::new()
        .with_base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap();
    let client = context.client().unwrap();
    let view = ResourceView::new(view_config(resource), context.endpoint(resource));
    (view, client)
}

#[tokio::test]
async fn test_array_body_renders_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "alice", "email": "a@x.com", "team": "Avengers"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (mut view, client) = view_for(&server, Resource::Users).await;
    view.load(&client).await;

    match view.render() {
        ViewModel::Table(table) => {
            assert_eq!(table.badge, "1 users");
            assert_eq!(table.rows().len(), 1);
            assert_eq!(table.rows()[0].cells[1].text(), "alice");
        }
        other => panic!("expected a table, got {:?}", other),
    }
}

#[tokio::test]
async fn test_envelope_body_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"_id": "t1", "name": "Team Marvel", "members": "Thor, Loki, Hulk"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut view, client) = view_for(&server, Resource::Teams).await;
    view.load(&client).await;

    let ViewModel::Table(table) = view.render() else {
        panic!("expected a table");
    };
    assert_eq!(table.badge, "1 teams");
    let row = &table.rows()[0];
    assert_eq!(row.cells[2].text(), "Thor Loki Hulk");
    assert_eq!(row.cells[3].text(), "3");
}

#[tokio::test]
async fn test_empty_envelope_shows_empty_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workouts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let (mut view, client) = view_for(&server, Resource::Workouts).await;
    view.load(&client).await;

    let ViewModel::Table(table) = view.render() else {
        panic!("expected a table");
    };
    assert_eq!(table.badge, "0 workouts");
    assert_eq!(table.body, TableBody::Empty("No workouts found.".to_string()));
}

#[tokio::test]
async fn test_server_error_becomes_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut view, client) = view_for(&server, Resource::Leaderboard).await;
    let state = view.load(&client).await;

    assert_eq!(state, &ViewState::Error("HTTP error! status: 500".to_string()));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let (_, client) = view_for(&server, Resource::Activities).await;
    let endpoint = Endpoint::new(format!("{}/api/activities/", server.uri()));
    assert_eq!(client.fetch_collection(&endpoint).await, Err(FetchError::Decode));

    let (mut view, client) = view_for(&server, Resource::Activities).await;
    view.load(&client).await;
    assert!(view.state().records().is_none());
    assert!(matches!(view.render(), ViewModel::Error(msg) if msg.contains("decode")));
}

#[tokio::test]
async fn test_non_collection_json_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "ok"})))
        .mount(&server)
        .await;

    let (mut view, client) = view_for(&server, Resource::Users).await;
    view.load(&client).await;
    assert_eq!(view.state().records().map(|r| r.len()), Some(0));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = ApiClient::new().unwrap();
    let endpoint = Endpoint::new("http://127.0.0.1:1/api/users/");

    match client.fetch_collection(&endpoint).await {
        Err(FetchError::Network(message)) => assert!(!message.is_empty()),
        other => panic!("expected a network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_timeout(Some(Duration::from_millis(100))).unwrap();
    let endpoint = Endpoint::new(format!("{}/api/users/", server.uri()));
    assert!(matches!(
        client.fetch_collection(&endpoint).await,
        Err(FetchError::Network(_))
    ));
}

#[tokio::test]
async fn test_slow_response_from_previous_tab_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "stale", "username": "ghost"}]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Team DC", "members": ["Bruce", "Diana"]}
        ])))
        .mount(&server)
        .await;

    let client = Arc::new(ApiClient::new().unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = DashboardApp::new(format!("{}/api", server.uri()), Resource::Users);

    spawn_fetch(client.clone(), app.start(), tx.clone());
    let ticket = app.handle_key(KeyCode::Tab).expect("switching tabs issues a fetch");
    spawn_fetch(client.clone(), ticket, tx.clone());
    drop(tx);

    let mut applied = Vec::new();
    while let Some(outcome) = rx.recv().await {
        applied.push(app.apply(outcome));
    }

    // teams arrives first, the delayed users result is dropped
    assert_eq!(applied, vec![true, false]);
    assert_eq!(app.active(), Resource::Teams);
    let ViewModel::Table(table) = app.view().render() else {
        panic!("expected a table");
    };
    assert_eq!(table.badge, "1 teams");
    assert_eq!(table.rows()[0].cells[1].text(), "Team DC");
}
