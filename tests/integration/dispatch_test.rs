// tests/integration/dispatch_test.rs

//! Integration tests for command routing and the reply envelope.

use super::fixtures::*;
use super::test_helpers::*;
use fuod::core::handler::HandlerCategory;

#[tokio::test]
async fn test_ack_with_body() {
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(
        client.command("play fuo://local/songs/1\n").await,
        "ACK play fuo://local/songs/1\nPlaying: fuo://local/songs/1\nOK\n"
    );
    server.stop().await;
}

#[tokio::test]
async fn test_ack_without_body() {
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command(lines::SET_VOLUME).await, lines::SET_VOLUME_ACK);
    server.stop().await;
}

#[tokio::test]
async fn test_unknown_action_never_reaches_executor() {
    let executor = ScriptedExecutor::new();
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), executor.clone()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("frobnicate now\n").await, "Oops Command not found!\n");
    assert_eq!(client.command("Play\n").await, "ACK play\nPlaying: X\nOK\n");
    assert_eq!(executor.calls().len(), 1);
    server.stop().await;
}

#[tokio::test]
async fn test_unparsable_line_gets_not_found() {
    let executor = ScriptedExecutor::new();
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), executor.clone()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("!!! bang\n").await, "Oops Command not found!\n");
    assert!(executor.calls().is_empty());
    server.stop().await;
}

#[tokio::test]
async fn test_handler_failure_keeps_connection_open() {
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("stop\n").await, "\nOops\n");
    assert_eq!(client.command("stop\n").await, "\nOops\n");
    assert_eq!(client.command("toggle\n").await, "ACK toggle\nOK\n");
    server.stop().await;
}

#[tokio::test]
async fn test_handler_panic_keeps_connection_open() {
    let executor = ScriptedExecutor::new();
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), executor.clone()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("resume\n").await, "\nOops\n");
    assert_eq!(client.command("pause\n").await, "ACK pause\nOK\n");
    assert_eq!(executor.calls().len(), 2);

    // Other connections are unaffected as well.
    let mut other = server.connect().await;
    assert_eq!(other.greeting().await, GREETING);
    assert_eq!(other.command("status\n").await, "ACK status\nOK\n");
    server.stop().await;
}

#[tokio::test]
async fn test_whitespace_is_normalized_in_ack_header() {
    let executor = ScriptedExecutor::new();
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), executor.clone()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command(lines::SPACED_SEARCH).await, lines::SPACED_SEARCH_ACK);
    assert_eq!(
        executor.calls(),
        vec![(HandlerCategory::Search, "search hello world".to_string())]
    );
    server.stop().await;
}

#[tokio::test]
async fn test_every_action_routes_to_its_category() {
    let executor = ScriptedExecutor::new();
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), executor.clone()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    for action in ALL_ACTIONS {
        // Skip the scripted special cases; they are covered above.
        if matches!(*action, "play" | "stop" | "resume" | "show") {
            continue;
        }
        let reply = client.command(&format!("{action}\n")).await;
        assert_eq!(reply, format!("ACK {action}\nOK\n"));
    }

    let calls = executor.calls();
    assert_eq!(calls.len(), ALL_ACTIONS.len() - 4);
    for (category, line) in calls {
        assert_eq!(HandlerCategory::for_action(&line), Some(category));
        assert!(category.actions().contains(&line.as_str()));
    }
    server.stop().await;
}
