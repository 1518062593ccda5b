//! Integration tests for USER registration and pre-registration gating.

mod common;

use common::TestServer;

#[tokio::test]
async fn test_welcome_then_duplicate_name_closes() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");

    let mut alice = server.connect().await.expect("Failed to connect alice");
    alice.send("USER alice").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), "Welcome, alice.");

    let mut imposter = server.connect().await.expect("Failed to connect imposter");
    imposter.send("USER alice").await.unwrap();
    assert_eq!(imposter.recv().await.unwrap(), "Name already taken.");
    imposter.expect_closed().await.unwrap();

    // The original session is unaffected.
    assert_eq!(
        alice.request("LIST").await.unwrap(),
        "There are currently 0 channel(s):"
    );
}

#[tokio::test]
async fn test_command_before_user_closes() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");

    let mut client = server.connect().await.unwrap();
    client.send("JOIN #general").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        "Invalid command, please identify yourself with USER."
    );
    client.expect_closed().await.unwrap();
}

#[tokio::test]
async fn test_bad_nickname_closes() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");

    let mut client = server.connect().await.unwrap();
    client.send("USER _alice").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "Invalid nickname, try again.");
    client.expect_closed().await.unwrap();
}

#[tokio::test]
async fn test_registered_user_cannot_rename() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");

    let mut alice = server.register("alice").await.unwrap();
    assert_eq!(
        alice.request("USER bob").await.unwrap(),
        "You cannot change your username."
    );

    // bob is still free.
    let _bob = server.register("bob").await.unwrap();
}

#[tokio::test]
async fn test_crlf_and_split_lines() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");

    let mut client = server.connect().await.unwrap();
    client.send_raw(b"USER al").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    client.send_raw(b"ice\r\n").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "Welcome, alice.");
}
