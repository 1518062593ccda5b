//! In-memory hub for handler tests.
//!
//! Each test client is a bare outbound queue; commands are fed straight
//! into the hub as frames.

use crate::config::OperatorConfig;
use crate::handlers::{SendQueueReceiver, send_queue};
use crate::network::{Hub, HubEvent};
use crate::state::{ConnectionId, ConnectionIdGenerator, User};
use chatd_proto::Frame;

const TEST_QUEUE: usize = 64;

pub(crate) struct TestClient {
    conn: ConnectionId,
    rx: SendQueueReceiver,
}

impl TestClient {
    /// Everything queued for this client so far.
    pub fn drain(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.rx.try_recv() {
            lines.push(line);
        }
        lines
    }

    /// False once the hub has dropped this client's queue.
    pub fn is_open(&self) -> bool {
        !self.rx.is_closed()
    }
}

pub(crate) struct TestHub {
    hub: Hub,
    ids: ConnectionIdGenerator,
}

impl TestHub {
    pub fn new() -> Self {
        Self {
            hub: Hub::new(OperatorConfig::default(), TEST_QUEUE),
            ids: ConnectionIdGenerator::new(),
        }
    }

    pub fn with_password(password: &str) -> Self {
        Self {
            hub: Hub::new(
                OperatorConfig {
                    password: Some(password.to_owned()),
                },
                TEST_QUEUE,
            ),
            ids: ConnectionIdGenerator::new(),
        }
    }

    pub fn connect(&mut self) -> TestClient {
        let conn = self.ids.next();
        let (tx, rx) = send_queue();
        self.hub.connect(conn, tx);
        TestClient { conn, rx }
    }

    /// Connect and register, discarding the welcome.
    pub fn register(&mut self, nick: &str) -> TestClient {
        let mut client = self.connect();
        self.send(&client, &format!("USER {nick}"));
        assert_eq!(client.drain(), [format!("Welcome, {nick}.\n")]);
        client
    }

    pub fn send(&mut self, client: &TestClient, line: &str) {
        self.send_frame(client, Frame::Line(line.to_owned()));
    }

    pub fn send_frame(&mut self, client: &TestClient, frame: Frame) {
        self.hub.handle_event(HubEvent::Frame {
            conn: client.conn,
            frame,
        });
    }

    pub fn disconnect(&mut self, client: &TestClient) {
        self.hub
            .handle_event(HubEvent::Disconnected { conn: client.conn });
    }

    pub fn user(&self, nick: &str) -> Option<&User> {
        self.hub.registry().user_by_nick(nick)
    }

    /// Member nicknames of a channel in join order; empty if it doesn't exist.
    pub fn members(&self, channel: &str) -> Vec<String> {
        let registry = self.hub.registry();
        registry
            .channel(channel)
            .map(|channel| {
                channel
                    .members()
                    .iter()
                    .filter_map(|&conn| registry.user(conn))
                    .map(|user| user.nick.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn channel_count(&self) -> usize {
        self.hub.registry().channel_count()
    }
}
