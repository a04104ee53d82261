// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! One animator per WebSocket connection

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, StreamExt};
use tracing::{debug, info, warn};

use super::protocol::{ClientMessage, ServerMessage};
use crate::animator::Animator;
use crate::config::AnimatorConfig;
use crate::visibility::VisibilityGate;

/// Drive an animator from a browser connection until either side goes away.
///
/// The animator is dropped on return, which stops its timers.
pub async fn run_session(socket: WebSocket, config: AnimatorConfig) {
    let animator = Animator::spawn(config);
    let mut gate = VisibilityGate::new(config.visibility_threshold);
    let mut frames = animator.frames();
    let (mut sink, mut stream) = socket.split();

    info!(session = %animator.id(), "Entity discovery session opened");

    loop {
        tokio::select! {
            incoming = stream.next() => {
                let text = match incoming {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        debug!("Socket error: {}", e);
                        break;
                    }
                };

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(message) => {
                        if let Some(visible) = apply(&mut gate, message) {
                            animator.set_visible(visible);
                        }
                    }
                    Err(e) => {
                        warn!("Ignoring malformed message: {}", e);
                        let reply = ServerMessage::Error { message: e.to_string() };
                        if !send(&mut sink, &reply).await {
                            break;
                        }
                    }
                }
            }
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let notifications = frames.borrow_and_update().clone();
                if !send(&mut sink, &ServerMessage::Frame { notifications }).await {
                    break;
                }
            }
        }
    }

    info!(session = %animator.id(), "Entity discovery session closed");
}

/// Visibility edge implied by a client message, if any
fn apply(gate: &mut VisibilityGate, message: ClientMessage) -> Option<bool> {
    match message {
        ClientMessage::Intersection { ratio } => gate.observe(ratio),
        ClientMessage::Visibility { visible } => gate.set(visible),
    }
}

/// Returns `false` once the connection can no longer be written to
async fn send<S>(sink: &mut S, message: &ServerMessage) -> bool
where
    S: Sink<Message> + Unpin,
{
    match serde_json::to_string(message) {
        Ok(payload) => sink.send(Message::Text(payload)).await.is_ok(),
        Err(e) => {
            warn!("Failed to encode message: {}", e);
            true
        }
    }
}
