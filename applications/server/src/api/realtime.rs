//! Real-time video control channel
//!
//! Clients open a WebSocket and exchange JSON text frames:
//!
//! | Frame | Effect |
//! |-------|--------|
//! | `{"event":"play-video","data":7}` | relayed unchanged to every client |
//! | `{"event":"stop-video"}` | relayed to every client |
//!
//! The sender receives its own signal back like everyone else. Unknown events
//! and malformed frames are ignored; they never close the connection.

use crate::{services::BroadcastHub, state::AppState};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use kiosk_core::VideoSignal;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

/// GET /ws
pub async fn connect(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    // Subscribe before answering the upgrade: once the client sees the
    // handshake complete it is already in the active set.
    let signals = app_state.hub.subscribe();
    let hub = Arc::clone(&app_state.hub);

    ws.on_upgrade(move |socket| handle_socket(socket, Uuid::new_v4(), signals, hub))
}

/// Runs one connection until either side goes away
async fn handle_socket(
    mut socket: WebSocket,
    connection_id: Uuid,
    mut signals: broadcast::Receiver<VideoSignal>,
    hub: Arc<BroadcastHub>,
) {
    tracing::info!(%connection_id, connected = hub.connected(), "Client connected");

    loop {
        tokio::select! {
            signal = signals.recv() => match signal {
                Ok(signal) => {
                    if forward(&mut socket, &signal).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%connection_id, skipped, "Client fell behind, signals skipped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => relay(&hub, connection_id, &text),
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // ping/pong and binary frames carry no signals
                Some(Err(e)) => {
                    tracing::debug!(%connection_id, error = %e, "WebSocket error");
                    break;
                }
            },
        }
    }

    // Leave the active set before logging the new count
    drop(signals);
    tracing::info!(%connection_id, connected = hub.connected(), "Client disconnected");
}

async fn forward(socket: &mut WebSocket, signal: &VideoSignal) -> Result<(), axum::Error> {
    match signal.to_frame() {
        Ok(frame) => socket.send(Message::Text(frame)).await,
        Err(e) => {
            tracing::error!(event = signal.event(), error = %e, "Failed to encode signal");
            Ok(())
        }
    }
}

fn relay(hub: &BroadcastHub, connection_id: Uuid, text: &str) {
    match VideoSignal::from_frame(text) {
        Ok(Some(signal)) => {
            tracing::info!(%connection_id, ?signal, "Received signal");
            hub.publish(signal);
        }
        Ok(None) => {
            tracing::debug!(%connection_id, frame = text, "Ignoring unknown event");
        }
        Err(e) => {
            tracing::warn!(%connection_id, error = %e, "Ignoring malformed frame");
        }
    }
}
