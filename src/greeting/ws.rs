//! `GET /ws/greetings`: every text frame received is a name; each name gets
//! its own greeting stream, and all of them are merged onto the socket.
//! Sockets are closed when the shutdown token is cancelled.

use crate::domain::{GreetingRequest, GreetingResponse};
use crate::greeting::GreetingService;
use crate::http::headers::paths;
use crate::infrastructure::log_messages::greetings as messages;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures_util::stream::{BoxStream, SelectAll};
use futures_util::StreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Clone)]
struct GreetingState {
    service: Arc<GreetingService>,
    shutdown: CancellationToken,
}

pub fn router(service: Arc<GreetingService>, shutdown: CancellationToken) -> Router {
    Router::new()
        .route(paths::GREETINGS_WS, get(greetings_socket))
        .with_state(GreetingState { service, shutdown })
}

async fn greetings_socket(ws: WebSocketUpgrade, State(state): State<GreetingState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.service, state.shutdown))
}

async fn handle_socket(
    mut socket: WebSocket,
    service: Arc<GreetingService>,
    shutdown: CancellationToken,
) {
    let socket_id = Uuid::now_v7();
    info!(socket_id = %socket_id, "{}", messages::SOCKET_OPENED);

    let mut greetings: SelectAll<BoxStream<'static, GreetingResponse>> = SelectAll::new();

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                if let Err(error) = socket.send(Message::Close(None)).await {
                    debug!(socket_id = %socket_id, error = %error, "Failed to send close frame");
                }
                break;
            }
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(name))) => {
                    let request = GreetingRequest::from(name.as_str().to_string());
                    debug!(socket_id = %socket_id, name = %request, "{}", messages::GREETING_REQUESTED);
                    greetings.push(service.greet(request).boxed());
                }
                Some(Ok(Message::Close(_))) | None => break,
                // Binary frames are ignored; pings are answered by axum
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    warn!(socket_id = %socket_id, error = %error, "Greeting socket error");
                    break;
                }
            },
            Some(greeting) = greetings.next(), if !greetings.is_empty() => {
                if socket.send(Message::Text(greeting.message.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    info!(socket_id = %socket_id, streams = greetings.len(), "{}", messages::SOCKET_CLOSED);
}
