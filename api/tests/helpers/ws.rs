use axum::Router;
use futures_util::StreamExt;
use std::{net::SocketAddr, time::Duration};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{
        Error, Message,
        client::IntoClientRequest,
        http::{HeaderValue, Response},
    },
};
use util::ws::ConnectionRegistry;

pub type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Spawns the Axum app on a random local port
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    addr
}

/// Opens `/ws`, declaring `origin` when given.
pub async fn connect_ws(
    addr: SocketAddr,
    origin: Option<&str>,
) -> Result<(Client, Response<Option<Vec<u8>>>), Error> {
    let mut req = format!("ws://{addr}/ws").into_client_request()?;
    if let Some(origin) = origin {
        req.headers_mut()
            .insert("Origin", HeaderValue::from_str(origin).unwrap());
    }
    connect_async(req).await
}

/// Next text frame, skipping pings. `None` if the socket closed or nothing
/// arrived within two seconds.
pub async fn next_text(ws: &mut Client) -> Option<String> {
    let read = async {
        while let Some(msg) = ws.next().await {
            match msg {
                Ok(Message::Text(text)) => return Some(text.as_str().to_owned()),
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => continue,
                _ => return None,
            }
        }
        None
    };
    tokio::time::timeout(Duration::from_secs(2), read)
        .await
        .ok()
        .flatten()
}

/// Waits up to two seconds for exactly `n` connections in the `Open` state.
pub async fn wait_for_open(ws: &ConnectionRegistry, n: usize) -> bool {
    for _ in 0..100 {
        if ws.open_count().await == n {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

/// Waits up to two seconds for the registry to hold exactly `n` entries.
pub async fn wait_for_len(ws: &ConnectionRegistry, n: usize) -> bool {
    for _ in 0..100 {
        if ws.len().await == n {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
