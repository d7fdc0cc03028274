use std::time::Duration;

use api::routes::router;
use api::state::{ApiEvent, AppState};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn ws_clients_receive_greeting_then_broadcast_events() {
    let state = AppState::new();
    let app = router(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (mut socket, _) = connect_async(format!("ws://{addr}/ws/events?session=7"))
        .await
        .expect("websocket upgrade should succeed");

    let greeting = socket
        .next()
        .await
        .expect("greeting frame should arrive")
        .unwrap();
    let greeting = greeting.to_text().unwrap();
    assert!(greeting.contains(r#""event_type":"connected""#));
    assert!(greeting.contains(r#""session_id":7"#));

    // The broadcast send only succeeds once the socket task has subscribed.
    let mut published = state.publish_event(ApiEvent::session_started(7));
    for _ in 0..100 {
        if published.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        published = state.publish_event(ApiEvent::session_started(7));
    }
    published.expect("socket task should subscribe to events");

    let event = socket
        .next()
        .await
        .expect("broadcast frame should arrive")
        .unwrap();
    assert!(event
        .to_text()
        .unwrap()
        .contains(r#""event_type":"session_started""#));

    socket.send(Message::Close(None)).await.unwrap();
}

#[tokio::test]
async fn ws_greeting_has_no_session_without_the_query_param() {
    let state = AppState::new();
    let app = router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (mut socket, _) = connect_async(format!("ws://{addr}/ws/events"))
        .await
        .expect("websocket upgrade should succeed");

    let greeting = socket
        .next()
        .await
        .expect("greeting frame should arrive")
        .unwrap();
    assert!(greeting
        .to_text()
        .unwrap()
        .contains(r#""session_id":null"#));

    socket.send(Message::Close(None)).await.unwrap();
}
