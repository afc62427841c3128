//! Interaction Endpoint Integration Tests
//!
//! Runs the real router in-process against the in-memory member store, so
//! no Redis instance or network access is needed.
//!
//! Run with: cargo test -p integration-tests --test interaction_tests

use axum::http::StatusCode;
use guild_core::{Ign, MemberRecord, MemberRepository};
use integration_tests::{fixtures, is_ephemeral, reply_text, TestApp, TestOptions};

// ============================================================================
// Signature Verification Tests
// ============================================================================

#[tokio::test]
async fn test_valid_ping_returns_pong() {
    let app = TestApp::new();
    let (status, body) = app.post_signed(&fixtures::ping()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "type": 1 }));
}

#[tokio::test]
async fn test_bad_signature_is_rejected_before_dispatch() {
    let app = TestApp::new();
    let (status, _) = app
        .post_badly_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Rejected requests must not touch the store.
    assert!(app.members.is_empty());
}

#[tokio::test]
async fn test_missing_signature_headers_rejected() {
    let app = TestApp::new();
    let body = fixtures::ping().to_string();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body))
        .unwrap();

    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_interaction_type_rejected() {
    let app = TestApp::new();
    let (status, _) = app.post_signed(&fixtures::unknown_type()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_payload_rejected() {
    let app = TestApp::new();
    let body = "not json at all";
    let timestamp = "1700000000";
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("x-signature-ed25519", app.sign(timestamp, body))
        .header("x-signature-timestamp", timestamp)
        .body(axum::body::Body::from(body))
        .unwrap();

    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Register Tests
// ============================================================================

#[tokio::test]
async fn test_register_then_whois_round_trip() {
    let app = TestApp::new();

    let (status, body) = app
        .post_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], 4);
    assert!(reply_text(&body).contains("**Mapler**"));

    let (status, body) = app.post_signed(&fixtures::whois("42")).await;
    assert_eq!(status, StatusCode::OK);
    let embed = &body["data"]["embeds"][0];
    assert_eq!(embed["title"], "alice");
    assert_eq!(embed["fields"][0]["value"], "**Mapler**");
}

#[tokio::test]
async fn test_reregister_preserves_registration_date() {
    let app = TestApp::new();

    app.post_signed(&fixtures::register("42", "alice", "OldIgn"))
        .await;
    let first = app.members.get("42").await.unwrap().unwrap();

    let (_, body) = app
        .post_signed(&fixtures::register("42", "alice", "NewIgn"))
        .await;
    assert!(reply_text(&body).contains("**NewIgn**"));

    let second = app.members.get("42").await.unwrap().unwrap();
    assert_eq!(second.ign, "NewIgn");
    assert_eq!(second.registered_at, first.registered_at);
    assert_eq!(app.members.len(), 1);
}

#[tokio::test]
async fn test_invalid_ign_writes_nothing() {
    let app = TestApp::new();

    let (status, body) = app.post_signed(&fixtures::register("42", "alice", "x")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(is_ephemeral(&body));
    assert!(reply_text(&body).contains("2-12 characters"));
    assert!(app.members.is_empty());

    let (_, body) = app
        .post_signed(&fixtures::register("42", "alice", "bad name!"))
        .await;
    assert!(reply_text(&body).contains("letters and digits"));
    assert!(app.members.is_empty());
}

#[tokio::test]
async fn test_register_without_ign_prompts() {
    let app = TestApp::new();
    let (_, body) = app
        .post_signed(&fixtures::command("register", "42", "alice"))
        .await;
    assert!(reply_text(&body).contains("provide your MapleStory IGN"));
    assert!(app.members.is_empty());
}

// ============================================================================
// Whois Tests
// ============================================================================

#[tokio::test]
async fn test_whois_unregistered_user() {
    let app = TestApp::new();
    let (_, body) = app.post_signed(&fixtures::whois("999")).await;
    assert!(is_ephemeral(&body));
    assert!(reply_text(&body).contains("not found in guild directory"));
}

#[tokio::test]
async fn test_whois_shows_officer_badge() {
    let app = TestApp::with_options(TestOptions {
        officer_role_id: Some("role-7".into()),
        ..TestOptions::default()
    });
    app.post_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;

    let (_, body) = app
        .post_signed(&fixtures::whois_with_roles("42", &["role-1", "role-7"]))
        .await;
    assert_eq!(body["data"]["embeds"][0]["title"], "⭐ alice (Officer)");

    let (_, body) = app
        .post_signed(&fixtures::whois_with_roles("42", &["role-1"]))
        .await;
    assert_eq!(body["data"]["embeds"][0]["title"], "alice");
}

// ============================================================================
// Guildlist Tests
// ============================================================================

#[tokio::test]
async fn test_guildlist_empty() {
    let app = TestApp::new();
    let (_, body) = app.post_signed(&fixtures::guildlist()).await;
    assert!(reply_text(&body).contains("No guild members registered yet"));
}

#[tokio::test]
async fn test_guildlist_orders_case_insensitively() {
    let app = TestApp::new();
    app.post_signed(&fixtures::register("1", "u1", "Bob")).await;
    app.post_signed(&fixtures::register("2", "u2", "alice"))
        .await;

    let (_, body) = app.post_signed(&fixtures::guildlist()).await;
    let listing = body["data"]["embeds"][0]["description"]
        .as_str()
        .unwrap()
        .to_string();
    let alice = listing.find("**alice**").expect("alice listed");
    let bob = listing.find("**Bob**").expect("Bob listed");
    assert!(alice < bob);
}

#[tokio::test]
async fn test_guildlist_caps_at_twenty() {
    let app = TestApp::new();
    let now = chrono::Utc::now();
    for i in 0..25 {
        let record = MemberRecord::new(
            &format!("{i}"),
            &Ign::parse(&format!("Player{i:02}")).unwrap(),
            &format!("user{i}"),
            now,
        );
        app.members.put(&record).await.unwrap();
    }

    let (_, body) = app.post_signed(&fixtures::guildlist()).await;
    let embed = &body["data"]["embeds"][0];
    assert_eq!(embed["title"], "📋 Guild Member Directory (25)");
    let listing = embed["description"].as_str().unwrap();
    assert_eq!(listing.matches("<@").count(), 20);
    assert!(listing.contains("*... and 5 more members*"));
}

// ============================================================================
// Needcarry Tests
// ============================================================================

#[tokio::test]
async fn test_needcarry_requires_registration() {
    let app = TestApp::new();
    let (_, body) = app
        .post_signed(&fixtures::needcarry("42", "alice", "Zakum", None))
        .await;
    assert!(is_ephemeral(&body));
    assert!(reply_text(&body).contains("register your IGN first"));
}

#[tokio::test]
async fn test_needcarry_inline_fallback_without_webhook() {
    let app = TestApp::new();
    app.post_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;

    let (_, body) = app
        .post_signed(&fixtures::needcarry("42", "alice", "Zakum", Some("after 9pm")))
        .await;
    let text = reply_text(&body);
    assert!(!is_ephemeral(&body));
    assert!(text.contains("Carry request created!"));
    assert!(text.contains("**Boss:** Zakum"));
    assert!(text.contains("**Notes:** after 9pm"));
    assert!(text.contains("IGN: **Mapler**"));
}

#[tokio::test]
async fn test_needcarry_posts_to_webhook_and_confirms_ephemerally() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // One-shot webhook endpoint: accept a single POST, reply 204.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let received = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut data = Vec::new();
        let mut buf = vec![0u8; 4096];
        // Headers and the small JSON body may arrive in separate reads
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            data.extend_from_slice(&buf[..n]);
            if n == 0 || data.windows(8).any(|w| w == b"Horntail") {
                break;
            }
        }
        socket
            .write_all(b"HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n")
            .await
            .unwrap();
        String::from_utf8_lossy(&data).to_string()
    });

    let app = TestApp::with_options(TestOptions {
        carry_webhook: Some(format!("http://127.0.0.1:{port}/webhook")),
        ..TestOptions::default()
    });
    app.post_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;

    let (_, body) = app
        .post_signed(&fixtures::needcarry("42", "alice", "Horntail", None))
        .await;
    assert!(is_ephemeral(&body));
    assert!(reply_text(&body).contains("posted to the carry channel"));

    let request = received.await.unwrap();
    assert!(request.starts_with("POST /webhook"));
    assert!(request.contains("Horntail"));
    assert!(request.contains("Mapler"));
}

#[tokio::test]
async fn test_needcarry_falls_back_when_webhook_unreachable() {
    let app = TestApp::with_options(TestOptions {
        carry_webhook: Some("http://127.0.0.1:9/webhook".into()),
        ..TestOptions::default()
    });
    app.post_signed(&fixtures::register("42", "alice", "Mapler"))
        .await;

    let (_, body) = app
        .post_signed(&fixtures::needcarry("42", "alice", "Hilla", None))
        .await;
    assert!(reply_text(&body).contains("Carry request created!"));
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_liveness_text() {
    let app = TestApp::new();
    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!("MapleStory Guild Bot is running!"));
}

#[tokio::test]
async fn test_non_post_methods_get_liveness_text() {
    let app = TestApp::new();
    for method in ["PUT", "DELETE", "PATCH"] {
        let request = axum::http::Request::builder()
            .method(method)
            .uri("/")
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::OK, "{method}");
        assert_eq!(body, serde_json::json!("MapleStory Guild Bot is running!"));
    }
}

#[tokio::test]
async fn test_health_check_without_redis() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redis"], true);
}
