use super::helpers::{VIEWER_ID, spawn_board, token_for};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use client::{
    domain::{
        auth::{credentials::CredentialStore, user::TokenPair},
        shared::notice::{Action, Notice},
        social::like::{LikeState, LikeTarget},
    },
    infrastructure::credentials::memory_store::MemoryCredentialStore,
    presentation::cli::{args::Command, handlers::run},
};
use serde_json::json;
use std::sync::atomic::Ordering;

fn expired_token() -> String {
    let payload = URL_SAFE_NO_PAD.encode(json!({ "user_id": VIEWER_ID, "exp": 1_000 }).to_string());
    format!("e30.{}.signature", payload)
}

#[tokio::test]
async fn login_stores_the_session() {
    let board = spawn_board().await;
    let (ctx, notices) = board.context(MemoryCredentialStore::new());

    run(
        Command::Login {
            email: "ren@example.jp".into(),
            password: Some("correct horse".into()),
        },
        &ctx,
    )
    .await
    .expect("login should succeed");

    assert_eq!(ctx.credentials.access_token(), Some(token_for(VIEWER_ID)));
    assert_eq!(ctx.credentials.refresh_token().as_deref(), Some("refresh-token"));
    assert_eq!(notices.notices(), vec![Notice::LoginSucceeded]);
}

#[tokio::test]
async fn wrong_password_reports_login_failure() {
    let board = spawn_board().await;
    let (ctx, notices) = board.context(MemoryCredentialStore::new());

    let result = run(
        Command::Login {
            email: "ren@example.jp".into(),
            password: Some("guess".into()),
        },
        &ctx,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(ctx.credentials.access_token(), None);
    assert_eq!(notices.notices(), vec![Notice::LoginFailed]);
}

#[tokio::test]
async fn like_post_command_confirms_the_toggle() {
    let board = spawn_board().await;
    let (ctx, notices) = board.context(MemoryCredentialStore::with_access_token(token_for(
        VIEWER_ID,
    )));

    run(Command::LikePost { id: 2 }, &ctx)
        .await
        .expect("like should be confirmed");

    assert_eq!(board.state.post(2)["is_liked"], false);
    assert_eq!(
        ctx.likes.state(LikeTarget::Post(2)),
        Some(LikeState::new(false, 6))
    );
    assert!(notices.notices().is_empty());
}

#[tokio::test]
async fn failed_like_command_exits_with_error_and_notice() {
    let board = spawn_board().await;
    board.state.fail_likes.store(true, Ordering::SeqCst);
    let (ctx, notices) = board.context(MemoryCredentialStore::with_access_token(token_for(
        VIEWER_ID,
    )));

    let result = run(Command::LikePost { id: 1 }, &ctx).await;

    assert!(result.is_err());
    assert_eq!(
        ctx.likes.state(LikeTarget::Post(1)),
        Some(LikeState::new(false, 3))
    );
    assert_eq!(notices.notices(), vec![Notice::LikeFailed]);
}

#[tokio::test]
async fn anonymous_like_comment_asks_for_login() {
    let board = spawn_board().await;
    let (ctx, notices) = board.context(MemoryCredentialStore::new());

    let result = run(
        Command::LikeComment {
            post_id: 1,
            comment_id: 11,
        },
        &ctx,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(board.state.like_calls(), 0);
    assert_eq!(notices.notices(), vec![Notice::LoginRequired(Action::Like)]);
}

#[tokio::test]
async fn comment_then_delete_own_comment() {
    let board = spawn_board().await;
    let (ctx, _) = board.context(MemoryCredentialStore::with_access_token(token_for(
        VIEWER_ID,
    )));

    run(
        Command::Comment {
            post_id: 1,
            body: "  Bring a bag  ".into(),
        },
        &ctx,
    )
    .await
    .expect("comment should post");

    let added = board
        .state
        .comments
        .lock()
        .expect("comments lock")
        .last()
        .cloned()
        .expect("comment stored");
    assert_eq!(added["body"], "Bring a bag");

    run(
        Command::DeleteComment {
            post_id: 1,
            comment_id: 11,
        },
        &ctx,
    )
    .await
    .expect("own comment should delete");
    assert!(
        board
            .state
            .requests()
            .iter()
            .any(|r| r.method == "DELETE" && r.path == "posts/comments/11/")
    );
}

#[tokio::test]
async fn deleting_someone_elses_comment_is_refused_locally() {
    let board = spawn_board().await;
    let (ctx, _) = board.context(MemoryCredentialStore::with_access_token(token_for(
        VIEWER_ID,
    )));

    let result = run(
        Command::DeleteComment {
            post_id: 1,
            comment_id: 12,
        },
        &ctx,
    )
    .await;

    assert!(result.is_err());
    assert!(board.state.requests().iter().all(|r| r.method != "DELETE"));
}

#[tokio::test]
async fn expired_session_is_refreshed_before_the_command() {
    let board = spawn_board().await;
    let credentials = MemoryCredentialStore::new();
    credentials
        .store(&TokenPair {
            access: expired_token(),
            refresh: Some("refresh-token".into()),
        })
        .expect("store tokens");
    let (ctx, _) = board.context(credentials);

    run(Command::Me, &ctx).await.expect("profile should load");

    assert_eq!(ctx.credentials.access_token(), Some(token_for(VIEWER_ID)));
    let paths: Vec<_> = board.state.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["users/token/refresh/", "users/me/"]);
}
