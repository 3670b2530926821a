use super::helpers::{VIEWER_ID, spawn_board, token_for};
use client::domain::{
    auth::{
        repository::AuthApi,
        user::{LoginRequest, RegisterRequest},
    },
    shared::errors::DomainError,
    social::{
        comment::CommentAuthor,
        like::LikeTarget,
        post::{ImageUpload, NewPost},
        repository::{LikeApi, SocialApi},
        value_objects::Coordinates,
    },
};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn like_endpoints_are_addressed_per_entity_kind() {
    let board = spawn_board().await;
    let api = board.client();
    let token = token_for(VIEWER_ID);

    api.toggle_like(LikeTarget::Post(1), &token)
        .await
        .expect("post like should succeed");
    api.toggle_like(LikeTarget::Comment(12), &token)
        .await
        .expect("comment like should succeed");

    let paths: Vec<_> = board
        .state
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path, r.bearer))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("POST", "posts/1/like/".to_string(), Some(token.clone())),
            ("POST", "posts/comments/12/like/".to_string(), Some(token)),
        ]
    );
    assert_eq!(board.state.post(1)["like_count"], 4);
}

#[tokio::test]
async fn server_error_on_like_maps_to_request_failed() {
    let board = spawn_board().await;
    board.state.fail_likes.store(true, Ordering::SeqCst);

    let result = board
        .client()
        .toggle_like(LikeTarget::Post(1), &token_for(VIEWER_ID))
        .await;

    match result {
        Err(DomainError::RequestFailed(message)) => {
            assert!(message.contains("500"), "unexpected message: {}", message);
            assert!(message.contains("database unavailable"));
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn listing_forwards_search_and_bearer() {
    let board = spawn_board().await;
    let token = token_for(VIEWER_ID);

    let posts = board
        .client()
        .list_posts(Some("lantern"), Some(&token))
        .await
        .expect("listing should succeed");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 2);
    assert!(posts[0].is_liked);
    assert!((posts[0].latitude - 35.658034).abs() < 1e-9);

    let request = board.state.requests().pop().expect("request recorded");
    assert_eq!(request.path, "posts/list/?q=lantern");
    assert_eq!(request.bearer, Some(token));
}

#[tokio::test]
async fn anonymous_listing_sends_no_authorization() {
    let board = spawn_board().await;

    let posts = board
        .client()
        .list_posts(None, None)
        .await
        .expect("listing should succeed");

    assert_eq!(posts.len(), 2);
    assert_eq!(board.state.requests()[0].bearer, None);
}

#[tokio::test]
async fn comments_accept_both_author_shapes() {
    let board = spawn_board().await;

    let comments = board
        .client()
        .list_comments(1, None)
        .await
        .expect("comments should load");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].user.id(), Some(VIEWER_ID));
    assert_eq!(comments[1].user, CommentAuthor::Name("aoi".into()));
    assert_eq!(comments[1].body, "Opens at six");
}

#[tokio::test]
async fn create_post_sends_multipart_fields_and_image() {
    let board = spawn_board().await;
    let post = NewPost {
        title: "Shrine cleanup".into(),
        body: "Volunteers welcome on Sunday".into(),
        location: Coordinates::new(35.6762, 139.6503).expect("valid coordinates"),
        image: Some(ImageUpload {
            file_name: "shrine.jpg".into(),
            data: b"fake-jpeg-bytes".to_vec(),
        }),
    };

    let created = board
        .client()
        .create_post(&post, &token_for(VIEWER_ID))
        .await
        .expect("post should be created");

    assert_eq!(created.title, "Shrine cleanup");
    assert_eq!(created.image.as_deref(), Some("/media/posts/upload.jpg"));

    let uploads = board.state.uploads.lock().expect("uploads lock").clone();
    let fields = &uploads[0];
    assert_eq!(fields["body"], "Volunteers welcome on Sunday");
    assert_eq!(fields["latitude"], "35.6762");
    assert_eq!(fields["longitude"], "139.6503");
    assert_eq!(fields["image.file_name"], "shrine.jpg");
    assert_eq!(fields["image"], "fake-jpeg-bytes");
}

#[tokio::test]
async fn login_returns_token_pair() {
    let board = spawn_board().await;

    let tokens = board
        .client()
        .login(&LoginRequest {
            username: "ren@example.jp".into(),
            password: "correct horse".into(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(tokens.access, token_for(VIEWER_ID));
    assert_eq!(tokens.refresh.as_deref(), Some("refresh-token"));
}

#[tokio::test]
async fn rejected_login_is_unauthenticated() {
    let board = spawn_board().await;

    let result = board
        .client()
        .login(&LoginRequest {
            username: "ren@example.jp".into(),
            password: "wrong".into(),
        })
        .await;

    assert_eq!(result, Err(DomainError::Unauthenticated));
}

#[tokio::test]
async fn field_errors_surface_as_validation_messages() {
    let board = spawn_board().await;

    let result = board
        .client()
        .register(&RegisterRequest {
            username: "ren".into(),
            email: "taken@example.jp".into(),
            password: "pw".into(),
            residence_prefecture: "Tokyo".into(),
            residence_city: "Shibuya".into(),
        })
        .await;

    assert_eq!(
        result,
        Err(DomainError::ValidationError(
            "email: user with this email already exists.".into()
        ))
    );
}

#[tokio::test]
async fn refresh_exchanges_refresh_token() {
    let board = spawn_board().await;

    let access = board
        .client()
        .refresh("refresh-token")
        .await
        .expect("refresh should succeed");

    assert_eq!(access, token_for(VIEWER_ID));
}

#[tokio::test]
async fn unreachable_api_is_a_request_failure() {
    let api = client::infrastructure::http::api_client::HttpApiClient::new(
        "http://127.0.0.1:9/api",
        std::time::Duration::from_secs(2),
    )
    .expect("client should build");

    let result = api.list_posts(None, None).await;

    assert!(matches!(result, Err(DomainError::RequestFailed(_))));
}
