//! Tests for the API client

use super::*;
use crate::error::Error;
use crate::models::{FriendshipAuthorizations, ImageSize, User, UserRef};
use crate::pagination::Cursor;
use crate::types::RateLimitTrackingMode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::new(server.uri());
    config.max_retries = 0;
    config.requests_per_second = 0;
    config.rate_limit_tracking = RateLimitTrackingMode::None;
    config
}

fn test_client(server: &MockServer) -> Client {
    Client::new(&test_config(server)).unwrap()
}

fn user_json(id: u64, screen_name: &str) -> Value {
    json!({
        "id": id,
        "id_str": id.to_string(),
        "name": screen_name.to_uppercase(),
        "screen_name": screen_name,
        "created_at": "Wed Oct 10 20:19:24 +0000 2018",
    })
}

fn ids_page(ids: &[u64], previous: i64, next: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ids": ids,
        "previous_cursor": previous,
        "next_cursor": next,
    }))
}

/// Fails the test on drop if any request reaches the server
async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

// ============================================================================
// Cursored Listings
// ============================================================================

#[tokio::test]
async fn test_friend_ids_walks_all_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friends/ids.json"))
        .and(query_param("cursor", "-1"))
        .and(query_param("count", "5000"))
        .respond_with(ids_page(&[1, 2, 3], 0, 1234))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/friends/ids.json"))
        .and(query_param("cursor", "1234"))
        .respond_with(ids_page(&[4], -1234, 0))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut ids = client
        .users()
        .get_friend_ids(CursorQueryParameters::new())
        .unwrap();

    assert!(ids.has_next());
    let first = ids.next_page().await.unwrap();
    assert_eq!(first.items, vec![1, 2, 3]);
    assert_eq!(ids.cursor(), Cursor::new(1234));

    let second = ids.next_page().await.unwrap();
    assert_eq!(second.items, vec![4]);
    assert!(!ids.has_next());

    let err = ids.next_page().await.unwrap_err();
    assert!(matches!(err, Error::IteratorExhausted));
}

#[tokio::test]
async fn test_friend_ids_of_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friends/ids.json"))
        .and(query_param("screen_name", "rustlang"))
        .respond_with(ids_page(&[10, 11], 0, 0))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let ids = client
        .users()
        .get_friend_ids_of(UserRef::screen_name("@rustlang"), CursorQueryParameters::new())
        .unwrap()
        .collect_items()
        .await
        .unwrap();

    assert_eq!(ids, vec![10, 11]);
}

#[tokio::test]
async fn test_follower_ids_max_items_stops_early() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/followers/ids.json"))
        .and(query_param("cursor", "-1"))
        .and(query_param("count", "2"))
        .respond_with(ids_page(&[1, 2], 0, 10))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/followers/ids.json"))
        .and(query_param("cursor", "10"))
        .respond_with(ids_page(&[3, 4], -10, 20))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/followers/ids.json"))
        .and(query_param("cursor", "20"))
        .respond_with(ids_page(&[5, 6], -20, 0))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let params = CursorQueryParameters::new().page_size(2).max_items(3);
    let ids = client
        .users()
        .get_follower_ids(params)
        .unwrap()
        .collect_items()
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_start_cursor_resumes_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blocks/ids.json"))
        .and(query_param("cursor", "777"))
        .respond_with(ids_page(&[42], -777, 0))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut ids = client
        .users()
        .get_blocked_user_ids(CursorQueryParameters::new().start_cursor(Cursor::new(777)))
        .unwrap();

    assert_eq!(ids.next_page().await.unwrap().items, vec![42]);
    assert!(!ids.has_next());
}

#[tokio::test]
async fn test_blocked_users_decodes_user_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blocks/list.json"))
        .and(query_param("count", "200"))
        .and(query_param("skip_status", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json(7, "spammer"), user_json(8, "troll")],
            "previous_cursor": 0,
            "next_cursor": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let users = client
        .users()
        .get_blocked_users(CursorQueryParameters::new())
        .unwrap()
        .collect_items()
        .await
        .unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.screen_name.as_str()).collect();
    assert_eq!(names, vec!["spammer", "troll"]);
}

#[tokio::test]
async fn test_zero_page_size_rejected() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let client = test_client(&server);
    let err = client
        .account()
        .get_muted_user_ids(CursorQueryParameters::new().page_size(0))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidParameter { ref parameter, .. } if parameter == "page_size"
    ));
}

#[tokio::test]
async fn test_failed_page_keeps_cursor_for_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/incoming.json"))
        .and(query_param("cursor", "55"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/friendships/incoming.json"))
        .and(query_param("cursor", "55"))
        .respond_with(ids_page(&[9], -55, 0))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut ids = client
        .account()
        .get_user_ids_requesting_friendship(
            CursorQueryParameters::new().start_cursor(Cursor::new(55)),
        )
        .unwrap();

    let err = ids.next_page().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert!(err.is_fetch_failure());
    assert_eq!(ids.cursor(), Cursor::new(55));
    assert!(ids.has_next());

    assert_eq!(ids.next_page().await.unwrap().items, vec![9]);
    assert!(!ids.has_next());
}

#[tokio::test]
async fn test_repeated_cursor_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/outgoing.json"))
        .respond_with(ids_page(&[1], 0, 99))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut ids = client
        .account()
        .get_user_ids_you_requested_to_follow(
            CursorQueryParameters::new().start_cursor(Cursor::new(99)),
        )
        .unwrap();

    let err = ids.next_page().await.unwrap_err();
    assert!(matches!(err, Error::CursorNotAdvanced { cursor: 99 }));
    assert_eq!(ids.cursor(), Cursor::new(99));
}

#[tokio::test]
async fn test_listing_is_lazy() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let client = test_client(&server);
    let ids = client
        .account()
        .get_muted_user_ids(CursorQueryParameters::new())
        .unwrap();
    assert!(ids.has_next());
}

#[tokio::test]
async fn test_muted_users_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mutes/users/list.json"))
        .and(query_param("count", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json(3, "loud")],
            "next_cursor": 0,
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut users = client
        .account()
        .get_muted_users(CursorQueryParameters::new().page_size(50))
        .unwrap();

    let page = users.next_page().await.unwrap();
    assert_eq!(page.items[0].id, 3);
    assert!(!users.has_next());
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_get_authenticated_user_with_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/verify_credentials.json"))
        .and(header("Authorization", "Bearer app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "me")))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.credentials.bearer_token = Some("app-token".to_string());
    let client = Client::new(&config).unwrap();

    let me = client.users().get_authenticated_user().await.unwrap();
    assert_eq!(me.screen_name, "me");
    assert!(me.created_at.is_some());
}

#[tokio::test]
async fn test_get_user_by_screen_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .and(query_param("screen_name", "ferris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "ferris")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let user = client.users().get_user("@ferris".parse().unwrap()).await.unwrap();
    assert_eq!(user.id, 5);
}

#[tokio::test]
async fn test_get_user_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": 50, "message": "User not found."}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.users().get_user(UserRef::id(404)).await.unwrap_err();
    assert!(matches!(err, Error::Api { code: 50, status: 404, .. }));
}

#[tokio::test]
async fn test_invalid_user_ref_sends_nothing() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let client = test_client(&server);
    let users = client.users();

    assert!(matches!(
        users.get_user(UserRef::id(0)).await,
        Err(Error::InvalidParameter { .. })
    ));
    assert!(matches!(
        users.block_user(UserRef::screen_name("")).await,
        Err(Error::InvalidParameter { .. })
    ));
    assert!(matches!(
        users.get_follower_ids_of(UserRef::id(0), CursorQueryParameters::new()),
        Err(Error::InvalidParameter { .. })
    ));
}

#[tokio::test]
async fn test_get_users_mixed_refs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .and(query_param("user_id", "1,2"))
        .and(query_param("screen_name", "ferris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "one"),
            user_json(2, "two"),
            user_json(3, "ferris"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let refs = vec![UserRef::id(1), UserRef::screen_name("ferris"), UserRef::id(2)];
    let users = client.users().get_users(&refs).await.unwrap();
    assert_eq!(users.len(), 3);
}

#[tokio::test]
async fn test_get_users_bounds() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let client = test_client(&server);
    assert!(client.users().get_users(&[]).await.unwrap().is_empty());

    let too_many: Vec<UserRef> = (1..=101).map(UserRef::id).collect();
    let err = client.users().get_users(&too_many).await.unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[tokio::test]
async fn test_block_and_follow_actions_post() {
    let server = MockServer::start().await;

    for endpoint in [
        "/blocks/create.json",
        "/blocks/destroy.json",
        "/friendships/create.json",
        "/friendships/destroy.json",
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(query_param("user_id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "target")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let users = client.users();
    assert_eq!(users.block_user(UserRef::id(7)).await.unwrap().id, 7);
    assert_eq!(users.unblock_user(UserRef::id(7)).await.unwrap().id, 7);
    assert_eq!(users.follow_user(UserRef::id(7)).await.unwrap().id, 7);
    assert_eq!(users.unfollow_user(UserRef::id(7)).await.unwrap().id, 7);
}

#[tokio::test]
async fn test_report_user_for_spam() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/report_spam.json"))
        .and(query_param("screen_name", "spammer"))
        .and(query_param("perform_block", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(9, "spammer")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let user = client
        .users()
        .report_user_for_spam(UserRef::screen_name("spammer"), true)
        .await
        .unwrap();
    assert_eq!(user.screen_name, "spammer");
}

#[tokio::test]
async fn test_get_profile_image() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile_images/1/avatar_bigger.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PNG".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let mut user: User = serde_json::from_value(user_json(1, "ferris")).unwrap();
    user.profile_image_url_https =
        Some(format!("{}/profile_images/1/avatar_normal.png", server.uri()));

    let client = test_client(&server);
    let bytes = client
        .users()
        .get_profile_image(&user, ImageSize::Bigger)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"PNG");

    user.profile_image_url_https = None;
    let err = client
        .users()
        .get_profile_image(&user, ImageSize::Normal)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
async fn test_mute_and_unmute() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mutes/users/create.json"))
        .and(query_param("screen_name", "loud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(3, "loud")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/mutes/users/destroy.json"))
        .and(query_param("user_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(3, "loud")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let account = client.account();
    let muted = account.mute_user(UserRef::screen_name("loud")).await.unwrap();
    let unmuted = account.unmute_user(muted.user_ref()).await.unwrap();
    assert_eq!(unmuted.id, 3);
}

#[tokio::test]
async fn test_get_account_settings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/settings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "screen_name": "ferris",
            "protected": true,
            "language": "en",
            "sleep_time": {"enabled": true, "start_time": 23, "end_time": 7},
            "time_zone": {"name": "Pacific Time (US & Canada)", "utc_offset": -28800},
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let settings = client.account().get_account_settings().await.unwrap();
    assert!(settings.protected);
    assert_eq!(settings.sleep_time.start_time, Some(23));
    assert_eq!(settings.time_zone.unwrap().utc_offset, -28800);
}

// ============================================================================
// Friendships
// ============================================================================

#[tokio::test]
async fn test_get_relationship_between() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/show.json"))
        .and(query_param("source_screen_name", "ferris"))
        .and(query_param("target_id", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relationship": {
                "source": {"id": 5, "screen_name": "ferris", "following": true, "followed_by": true},
                "target": {"id": 12, "screen_name": "corro", "following": true, "followed_by": true},
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let details = client
        .friendships()
        .get_relationship_between(UserRef::screen_name("ferris"), UserRef::id(12))
        .await
        .unwrap();

    assert!(details.is_mutual());
    assert_eq!(details.target.screen_name, "corro");
}

#[tokio::test]
async fn test_get_relationships_with() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/lookup.json"))
        .and(query_param("user_id", "12"))
        .and(query_param("screen_name", "corro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 12, "screen_name": "twelve", "connections": ["following", "followed_by"]},
            {"id": 13, "screen_name": "corro", "connections": ["none"]},
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let states = client
        .friendships()
        .get_relationships_with(&[UserRef::id(12), UserRef::screen_name("corro")])
        .await
        .unwrap();

    assert!(states[0].following());
    assert!(states[0].followed_by());
    assert!(!states[1].following());
}

#[tokio::test]
async fn test_get_relationships_with_nobody() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let client = test_client(&server);
    let err = client
        .friendships()
        .get_relationships_with(&[])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
}

#[tokio::test]
async fn test_update_relationship() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/friendships/update.json"))
        .and(query_param("user_id", "12"))
        .and(query_param("retweets", "false"))
        .and(query_param("device", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relationship": {
                "source": {"id": 5, "want_retweets": false, "notifications_enabled": true},
                "target": {"id": 12},
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let details = client
        .friendships()
        .update_relationship(
            UserRef::id(12),
            FriendshipAuthorizations {
                retweets_enabled: false,
                device_notifications_enabled: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(details.source.want_retweets, Some(false));
    assert_eq!(details.source.notifications_enabled, Some(true));
}

#[tokio::test]
async fn test_get_user_ids_whose_retweets_are_muted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/no_retweets/ids.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([21, 22])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let ids = client
        .friendships()
        .get_user_ids_whose_retweets_are_muted()
        .await
        .unwrap();
    assert_eq!(ids, vec![21, 22]);
}

#[tokio::test]
async fn test_get_users_whose_retweets_are_muted_batches_lookups() {
    let server = MockServer::start().await;
    let ids: Vec<u64> = (1..=150).collect();
    let join = |ids: &[u64]| ids.iter().map(u64::to_string).collect::<Vec<_>>().join(",");

    Mock::given(method("GET"))
        .and(path("/friendships/no_retweets/ids.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .and(query_param("user_id", join(&ids[..100])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_json(1, "first"), user_json(2, "second")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .and(query_param("user_id", join(&ids[100..])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(101, "later")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let users = client
        .friendships()
        .get_users_whose_retweets_are_muted()
        .await
        .unwrap();

    let ids: Vec<u64> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 2, 101]);
}

#[tokio::test]
async fn test_get_users_whose_retweets_are_muted_none_muted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/no_retweets/ids.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(path("/users/lookup.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let users = client
        .friendships()
        .get_users_whose_retweets_are_muted()
        .await
        .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_users_you_requested_to_follow_hydrates_each_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/outgoing.json"))
        .and(query_param("cursor", "-1"))
        .and(query_param("count", "5000"))
        .respond_with(ids_page(&[5, 6], 0, 40))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/friendships/outgoing.json"))
        .and(query_param("cursor", "40"))
        .respond_with(ids_page(&[7], -40, 0))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .and(query_param("user_id", "5,6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_json(5, "five"), user_json(6, "six")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .and(query_param("user_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(7, "seven")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut users = client
        .account()
        .get_users_you_requested_to_follow(CursorQueryParameters::new())
        .unwrap();

    let first = users.next_page().await.unwrap();
    let names: Vec<&str> = first.items.iter().map(|u| u.screen_name.as_str()).collect();
    assert_eq!(names, vec!["five", "six"]);
    assert_eq!(first.next_cursor, Cursor::new(40));
    assert_eq!(users.cursor(), Cursor::new(40));

    let second = users.next_page().await.unwrap();
    assert_eq!(second.items[0].id, 7);
    assert!(!users.has_next());
}

#[tokio::test]
async fn test_users_you_requested_to_follow_lookup_failure_keeps_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/friendships/outgoing.json"))
        .respond_with(ids_page(&[5], 0, 40))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/lookup.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut users = client
        .account()
        .get_users_you_requested_to_follow(CursorQueryParameters::new())
        .unwrap();

    let err = users.next_page().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert_eq!(users.cursor(), Cursor::INITIAL);
    assert!(users.has_next());
}
