//! Integration tests for the backend client against an in-process fake backend.

mod common;

use chess_tournament_web::{ClientError, ImageKind};
use common::{client_for, start_fake_backend};
use std::sync::atomic::Ordering;

#[actix_web::test]
async fn fetches_tournament_and_forwards_auth() {
    let backend = start_fake_backend();
    let client = client_for(&backend.base);
    let t = client.tournament(1, Some("Bearer abc")).await.unwrap();
    assert_eq!(t.name, "Club Championship");
    assert_eq!(t.swiss_bracket_id, Some(5));
    assert_eq!(t.description.as_deref(), Some("Bearer abc"));
}

#[actix_web::test]
async fn fetches_matches_bracket_and_standings() {
    let backend = start_fake_backend();
    let client = client_for(&backend.base);

    let matches = client.matches(1, None).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].swiss_round_number, Some(1));
    assert_eq!(matches[1].round_name(), Some("Final"));

    let bracket = client.swiss_bracket(5, None).await.unwrap();
    assert_eq!(bracket.current_round, 2);
    assert_eq!(bracket.number_of_rounds, 4);

    let standings = client.swiss_standings(5, None).await.unwrap();
    assert_eq!(standings[0].player.elo_rating, Some(1650.5));
    assert_eq!(standings[0].wins, 2);
}

#[actix_web::test]
async fn maps_backend_failures() {
    let backend = start_fake_backend();
    let client = client_for(&backend.base);

    let missing = client.tournament(99, None).await.unwrap_err();
    assert!(matches!(missing, ClientError::NotFound(_)));
    assert!(missing.is_not_found());

    let garbled = client.matches(2, None).await.unwrap_err();
    assert!(matches!(garbled, ClientError::Decode { .. }));

    let failed = client.matches(3, None).await.unwrap_err();
    assert!(matches!(failed, ClientError::Status { status: 500, .. }));
    assert!(!failed.is_not_found());
}

#[actix_web::test]
async fn photos_are_cached_including_misses() {
    let backend = start_fake_backend();
    let client = client_for(&backend.base);

    let first = client.player_photo(10, None).await.unwrap().unwrap();
    assert_eq!(first.content_type, "image/png");
    assert_eq!(first.bytes, vec![137u8, 80, 78, 71]);
    let second = client.player_photo(10, None).await.unwrap();
    assert_eq!(second, Some(first));
    assert_eq!(backend.photo_hits.load(Ordering::SeqCst), 1);

    assert_eq!(client.player_photo(11, None).await.unwrap(), None);
    assert_eq!(client.images().get(ImageKind::Player, 11), Some(None));
    assert_eq!(client.tournament_photo(1, None).await.unwrap(), None);
    assert_eq!(client.images().len(), 3);
}

#[actix_web::test]
async fn failed_photo_fetches_are_not_cached() {
    let backend = start_fake_backend();
    let client = client_for(&backend.base);

    let err = client.player_photo(20, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
    assert_eq!(client.images().get(ImageKind::Player, 20), None);

    assert!(client.player_photo(20, None).await.is_err());
    assert_eq!(backend.failing_photo_hits.load(Ordering::SeqCst), 2);
    assert!(client.images().is_empty());
}
