//! Store behavior against the in-memory backend: refresh, sequential uploads, deletes,
//! curation and the no-op/abort edge cases.

use crate::common::fake_api::{event, photo, FakeApi};
use lumina_client_core::{NewEvent, PhotoId, Store, UploadFile, UploadProgress};
use pretty_assertions::assert_eq;

fn seeded() -> FakeApi {
    let older = event("Spring Portraits", "spring-portraits", "2023-04-10");
    let newer = event("Smith Wedding", "smith-wedding", "2024-06-01");
    let photos = vec![photo(&newer, "a.jpg", 10), photo(&newer, "b.jpg", 20), photo(&older, "c.jpg", 30)];
    FakeApi::with_data(vec![older, newer], photos)
}

fn files(sizes: &[(&str, usize)]) -> Vec<UploadFile> {
    sizes
        .iter()
        .map(|(name, size)| UploadFile::new(*name, vec![0u8; *size]))
        .collect()
}

#[tokio::test]
async fn starts_loading_and_refresh_sorts_newest_first() {
    let store = Store::new(seeded());
    assert!(store.snapshot().loading);

    store.refresh().await.unwrap();

    let snap = store.snapshot();
    assert!(!snap.loading);
    let slugs: Vec<&str> = snap.events.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, ["smith-wedding", "spring-portraits"]);
    assert_eq!(snap.photos.len(), 3);
    assert_eq!(store.api().count("list_events"), 1);
    assert_eq!(store.api().count("list_photos"), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_lists() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();

    store.api().fail_on("list_photos");
    let err = store.refresh().await.unwrap_err();
    assert!(err.to_string().contains("list_photos failed"));

    let snap = store.snapshot();
    assert!(!snap.loading);
    assert_eq!(snap.events.len(), 2);
    assert_eq!(snap.photos.len(), 3);
}

#[tokio::test]
async fn subscribers_are_notified_on_refresh() {
    let store = Store::new(seeded());
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.refresh().await.unwrap();

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().events.len(), 2);
}

#[tokio::test]
async fn add_event_returns_backend_record_and_reloads() {
    let store = Store::new(FakeApi::default());
    let created = store
        .add_event(NewEvent {
            title: "Smith Wedding".into(),
            slug: "smith-wedding".into(),
            date: "2024-06-01".into(),
            description: Some("Lakeside vows".into()),
            watermark_text: None,
        })
        .await
        .unwrap();

    assert_eq!(created.created_at, 1_700_000_000_000);
    assert_eq!(created.description.as_deref(), Some("Lakeside vows"));
    assert_eq!(store.api().calls()[0], "create_event:smith-wedding");
    assert_eq!(store.snapshot().event_by_slug("smith-wedding").map(|e| &e.id), Some(&created.id));
}

#[tokio::test]
async fn reload_failure_after_write_is_not_an_error() {
    let store = Store::new(FakeApi::default());
    store.api().fail_on("list_events");

    let created = store
        .add_event(NewEvent {
            title: "Gala".into(),
            slug: "gala".into(),
            date: "2024-01-01".into(),
            ..NewEvent::default()
        })
        .await;

    assert!(created.is_ok());
    assert!(!store.snapshot().loading);
}

#[tokio::test]
async fn add_photos_uploads_one_at_a_time_with_progress() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let target = store.snapshot().event_by_slug("spring-portraits").unwrap().clone();
    store.api().clear_calls();

    let mut progress: Vec<UploadProgress> = Vec::new();
    store
        .add_photos_with_progress(
            &target.id,
            files(&[("one.jpg", 10), ("two.jpg", 20), ("three.jpg", 30)]),
            |p| progress.push(p.clone()),
        )
        .await
        .unwrap();

    let uploads: Vec<String> = store
        .api()
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("upload_photo"))
        .collect();
    assert_eq!(uploads, ["upload_photo:one.jpg", "upload_photo:two.jpg", "upload_photo:three.jpg"]);

    let steps: Vec<(usize, u64)> = progress.iter().map(|p| (p.current, p.uploaded_bytes)).collect();
    assert_eq!(steps, [(1, 10), (2, 30), (3, 60)]);
    assert!(progress.iter().all(|p| p.total == 3 && p.total_bytes == 60));
    assert_eq!(progress[1].file.name, "two.jpg");
    assert!(progress[2].is_last());
    assert!((progress[2].fraction() - 1.0).abs() < f64::EPSILON);

    assert_eq!(store.snapshot().photos_for_event(&target.id).len(), 4);
    // One reload after the whole batch.
    assert_eq!(store.api().count("list_events"), 1);
}

#[tokio::test]
async fn failed_upload_aborts_the_batch_without_reload() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let target = store.snapshot().event_by_slug("smith-wedding").unwrap().clone();
    store.api().clear_calls();
    store.api().fail_on("upload_photo:two.jpg");

    let mut seen = 0;
    let result = store
        .add_photos_with_progress(
            &target.id,
            files(&[("one.jpg", 5), ("two.jpg", 5), ("three.jpg", 5)]),
            |_| seen += 1,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(seen, 1);
    assert_eq!(store.api().calls(), ["upload_photo:one.jpg", "upload_photo:two.jpg"]);
    // The file that made it is already in local state.
    assert!(store.snapshot().photos.iter().any(|p| p.name == "one.jpg"));
}

#[tokio::test]
async fn upload_batch_is_lazy_and_ends_after_last_file() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let target = store.snapshot().events[0].id.clone();
    store.api().clear_calls();

    let mut batch = store.upload_photos(&target, files(&[("x.jpg", 4), ("y.jpg", 6)]));
    assert_eq!(batch.total(), 2);
    assert_eq!(batch.total_bytes(), 10);
    assert!(store.api().calls().is_empty());

    let first = batch.upload_next().await.unwrap().unwrap();
    assert_eq!((first.current, first.uploaded_bytes), (1, 4));
    let second = batch.upload_next().await.unwrap().unwrap();
    assert!(second.is_last());
    assert!(batch.upload_next().await.is_none());
    assert!(batch.upload_next().await.is_none());
    assert_eq!(store.api().count("upload_photo"), 2);
}

#[tokio::test]
async fn failed_batch_step_is_yielded_once() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let target = store.snapshot().events[0].id.clone();
    store.api().fail_on("upload_photo:x.jpg");

    let mut batch = store.upload_photos(&target, files(&[("x.jpg", 1), ("y.jpg", 1)]));
    assert!(batch.upload_next().await.unwrap().is_err());
    assert!(batch.upload_next().await.is_none());
    assert_eq!(store.api().count("upload_photo:y.jpg"), 0);
}

#[tokio::test]
async fn deleting_no_photos_makes_no_calls() {
    let store = Store::new(seeded());
    store.delete_photos(&[]).await.unwrap();
    assert!(store.api().calls().is_empty());
}

#[tokio::test]
async fn delete_photos_stops_at_first_failure() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let ids: Vec<PhotoId> = store.snapshot().photos.iter().map(|p| p.id.clone()).collect();
    store.api().clear_calls();
    store.api().fail_on(format!("delete_photo:{}", ids[1]));

    assert!(store.delete_photos(&ids).await.is_err());

    let deletes = store.api().count("delete_photo:");
    assert_eq!(deletes, 2);
    let remaining: Vec<PhotoId> = store.api().photos.lock().unwrap().iter().map(|p| p.id.clone()).collect();
    assert_eq!(remaining, ids[1..].to_vec());
    assert_eq!(store.api().count("list_photos"), 0);
}

#[tokio::test]
async fn delete_photos_reloads_once_after_all_succeed() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let ids: Vec<PhotoId> = store.snapshot().photos.iter().take(2).map(|p| p.id.clone()).collect();
    store.api().clear_calls();

    store.delete_photos(&ids).await.unwrap();

    assert_eq!(store.api().count("delete_photo:"), 2);
    assert_eq!(store.api().count("list_photos"), 1);
    assert_eq!(store.snapshot().photos.len(), 1);
}

#[tokio::test]
async fn caption_for_unknown_photo_is_a_no_op() {
    let store = Store::new(seeded());
    // Nothing loaded yet, so every id is unknown locally.
    let id = store.api().photos.lock().unwrap()[0].id.clone();

    store.update_photo_caption(&id, "Sunset").await.unwrap();

    assert!(store.api().calls().is_empty());
}

#[tokio::test]
async fn caption_for_known_photo_is_saved() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let id = store.snapshot().photos[0].id.clone();

    store.update_photo_caption(&id, "First dance").await.unwrap();

    assert_eq!(store.snapshot().photo(&id).unwrap().caption.as_deref(), Some("First dance"));
}

#[tokio::test]
async fn favorite_toggled_twice_is_restored() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let id = store.snapshot().photos[0].id.clone();

    store.toggle_photo_favorite(&id, true).await.unwrap();
    assert!(store.snapshot().photo(&id).unwrap().is_favorite);
    assert_eq!(store.snapshot().favorite_count(), 1);

    store.toggle_photo_favorite(&id, false).await.unwrap();
    assert!(!store.snapshot().photo(&id).unwrap().is_favorite);
}

#[tokio::test]
async fn cover_photo_overrides_first_photo() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let snap = store.snapshot();
    let wedding = snap.event_by_slug("smith-wedding").unwrap().clone();
    let wedding_photos: Vec<_> = snap.photos_for_event(&wedding.id).into_iter().cloned().collect();
    assert_eq!(snap.cover_url(&wedding), Some(wedding_photos[0].url.as_str()));

    store.set_cover_photo(&wedding.id, &wedding_photos[1].id).await.unwrap();

    let snap = store.snapshot();
    let wedding = snap.event_by_slug("smith-wedding").unwrap();
    assert_eq!(wedding.cover_photo_id.as_ref(), Some(&wedding_photos[1].id));
    assert_eq!(snap.cover_url(wedding), Some(wedding_photos[1].url.as_str()));
}

#[tokio::test]
async fn deleting_an_event_drops_its_photos_from_view() {
    let store = Store::new(seeded());
    store.refresh().await.unwrap();
    let wedding = store.snapshot().event_by_slug("smith-wedding").unwrap().id.clone();

    store.delete_event(&wedding).await.unwrap();

    let snap = store.snapshot();
    assert!(snap.event_by_slug("smith-wedding").is_none());
    assert_eq!(snap.visible_photos().len(), 1);
}

#[tokio::test]
async fn orphan_photos_are_not_visible() {
    let ghost = event("Ghost", "ghost", "2022-01-01");
    let kept = event("Kept", "kept", "2022-02-02");
    let api = FakeApi::with_data(vec![kept.clone()], vec![photo(&ghost, "lost.jpg", 1), photo(&kept, "ok.jpg", 1)]);
    let store = Store::new(api);
    store.refresh().await.unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.photos.len(), 2);
    let visible: Vec<&str> = snap.visible_photos().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(visible, ["ok.jpg"]);
}
