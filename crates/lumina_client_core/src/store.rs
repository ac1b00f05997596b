//! Shared gallery state: events and photos fetched from the backend, republished to
//! subscribers after every change. The backend is the single source of truth; every
//! write is followed by a full reload.

use crate::api::GalleryApi;
use crate::error::ApiResult;
use crate::ids::{EventId, PhotoId};
use crate::models::{Event, NewEvent, Photo, UploadFile, UploadProgress};
use log::{debug, info, warn};
use std::cmp::Reverse;
use tokio::sync::watch;

/// What pages render from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub photos: Vec<Photo>,
    pub loading: bool,
}

impl Snapshot {
    pub fn event_by_slug(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.slug == slug)
    }

    pub fn event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn photo(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| &p.id == id)
    }

    /// Photos of one event, in backend order.
    pub fn photos_for_event(&self, event_id: &EventId) -> Vec<&Photo> {
        self.photos.iter().filter(|p| &p.event_id == event_id).collect()
    }

    /// Photos whose event is known. Orphans are dropped.
    pub fn visible_photos(&self) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|p| self.event_by_id(&p.event_id).is_some())
            .collect()
    }

    /// Explicit cover if set and present, else the event's first photo.
    pub fn cover_url(&self, event: &Event) -> Option<&str> {
        let cover = match &event.cover_photo_id {
            Some(id) => self.photo(id),
            None => self.photos.iter().find(|p| p.event_id == event.id),
        };
        cover.map(|p| p.url.as_str())
    }

    pub fn favorite_count(&self) -> usize {
        self.visible_photos().iter().filter(|p| p.is_favorite).count()
    }
}

/// Newest first. Events with an unparsable date go last; ties keep their order.
pub fn sort_events_newest_first(events: &mut [Event]) {
    events.sort_by_key(|e| Reverse(e.parsed_date()));
}

pub struct Store<A> {
    api: A,
    state: watch::Sender<Snapshot>,
}

impl<A: GalleryApi> Store<A> {
    /// Starts empty with `loading` set until the first refresh settles.
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(Snapshot {
            loading: true,
            ..Snapshot::default()
        });
        Self { api, state }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    /// Fetch all events and photos concurrently and replace the state.
    /// On failure the previous lists stay in place.
    pub async fn refresh(&self) -> ApiResult<()> {
        self.state.send_modify(|s| s.loading = true);
        let fetched = tokio::try_join!(self.api.list_events(), self.api.list_photos());
        match fetched {
            Ok((mut events, photos)) => {
                sort_events_newest_first(&mut events);
                debug!("refresh: {} events, {} photos", events.len(), photos.len());
                self.state.send_modify(|s| {
                    s.events = events;
                    s.photos = photos;
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                self.state.send_modify(|s| s.loading = false);
                warn!("refresh failed: {e}");
                Err(e)
            }
        }
    }

    // The write already succeeded; a failed reload only leaves the view stale.
    async fn refresh_after(&self, op: &str) {
        if let Err(e) = self.refresh().await {
            warn!("{op}: reload after write failed: {e}");
        }
    }

    /// Returns the record as created by the backend.
    pub async fn add_event(&self, payload: NewEvent) -> ApiResult<Event> {
        let created = self.api.create_event(&payload).await?;
        info!("add_event: created {} ({})", created.slug, created.id);
        self.refresh_after("add_event").await;
        Ok(created)
    }

    /// Photos of the event are the backend's concern.
    pub async fn delete_event(&self, id: &EventId) -> ApiResult<()> {
        self.api.delete_event(id).await?;
        info!("delete_event: {id}");
        self.refresh_after("delete_event").await;
        Ok(())
    }

    /// Lazy per-file upload sequence. Nothing is sent until the first `upload_next`.
    pub fn upload_photos(&self, event_id: &EventId, files: Vec<UploadFile>) -> UploadBatch<'_, A> {
        UploadBatch::new(self, event_id.clone(), files)
    }

    pub async fn add_photos(&self, event_id: &EventId, files: Vec<UploadFile>) -> ApiResult<()> {
        self.add_photos_with_progress(event_id, files, |_| {}).await
    }

    /// Uploads one file at a time; `on_progress` runs after each file. The first failure
    /// aborts the batch and the remaining files are not sent.
    pub async fn add_photos_with_progress(
        &self,
        event_id: &EventId,
        files: Vec<UploadFile>,
        mut on_progress: impl FnMut(&UploadProgress),
    ) -> ApiResult<()> {
        let mut batch = self.upload_photos(event_id, files);
        while let Some(step) = batch.upload_next().await {
            on_progress(&step?);
        }
        info!("add_photos: {} files uploaded to {event_id}", batch.total());
        self.refresh_after("add_photos").await;
        Ok(())
    }

    pub async fn delete_photo(&self, id: &PhotoId) -> ApiResult<()> {
        self.api.delete_photo(id).await?;
        info!("delete_photo: {id}");
        self.refresh_after("delete_photo").await;
        Ok(())
    }

    /// Sequential deletes; a failure leaves the rest undeleted and is returned.
    pub async fn delete_photos(&self, ids: &[PhotoId]) -> ApiResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.api.delete_photos(ids).await?;
        info!("delete_photos: {} photos", ids.len());
        self.refresh_after("delete_photos").await;
        Ok(())
    }

    /// No-op for ids not in local state (stale selection).
    pub async fn update_photo_caption(&self, photo_id: &PhotoId, caption: &str) -> ApiResult<()> {
        let known = self.state.borrow().photo(photo_id).is_some();
        if !known {
            debug!("update_photo_caption: {photo_id} not in local state, skipping");
            return Ok(());
        }
        self.api.update_photo_caption(photo_id, caption).await?;
        self.refresh_after("update_photo_caption").await;
        Ok(())
    }

    pub async fn set_cover_photo(&self, event_id: &EventId, photo_id: &PhotoId) -> ApiResult<()> {
        self.api.set_event_cover(event_id, photo_id).await?;
        info!("set_cover_photo: {event_id} -> {photo_id}");
        self.refresh_after("set_cover_photo").await;
        Ok(())
    }

    pub async fn toggle_photo_favorite(&self, photo_id: &PhotoId, is_favorite: bool) -> ApiResult<()> {
        self.api.set_photo_favorite(photo_id, is_favorite).await?;
        self.refresh_after("toggle_photo_favorite").await;
        Ok(())
    }
}

/// Finite, non-restartable sequence of uploads. Each step sends exactly one file and
/// appends the returned photo to the store before yielding its progress.
pub struct UploadBatch<'a, A> {
    store: &'a Store<A>,
    event_id: EventId,
    files: std::vec::IntoIter<UploadFile>,
    total: usize,
    total_bytes: u64,
    current: usize,
    uploaded_bytes: u64,
    finished: bool,
}

impl<'a, A: GalleryApi> UploadBatch<'a, A> {
    fn new(store: &'a Store<A>, event_id: EventId, files: Vec<UploadFile>) -> Self {
        let total = files.len();
        let total_bytes = files.iter().map(UploadFile::size).sum();
        Self {
            store,
            event_id,
            files: files.into_iter(),
            total,
            total_bytes,
            current: 0,
            uploaded_bytes: 0,
            finished: false,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// `None` once every file is sent, or after a failure has been yielded.
    pub async fn upload_next(&mut self) -> Option<ApiResult<UploadProgress>> {
        if self.finished {
            return None;
        }
        let Some(file) = self.files.next() else {
            self.finished = true;
            return None;
        };
        match self.store.api.upload_photo(&self.event_id, &file).await {
            Ok(photo) => {
                self.current += 1;
                self.uploaded_bytes += file.size();
                self.store.state.send_modify(|s| s.photos.push(photo));
                Some(Ok(UploadProgress {
                    current: self.current,
                    total: self.total,
                    file: file.info(),
                    uploaded_bytes: self.uploaded_bytes,
                    total_bytes: self.total_bytes,
                }))
            }
            Err(e) => {
                warn!("upload of {} failed after {} of {}: {e}", file.name, self.current, self.total);
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
