//! In-memory backend. Every call is logged as `name` or `name:arg`; any logged label can be
//! made to fail with `fail_on`.

use lumina_client_core::{ApiError, ApiResult, Event, EventId, GalleryApi, NewEvent, Photo, PhotoId, UploadFile};
use reqwest::StatusCode;
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

pub const PASSWORD: &str = "letmein";

#[derive(Default)]
pub struct FakeApi {
    pub events: Mutex<Vec<Event>>,
    pub photos: Mutex<Vec<Photo>>,
    pub credential: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
}

pub fn event(title: &str, slug: &str, date: &str) -> Event {
    Event {
        id: EventId::parse(Uuid::new_v4().to_string()).unwrap(),
        title: title.to_string(),
        slug: slug.to_string(),
        date: date.to_string(),
        cover_photo_id: None,
        description: None,
        watermark_text: None,
        created_at: 0,
    }
}

pub fn photo(event: &Event, name: &str, size: u64) -> Photo {
    let id = PhotoId::parse(Uuid::new_v4().to_string()).unwrap();
    Photo {
        filename: format!("{id}.jpg"),
        url: format!("/static/{}/{id}.jpg", event.slug),
        id,
        event_id: event.id.clone(),
        event_slug: event.slug.clone(),
        name: name.to_string(),
        mime_type: Some("image/jpeg".to_string()),
        size,
        width: None,
        height: None,
        caption: None,
        uploaded_at: 0,
        is_favorite: false,
    }
}

impl FakeApi {
    pub fn with_data(events: Vec<Event>, photos: Vec<Photo>) -> Self {
        Self {
            events: Mutex::new(events),
            photos: Mutex::new(photos),
            ..Self::default()
        }
    }

    pub fn fail_on(&self, label: impl Into<String>) {
        self.failing.lock().unwrap().insert(label.into());
    }

    pub fn clear_failures(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, label: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(label.clone());
        if self.failing.lock().unwrap().contains(&label) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("{label} failed"),
            });
        }
        Ok(())
    }

    fn find_photo(&self, id: &PhotoId) -> ApiResult<Photo> {
        self.photos
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: "Photo not found".to_string(),
            })
    }

    fn edit_photo(&self, id: &PhotoId, f: impl FnOnce(&mut Photo)) -> ApiResult<Photo> {
        self.find_photo(id)?;
        let mut photos = self.photos.lock().unwrap();
        let photo = photos.iter_mut().find(|p| &p.id == id).unwrap();
        f(photo);
        Ok(photo.clone())
    }
}

impl GalleryApi for FakeApi {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        self.record("list_events".into())?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn create_event(&self, payload: &NewEvent) -> ApiResult<Event> {
        self.record(format!("create_event:{}", payload.slug))?;
        let mut created = event(&payload.title, &payload.slug, &payload.date);
        created.description = payload.description.clone();
        created.watermark_text = payload.watermark_text.clone();
        created.created_at = 1_700_000_000_000;
        self.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_event(&self, id: &EventId) -> ApiResult<()> {
        self.record(format!("delete_event:{id}"))?;
        self.events.lock().unwrap().retain(|e| &e.id != id);
        self.photos.lock().unwrap().retain(|p| &p.event_id != id);
        Ok(())
    }

    async fn set_event_cover(&self, event_id: &EventId, photo_id: &PhotoId) -> ApiResult<Event> {
        self.record(format!("set_event_cover:{event_id}:{photo_id}"))?;
        let mut events = self.events.lock().unwrap();
        let event = events.iter_mut().find(|e| &e.id == event_id).ok_or(ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Event not found".to_string(),
        })?;
        event.cover_photo_id = Some(photo_id.clone());
        Ok(event.clone())
    }

    async fn list_photos(&self) -> ApiResult<Vec<Photo>> {
        self.record("list_photos".into())?;
        Ok(self.photos.lock().unwrap().clone())
    }

    async fn list_event_photos(&self, slug: &str) -> ApiResult<Vec<Photo>> {
        self.record(format!("list_event_photos:{slug}"))?;
        Ok(self
            .photos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.event_slug == slug)
            .cloned()
            .collect())
    }

    async fn upload_photo(&self, event_id: &EventId, file: &UploadFile) -> ApiResult<Photo> {
        self.record(format!("upload_photo:{}", file.name))?;
        let event = self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.id == event_id)
            .cloned()
            .ok_or(ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: "Event not found".to_string(),
            })?;
        let created = photo(&event, &file.name, file.size());
        self.photos.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_photo(&self, id: &PhotoId) -> ApiResult<()> {
        self.record(format!("delete_photo:{id}"))?;
        self.photos.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }

    async fn update_photo_caption(&self, id: &PhotoId, caption: &str) -> ApiResult<Photo> {
        self.record(format!("update_photo_caption:{id}"))?;
        self.edit_photo(id, |p| p.caption = Some(caption.to_string()))
    }

    async fn set_photo_favorite(&self, id: &PhotoId, is_favorite: bool) -> ApiResult<Photo> {
        self.record(format!("set_photo_favorite:{id}:{is_favorite}"))?;
        self.edit_photo(id, |p| p.is_favorite = is_favorite)
    }

    async fn download_event_zip(&self, slug: &str) -> ApiResult<Vec<u8>> {
        self.record(format!("download_event_zip:{slug}"))?;
        Ok(b"PK\x03\x04".to_vec())
    }

    async fn verify_admin_password(&self, password: &str) -> ApiResult<bool> {
        self.record("verify_admin_password".into())?;
        Ok(password == PASSWORD)
    }

    fn set_admin_credential(&self, password: Option<String>) {
        *self.credential.lock().unwrap() = password;
    }
}
