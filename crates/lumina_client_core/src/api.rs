//! HTTP client for the gallery backend (events, photos, uploads, admin login).
use crate::config::{api_origin, ClientConfig};
use crate::error::{ApiError, ApiResult};
use crate::ids::{EventId, PhotoId};
use crate::models::{Event, NewEvent, Photo, UploadFile};
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::RwLock;

pub const ADMIN_HEADER: &str = "x-admin-password";

/// One method per backend operation. The store is generic over this so it can run
/// against a fake in tests.
#[allow(async_fn_in_trait)]
pub trait GalleryApi {
    async fn list_events(&self) -> ApiResult<Vec<Event>>;
    async fn create_event(&self, payload: &NewEvent) -> ApiResult<Event>;
    async fn delete_event(&self, id: &EventId) -> ApiResult<()>;
    async fn set_event_cover(&self, event_id: &EventId, photo_id: &PhotoId) -> ApiResult<Event>;

    async fn list_photos(&self) -> ApiResult<Vec<Photo>>;
    async fn list_event_photos(&self, slug: &str) -> ApiResult<Vec<Photo>>;
    /// Uploads a single file as one multipart request.
    async fn upload_photo(&self, event_id: &EventId, file: &UploadFile) -> ApiResult<Photo>;
    async fn delete_photo(&self, id: &PhotoId) -> ApiResult<()>;
    async fn update_photo_caption(&self, id: &PhotoId, caption: &str) -> ApiResult<Photo>;
    async fn set_photo_favorite(&self, id: &PhotoId, is_favorite: bool) -> ApiResult<Photo>;
    async fn download_event_zip(&self, slug: &str) -> ApiResult<Vec<u8>>;

    /// `Ok(false)` when the backend rejects the password with 401.
    async fn verify_admin_password(&self, password: &str) -> ApiResult<bool>;
    fn set_admin_credential(&self, password: Option<String>);

    /// No batch endpoint: deletes one at a time and stops at the first failure.
    async fn delete_photos(&self, ids: &[PhotoId]) -> ApiResult<()> {
        for id in ids {
            self.delete_photo(id).await?;
        }
        Ok(())
    }
}

/// Prefix relative asset URLs with the API origin; absolute ones pass through.
pub fn resolve_asset_url(origin: &str, url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{origin}{url}")
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

pub struct HttpApi {
    client: Client,
    base_url: String,
    origin: String,
    admin_password: RwLock<Option<String>>,
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Result<Client> {
    Ok(Client::new())
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::with_client(build_client()?, &config.api_url, Some(config.admin_password.clone())))
    }

    pub fn with_client(client: Client, api_url: &str, admin_password: Option<String>) -> Self {
        let base_url = api_url.trim_end_matches('/').to_string();
        Self {
            client,
            origin: api_origin(api_url),
            base_url,
            admin_password: RwLock::new(admin_password),
        }
    }

    /// Makes a relative API base such as `/api` absolute against the page origin, since
    /// reqwest only accepts absolute URLs. Asset URLs keep resolving against the page.
    pub fn with_page_origin(mut self, page_origin: &str) -> Self {
        if is_absolute(&self.base_url) || page_origin.is_empty() {
            return self;
        }
        let path = self.base_url.trim_start_matches('/');
        self.base_url = format!("{}/{path}", page_origin.trim_end_matches('/'));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL of the album archive, for direct links.
    pub fn event_zip_url(&self, slug: &str) -> String {
        self.url(&format!("/events/{}/zip", urlencoding::encode(slug)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn admin_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let password = self.admin_password.read().ok().and_then(|p| p.clone());
        let Some(password) = password else {
            return headers;
        };
        match HeaderValue::from_str(&password) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(ADMIN_HEADER), value);
            }
            Err(_) => warn!("admin password is not a valid header value; privileged calls will be rejected"),
        }
        headers
    }

    fn with_asset_url(&self, mut photo: Photo) -> Photo {
        photo.url = resolve_asset_url(&self.origin, &photo.url);
        photo
    }
}

async fn check(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::status(status, body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let text = check(resp).await?.text().await?;
    Ok(serde_json::from_str(&text)?)
}

impl GalleryApi for HttpApi {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let url = self.url("/events");
        debug!("GET {url}");
        read_json(self.client.get(&url).send().await?).await
    }

    async fn create_event(&self, payload: &NewEvent) -> ApiResult<Event> {
        let url = self.url("/events");
        debug!("POST {url} slug={}", payload.slug);
        let resp = self
            .client
            .post(&url)
            .headers(self.admin_headers())
            .json(payload)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn delete_event(&self, id: &EventId) -> ApiResult<()> {
        let url = self.url(&format!("/events/{id}"));
        debug!("DELETE {url}");
        let resp = self.client.delete(&url).headers(self.admin_headers()).send().await?;
        check(resp).await?;
        Ok(())
    }

    async fn set_event_cover(&self, event_id: &EventId, photo_id: &PhotoId) -> ApiResult<Event> {
        let url = self.url(&format!("/events/{event_id}/cover"));
        debug!("PATCH {url} photo_id={photo_id}");
        let resp = self
            .client
            .patch(&url)
            .headers(self.admin_headers())
            .json(&serde_json::json!({ "photoId": photo_id }))
            .send()
            .await?;
        read_json(resp).await
    }

    async fn list_photos(&self) -> ApiResult<Vec<Photo>> {
        let url = self.url("/photos");
        debug!("GET {url}");
        let photos: Vec<Photo> = read_json(self.client.get(&url).send().await?).await?;
        Ok(photos.into_iter().map(|p| self.with_asset_url(p)).collect())
    }

    async fn list_event_photos(&self, slug: &str) -> ApiResult<Vec<Photo>> {
        let url = self.url(&format!("/events/{}/photos", urlencoding::encode(slug)));
        debug!("GET {url}");
        let photos: Vec<Photo> = read_json(self.client.get(&url).send().await?).await?;
        Ok(photos.into_iter().map(|p| self.with_asset_url(p)).collect())
    }

    async fn upload_photo(&self, event_id: &EventId, file: &UploadFile) -> ApiResult<Photo> {
        let url = self.url(&format!("/events/{event_id}/photos"));
        debug!("POST {url} file={} size={}", file.name, file.size());
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("files", part);
        let resp = self
            .client
            .post(&url)
            .headers(self.admin_headers())
            .multipart(form)
            .send()
            .await?;
        let photos: Vec<Photo> = read_json(resp).await?;
        let photo = photos.into_iter().next().ok_or(ApiError::EmptyUpload)?;
        info!("uploaded {} as photo {}", file.name, photo.id);
        Ok(self.with_asset_url(photo))
    }

    async fn delete_photo(&self, id: &PhotoId) -> ApiResult<()> {
        let url = self.url(&format!("/photos/{id}"));
        debug!("DELETE {url}");
        let resp = self.client.delete(&url).headers(self.admin_headers()).send().await?;
        check(resp).await?;
        Ok(())
    }

    async fn update_photo_caption(&self, id: &PhotoId, caption: &str) -> ApiResult<Photo> {
        let url = self.url(&format!("/photos/{id}"));
        debug!("PATCH {url} caption");
        let resp = self
            .client
            .patch(&url)
            .headers(self.admin_headers())
            .json(&serde_json::json!({ "caption": caption }))
            .send()
            .await?;
        Ok(self.with_asset_url(read_json(resp).await?))
    }

    // Favorites are a visitor action; the backend does not require the admin header here.
    async fn set_photo_favorite(&self, id: &PhotoId, is_favorite: bool) -> ApiResult<Photo> {
        let url = self.url(&format!("/photos/{id}/favorite"));
        debug!("PATCH {url} is_favorite={is_favorite}");
        let resp = self
            .client
            .patch(&url)
            .json(&serde_json::json!({ "isFavorite": is_favorite }))
            .send()
            .await?;
        Ok(self.with_asset_url(read_json(resp).await?))
    }

    async fn download_event_zip(&self, slug: &str) -> ApiResult<Vec<u8>> {
        let url = self.event_zip_url(slug);
        debug!("GET {url}");
        let resp = check(self.client.get(&url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    async fn verify_admin_password(&self, password: &str) -> ApiResult<bool> {
        let url = self.url("/auth/login");
        debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;
        match check(resp).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_unauthorized() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn set_admin_credential(&self, password: Option<String>) {
        if let Ok(mut guard) = self.admin_password.write() {
            *guard = password;
        }
    }
}
