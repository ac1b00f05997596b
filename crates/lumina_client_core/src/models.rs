//! Data models for events, photos and uploads.
//! Wire format is the backend's camelCase JSON; IDs are validated UUIDs, dates stay strings.

use crate::ids::{EventId, PhotoId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named, dated photo collection with a public slug-based URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub slug: String,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub cover_photo_id: Option<PhotoId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub watermark_text: Option<String>,
    pub created_at: i64,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Create payload. `id`, `createdAt` and `coverPhotoId` are assigned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub slug: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub event_id: EventId,
    pub event_slug: String,
    pub filename: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    pub size: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub caption: Option<String>,
    pub uploaded_at: i64,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A file queued for upload, held in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// MIME type is guessed from the file name's extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_guess::from_path(&name).first().map(|m| m.essence_str().to_string());
        Self { name, mime, bytes }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(name, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn info(&self) -> FileInfo {
        FileInfo {
            name: self.name.clone(),
            size: self.size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

/// Progress after one file of a batch has finished uploading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    /// 1-based index of the file that just finished.
    pub current: usize,
    pub total: usize,
    pub file: FileInfo,
    pub uploaded_bytes: u64,
    pub total_bytes: u64,
}

impl UploadProgress {
    /// Uploaded share of the batch in `0.0..=1.0`, by bytes.
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            return if self.total == 0 { 0.0 } else { self.current as f64 / self.total as f64 };
        }
        self.uploaded_bytes as f64 / self.total_bytes as f64
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_decodes_backend_json() {
        let json = serde_json::json!({
            "id": "cb203efe-c27c-470e-bbc6-588172c3b1ae",
            "eventId": "f27978af-e56a-4b45-aede-fb450557699a",
            "eventSlug": "smith-wedding",
            "filename": "a1.jpg",
            "name": "IMG_0001.jpg",
            "type": "image/jpeg",
            "caption": null,
            "width": 2000,
            "height": 1333,
            "size": 123456,
            "uploadedAt": 1700000000000i64,
            "url": "/static/smith-wedding/a1.jpg",
            "isFavorite": true
        });
        let photo: Photo = serde_json::from_value(json).unwrap();
        assert_eq!(photo.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(photo.width, Some(2000));
        assert!(photo.is_favorite);
        assert!(photo.caption.is_none());
    }

    #[test]
    fn new_event_omits_absent_optionals() {
        let payload = NewEvent {
            title: "Smith Wedding".into(),
            slug: "smith-wedding".into(),
            date: "2024-06-01".into(),
            description: None,
            watermark_text: Some("© Lumina".into()),
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert!(v.get("description").is_none());
        assert_eq!(v["watermarkText"], "© Lumina");
        assert!(v.get("id").is_none());
    }

    #[test]
    fn upload_file_guesses_mime_from_name() {
        let f = UploadFile::new("beach.png", vec![0; 10]);
        assert_eq!(f.mime.as_deref(), Some("image/png"));
        assert_eq!(f.size(), 10);
        let unknown = UploadFile::new("raw", vec![]);
        assert!(unknown.mime.is_none());
    }

    #[test]
    fn progress_fraction_uses_bytes() {
        let p = UploadProgress {
            current: 1,
            total: 2,
            file: FileInfo { name: "a".into(), size: 30 },
            uploaded_bytes: 30,
            total_bytes: 120,
        };
        assert!((p.fraction() - 0.25).abs() < f64::EPSILON);
        assert!(!p.is_last());
    }
}
