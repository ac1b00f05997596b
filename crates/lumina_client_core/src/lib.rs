//! Lumina portfolio client core: REST client for the gallery backend, the shared
//! store pages render from, sequential photo uploads, admin gate and text suggestions.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod slug;
pub mod store;
pub mod suggest;

pub use api::{GalleryApi, HttpApi};
pub use auth::AdminGate;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use ids::{EventId, PhotoId};
pub use models::{Event, FileInfo, NewEvent, Photo, UploadFile, UploadProgress};
pub use slug::slugify;
pub use store::{Snapshot, Store, UploadBatch};
pub use suggest::{GeminiSuggester, NoSuggestions, TextSuggester};
