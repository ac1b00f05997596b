//! Shared test fixtures: an in-memory `GalleryApi` that records calls, and an axum stub backend.

pub mod fake_api;
pub mod stub_server;
