//! Lumina frontend library: routing, gallery state helpers, screens.

pub mod app;
pub mod browser;
pub mod config;
pub mod format;
pub mod forms;
pub mod gallery;
pub mod route;
pub mod screens;
pub mod selection;
pub mod theme;
pub mod uploads;
pub mod widgets;
