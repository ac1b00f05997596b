//! Public gallery logic: highlights split and the lightbox cursor.

use lumina_client_core::{Photo, PhotoId};

/// Lightbox position in the event's full photo list (not the split grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
}

impl Lightbox {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Ignored when `index` is outside `0..len`.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn has_next(&self, len: usize) -> bool {
        matches!(self.index, Some(i) if i + 1 < len)
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some(i.saturating_sub(1));
        }
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.index = self.index.map(|i| i + 1);
        }
    }

    /// Keeps the cursor valid after the list shrinks; closes on an empty list.
    pub fn clamp_to(&mut self, len: usize) {
        self.index = match self.index {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}

/// Favorites first ("client favorites"), then the rest. When there are no favorites,
/// everything is in the second list.
pub fn split_highlights<'a>(photos: &[&'a Photo]) -> (Vec<&'a Photo>, Vec<&'a Photo>) {
    photos.iter().copied().partition(|p| p.is_favorite)
}

/// Position of a photo in the unsplit list, for opening the lightbox from either grid.
pub fn position_of(photos: &[&Photo], id: &PhotoId) -> Option<usize> {
    photos.iter().position(|p| &p.id == id)
}

/// "SMITH WEDDING" from "smith-wedding".
pub fn venue_label(slug: &str) -> String {
    slug.replace('-', " ").to_uppercase()
}

pub fn zip_file_name(slug: &str) -> String {
    format!("{slug}-album.zip")
}

pub fn photo_file_name(slug: &str, index: usize) -> String {
    format!("photo-{slug}-{index}.jpg")
}
