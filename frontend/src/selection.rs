//! Photo selection in the event manager.

use lumina_client_core::{Photo, PhotoId};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoSelection {
    ids: BTreeSet<PhotoId>,
}

impl PhotoSelection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &PhotoId) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &PhotoId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    pub fn remove(&mut self, id: &PhotoId) {
        self.ids.remove(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn all_selected(&self, photos: &[&Photo]) -> bool {
        !photos.is_empty() && self.ids.len() == photos.len()
    }

    /// Clears when everything is selected, otherwise selects every photo.
    pub fn toggle_all(&mut self, photos: &[&Photo]) {
        if self.all_selected(photos) {
            self.ids.clear();
        } else {
            self.ids = photos.iter().map(|p| p.id.clone()).collect();
        }
    }

    /// Drops ids of photos that are gone after a refresh.
    pub fn retain_present(&mut self, photos: &[&Photo]) {
        let present: BTreeSet<&PhotoId> = photos.iter().map(|p| &p.id).collect();
        self.ids.retain(|id| present.contains(id));
    }

    pub fn ids(&self) -> Vec<PhotoId> {
        self.ids.iter().cloned().collect()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

pub fn selection_label(n: usize) -> String {
    if n == 0 {
        "No photos selected".to_string()
    } else {
        format!("{n} photo{} selected", plural(n))
    }
}

pub fn delete_selected_prompt(n: usize) -> String {
    format!("Delete {n} selected photo{}? This cannot be undone.", plural(n))
}

pub fn delete_all_prompt(n: usize) -> String {
    format!("Delete all {n} photo{} in this event? This cannot be undone.", plural(n))
}
