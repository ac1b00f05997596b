//! Create-event form state.

use lumina_client_core::{slugify, NewEvent};

#[derive(Clone, Debug, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub slug: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub watermark_text: String,
}

impl EventForm {
    pub fn new(today: &str) -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            date: today.to_string(),
            description: String::new(),
            watermark_text: String::new(),
        }
    }

    /// Today in the local timezone.
    pub fn today() -> Self {
        Self::new(&chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    /// Every title edit re-derives the slug, overwriting manual slug edits.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.slug = slugify(title);
    }

    pub fn can_suggest(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Applies a suggested description; an empty suggestion leaves the field as is.
    pub fn apply_suggestion(&mut self, description: String) {
        if !description.is_empty() {
            self.description = description;
        }
    }

    /// Title, slug and date are required; empty optionals are omitted from the payload.
    pub fn to_new_event(&self) -> Result<NewEvent, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Event title is required".to_string());
        }
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err("URL slug is required".to_string());
        }
        if chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err("Date must be YYYY-MM-DD".to_string());
        }
        let optional = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        Ok(NewEvent {
            title: title.to_string(),
            slug: slug.to_string(),
            date: self.date.clone(),
            description: optional(&self.description),
            watermark_text: optional(&self.watermark_text),
        })
    }
}
