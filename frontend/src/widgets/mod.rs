mod layout;
mod panel;
mod upload_progress;

pub use layout::Layout;
pub use panel::{Page, Panel, Spinner};
pub use upload_progress::UploadProgressCard;
