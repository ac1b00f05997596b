mod admin;
mod create_event;
mod dashboard;
mod event_manager;
mod event_view;
mod home;
mod login;
mod not_found;

pub use admin::AdminScreen;
pub use create_event::CreateEventForm;
pub use dashboard::DashboardScreen;
pub use event_manager::EventManagerScreen;
pub use event_view::EventViewScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use not_found::NotFoundScreen;
