mod app_state;
mod events;

pub use app_state::AppState;
pub use events::EventsService;
