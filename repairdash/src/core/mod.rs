pub mod config;
pub mod state;

pub mod prelude {
    pub use super::{config::Config, state::AppState};
}
