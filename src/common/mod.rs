mod state;

pub use state::{AppState, Phase};
