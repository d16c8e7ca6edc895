// ABOUTME: Tour flow model: screens, configuration, and pagination state

pub mod screen;
pub mod state;

pub use screen::{Screen, TourConfig};
pub use state::{Advance, FlowState};
