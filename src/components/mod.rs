// ABOUTME: UI components for tour rendering: backdrop, next button, and flow view

pub mod backdrop;
pub mod flow_view;
pub mod next_button;

pub use backdrop::Backdrop;
pub use flow_view::{FadeTransition, FlowView};
pub use next_button::NextButton;
