// ABOUTME: Library crate for termtour exposing the tour flow, components, and runner

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod feedback;
pub mod flow;
pub mod theme;

pub use app::Tour;
pub use error::FlowError;
pub use flow::{Screen, TourConfig};
pub use theme::Theme;
