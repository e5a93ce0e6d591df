//! Interactive graph editor canvas with analysis overlays.

mod api;
mod camera;
mod component;
mod config;
mod error;
mod geometry;
mod highlight;
mod interaction;
mod panels;
mod render;
mod state;
mod store;
mod types;

pub use component::GraphEditor;
pub use config::EditorConfig;
