//! Grid raycaster: a top-down minimap beside a pseudo-3D wall view.
//!
//! The engine ([`core`], [`render`], [`session`]) is window-agnostic and draws
//! through the [`render::surface::Surface`] trait. The raylib front end lives
//! in `window`, behind the `window` feature.

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod session;
#[cfg(feature = "window")]
pub mod window;

pub use config::Config;
pub use crate::core::maze::Maze;
pub use error::{RaycastError, Result};
pub use session::{FrameStats, Platform, Session};
