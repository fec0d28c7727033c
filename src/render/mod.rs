//! Rendering: ray casting, projection and the surfaces frames are drawn on.
//!
//! Re-exports:
//! - `surface`: Drawing surface trait, colors and a recording surface
//! - `framebuffer`: CPU framebuffer implementing the surface
//! - `line`: Bresenham integer line drawing
//! - `casters`: Ray marching, fisheye correction and column heights
//! - `minimap`: Top-down map, player marker and rays
//! - `render3d`: Wall strips and whole-frame composition

pub mod casters;
pub mod framebuffer;
pub mod line;
pub mod minimap;
pub mod render3d;
pub mod surface;
