//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API. Menus and the match
//! itself run in `game_core`; this crate maps browser input onto them and
//! draws paddles, ball and centre line. Text is left to the host page.
//!
//! Note: the renderer and bindings only build for the wasm32 target

pub mod camera;
pub mod input;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod mesh;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::PongApp;
