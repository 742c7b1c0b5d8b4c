//! Animated particle backdrop.
//!
//! Renders a fixed pool of softly glowing particles over a radial vignette on
//! a full-viewport canvas:
//! - Linear drift with in-place reset once a particle leaves the viewport margin
//! - Sinusoidal radius oscillation, bounded by the style's envelope
//! - A cancellable `requestAnimationFrame` loop, stopped on unmount
//!
//! # Example
//!
//! ```ignore
//! use btech_site::components::particle_field::{ParticleFieldCanvas, Theme};
//!
//! view! { <ParticleFieldCanvas theme=Theme::default() /> }
//! ```

mod animation;
mod component;
mod particles;
mod render;
pub mod theme;

pub use animation::{AnimationLoop, StopHandle};
pub use component::ParticleFieldCanvas;
pub use particles::{Particle, ParticleField};
pub use render::render_frame;
pub use theme::{BackgroundStyle, Color, ParticleStyle, Theme};
