pub mod contact;
pub mod intro;
pub mod navigation;
mod observer;
pub mod particle_field;
pub mod reveal;
pub mod ripple;
pub mod seo;
pub mod tilt;
