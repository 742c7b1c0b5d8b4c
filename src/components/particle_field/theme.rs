//! Visual styling for the particle backdrop.
//!
//! Colors, the vignette wash, and the particle envelope all live here so the
//! simulation and renderer read one source of truth.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits the functional `rgba()` form; particle fills are never opaque.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Radial vignette painted behind the particles every frame.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
	/// Color at the viewport center (low alpha)
	pub center: Color,
	/// Color at the gradient rim (higher alpha)
	pub edge: Color,
	/// Gradient radius as a fraction of the larger viewport dimension
	pub radius_factor: f64,
}

impl Default for BackgroundStyle {
	fn default() -> Self {
		Self {
			center: Color::rgba(10, 15, 26, 0.1),
			edge: Color::rgba(10, 15, 26, 0.8),
			radius_factor: 0.5,
		}
	}
}

/// Particle pool configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles in the pool
	pub count: usize,
	/// Distance beyond the viewport edge before a particle is reset
	pub reset_margin: f64,
	/// Half-width of the uniform velocity range, per 60 Hz frame
	pub speed: f64,
	/// Particle hue; alpha is randomized per particle
	pub color: Color,
	/// Minimum per-particle opacity
	pub opacity_min: f64,
	/// Width of the per-particle opacity range above `opacity_min`
	pub opacity_spread: f64,
	/// Center of the radius oscillation
	pub radius_base: f64,
	/// Amplitude of the radius oscillation
	pub radius_amplitude: f64,
	/// Phase advance per 60 Hz frame
	pub phase_step: f64,
	/// Glow blur radius
	pub glow_blur: f64,
}

impl ParticleStyle {
	/// Smallest radius the oscillation can reach.
	pub fn radius_min(&self) -> f64 {
		self.radius_base - self.radius_amplitude.abs()
	}

	/// Largest radius the oscillation can reach.
	pub fn radius_max(&self) -> f64 {
		self.radius_base + self.radius_amplitude.abs()
	}
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 50,
			reset_margin: 50.0,
			speed: 0.25,
			color: Color::rgb(0, 188, 212),
			opacity_min: 0.1,
			opacity_spread: 0.3,
			radius_base: 2.0,
			radius_amplitude: 1.5,
			phase_step: 0.02,
			glow_blur: 15.0,
		}
	}
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub particles: ParticleStyle,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_radius_band_matches_envelope() {
		let style = ParticleStyle::default();
		assert_eq!(style.radius_min(), 0.5);
		assert_eq!(style.radius_max(), 3.5);
	}

	#[test]
	fn css_always_carries_alpha() {
		assert_eq!(
			Color::rgb(0, 188, 212).with_alpha(0.25).to_css(),
			"rgba(0, 188, 212, 0.25)"
		);
	}

	#[test]
	fn partial_theme_json_keeps_defaults() {
		let theme: Theme =
			serde_json::from_str(r#"{ "particles": { "count": 12 } }"#).unwrap();
		assert_eq!(theme.particles.count, 12);
		assert_eq!(theme.particles.reset_margin, 50.0);
		assert_eq!(theme.background.edge, Color::rgba(10, 15, 26, 0.8));
	}

	#[test]
	fn color_alpha_defaults_to_opaque() {
		let c: Color = serde_json::from_str(r#"{ "r": 1, "g": 2, "b": 3 }"#).unwrap();
		assert_eq!(c, Color::rgb(1, 2, 3));
	}
}
