//! Ambient particle pool drifting behind the page content.
//!
//! The pool is allocated once and never grows or shrinks. Particles that drift
//! past the viewport edge (plus a margin) are re-seeded in place so the
//! re-entry happens off-screen.

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::SmallRng;

use super::theme::{Color, ParticleStyle};

/// Frame rate the per-frame constants in [`ParticleStyle`] are tuned for.
const REFERENCE_FPS: f64 = 60.0;

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	pub phase: f64, // Drives the radius oscillation
}

/// Fixed-size pool of drifting particles.
pub struct ParticleField<R = SmallRng> {
	pub particles: Vec<Particle>,
	style: ParticleStyle,
	width: f64,
	height: f64,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	pub fn new(style: &ParticleStyle, width: f64, height: f64, mut rng: R) -> Self {
		let particles = (0..style.count)
			.map(|_| Self::spawn(style, width, height, &mut rng))
			.collect();

		Self {
			particles,
			style: style.clone(),
			width,
			height,
			rng,
		}
	}

	fn spawn(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Particle {
		let mut p = Particle {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			radius: 0.0,
			color: style.color,
			phase: 0.0,
		};
		Self::reset(&mut p, style, width, height, rng);
		p
	}

	/// Re-seed position, velocity, color and phase in place. The radius follows
	/// the new phase so it never leaves the oscillation band.
	fn reset(p: &mut Particle, style: &ParticleStyle, width: f64, height: f64, rng: &mut R) {
		p.x = rng.random::<f64>() * width;
		p.y = rng.random::<f64>() * height;
		p.vx = rng.random::<f64>() * 2.0 * style.speed - style.speed;
		p.vy = rng.random::<f64>() * 2.0 * style.speed - style.speed;
		p.color = style
			.color
			.with_alpha(style.opacity_min + rng.random::<f64>() * style.opacity_spread);
		p.phase = rng.random::<f64>() * TAU;
		p.radius = style.radius_base + p.phase.sin() * style.radius_amplitude;
	}

	/// Advance every particle by `dt` seconds.
	pub fn advance(&mut self, dt: f64) {
		let steps = dt * REFERENCE_FPS;
		let (w, h, m) = (self.width, self.height, self.style.reset_margin);

		for p in &mut self.particles {
			p.x += p.vx * steps;
			p.y += p.vy * steps;
			p.phase += self.style.phase_step * steps;
			p.radius = self.style.radius_base + p.phase.sin() * self.style.radius_amplitude;

			if p.x < -m || p.x > w + m || p.y < -m || p.y > h + m {
				Self::reset(p, &self.style, w, h, &mut self.rng);
			}
		}
	}
}

impl<R> ParticleField<R> {
	/// Update the reset bounds. Positions and velocities are left alone.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	/// Whether `p` lies within the viewport expanded by the reset margin.
	pub fn within_margin(&self, p: &Particle) -> bool {
		let m = self.style.reset_margin;
		p.x >= -m && p.x <= self.width + m && p.y >= -m && p.y <= self.height + m
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;

	use super::*;

	const FRAME: f64 = 1.0 / 60.0;

	fn field(count: usize, w: f64, h: f64, seed: u64) -> ParticleField {
		let style = ParticleStyle {
			count,
			..ParticleStyle::default()
		};
		ParticleField::new(&style, w, h, SmallRng::seed_from_u64(seed))
	}

	#[test]
	fn initial_particles_follow_style_ranges() {
		let f = field(200, 800.0, 600.0, 7);
		let style = ParticleStyle::default();
		for p in &f.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((style.radius_min()..=style.radius_max()).contains(&p.radius));
			assert!((p.radius - (2.0 + p.phase.sin() * 1.5)).abs() < 1e-12);
			assert!((0.1..0.4).contains(&p.color.a));
			assert_eq!((p.color.r, p.color.g, p.color.b), (0, 188, 212));
			assert!((0.0..TAU).contains(&p.phase));
			assert!(style.opacity_min <= p.color.a);
		}
	}

	#[test]
	fn one_frame_moves_by_velocity() {
		let mut f = field(1, 800.0, 600.0, 3);
		let before = f.particles[0].clone();
		f.advance(FRAME);
		let after = &f.particles[0];
		assert!((after.x - (before.x + before.vx)).abs() < 1e-9);
		assert!((after.y - (before.y + before.vy)).abs() < 1e-9);
		assert!((after.phase - (before.phase + 0.02)).abs() < 1e-9);
		assert!((after.radius - (2.0 + after.phase.sin() * 1.5)).abs() < 1e-12);
	}

	#[test]
	fn escaped_particle_is_reset_inside_bounds() {
		let mut f = field(3, 400.0, 300.0, 11);
		f.particles[1].x = 400.0 + 51.0;
		f.particles[1].vx = 0.1;
		let untouched_vx = f.particles[0].vx;

		f.advance(FRAME);

		let p = &f.particles[1];
		assert!((0.0..400.0).contains(&p.x));
		assert!((0.0..300.0).contains(&p.y));
		assert!(f.within_margin(p));
		assert_eq!(f.particles[0].vx, untouched_vx);
	}

	#[test]
	fn reset_particle_radius_stays_in_band() {
		for seed in 0..200 {
			let mut f = field(4, 400.0, 300.0, seed);
			let (lo, hi) = (f.style().radius_min(), f.style().radius_max());
			f.particles[2].x = 1000.0;
			f.advance(FRAME);
			let r = f.particles[2].radius;
			assert!(r >= lo && r <= hi, "seed {seed}: radius {r} outside [{lo}, {hi}]");
		}
	}

	#[test]
	fn particle_inside_margin_is_not_reset() {
		let mut f = field(1, 400.0, 300.0, 5);
		f.particles[0].x = -40.0;
		f.particles[0].vx = -0.1;
		let vy = f.particles[0].vy;
		f.advance(FRAME);
		assert!((f.particles[0].x - -40.1).abs() < 1e-9);
		assert_eq!(f.particles[0].vy, vy);
	}

	#[test]
	fn resize_keeps_positions_and_velocities() {
		let mut f = field(20, 800.0, 600.0, 9);
		let before = f.particles.clone();
		f.resize(1920.0, 1080.0);
		assert_eq!(f.width(), 1920.0);
		assert_eq!(f.height(), 1080.0);
		assert_eq!(f.particles.len(), 20);
		for (a, b) in before.iter().zip(&f.particles) {
			assert_eq!((a.x, a.y, a.vx, a.vy), (b.x, b.y, b.vx, b.vy));
		}
	}

	#[test]
	fn shrinking_viewport_resets_stranded_particles() {
		let mut f = field(30, 1000.0, 1000.0, 13);
		f.resize(100.0, 100.0);
		f.advance(FRAME);
		for p in &f.particles {
			assert!(f.within_margin(p));
		}
	}

	#[test]
	fn empty_pool_is_allowed() {
		let mut f = field(0, 800.0, 600.0, 1);
		f.advance(FRAME);
		assert!(f.particles.is_empty());
	}

	proptest! {
		#[test]
		fn pool_size_is_constant(
			count in 1usize..120,
			frames in 0usize..400,
			seed in any::<u64>(),
		) {
			let mut f = field(count, 320.0, 240.0, seed);
			for _ in 0..frames {
				f.advance(FRAME);
			}
			prop_assert_eq!(f.particles.len(), count);
		}

		#[test]
		fn radius_stays_in_envelope(
			frames in 1usize..600,
			seed in any::<u64>(),
		) {
			let mut f = field(16, 640.0, 480.0, seed);
			let (lo, hi) = (f.style().radius_min(), f.style().radius_max());
			for _ in 0..frames {
				f.advance(FRAME);
				for p in &f.particles {
					prop_assert!(p.radius >= lo - 1e-12 && p.radius <= hi + 1e-12);
				}
			}
		}

		#[test]
		fn every_particle_stays_within_margin(
			frames in 1usize..300,
			dt in 0.001f64..0.5,
			seed in any::<u64>(),
		) {
			let mut f = field(25, 200.0, 150.0, seed);
			for _ in 0..frames {
				f.advance(dt);
				for p in &f.particles {
					prop_assert!(f.within_margin(p));
				}
			}
		}

		#[test]
		fn resize_preserves_count_and_velocities(
			w in 1.0f64..4000.0,
			h in 1.0f64..4000.0,
			seed in any::<u64>(),
		) {
			let mut f = field(40, 800.0, 600.0, seed);
			let velocities: Vec<_> = f.particles.iter().map(|p| (p.vx, p.vy)).collect();
			f.resize(w, h);
			prop_assert_eq!(f.particles.len(), 40);
			let after: Vec<_> = f.particles.iter().map(|p| (p.vx, p.vy)).collect();
			prop_assert_eq!(velocities, after);
		}
	}
}
