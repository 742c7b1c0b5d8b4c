//! Canvas rendering for the particle backdrop.
//!
//! Each frame is drawn in two passes:
//! 1. Clear, then the radial vignette wash centered on the viewport
//! 2. Particles in pool order, each with a glow in its own fill color

use std::f64::consts::PI;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::Theme;

/// Renders the complete backdrop to the canvas.
pub fn render_frame<R: Rng>(
	field: &ParticleField<R>,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let (w, h) = (field.width(), field.height());
	ctx.clear_rect(0.0, 0.0, w, h);

	draw_vignette(ctx, theme, w, h);
	draw_particles(ctx, field);
}

fn draw_vignette(ctx: &CanvasRenderingContext2d, theme: &Theme, w: f64, h: f64) {
	let bg = &theme.background;
	let Ok(gradient) = ctx.create_radial_gradient(
		w / 2.0,
		h / 2.0,
		0.0,
		w / 2.0,
		h / 2.0,
		w.max(h) * bg.radius_factor,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, &bg.center.to_css());
	let _ = gradient.add_color_stop(1.0, &bg.edge.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_particles<R: Rng>(ctx: &CanvasRenderingContext2d, field: &ParticleField<R>) {
	ctx.set_shadow_blur(field.style().glow_blur);

	for p in &field.particles {
		let color = p.color.to_css();
		ctx.set_shadow_color(&color);
		ctx.set_fill_style_str(&color);

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius.max(0.0), 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_shadow_blur(0.0);
}
