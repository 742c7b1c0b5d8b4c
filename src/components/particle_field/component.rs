//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a full-viewport canvas and drives the particle pool
//! from a cancellable animation loop. The loop is stopped when the component
//! is unmounted.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animation::{AnimationLoop, StopHandle};
use super::particles::ParticleField;
use super::render::render_frame;
use super::theme::Theme;

/// Fixed simulation step; frame pacing is left to the browser.
const FRAME_DT: f64 = 1.0 / 60.0;

fn viewport_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn size_canvas(canvas: &HtmlCanvasElement, w: f64, h: f64) {
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
}

/// Full-viewport animated particle backdrop.
#[component]
pub fn ParticleFieldCanvas(theme: Theme) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let stop = StopHandle::new();
	let started = Rc::new(Cell::new(false));

	let stop_loop = stop.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if started.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let Some((w, h)) = viewport_size() else {
			warn!("particle-field: viewport size unavailable");
			return;
		};
		size_canvas(&canvas, w, h);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("particle-field: 2d context unavailable");
			return;
		};

		let rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
		let mut field = ParticleField::new(&theme.particles, w, h, rng);
		info!(
			"particle-field: {} particles on {}x{}",
			field.particles.len(),
			w,
			h
		);

		let theme = theme.clone();
		let frame_loop = AnimationLoop::with_handle(stop_loop.clone(), move || {
			if let Some((nw, nh)) = viewport_size() {
				if nw != field.width() || nh != field.height() {
					size_canvas(&canvas, nw, nh);
					field.resize(nw, nh);
				}
			}
			field.advance(FRAME_DT);
			render_frame(&field, &ctx, &theme);
		});

		match frame_loop {
			Some(frame_loop) => {
				frame_loop.detach();
			}
			None => warn!("particle-field: animation loop not started"),
		}
	});

	on_cleanup(move || stop.stop());

	view! {
		<canvas
			node_ref=canvas_ref
			id="background-canvas"
			class="background-canvas"
			style="position: fixed; inset: 0; z-index: -1; display: block;"
		/>
	}
}
