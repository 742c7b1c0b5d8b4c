//! Card that tilts toward the pointer.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Rest transform applied when the pointer leaves.
pub const TILT_REST: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg)";

/// Rotation in degrees for a pointer at `(x, y)` inside a `w` by `h` card.
///
/// Returns `(rotate_x, rotate_y)`; the card leans toward the pointer.
pub fn tilt_angles(x: f64, y: f64, w: f64, h: f64, divisor: f64) -> (f64, f64) {
	let rotate_y = (x - w / 2.0) / divisor;
	let rotate_x = (h / 2.0 - y) / divisor;
	(rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
	format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)")
}

fn viewport_width() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

/// Wraps `children` in a card that tilts on hover, on wide viewports only.
#[component]
pub fn TiltCard(divisor: f64, min_width: f64, children: Children) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let transform = RwSignal::new(TILT_REST.to_string());
	let enabled = viewport_width() > min_width;

	let on_mousemove = move |ev: MouseEvent| {
		if !enabled {
			return;
		}
		let Some(card) = card_ref.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		let (rx, ry) = tilt_angles(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
			divisor,
		);
		transform.set(tilt_transform(rx, ry));
	};

	let on_mouseleave = move |_: MouseEvent| transform.set(TILT_REST.to_string());

	view! {
		<div
			node_ref=card_ref
			id="tilt-card"
			class="tilt-card glass-card"
			style:transform=move || transform.get()
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			{children()}
		</div>
	}
}
