//! Buttons and links with a click ripple.

use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use web_sys::DomRect;

/// Diameter of a ripple in pixels.
const RIPPLE_SIZE: f64 = 100.0;
/// Ripple lifetime, matching the CSS animation.
const RIPPLE_MS: u32 = 600;
/// Inline style that lets ripples be clipped to their host.
const HOST_STYLE: &str = "position: relative; overflow: hidden;";

#[derive(Clone, Debug, PartialEq)]
struct Ripple {
	id: u32,
	x: f64,
	y: f64,
}

/// Inline style for a ripple centered on `(x, y)` within its host.
pub fn ripple_style(x: f64, y: f64) -> String {
	let half = RIPPLE_SIZE / 2.0;
	format!(
		"position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.5); \
		 transform: scale(0); animation: ripple 0.6s linear; \
		 left: {x}px; top: {y}px; width: {RIPPLE_SIZE}px; height: {RIPPLE_SIZE}px; \
		 margin-left: -{half}px; margin-top: -{half}px;"
	)
}

/// Click point relative to the host's top-left corner.
pub fn ripple_origin(client_x: f64, client_y: f64, host_left: f64, host_top: f64) -> (f64, f64) {
	(client_x - host_left, client_y - host_top)
}

/// Live ripples for one host element.
#[derive(Clone, Copy)]
struct Ripples {
	active: RwSignal<Vec<Ripple>>,
	next_id: StoredValue<u32>,
}

impl Ripples {
	fn new() -> Self {
		Self {
			active: RwSignal::new(Vec::new()),
			next_id: StoredValue::new(0),
		}
	}

	/// Spawn a ripple at the click point inside `rect`; it removes itself later.
	fn spawn(self, ev: &MouseEvent, rect: &DomRect) {
		let id = self.next_id.get_value();
		self.next_id.set_value(id.wrapping_add(1));
		let (x, y) = ripple_origin(
			ev.client_x() as f64,
			ev.client_y() as f64,
			rect.left(),
			rect.top(),
		);
		self.active.update(|r| r.push(Ripple { id, x, y }));

		let active = self.active;
		Timeout::new(RIPPLE_MS, move || {
			let _ = active.try_update(|r| r.retain(|ripple| ripple.id != id));
		})
		.forget();
	}

	fn view(self) -> impl IntoView {
		let active = self.active;
		view! {
			<For
				each=move || active.get()
				key=|r| r.id
				children=move |r: Ripple| view! { <span class="ripple" style=ripple_style(r.x, r.y)></span> }
			/>
		}
	}
}

/// Button that spawns a short-lived ripple at each click.
///
/// `kind` is the button's `type` attribute, `"button"` unless given.
#[component]
pub fn RippleButton(
	#[prop(into)] class: String,
	#[prop(optional, into)] kind: Option<String>,
	#[prop(optional)] on_press: Option<Callback<()>>,
	children: Children,
) -> impl IntoView {
	let button_ref = NodeRef::<leptos::html::Button>::new();
	let ripples = Ripples::new();

	let on_click = move |ev: MouseEvent| {
		if let Some(button) = button_ref.get() {
			ripples.spawn(&ev, &button.get_bounding_client_rect());
		}
		if let Some(cb) = on_press {
			cb.run(());
		}
	};

	view! {
		<button
			node_ref=button_ref
			type=kind.unwrap_or_else(|| "button".to_string())
			class=class
			style=HOST_STYLE
			on:click=on_click
		>
			{children()}
			{ripples.view()}
		</button>
	}
}

/// Link opening in a new tab, with the same click ripple as [`RippleButton`].
#[component]
pub fn RippleLink(
	#[prop(into)] href: String,
	#[prop(into)] class: String,
	#[prop(optional, into)] id: Option<String>,
	children: Children,
) -> impl IntoView {
	let link_ref = NodeRef::<leptos::html::A>::new();
	let ripples = Ripples::new();

	let on_click = move |ev: MouseEvent| {
		if let Some(link) = link_ref.get() {
			ripples.spawn(&ev, &link.get_bounding_client_rect());
		}
	};

	view! {
		<a
			node_ref=link_ref
			id=id
			href=href
			class=class
			target="_blank"
			rel="noopener"
			style=HOST_STYLE
			on:click=on_click
		>
			{children()}
			{ripples.view()}
		</a>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ripple_is_centered_on_click() {
		let style = ripple_style(30.0, 12.5);
		assert!(style.contains("left: 30px; top: 12.5px;"));
		assert!(style.contains("width: 100px; height: 100px;"));
		assert!(style.contains("margin-left: -50px; margin-top: -50px;"));
	}

	#[test]
	fn origin_is_relative_to_host() {
		// A submit button or link scrolled well down the page.
		assert_eq!(ripple_origin(340.0, 1210.0, 300.0, 1180.0), (40.0, 30.0));
		assert_eq!(ripple_origin(300.0, 1180.0, 300.0, 1180.0), (0.0, 0.0));
	}
}
