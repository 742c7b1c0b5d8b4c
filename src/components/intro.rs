//! Loading screen and the hero's typewriter line.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::IntroConfig;

/// The first `n` characters of `text`, never splitting a character.
pub fn typed_prefix(text: &str, n: usize) -> &str {
	match text.char_indices().nth(n) {
		Some((idx, _)) => &text[..idx],
		None => text,
	}
}

/// Loading overlay phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
	Visible,
	Fading,
	Gone,
}

/// Full-screen loader that fades out and then leaves the DOM.
#[component]
pub fn LoadingScreen(fade_after_ms: u32, remove_after_ms: u32) -> impl IntoView {
	let phase = RwSignal::new(LoadingPhase::Visible);

	Timeout::new(fade_after_ms, move || {
		if phase.try_set(LoadingPhase::Fading).is_some() {
			return;
		}
		Timeout::new(remove_after_ms, move || {
			let _ = phase.try_set(LoadingPhase::Gone);
		})
		.forget();
	})
	.forget();

	view! {
		<Show when=move || phase.get() != LoadingPhase::Gone>
			<div
				id="loading-screen"
				class="loading-screen"
				style=move || {
					if phase.get() == LoadingPhase::Fading { "opacity: 0;" } else { "opacity: 1;" }
				}
			>
				<div class="loader"></div>
			</div>
		</Show>
	}
}

fn type_next(typed: RwSignal<usize>, total: usize, step_ms: u32) {
	let Some(n) = typed.try_get_untracked() else {
		return;
	};
	if n >= total {
		return;
	}
	typed.set(n + 1);
	Timeout::new(step_ms, move || type_next(typed, total, step_ms)).forget();
}

/// Types `config.typing_text` one character per step.
#[component]
pub fn TypingText(config: IntroConfig) -> impl IntoView {
	let typed = RwSignal::new(0usize);
	let total = config.typing_text.chars().count();
	let text = config.typing_text;
	let step_ms = config.typing_step_ms;

	Timeout::new(config.typing_start_ms, move || type_next(typed, total, step_ms)).forget();

	view! { <span class="typing-text">{move || typed_prefix(&text, typed.get()).to_string()}</span> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefix_grows_by_character() {
		let text = "Built by B-TECH";
		assert_eq!(typed_prefix(text, 0), "");
		assert_eq!(typed_prefix(text, 5), "Built");
		assert_eq!(typed_prefix(text, 15), text);
		assert_eq!(typed_prefix(text, 99), text);
	}

	#[test]
	fn prefix_respects_multibyte_chars() {
		assert_eq!(typed_prefix("héllo 👋", 2), "hé");
		assert_eq!(typed_prefix("héllo 👋", 7), "héllo 👋");
	}
}
