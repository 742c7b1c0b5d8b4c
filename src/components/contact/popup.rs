//! Message popup shown after a contact submission.
//!
//! The popup is driven entirely by [`PopupState`]; the component only maps the
//! current state to markup.

use leptos::prelude::*;

/// What the popup is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
	#[default]
	Hidden,
	ShowingSuccess,
	ShowingErrors(Vec<String>),
}

/// Presentation derived from a visible [`PopupState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupView {
	pub icon: Option<&'static str>,
	pub title: &'static str,
	pub lines: Vec<String>,
	pub is_error: bool,
}

impl PopupState {
	pub fn is_visible(&self) -> bool {
		!matches!(self, PopupState::Hidden)
	}

	pub fn view_model(&self) -> Option<PopupView> {
		match self {
			PopupState::Hidden => None,
			PopupState::ShowingSuccess => Some(PopupView {
				icon: Some("📱"),
				title: "Opening WhatsApp!",
				lines: vec![
					"Your message has been prepared and WhatsApp is opening.".to_string(),
					"Please click send to complete your message.".to_string(),
				],
				is_error: false,
			}),
			PopupState::ShowingErrors(errors) => Some(PopupView {
				icon: None,
				title: "Please Fix Errors",
				lines: errors.clone(),
				is_error: true,
			}),
		}
	}
}

/// Single popup overlay bound to `state`. The OK button hides it.
#[component]
pub fn MessagePopup(state: RwSignal<PopupState>) -> impl IntoView {
	let class = move || {
		if state.with(PopupState::is_visible) {
			"message-popup active"
		} else {
			"message-popup"
		}
	};

	let content = move || {
		state.with(PopupState::view_model).map(|popup| {
			let class = if popup.is_error {
				"popup-body popup-error"
			} else {
				"popup-body"
			};
			let body = if popup.is_error {
				view! {
					<ul class="popup-errors">
						{popup.lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
					</ul>
				}
				.into_any()
			} else {
				view! {
					<p class="popup-text">
						{popup.lines.into_iter().map(|line| view! { <span>{line}</span><br /> }).collect_view()}
					</p>
				}
				.into_any()
			};

			view! {
				<div class=class>
					{popup.icon.map(|icon| view! { <div class="popup-icon">{icon}</div> })}
					<h3>{popup.title}</h3>
					{body}
					<button
						id="popup-close"
						class="popup-btn"
						on:click=move |_| state.set(PopupState::Hidden)
					>
						"OK"
					</button>
				</div>
			}
		})
	};

	view! {
		<div id="message-popup" class=class>
			<div class="popup-content">{content}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_has_no_view() {
		assert!(!PopupState::Hidden.is_visible());
		assert_eq!(PopupState::Hidden.view_model(), None);
	}

	#[test]
	fn errors_are_listed_verbatim() {
		let state = PopupState::ShowingErrors(vec![
			"Name is required".into(),
			"Message is required".into(),
		]);
		let view = state.view_model().unwrap();
		assert!(view.is_error);
		assert_eq!(view.title, "Please Fix Errors");
		assert_eq!(view.lines, ["Name is required", "Message is required"]);
	}

	#[test]
	fn success_is_not_an_error() {
		let view = PopupState::ShowingSuccess.view_model().unwrap();
		assert!(!view.is_error);
		assert_eq!(view.title, "Opening WhatsApp!");
		assert_eq!(view.icon, Some("📱"));
	}
}
