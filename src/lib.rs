//! btech-site: the B-TECH portfolio page as a client-rendered WASM app.
//!
//! This crate provides the page shell, an animated particle backdrop,
//! scroll-driven navigation and SEO updates, and a contact form that hands
//! off to a messaging app with a pre-filled message.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

pub mod components;
pub mod config;

use components::contact::ContactSection;
use components::intro::{LoadingScreen, TypingText};
use components::navigation::{NavBar, scroll_to_section};
use components::particle_field::ParticleFieldCanvas;
use components::reveal::ScrollReveal;
use components::ripple::RippleButton;
use components::seo::{BreadcrumbData, SectionTitles};
use components::tilt::TiltCard;
pub use config::SiteConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("btech-site: logging initialized");
}

/// Loads faster than this are called out in the console.
const FAST_LOAD_MS: f64 = 3000.0;

/// Console lines describing a page load that took `load_ms`.
fn load_time_report(load_ms: f64) -> Vec<String> {
	let mut lines = vec![format!("btech-site: page loaded in {:.0}ms", load_ms)];
	if load_ms < FAST_LOAD_MS {
		lines.push("btech-site: excellent load performance".to_string());
	}
	lines
}

fn log_load_time() {
	if let Some(perf) = web_sys::window().and_then(|w| w.performance()) {
		for line in load_time_report(perf.now()) {
			info!("{}", line);
		}
	}
}

/// Log uncaught script errors, and the load time once the window has loaded.
fn watch_page_health() {
	let _ = window_event_listener_untyped("error", |ev| match ev.dyn_ref::<ErrorEvent>() {
		Some(err) => error!("btech-site: uncaught error: {}", err.message()),
		None => error!("btech-site: uncaught error"),
	});

	// The wasm module may start after "load" has already fired.
	let loaded = web_sys::window()
		.and_then(|w| w.document())
		.is_some_and(|d| d.ready_state() == "complete");
	if loaded {
		log_load_time();
	} else {
		let _ = window_event_listener_untyped("load", |_| log_load_time());
	}
}

const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

struct Project {
	title: &'static str,
	summary: &'static str,
	stack: &'static str,
}

const PROJECTS: [Project; 3] = [
	Project {
		title: "School Management System",
		summary: "Admissions, grading and fee tracking for basic schools.",
		stack: "Web · Database",
	},
	Project {
		title: "AI Study Assistant",
		summary: "Question answering over course notes for students.",
		stack: "AI · Web",
	},
	Project {
		title: "Business Website Kit",
		summary: "Fast landing pages for small businesses in Ghana.",
		stack: "Web · SEO",
	},
];

const SERVICES: [(&str, &str); 3] = [
	("Web Development", "Responsive sites and web apps built to load fast."),
	("AI Solutions", "Chat assistants and automation tailored to your workflow."),
	("Software Consulting", "Architecture reviews and technical planning."),
];

/// Main application component.
/// Loads the site config from the DOM and renders the full page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = SiteConfig::load();
	watch_page_health();

	let header_offset = config.header_offset;
	let on_explore = Callback::new(move |_: ()| {
		scroll_to_section("projects", header_offset);
	});

	let projects = PROJECTS
		.iter()
		.map(|p| {
			view! {
				<article class="project-card glass-card">
					<h3>{p.title}</h3>
					<p>{p.summary}</p>
					<span class="project-stack">{p.stack}</span>
				</article>
			}
		})
		.collect_view();

	let services = SERVICES
		.iter()
		.map(|(title, summary)| {
			view! {
				<article class="service-card glass-card">
					<h3>{*title}</h3>
					<p>{*summary}</p>
				</article>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="B-TECH: web development and AI solutions by Benjamin Sekyere, Ghana."
		/>
		<Style>{RIPPLE_KEYFRAMES}</Style>
		<SectionTitles sections=config.sections.clone() threshold=config.section_threshold />
		<BreadcrumbData site_url=config.site_url.clone() />

		<LoadingScreen
			fade_after_ms=config.intro.loading_fade_after_ms
			remove_after_ms=config.intro.loading_remove_after_ms
		/>
		<ParticleFieldCanvas theme=config.theme.clone() />
		<NavBar
			sections=config.sections.clone()
			header_offset=config.header_offset
			solid_after=config.nav_solid_after
		/>

		<main>
			<section id="home" class="section hero">
				<h1>"Building Tomorrow's Technology Today"</h1>
				<p class="hero-subtitle">
					<TypingText config=config.intro.clone() />
				</p>
				<RippleButton class="glass-btn explore-btn" on_press=on_explore>
					"Explore Projects"
				</RippleButton>
			</section>

			<section id="about" class="section">
				<h2>"About"</h2>
				<TiltCard divisor=config.tilt_divisor min_width=config.tilt_min_width>
					<h3>"Benjamin Sekyere"</h3>
					<p>"Software developer in Ghana building for the web and with AI."</p>
				</TiltCard>
			</section>

			<section id="projects" class="section">
				<h2>"Projects"</h2>
				<div class="project-grid">{projects}</div>
			</section>

			<section id="services" class="section">
				<h2>"Services"</h2>
				<div class="service-grid">{services}</div>
			</section>

			<section id="contact" class="section">
				<h2>"Get in Touch"</h2>
				<ContactSection config=config.contact.clone() />
			</section>
		</main>

		<ScrollReveal />
	}
}
