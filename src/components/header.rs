use leptos::ev;
use leptos::prelude::*;
use log::debug;

use crate::theme::{self, Theme};

/// Scroll offset, in pixels, past which the header sticks.
const STICKY_AFTER: f64 = 50.0;

const NAV_LINKS: &[(&str, &str)] = &[
	("Features", "#features"),
	("Demo", "#demo"),
	("Insights", "#insights"),
	("Testimonials", "#testimonials"),
];

#[component]
pub fn Header() -> impl IntoView {
	let menu_open = RwSignal::new(false);
	let sticky = RwSignal::new(false);
	let theme_sig = RwSignal::new(theme::read_preference());

	theme::apply(theme_sig.get_untracked());

	let scroll = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		sticky.set(y > STICKY_AFTER);
	});
	on_cleanup(move || scroll.remove());

	let toggle_menu = move |ev: ev::MouseEvent| {
		ev.prevent_default();
		menu_open.update(|open| *open = !*open);
		debug!("menu toggled, open = {}", menu_open.get_untracked());
	};

	let toggle_theme = move |_| {
		let next: Theme = theme_sig.get_untracked().toggled();
		theme::save(next);
		theme_sig.set(next);
	};

	view! {
		<header class:sticky=move || sticky.get()>
			<nav class="navbar">
				<a class="logo" href="#">"ChainPulse"</a>
				<ul class="nav-links" class:active=move || menu_open.get()>
					{NAV_LINKS
						.iter()
						.map(|(label, href)| {
							view! {
								<li>
									<a href=*href on:click=move |_| menu_open.set(false)>
										{*label}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
				<button
					id="theme-toggle"
					class="theme-toggle"
					aria-label="Toggle theme"
					on:click=toggle_theme
				>
					{move || if theme_sig.get() == Theme::Dark { "☀" } else { "☾" }}
				</button>
				<button
					class="menu-toggle"
					class:active=move || menu_open.get()
					aria-label="Toggle menu"
					on:click=toggle_menu
				>
					<span></span>
					<span></span>
					<span></span>
				</button>
			</nav>
		</header>
	}
}
