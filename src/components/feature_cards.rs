use std::time::Duration;

use leptos::prelude::*;

/// Delay between consecutive cards fading in.
const STAGGER_MS: u64 = 300;

const FEATURES: [(&str, &str); 4] = [
	(
		"On-chain Audiences",
		"Segment holders, traders and builders straight from wallet activity.",
	),
	(
		"Campaign Attribution",
		"Tie every mint, swap and signup back to the channel that drove it.",
	),
	(
		"Market Signals",
		"Time launches around live price, volume and sentiment shifts.",
	),
	(
		"Community Growth",
		"Track Discord, X and Telegram momentum alongside on-chain retention.",
	),
];

/// Grid of feature cards that fade in one after another.
#[component]
pub fn FeatureCards() -> impl IntoView {
	view! {
		<div class="features-grid">
			{FEATURES
				.iter()
				.enumerate()
				.map(|(i, (title, body))| {
					let visible = RwSignal::new(false);
					set_timeout(
						move || visible.set(true),
						Duration::from_millis(STAGGER_MS * i as u64),
					);
					view! {
						<div class="feature-card fade-up" class:visible=move || visible.get()>
							<h3>{*title}</h3>
							<p>{*body}</p>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
