use leptos::prelude::*;

use crate::components::demo_dashboard::DemoDashboard;
use crate::components::feature_cards::FeatureCards;
use crate::components::header::Header;
use crate::components::hero_chart::HeroChart;
use crate::components::particle_field::BlockchainBackground;
use crate::components::reveal::Reveal;
use crate::components::testimonials::TestimonialSlider;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "home_test.rs"]
mod home_test;

const INSIGHTS: [(&str, &str); 3] = [
	("72%", "of Web3 launches under-invest in audience research"),
	("3.4x", "higher retention for campaigns targeted by wallet cohort"),
	("48h", "average time saved per campaign report"),
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Header />

			<section class="hero">
				<div class="hero-content">
					<h1>"Marketing intelligence for the on-chain economy"</h1>
					<p class="subtitle">
						"Turn wallet activity and market signals into campaigns that convert."
					</p>
					<a class="btn btn-primary" href="#demo">"See it in action"</a>
				</div>
				<HeroChart />
			</section>

			<section id="features" class="features">
				<Reveal class="section-header">
					<h2>"Everything your growth team needs"</h2>
				</Reveal>
				<Reveal class="features-grid-wrap">
					<FeatureCards />
				</Reveal>
			</section>

			<section id="demo" class="demo">
				<Reveal class="section-header">
					<h2>"One dashboard, every channel"</h2>
				</Reveal>
				<Reveal class="demo-visual">
					<DemoDashboard />
				</Reveal>
			</section>

			<section id="insights" class="insights">
				<Reveal class="insights-grid">
					{INSIGHTS
						.iter()
						.map(|(figure, caption)| {
							view! {
								<div class="insight-card">
									<div class="insight-figure">{*figure}</div>
									<p>{*caption}</p>
								</div>
							}
						})
						.collect_view()}
				</Reveal>
			</section>

			<section id="testimonials" class="testimonials">
				<Reveal class="section-header">
					<h2>"Trusted by Web3 marketers"</h2>
				</Reveal>
				<Reveal class="testimonials-slider-wrap">
					<TestimonialSlider />
				</Reveal>
			</section>

			<section class="cta">
				<BlockchainBackground />
				<Reveal class="cta-content">
					<h2>"Ready to grow on-chain?"</h2>
					<a class="btn btn-primary" href="#">"Start free trial"</a>
				</Reveal>
			</section>
		</ErrorBoundary>
	}
}
