use std::time::Duration;

use leptos::prelude::*;

const TABS: [&str; 4] = ["Overview", "Campaigns", "Analytics", "Audience"];

/// Metric cards: title, value, change.
const METRICS: [(&str, &str, &str); 4] = [
	("Total Reach", "2.4M", "+12%"),
	("Conversion Rate", "3.2%", "+0.8%"),
	("Engagement", "18.5%", "+5.3%"),
	("ROI", "287%", "+32%"),
];

const CAMPAIGNS: [&str; 6] = ["Email", "Social", "Content", "Referral", "Direct", "Organic"];

/// Bar heights are drawn from this range, in percent of the chart.
const BAR_MIN: f64 = 30.0;
const BAR_SPAN: f64 = 60.0;

/// Flip `signal` to true after `ms`.
fn show_after(signal: RwSignal<bool>, ms: u64) {
	set_timeout(move || signal.set(true), Duration::from_millis(ms));
}

/// Mock campaign dashboard shown in the demo section.
#[component]
pub fn DemoDashboard() -> impl IntoView {
	let chart_visible = RwSignal::new(false);
	show_after(chart_visible, 900);

	let cards = METRICS
		.iter()
		.enumerate()
		.map(|(i, (title, value, change))| {
			let visible = RwSignal::new(false);
			show_after(visible, 300 + 150 * i as u64);
			view! {
				<div class="metric-card fade-up" class:visible=move || visible.get()>
					<div class="metric-title">{*title}</div>
					<div class="metric-value">{*value}</div>
					<div class="metric-change">{*change}</div>
				</div>
			}
		})
		.collect_view();

	let bars = CAMPAIGNS
		.iter()
		.enumerate()
		.map(|(i, campaign)| {
			let target = BAR_MIN + js_sys::Math::random() * BAR_SPAN;
			let grown = RwSignal::new(false);
			show_after(grown, 1000 + 100 * i as u64);
			let tone = if i % 2 == 0 { "bar primary" } else { "bar secondary" };
			view! {
				<div class="bar-group">
					<div
						class=tone
						style:height=move || {
							if grown.get() { format!("{target:.1}%") } else { "0".to_string() }
						}
					></div>
					<div class="bar-label">{*campaign}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="demo-content">
			<div class="demo-header">
				<div class="demo-title">"Marketing Dashboard"</div>
				<div class="demo-tabs">
					{TABS
						.iter()
						.enumerate()
						.map(|(i, name)| {
							view! {
								<div class="demo-tab" class:active={i == 0}>
									{*name}
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
			<div class="demo-main">
				{cards}
				<div class="chart-section fade-up" class:visible=move || chart_visible.get()>
					<div class="chart-title">"Campaign Performance"</div>
					<div class="bar-container">{bars}</div>
				</div>
			</div>
		</div>
	}
}
