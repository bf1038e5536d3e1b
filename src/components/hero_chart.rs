use std::fmt::Write as _;
use std::time::Duration;

use leptos::prelude::*;

#[cfg(test)]
#[path = "hero_chart_test.rs"]
mod hero_chart_test;

/// Horizontal extent of the chart in SVG units.
pub const CHART_WIDTH: f64 = 600.0;

const CHART_POINTS: usize = 20;
const CHART_MAX_HEIGHT: f64 = 100.0;

/// Ticker rows: symbol, price, 24h change.
const TICKERS: &[(&str, &str, &str)] = &[
	("BTC", "$42,384.21", "+2.4%"),
	("ETH", "$2,271.09", "+1.8%"),
	("SOL", "$103.57", "+5.2%"),
];

const CONTROL_COLORS: [&str; 3] = ["#00f090", "#00c2ff", "#7928ca"];

/// A chart vertex. `y` grows downward, so rising values are negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
	pub x: f64,
	pub y: f64,
}

/// Spread `n` points evenly over [`CHART_WIDTH`], with heights following a
/// slow sine swell scaled by `rng` (uniform in `[0, 1)`).
pub fn generate_chart_points(
	n: usize,
	max_height: f64,
	rng: &mut impl FnMut() -> f64,
) -> Vec<ChartPoint> {
	let step = if n > 1 { CHART_WIDTH / (n - 1) as f64 } else { 0.0 };
	(0..n)
		.map(|i| {
			let swell = 0.5 + (i as f64 / 3.0).sin() * 0.5;
			ChartPoint {
				x: i as f64 * step,
				y: -rng() * max_height * swell,
			}
		})
		.collect()
}

/// SVG `d` attribute tracing the points as a polyline.
pub fn line_path(points: &[ChartPoint]) -> String {
	let Some((first, rest)) = points.split_first() else {
		return String::new();
	};
	let mut d = format!("M {} {}", first.x, first.y);
	for p in rest {
		let _ = write!(d, " L {} {}", p.x, p.y);
	}
	d
}

/// The polyline closed down to the baseline, for the gradient fill.
pub fn area_path(points: &[ChartPoint]) -> String {
	let (Some(first), Some(last)) = (points.first(), points.last()) else {
		return String::new();
	};
	let mut d = line_path(points);
	let _ = write!(d, " L {} 0 L {} 0 Z", last.x, first.x);
	d
}

/// Hero dashboard: a drawn-in price chart with a fading ticker overlay.
#[component]
pub fn HeroChart() -> impl IntoView {
	let points = generate_chart_points(CHART_POINTS, CHART_MAX_HEIGHT, &mut js_sys::Math::random);
	let (line, area) = (line_path(&points), area_path(&points));

	let header_visible = RwSignal::new(false);
	let prices_visible = RwSignal::new(false);
	set_timeout(move || header_visible.set(true), Duration::from_millis(1500));
	set_timeout(move || prices_visible.set(true), Duration::from_millis(2000));

	view! {
		<div class="dashboard-animation">
			<svg class="hero-chart" width="100%" height="100%">
				<defs>
					<linearGradient id="chart-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
						<stop offset="0%" stop-color="#00c2ff" stop-opacity="0.8" />
						<stop offset="100%" stop-color="#00c2ff" stop-opacity="0.1" />
					</linearGradient>
				</defs>
				<g transform="translate(0, 200)">
					<path class="chart-area" d=area fill="url(#chart-gradient)" />
					<path
						class="chart-line"
						d=line
						pathLength="1"
						fill="none"
						stroke="#00c2ff"
						stroke-width="3"
						stroke-linecap="round"
						stroke-linejoin="round"
					/>
				</g>
			</svg>
			<div class="dashboard-header fade" class:visible=move || header_visible.get()>
				<div class="dashboard-title">"Crypto Analytics"</div>
				<div class="dashboard-controls">
					{CONTROL_COLORS
						.iter()
						.map(|color| {
							view! {
								<div
									class="dashboard-control"
									style:background-color=*color
								></div>
							}
						})
						.collect_view()}
				</div>
			</div>
			<div class="price-container fade" class:visible=move || prices_visible.get()>
				{TICKERS
					.iter()
					.map(|(name, price, change)| {
						view! {
							<div class="price-item">
								<div class="crypto-name">{*name}</div>
								<div class="crypto-price">{*price}</div>
								<div class="crypto-change">{*change}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
