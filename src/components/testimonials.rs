use std::time::Duration;

use leptos::prelude::*;
use log::warn;

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

/// Auto-advance period for the slider.
const ROTATE_EVERY: Duration = Duration::from_millis(5000);

/// Index of the visible slide in a fixed-size ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
	len: usize,
	current: usize,
}

impl Carousel {
	/// A carousel over `len` slides showing the first one, or `None` when
	/// there is nothing to show.
	pub fn new(len: usize) -> Option<Self> {
		(len > 0).then_some(Self { len, current: 0 })
	}

	pub fn current(self) -> usize {
		self.current
	}

	/// Advance, wrapping from the last slide to the first.
	pub fn next(self) -> Self {
		Self {
			current: (self.current + 1) % self.len,
			..self
		}
	}

	/// Step back, wrapping from the first slide to the last.
	pub fn prev(self) -> Self {
		Self {
			current: (self.current + self.len - 1) % self.len,
			..self
		}
	}

	/// Jump to `index`; out-of-range indices leave the carousel unchanged.
	pub fn select(self, index: usize) -> Self {
		if index < self.len {
			Self {
				current: index,
				..self
			}
		} else {
			self
		}
	}
}

/// One customer quote.
#[derive(Clone, Debug)]
pub struct Testimonial {
	pub quote: &'static str,
	pub author: &'static str,
	pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
	Testimonial {
		quote: "ChainPulse turned our token launch data into a campaign plan in an afternoon.",
		author: "Maya Chen",
		role: "Growth Lead, Nebula DEX",
	},
	Testimonial {
		quote: "The on-chain audience insights alone paid for the subscription in the first month.",
		author: "Daniel Okafor",
		role: "CMO, Ledgerline",
	},
	Testimonial {
		quote: "Finally a marketing dashboard that speaks wallets, not just cookies.",
		author: "Sofia Alvarez",
		role: "Founder, Mintwave",
	},
];

#[component]
pub fn TestimonialSlider(#[prop(default = TESTIMONIALS)] slides: &'static [Testimonial]) -> impl IntoView {
	let Some(start) = Carousel::new(slides.len()) else {
		warn!("testimonial slider has no slides");
		return ().into_any();
	};
	let carousel = RwSignal::new(start);

	match set_interval_with_handle(move || carousel.update(|c| *c = c.next()), ROTATE_EVERY) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("testimonial auto-rotate disabled: {err:?}"),
	}

	view! {
		<div class="testimonials-slider">
			{slides
				.iter()
				.enumerate()
				.map(|(i, t)| {
					view! {
						<div
							class="testimonial-slide"
							style:display=move || {
								if carousel.get().current() == i { "block" } else { "none" }
							}
						>
							<p class="testimonial-quote">{t.quote}</p>
							<div class="testimonial-author">
								<strong>{t.author}</strong>
								<span>{t.role}</span>
							</div>
						</div>
					}
				})
				.collect_view()}
			<div class="testimonial-controls">
				<button
					class="prev-testimonial"
					aria-label="Previous testimonial"
					on:click=move |_| carousel.update(|c| *c = c.prev())
				>
					"‹"
				</button>
				<div class="dots">
					{(0..slides.len())
						.map(|i| {
							view! {
								<span
									class="dot"
									class:active=move || carousel.get().current() == i
									on:click=move |_| carousel.update(|c| *c = c.select(i))
								></span>
							}
						})
						.collect_view()}
				</div>
				<button
					class="next-testimonial"
					aria-label="Next testimonial"
					on:click=move |_| carousel.update(|c| *c = c.next())
				>
					"›"
				</button>
			</div>
		</div>
	}
	.into_any()
}
