#![allow(clippy::float_cmp)]

use super::*;
use crate::components::particle_field::types::PALETTE;

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
	Clear(f64, f64),
	Circle { x: f64, y: f64, radius: f64, color: String },
	Link { from: (f64, f64), to: (f64, f64), opacity: f64 },
}

#[derive(Default)]
struct Recorder {
	calls: Vec<Call>,
}

impl Recorder {
	fn links(&self) -> Vec<(&(f64, f64), &(f64, f64), f64)> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				Call::Link { from, to, opacity } => Some((from, to, *opacity)),
				_ => None,
			})
			.collect()
	}

	fn circles(&self) -> usize {
		self.calls.iter().filter(|c| matches!(c, Call::Circle { .. })).count()
	}
}

impl Surface for Recorder {
	fn clear(&mut self, width: f64, height: f64) {
		self.calls.push(Call::Clear(width, height));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.calls.push(Call::Circle {
			x,
			y,
			radius,
			color: color.to_string(),
		});
	}

	fn stroke_link(&mut self, from: (f64, f64), to: (f64, f64), opacity: f64) {
		self.calls.push(Call::Link { from, to, opacity });
	}
}

/// Deterministic uniform source in [0, 1).
fn lcg(seed: u64) -> impl FnMut() -> f64 {
	let mut state = seed;
	move || {
		state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
		(state >> 11) as f64 / (1u64 << 53) as f64
	}
}

fn still(x: f64, y: f64) -> Node {
	moving(x, y, 0.0, 0.0)
}

fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Node {
	Node {
		x,
		y,
		radius: 3.0,
		vx,
		vy,
		color: "#fff".into(),
	}
}

fn field_of(nodes: Vec<Node>) -> ParticleField {
	ParticleField::from_nodes(FieldConfig::default(), 800.0, 600.0, nodes).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_seeds_configured_count_within_bounds() {
	let config = FieldConfig::default();
	let field = ParticleField::new(config.clone(), 640.0, 480.0, &mut lcg(7)).unwrap();

	assert_eq!(field.nodes().len(), 30);
	for node in field.nodes() {
		assert!((0.0..=640.0).contains(&node.x));
		assert!((0.0..=480.0).contains(&node.y));
		assert!(node.radius >= config.radius_min && node.radius < config.radius_max);
		assert!(node.vx.abs() <= config.max_speed);
		assert!(node.vy.abs() <= config.max_speed);
	}
}

#[test]
fn new_assigns_palette_round_robin() {
	let field = ParticleField::new(FieldConfig::default(), 100.0, 100.0, &mut lcg(1)).unwrap();
	for (i, node) in field.nodes().iter().enumerate() {
		assert_eq!(node.color, PALETTE[i % 3]);
	}
}

#[test]
fn new_rejects_zero_sized_surface() {
	let err = ParticleField::new(FieldConfig::default(), 0.0, 300.0, &mut lcg(1))
		.err()
		.unwrap();
	assert_eq!(
		err,
		FieldError::EmptySurface {
			width: 0.0,
			height: 300.0
		}
	);
}

#[test]
fn new_rejects_invalid_config() {
	let config = FieldConfig {
		node_count: 0,
		..FieldConfig::default()
	};
	let err = ParticleField::new(config, 100.0, 100.0, &mut lcg(1)).err().unwrap();
	assert!(matches!(err, FieldError::InvalidConfig(_)));
}

#[test]
fn from_nodes_rejects_empty_set() {
	let err = ParticleField::from_nodes(FieldConfig::default(), 100.0, 100.0, vec![])
		.err()
		.unwrap();
	assert!(matches!(err, FieldError::InvalidConfig(_)));
}

#[test]
fn from_nodes_tracks_node_count() {
	let field = field_of(vec![still(1.0, 1.0), still(2.0, 2.0)]);
	assert_eq!(field.config().node_count, 2);
}

// =============================================================
// Motion and bounce
// =============================================================

#[test]
fn step_advances_by_velocity() {
	let mut field = field_of(vec![moving(10.0, 20.0, 0.2, -0.1)]);
	field.step(&mut Recorder::default());
	let node = &field.nodes()[0];
	assert!((node.x - 10.2).abs() < 1e-12);
	assert!((node.y - 19.9).abs() < 1e-12);
	assert_eq!((node.vx, node.vy), (0.2, -0.1));
}

#[test]
fn overshooting_right_edge_flips_vx() {
	let mut field = field_of(vec![moving(800.01, 300.0, 0.2, 0.0)]);
	field.step(&mut Recorder::default());
	assert!(field.nodes()[0].vx < 0.0);
}

#[test]
fn overshooting_bottom_edge_flips_vy() {
	let mut field = field_of(vec![moving(400.0, 600.01, 0.0, 0.1)]);
	field.step(&mut Recorder::default());
	assert!(field.nodes()[0].vy < 0.0);
}

#[test]
fn top_edge_flips_vy_back_down() {
	let mut field = field_of(vec![moving(400.0, 0.05, 0.0, -0.1)]);
	field.step(&mut Recorder::default());
	assert!(field.nodes()[0].vy > 0.0);
}

#[test]
fn bounce_checks_post_advance_position_without_clamping() {
	let mut field = field_of(vec![moving(-1.0, 300.0, -0.3, 0.0)]);
	field.step(&mut Recorder::default());
	let node = &field.nodes()[0];
	assert!((node.x - -1.3).abs() < 1e-12);
	assert_eq!(node.vx, 0.3);
}

#[test]
fn positions_stay_within_one_frame_of_bounds() {
	let config = FieldConfig::default();
	let (w, h) = (320.0, 200.0);
	let mut field = ParticleField::new(config.clone(), w, h, &mut lcg(42)).unwrap();
	let mut surface = Recorder::default();
	let slack = config.max_speed + 1e-9;

	for _ in 0..5_000 {
		field.step(&mut surface);
		surface.calls.clear();
		for node in field.nodes() {
			assert!(node.x >= -slack && node.x <= w + slack, "x drifted: {}", node.x);
			assert!(node.y >= -slack && node.y <= h + slack, "y drifted: {}", node.y);
		}
	}
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn step_clears_then_draws_every_node() {
	let mut field = field_of(vec![still(1.0, 1.0), still(500.0, 1.0), still(1.0, 500.0)]);
	let mut surface = Recorder::default();
	field.step(&mut surface);

	assert_eq!(surface.calls[0], Call::Clear(800.0, 600.0));
	assert_eq!(surface.circles(), 3);
	assert_eq!(
		surface.calls[1],
		Call::Circle {
			x: 1.0,
			y: 1.0,
			radius: 3.0,
			color: "#fff".into()
		}
	);
}

#[test]
fn close_pair_draws_one_faded_link() {
	let mut field = field_of(vec![still(0.0, 0.0), still(10.0, 0.0)]);
	let mut surface = Recorder::default();
	field.step(&mut surface);

	let links = surface.links();
	assert_eq!(links.len(), 1);
	let expected = 0.1 * (1.0 - 10.0 / 150.0);
	assert!((links[0].2 - expected).abs() < 1e-12);
	assert!((links[0].2 - 0.0933).abs() < 1e-4);
}

#[test]
fn distant_pair_draws_nothing() {
	let mut field = field_of(vec![still(0.0, 0.0), still(200.0, 0.0)]);
	let mut surface = Recorder::default();
	field.step(&mut surface);
	assert!(surface.links().is_empty());
}

#[test]
fn pair_exactly_at_threshold_is_not_linked() {
	let field = field_of(vec![still(0.0, 0.0), still(150.0, 0.0)]);
	assert!(field.links().is_empty());
	assert_eq!(field.link_opacity(150.0), None);
}

#[test]
fn opacity_falls_with_distance() {
	let field = field_of(vec![still(0.0, 0.0)]);
	let samples: Vec<f64> = [0.0, 30.0, 75.0, 120.0, 149.9]
		.iter()
		.map(|d| field.link_opacity(*d).unwrap())
		.collect();

	assert!((samples[0] - 0.1).abs() < 1e-12);
	for pair in samples.windows(2) {
		assert!(pair[0] > pair[1]);
	}
	assert!(*samples.last().unwrap() >= 0.0);
	assert!(*samples.last().unwrap() < 0.001);
}

#[test]
fn every_pair_considered_once_without_self_links() {
	// Four coincident nodes: every pair is in range.
	let mut field = field_of(vec![still(5.0, 5.0); 4]);
	let mut surface = Recorder::default();
	field.step(&mut surface);
	assert_eq!(surface.links().len(), 6);

	let links = field.links();
	assert_eq!(links.len(), 6);
	for link in &links {
		assert!(link.a < link.b);
	}
	let mut pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
	pairs.dedup();
	assert_eq!(pairs.len(), 6);
}

#[test]
fn links_use_unmoved_positions_of_later_nodes() {
	let mut field = field_of(vec![moving(0.0, 0.0, 0.2, 0.0), moving(10.0, 0.0, 0.2, 0.0)]);
	let mut surface = Recorder::default();
	field.step(&mut surface);

	let links = surface.links();
	assert_eq!(links.len(), 1);
	assert_eq!(*links[0].0, (0.2, 0.0));
	assert_eq!(*links[0].1, (10.0, 0.0));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_only_touches_dimensions() {
	let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, &mut lcg(3)).unwrap();
	let before = field.nodes().to_vec();

	field.resize(200.0, 100.0);

	assert_eq!(field.size(), (200.0, 100.0));
	assert_eq!(field.nodes(), before.as_slice());
}

#[test]
fn next_step_bounces_against_new_bounds() {
	let mut field = field_of(vec![moving(700.0, 300.0, 0.2, 0.0)]);
	field.resize(400.0, 600.0);
	field.step(&mut Recorder::default());
	assert!(field.nodes()[0].vx < 0.0);
}

#[test]
fn shrink_strands_far_node_in_place() {
	// Far outside the new width, every step reverses the previous one.
	let mut field = field_of(vec![moving(700.0, 300.0, 0.2, 0.0)]);
	field.resize(400.0, 600.0);
	let mut surface = Recorder::default();

	for _ in 0..10_000 {
		field.step(&mut surface);
		surface.calls.clear();
	}

	let node = &field.nodes()[0];
	assert!((node.x - 700.0).abs() < 0.5, "node moved to {}", node.x);
	assert!(node.x > 400.0);
	assert_eq!(node.vx.abs(), 0.2);
}
