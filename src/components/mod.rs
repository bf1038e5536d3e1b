pub mod demo_dashboard;
pub mod feature_cards;
pub mod header;
pub mod hero_chart;
pub mod particle_field;
pub mod reveal;
pub mod testimonials;
