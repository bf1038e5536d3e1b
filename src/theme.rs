//! Light/dark theme preference.
//!
//! The choice lives in `localStorage` under [`STORAGE_KEY`] and is applied as a
//! `light-theme` / `dark-theme` class on `<body>`. Storage is best-effort: a
//! missing or blocked store falls back to the light theme.

use log::{info, warn};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Default theme.
	#[default]
	Light,
	/// Dark theme.
	Dark,
}

impl Theme {
	/// Interpret a stored value; anything other than `"dark"` is light.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("dark") => Self::Dark,
			_ => Self::Light,
		}
	}

	/// Value written to storage.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Class applied to `<body>`.
	pub fn body_class(self) -> &'static str {
		match self {
			Self::Light => "light-theme",
			Self::Dark => "dark-theme",
		}
	}

	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}

fn storage() -> Option<web_sys::Storage> {
	web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the saved preference.
pub fn read_preference() -> Theme {
	let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	Theme::from_stored(stored.as_deref())
}

/// Swap the body class so only `theme`'s class is present.
pub fn apply(theme: Theme) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		warn!("no <body>; theme {} not applied", theme.as_str());
		return;
	};
	let classes = body.class_list();
	let _ = classes.remove_1(theme.toggled().body_class());
	let _ = classes.add_1(theme.body_class());
}

/// Apply and persist `theme`.
pub fn save(theme: Theme) {
	apply(theme);
	if let Some(storage) = storage() {
		let _ = storage.set_item(STORAGE_KEY, theme.as_str());
	}
	info!("theme set to {}", theme.as_str());
}
