//! Colors for the seat plot canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0..=1.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with opacity `a`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Visual style of the seat plot.
#[derive(Clone, Debug)]
pub struct SeatTheme {
	/// Canvas fill.
	pub background: Color,
	/// Link stroke.
	pub link: Color,
	/// Fill for seats with neither a color nor a party.
	pub unaffiliated: Color,
	/// Hover label text.
	pub label: Color,
	/// Ring drawn around the hovered seat.
	pub hover_ring: Color,
}

impl Default for SeatTheme {
	fn default() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			link: Color::rgba(153, 153, 153, 0.6),
			unaffiliated: Color::rgb(117, 117, 117),
			label: Color::rgb(34, 34, 34),
			hover_ring: Color::rgba(0, 0, 0, 0.7),
		}
	}
}
