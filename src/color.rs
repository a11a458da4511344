use std::fmt;

/// An 8-bit sRGB color with a floating point alpha, as accepted by canvas fill and stroke styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f32,
}

impl Rgba {
	pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

	pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f32) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}
