use glam::Vec2;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, derive_more::Display)]
#[display("{width}x{height}")]
pub struct SurfaceSize {
	pub width: u32,
	pub height: u32,
}

impl SurfaceSize {
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	/// The square of half-width `half_extent` centered on `center`.
	pub fn around(center: Vec2, half_extent: f32) -> Self {
		let half = Vec2::splat(half_extent);
		Self::new(center - half, center + half)
	}

	/// Closed on every edge.
	pub fn contains(&self, point: Vec2) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
	}
}
