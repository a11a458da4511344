use crate::color::Rgba;

/// How a pointer position is tested against a point's hit zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitShape {
	/// The axis-aligned square circumscribing the point's circle.
	#[default]
	Square,
	/// The point's circle itself.
	Circle,
}

/// Drawing and hit-testing parameters shared by the editor and the renderer.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct EditorStyle {
	/// Radius of the drawn circle and of the hit zone, in pixels.
	#[builder(default = 15.0)]
	pub point_radius: f32,
	#[builder(default = 5.0)]
	pub line_width: f32,
	#[builder(default = Rgba::WHITE)]
	pub stroke: Rgba,
	#[builder(default = Rgba::WHITE)]
	pub fill: Rgba,
	/// Alpha applied to every segment while a point is being dragged.
	#[builder(default = 0.5)]
	pub drag_opacity: f32,
	#[builder(default)]
	pub hit_shape: HitShape,
}

impl Default for EditorStyle {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl EditorStyle {
	/// The stroke color for segments, its alpha scaled by `drag_opacity` while a drag is in
	/// progress.
	pub fn segment_stroke(&self, dragging: bool) -> Rgba {
		if dragging {
			self.stroke.with_alpha(self.stroke.a * self.drag_opacity)
		} else {
			self.stroke
		}
	}
}
