use super::hit_test::find_hit;
use super::style::EditorStyle;
use crate::geom::SurfaceSize;
use glam::Vec2;

/// An input event, already reduced to what the editor needs from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
	PointerDown(Vec2),
	PointerMove(Vec2),
	PointerUp,
	Click(Vec2),
	Resize(SurfaceSize),
}

/// A snapshot of the editor.
///
/// Points are kept in placement order, which is also the order in which they are connected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
	points: Vec<Vec2>,
	dragged: Option<usize>,
	size: SurfaceSize,
}

/// The result of applying an [`Input`] to an [`EditorState`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
	pub state: EditorState,
	/// Whether the scene has to be drawn again.
	pub redraw: bool,
}

impl Transition {
	fn redraw(state: EditorState) -> Self {
		Self {
			state,
			redraw: true,
		}
	}

	fn quiet(state: EditorState) -> Self {
		Self {
			state,
			redraw: false,
		}
	}
}

impl EditorState {
	pub fn new(size: SurfaceSize) -> Self {
		Self {
			size,
			..Default::default()
		}
	}

	pub fn points(&self) -> &[Vec2] {
		&self.points
	}

	pub fn dragged(&self) -> Option<usize> {
		self.dragged
	}

	pub fn is_dragging(&self) -> bool {
		self.dragged.is_some()
	}

	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// Computes the next snapshot. Never fails: out-of-surface positions are taken as given.
	pub fn apply(&self, input: &Input, style: &EditorStyle) -> Transition {
		let hit = |position| find_hit(&self.points, style.hit_shape, style.point_radius, position);
		match *input {
			Input::Resize(size) => Transition::redraw(Self {
				size,
				..self.clone()
			}),
			Input::PointerDown(position) => match hit(position) {
				Some(index) => {
					tracing::debug!(index, "drag start");
					Transition::quiet(Self {
						dragged: Some(index),
						..self.clone()
					})
				}
				None => Transition::quiet(self.clone()),
			},
			Input::PointerMove(position) => match self.dragged {
				Some(index) => {
					let mut next = self.clone();
					next.points[index] = position;
					tracing::trace!(index, %position, "drag");
					Transition::redraw(next)
				}
				None => Transition::quiet(self.clone()),
			},
			Input::PointerUp => match self.dragged {
				Some(index) => {
					tracing::debug!(index, "drag end");
					Transition::redraw(Self {
						dragged: None,
						..self.clone()
					})
				}
				None => Transition::quiet(self.clone()),
			},
			Input::Click(position) => {
				// A click landing on a point is the tail of a press on it, not a new point.
				if hit(position).is_some() {
					return Transition::quiet(self.clone());
				}
				let mut next = self.clone();
				next.points.push(position);
				tracing::debug!(index = next.points.len() - 1, %position, "point placed");
				Transition::redraw(next)
			}
		}
	}
}
