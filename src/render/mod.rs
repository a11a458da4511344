//! Immediate-mode drawing of an [`EditorState`].

mod canvas;

use crate::color::Rgba;
use crate::editor::{EditorState, EditorStyle};
use glam::Vec2;
use std::f32::consts::TAU;

/// The subset of an immediate-mode 2D drawing API the editor draws with.
///
/// Mirrors `CanvasRenderingContext2d`, so the implementation for a live canvas is a direct
/// forward. Every call is infallible from the caller's point of view.
pub trait Surface2d {
	fn clear_rect(&mut self, origin: Vec2, size: Vec2);
	fn begin_path(&mut self);
	fn close_path(&mut self);
	fn set_stroke_style(&mut self, color: Rgba);
	fn set_line_width(&mut self, width: f32);
	fn move_to(&mut self, point: Vec2);
	fn line_to(&mut self, point: Vec2);
	fn stroke(&mut self);
	fn set_fill_style(&mut self, color: Rgba);
	fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);
	fn fill(&mut self);
}

/// Redraws the whole scene from scratch.
///
/// Each point gets the segment from its predecessor (itself, for the first point), then its
/// circle on top of that segment.
pub fn render(surface: &mut impl Surface2d, state: &EditorState, style: &EditorStyle) {
	let size = state.size();
	surface.clear_rect(Vec2::ZERO, Vec2::new(size.width as f32, size.height as f32));

	let stroke = style.segment_stroke(state.is_dragging());
	let points = state.points();
	let predecessors = points.first().into_iter().chain(points);
	for (&from, &to) in predecessors.zip(points) {
		surface.begin_path();
		surface.set_stroke_style(stroke);
		surface.set_line_width(style.line_width);
		surface.move_to(from);
		surface.line_to(to);
		surface.stroke();
		surface.close_path();

		surface.begin_path();
		surface.set_fill_style(style.fill);
		surface.arc(to, style.point_radius, 0.0, TAU);
		surface.fill();
		surface.close_path();
	}
	tracing::trace!(points = points.len(), %size, "rendered");
}
