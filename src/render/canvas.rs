use super::Surface2d;
use crate::color::Rgba;
use crate::util::{JsError, ResultExt};
use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

impl Surface2d for CanvasRenderingContext2d {
	fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
		CanvasRenderingContext2d::clear_rect(
			self,
			origin.x.into(),
			origin.y.into(),
			size.x.into(),
			size.y.into(),
		);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn set_stroke_style(&mut self, color: Rgba) {
		self.set_stroke_style_str(&color.to_css());
	}

	fn set_line_width(&mut self, width: f32) {
		CanvasRenderingContext2d::set_line_width(self, width.into());
	}

	fn move_to(&mut self, point: Vec2) {
		CanvasRenderingContext2d::move_to(self, point.x.into(), point.y.into());
	}

	fn line_to(&mut self, point: Vec2) {
		CanvasRenderingContext2d::line_to(self, point.x.into(), point.y.into());
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn set_fill_style(&mut self, color: Rgba) {
		self.set_fill_style_str(&color.to_css());
	}

	fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
		// Only throws for a negative radius.
		CanvasRenderingContext2d::arc(
			self,
			center.x.into(),
			center.y.into(),
			radius.into(),
			start_angle.into(),
			end_angle.into(),
		)
		.map_err(JsError::from)
		.ok_or_log();
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}
}
