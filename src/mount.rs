//! Binding an editor to a live `<canvas>` element.

use crate::editor::{EditorState, EditorStyle, Input};
use crate::geom::SurfaceSize;
use crate::render;
use crate::util::{listen_forever, CoordinateSource, JsError, ResultExt};
use leptos::ev;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

#[derive(Clone, Debug, thiserror::Error)]
pub enum MountError {
	#[error("no global window")]
	NoWindow,

	#[error("window has no document")]
	NoDocument,

	#[error("no element with id {0:?}")]
	MissingElement(String),

	#[error("element {0:?} is not a canvas")]
	NotACanvas(String),

	#[error("canvas has no 2d context")]
	NoContext,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(MountError: std::error::Error, Send, Sync);

/// The current viewport size, in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<SurfaceSize, JsError> {
	fn dimension(value: Result<JsValue, JsValue>) -> Result<u32, JsError> {
		let value = value?;
		match value.as_f64() {
			Some(pixels) => Ok(pixels as u32),
			None => Err(value.into()),
		}
	}
	Ok(SurfaceSize::new(
		dimension(window.inner_width())?,
		dimension(window.inner_height())?,
	))
}

/// A point editor attached to a canvas.
///
/// Owns the current [`EditorState`] snapshot. Every input is turned into a transition, the
/// snapshot is replaced, and the canvas is redrawn if the transition asks for it.
pub struct PointEditor {
	window: Window,
	canvas: HtmlCanvasElement,
	context: CanvasRenderingContext2d,
	style: EditorStyle,
	state: RefCell<EditorState>,
}

impl PointEditor {
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	pub fn style(&self) -> &EditorStyle {
		&self.style
	}

	pub fn state(&self) -> EditorState {
		self.state.borrow().clone()
	}

	pub fn handle(&self, input: Input) {
		let transition = self.state.borrow().apply(&input, &self.style);
		if let Input::Resize(size) = input {
			tracing::info!(%size, "resized");
			// Setting either dimension also wipes the canvas.
			self.canvas.set_width(size.width);
			self.canvas.set_height(size.height);
		}
		let redraw = transition.redraw;
		self.state.replace(transition.state);
		if redraw {
			self.render();
		}
	}

	pub fn render(&self) {
		let mut context = self.context.clone();
		render::render(&mut context, &self.state.borrow(), &self.style);
	}

	fn resize_to_viewport(&self) {
		if let Some(size) = viewport_size(&self.window).ok_or_log() {
			self.handle(Input::Resize(size));
		}
	}

	fn install_listeners(self: &Rc<Self>) -> Result<(), JsError> {
		let canvas: &web_sys::EventTarget = &self.canvas;

		let editor = self.clone();
		listen_forever(canvas, ev::mousedown, move |e| {
			editor.handle(Input::PointerDown(e.get_coordinates()))
		})?;

		let editor = self.clone();
		listen_forever(canvas, ev::mousemove, move |e| {
			editor.handle(Input::PointerMove(e.get_coordinates()))
		})?;

		let editor = self.clone();
		listen_forever(canvas, ev::mouseup, move |_| editor.handle(Input::PointerUp))?;

		let editor = self.clone();
		listen_forever(canvas, ev::click, move |e| {
			editor.handle(Input::Click(e.get_coordinates()))
		})?;

		let editor = self.clone();
		listen_forever(&self.window, ev::resize, move |_| editor.resize_to_viewport())?;

		Ok(())
	}
}

/// Mounts an editor on the canvas with id `element_id`, which must already be in the document.
#[tracing::instrument(skip(style), err)]
pub fn mount(element_id: &str, style: EditorStyle) -> Result<Rc<PointEditor>, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let canvas = document
		.get_element_by_id(element_id)
		.ok_or_else(|| MountError::MissingElement(element_id.to_owned()))?
		.dyn_into::<HtmlCanvasElement>()
		.map_err(|_| MountError::NotACanvas(element_id.to_owned()))?;
	mount_on(canvas, style)
}

/// Mounts an editor on `canvas`: sizes it to the viewport, starts listening and draws once.
pub fn mount_on(canvas: HtmlCanvasElement, style: EditorStyle) -> Result<Rc<PointEditor>, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let context = canvas
		.get_context("2d")
		.map_err(JsError::from)?
		.ok_or(MountError::NoContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| MountError::NoContext)?;
	let size = viewport_size(&window)?;

	let editor = Rc::new(PointEditor {
		window,
		canvas,
		context,
		style,
		state: RefCell::new(EditorState::default()),
	});
	editor.handle(Input::Resize(size));
	editor.install_listeners()?;
	tracing::debug!(%size, "mounted");
	Ok(editor)
}
