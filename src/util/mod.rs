use leptos::ev::EventDescriptor;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

#[derive(thiserror::Error, Debug, Clone)]
#[error("javascript error: {0}")]
pub struct JsError(String);

static_assertions::assert_impl_all!(JsError: std::error::Error, Send, Sync);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Adds a typed listener for `event` to `target` for the rest of the page's lifetime.
pub fn listen_forever<E>(
	target: &web_sys::EventTarget,
	event: E,
	mut handler: impl FnMut(E::EventType) + 'static,
) -> Result<(), JsError>
where
	E: EventDescriptor,
	E::EventType: JsCast,
{
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
		handler(e.unchecked_into())
	});
	target.add_event_listener_with_callback(&event.name(), closure.as_ref().unchecked_ref())?;
	// Never removed, so the closure must outlive this frame.
	closure.forget();
	Ok(())
}

pub trait CoordinateSource {
	/// Position relative to the padding edge of the target, in CSS pixels.
	fn get_coordinates(&self) -> glam::Vec2;
}

impl CoordinateSource for web_sys::MouseEvent {
	fn get_coordinates(&self) -> glam::Vec2 {
		glam::Vec2::new(self.offset_x() as f32, self.offset_y() as f32)
	}
}
