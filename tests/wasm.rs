#![cfg(target_arch = "wasm32")]

use glam::Vec2;
use pointline::editor::{EditorStyle, Input};
use pointline::geom::SurfaceSize;
use pointline::MountError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn add_element(tag: &str, id: &str) -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let element = document.create_element(tag).unwrap();
	element.set_id(id);
	document.body().unwrap().append_child(&element).unwrap();
	element
}

fn viewport() -> SurfaceSize {
	pointline::viewport_size(&web_sys::window().unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn missing_element_is_reported() {
	let result = pointline::mount("no-such-canvas", EditorStyle::default());
	assert!(matches!(result, Err(MountError::MissingElement(id)) if id == "no-such-canvas"));
}

#[wasm_bindgen_test]
fn non_canvas_is_reported() {
	add_element("div", "not-a-canvas");
	let result = pointline::mount("not-a-canvas", EditorStyle::default());
	assert!(matches!(result, Err(MountError::NotACanvas(_))));
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_to_viewport() {
	add_element("canvas", "mount-sizes");
	let editor = pointline::mount("mount-sizes", EditorStyle::default()).unwrap();
	let size = viewport();
	assert_eq!(editor.canvas().width(), size.width);
	assert_eq!(editor.canvas().height(), size.height);
	assert_eq!(editor.state().size(), size);
	assert!(editor.state().points().is_empty());
}

#[wasm_bindgen_test]
fn inputs_update_state_and_resize_keeps_points() {
	let canvas = add_element("canvas", "inputs")
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();
	let editor = pointline::mount_on(canvas, EditorStyle::default()).unwrap();

	editor.handle(Input::Click(Vec2::new(100.0, 100.0)));
	editor.handle(Input::Click(Vec2::new(105.0, 105.0)));
	editor.handle(Input::Click(Vec2::new(300.0, 300.0)));
	assert_eq!(
		editor.state().points(),
		&[Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)]
	);

	editor.handle(Input::PointerDown(Vec2::new(298.0, 290.0)));
	assert_eq!(editor.state().dragged(), Some(1));
	editor.handle(Input::PointerMove(Vec2::new(320.0, 200.0)));
	editor.handle(Input::PointerUp);
	assert_eq!(editor.state().dragged(), None);

	editor.handle(Input::Resize(SurfaceSize::new(400, 300)));
	assert_eq!(editor.canvas().width(), 400);
	assert_eq!(editor.canvas().height(), 300);
	assert_eq!(
		editor.state().points(),
		&[Vec2::new(100.0, 100.0), Vec2::new(320.0, 200.0)]
	);
}

fn mount_fresh(id: &str) -> std::rc::Rc<pointline::PointEditor> {
	let canvas = add_element("canvas", id)
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();
	pointline::mount_on(canvas, EditorStyle::default()).unwrap()
}

/// Dispatches a mouse event of type `kind` at `at`, given relative to the canvas.
fn dispatch_mouse(canvas: &web_sys::HtmlCanvasElement, kind: &str, at: Vec2) {
	let rect = canvas.get_bounding_client_rect();
	let init = web_sys::MouseEventInit::new();
	init.set_bubbles(true);
	init.set_client_x((rect.left() + f64::from(at.x)).round() as i32);
	init.set_client_y((rect.top() + f64::from(at.y)).round() as i32);
	let event = web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
	canvas.dispatch_event(&event).unwrap();
}

fn assert_near(actual: Vec2, expected: Vec2) {
	assert!(
		(actual - expected).abs().max_element() <= 1.0,
		"{actual} is not near {expected}"
	);
}

#[wasm_bindgen_test]
fn click_listener_places_points() {
	let editor = mount_fresh("dom-click");
	let canvas = editor.canvas().clone();

	dispatch_mouse(&canvas, "mousedown", Vec2::new(100.0, 100.0));
	dispatch_mouse(&canvas, "mouseup", Vec2::new(100.0, 100.0));
	assert!(editor.state().points().is_empty());

	dispatch_mouse(&canvas, "click", Vec2::new(100.0, 100.0));
	assert_eq!(editor.state().points().len(), 1);
	assert_near(editor.state().points()[0], Vec2::new(100.0, 100.0));

	dispatch_mouse(&canvas, "click", Vec2::new(105.0, 105.0));
	assert_eq!(editor.state().points().len(), 1);

	dispatch_mouse(&canvas, "click", Vec2::new(300.0, 300.0));
	assert_eq!(editor.state().points().len(), 2);
	assert_near(editor.state().points()[1], Vec2::new(300.0, 300.0));
}

#[wasm_bindgen_test]
fn drag_listeners_move_a_point() {
	let editor = mount_fresh("dom-drag");
	let canvas = editor.canvas().clone();
	dispatch_mouse(&canvas, "click", Vec2::new(100.0, 100.0));
	dispatch_mouse(&canvas, "click", Vec2::new(300.0, 100.0));

	dispatch_mouse(&canvas, "mousedown", Vec2::new(102.0, 98.0));
	assert_eq!(editor.state().dragged(), Some(0));

	dispatch_mouse(&canvas, "mousemove", Vec2::new(200.0, 150.0));
	assert_near(editor.state().points()[0], Vec2::new(200.0, 150.0));
	assert_near(editor.state().points()[1], Vec2::new(300.0, 100.0));

	dispatch_mouse(&canvas, "mouseup", Vec2::new(200.0, 150.0));
	assert_eq!(editor.state().dragged(), None);

	dispatch_mouse(&canvas, "mousemove", Vec2::new(20.0, 20.0));
	assert_near(editor.state().points()[0], Vec2::new(200.0, 150.0));
}

#[wasm_bindgen_test]
fn resize_listener_requeries_viewport() {
	let editor = mount_fresh("dom-resize");
	let canvas = editor.canvas().clone();
	dispatch_mouse(&canvas, "click", Vec2::new(40.0, 40.0));
	let points = editor.state().points().to_vec();

	editor.handle(Input::Resize(SurfaceSize::new(10, 10)));
	assert_eq!(canvas.width(), 10);

	let window = web_sys::window().unwrap();
	let event = web_sys::Event::new("resize").unwrap();
	window.dispatch_event(&event).unwrap();

	let size = viewport();
	assert_eq!(editor.state().size(), size);
	assert_eq!(canvas.width(), size.width);
	assert_eq!(canvas.height(), size.height);
	assert_eq!(editor.state().points(), points.as_slice());
}
