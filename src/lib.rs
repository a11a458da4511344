pub(crate) mod util;
pub use util::JsError;

pub mod color;
pub mod editor;
pub mod geom;
pub mod render;

mod mount;
pub use mount::*;


/// Id of the canvas element the page is expected to provide.
pub const CANVAS_ID: &str = "canvas";
