pub use hit_test::*;

mod state;
pub use state::*;

mod style;
pub use style::*;
