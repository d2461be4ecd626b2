pub mod directive;

pub use directive::{render_directive, DIRECTIVE_TEMPLATE};
