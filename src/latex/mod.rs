//! LaTeX math rendering.
//!
//! Pure text generation: expression trees in, LaTeX math-mode strings out.
//! The submodules layer from leaves up - character masking, numeric literal
//! formatting, symbol tables and identifier classification, and finally the
//! recursive expression renderer.

pub mod escape;
pub mod number;
pub mod render;
pub mod symbols;

pub use escape::mask_special_chars;
pub use number::format_number;
pub use render::render_math;
pub use symbols::render_identifier;
