//! Doxa Render
//!
//! HTML rendering of a verified argument map. Consumes exactly the engine's
//! output contract -- the post-inference statement map, the relation list
//! and the propagation target map -- and produces a single self-contained
//! page: bottom-line implied credences up top, then the arguments grouped
//! by section with credence-colored badges.

mod html;

pub use html::render;
