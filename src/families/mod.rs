//! Concrete article nodes.
//!
//! - `media`: [`Audio`]
//! - `text`: [`Paragraph`], [`H1`], [`H2`], [`Bold`], [`Italic`], [`Anchor`]

pub mod media;
pub mod text;

pub use media::Audio;
pub use text::{Anchor, Bold, H1, H2, Italic, Paragraph};
