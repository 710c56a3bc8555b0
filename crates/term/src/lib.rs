//! Terminal view adapter.
//!
//! Renders a [`core::GameSnapshot`] into a character framebuffer and flushes
//! that framebuffer to the terminal. The view never touches the engine; it only
//! reads snapshots.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: snapshot to framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer to terminal, redrawing only changed rows

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
