//! Terminal frontend.
//!
//! The core never touches the terminal; it paints through the `Renderer`
//! trait into `TermHost`, and each frame `StageView` projects that shadow
//! state into a framebuffer which `TermScreen` diffs onto the screen.

pub mod fb;
pub mod host;
pub mod screen;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use host::{LoopTimer, StageCell, TermHost};
pub use screen::TermScreen;
pub use view::{StageView, Viewport};
