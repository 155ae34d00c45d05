//! # TUI Components
//!
//! Input components (`FeelingInput`, `DevotionPicker`) manage local state
//! and emit one high-level event for the controller; they know nothing
//! about the network or `App`. Display components (`TitleBar`, the
//! response view and crisis banner) receive everything as props and are
//! read-only over the current response.
//!
//! ```text
//! components/
//! ├── title_bar.rs        top status bar
//! ├── feeling_input.rs    free text + mood tag chips
//! ├── devotion_picker.rs  theme strip, Generate / Surprise Me
//! ├── response_view.rs    guidance + devotion rendering, copy handling
//! ├── crisis_banner.rs    crisis alert and hotline resources
//! └── verse_block.rs      shared verse rendering
//! ```

pub mod crisis_banner;
pub mod devotion_picker;
pub mod feeling_input;
pub mod response_view;
pub mod title_bar;
pub mod verse_block;

pub use devotion_picker::{DevotionEvent, DevotionPicker};
pub use feeling_input::{FeelingEvent, FeelingInput, compose_feeling_text};
pub use response_view::{CopyKey, ResponseEvent, ResponseViewState};
pub use title_bar::TitleBar;
