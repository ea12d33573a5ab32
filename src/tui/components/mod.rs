//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `Header`: title and tagline
//! - `SubmitButton`: "Analyze Mood" / "Analyzing..." control
//! - `ResultPanel`: emotion, response and action cards
//! - `HistoryPanel`: the recent history table
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: text field owning its buffer and cursor, emits `InputEvent`s
//!
//! Components receive external data as props rather than reading `Session`
//! directly, so each one can be rendered in a test with a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs
//! ├── input_box/        (text field + wrap helpers)
//! ├── submit_button.rs
//! ├── result_panel.rs
//! └── history.rs
//! ```

pub mod header;
pub mod history;
pub mod input_box;
pub mod result_panel;
pub mod submit_button;

pub use header::Header;
pub use history::HistoryPanel;
pub use input_box::{InputBox, InputEvent};
pub use result_panel::ResultPanel;
pub use submit_button::{ButtonState, SubmitButton};
