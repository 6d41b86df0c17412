//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: the controller. Owns the layout, wires the hover labels to
//!   the canvas and runs the event loop
//! - **[`hover`]**: hoverable labels with tracking regions
//! - **[`canvas`]**: byte-cell geometry and painting
//! - **[`status`]**: bottom status bar
//! - **[`terminal`]**: raw mode and alternate screen setup, restored on drop
//! - **[`theme`]**: centralized color palette
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`LayoutInfo`] and call [`App::run`] to start the event loop.
//!
//! [`LayoutInfo`]: crate::layout::LayoutInfo
//! [`App::run`]: app::App::run

pub mod app;
pub mod canvas;
pub mod hover;
pub mod status;
pub mod terminal;
pub mod theme;

pub use app::App;
