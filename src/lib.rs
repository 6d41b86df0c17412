//! # Introduction
//!
//! strideview draws the memory layout of a fixed data shape in the terminal:
//! one cell per byte of its stride, with three hoverable labels that
//! highlight the `size`, the `stride` or the `alignment` groups.
//! The UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! CLI → LayoutInfo → App → hover / keys → Selection → LayoutCanvas → frame
//! ```
//!
//! 1. [`cli`]: resolves the [`layout::LayoutInfo`] from a built-in
//!    [`layout::Shape`] or explicit numbers.
//! 2. [`layout`]: the three numbers, plus [`layout_of!`] for querying them
//!    from a `#[repr(C)]` type.
//! 3. [`selection`]: the highlighted property, shared between the hover
//!    listeners and the canvas.
//! 4. [`ui`]: labels, canvas, status bar and the event loop.

pub mod cli;
pub mod error;
pub mod layout;
pub mod selection;
pub mod ui;
