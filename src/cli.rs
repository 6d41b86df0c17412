//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::layout::{LayoutError, LayoutInfo, Shape};

#[derive(Debug, Parser)]
#[command(name = "strideview")]
#[command(about = "Visualize the size, stride and alignment of a memory layout")]
pub struct Cli {
    /// Built-in shape to visualize
    #[arg(long, value_enum, default_value_t = Shape::Foo)]
    pub shape: Shape,

    /// Bytes used by the fields (requires --stride and --alignment)
    #[arg(long, requires_all = ["stride", "alignment"])]
    pub size: Option<usize>,

    /// Bytes between consecutive instances
    #[arg(long, requires_all = ["size", "alignment"])]
    pub stride: Option<usize>,

    /// Boundary each instance starts on
    #[arg(long, requires_all = ["size", "stride"])]
    pub alignment: Option<usize>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// The layout to draw and the canvas title.
    ///
    /// Explicit numbers take precedence over `--shape`.
    pub fn layout(&self) -> Result<(LayoutInfo, String), LayoutError> {
        match (self.size, self.stride, self.alignment) {
            (Some(size), Some(stride), Some(alignment)) => Ok((
                LayoutInfo::new(size, stride, alignment)?,
                format!("size {size}, stride {stride}, alignment {alignment}"),
            )),
            _ => Ok((self.shape.layout(), self.shape.declaration().to_string())),
        }
    }
}
