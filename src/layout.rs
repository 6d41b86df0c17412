//! Memory layout description of a fixed data shape
//!
//! A [`LayoutInfo`] is the three numbers the canvas draws:
//!
//! - `size`: bytes actually occupied by the fields, without trailing padding
//! - `stride`: distance between consecutive instances in an array
//! - `alignment`: boundary every instance must start on
//!
//! Rust's `size_of` already includes trailing padding, so it is the stride.
//! The unpadded size is the end of the last stored field, which
//! [`layout_of!`](crate::layout_of) computes with `offset_of!`.

use clap::ValueEnum;
use std::fmt;
use std::mem::{align_of, size_of};

/// Largest stride the canvas draws; one cell is laid out per byte
pub const MAX_STRIDE: usize = 1024;

/// Reasons a `(size, stride, alignment)` triple is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    ZeroSize,
    StrideSmallerThanSize { size: usize, stride: usize },
    StrideTooLarge { stride: usize, max: usize },
    ZeroAlignment,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "size must be greater than zero"),
            Self::StrideSmallerThanSize { size, stride } => {
                write!(f, "stride {stride} is smaller than size {size}")
            }
            Self::StrideTooLarge { stride, max } => {
                write!(f, "stride {stride} exceeds the maximum of {max}")
            }
            Self::ZeroAlignment => write!(f, "alignment must be greater than zero"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Size, stride and alignment of one data shape.
///
/// Alignment is expected to divide the stride, but this is not enforced; the
/// canvas drops a trailing partial alignment group instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    size: usize,
    stride: usize,
    alignment: usize,
}

impl LayoutInfo {
    pub fn new(size: usize, stride: usize, alignment: usize) -> Result<Self, LayoutError> {
        if size == 0 {
            return Err(LayoutError::ZeroSize);
        }
        if stride < size {
            return Err(LayoutError::StrideSmallerThanSize { size, stride });
        }
        if stride > MAX_STRIDE {
            return Err(LayoutError::StrideTooLarge {
                stride,
                max: MAX_STRIDE,
            });
        }
        if alignment == 0 {
            return Err(LayoutError::ZeroAlignment);
        }
        Ok(LayoutInfo {
            size,
            stride,
            alignment,
        })
    }

    /// Layout of `T`, where `data_end` is the offset one past its last
    /// stored byte.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or `data_end` lies outside `T`.
    pub fn of<T>(data_end: usize) -> Self {
        match Self::new(data_end, size_of::<T>(), align_of::<T>()) {
            Ok(info) => info,
            Err(e) => panic!("invalid layout for {}: {e}", std::any::type_name::<T>()),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Number of complete alignment groups in one stride
    pub fn alignment_groups(&self) -> usize {
        self.stride / self.alignment
    }

    /// Bytes of trailing padding
    pub fn padding(&self) -> usize {
        self.stride - self.size
    }
}

/// Query the [`LayoutInfo`] of a `#[repr(C)]` struct, naming its last field.
///
/// ```
/// use strideview::layout_of;
///
/// #[repr(C)]
/// struct Foo {
///     c: i16,
///     b: i8,
/// }
///
/// let info = layout_of!(Foo, b: i8);
/// assert_eq!((info.size(), info.stride(), info.alignment()), (3, 4, 2));
/// ```
#[macro_export]
macro_rules! layout_of {
    ($ty:ty, $last:ident : $field:ty) => {
        $crate::layout::LayoutInfo::of::<$ty>(
            ::std::mem::offset_of!($ty, $last) + ::std::mem::size_of::<$field>(),
        )
    };
}

#[allow(dead_code)] // fields are only read through offset_of!
#[repr(C)]
struct Foo {
    c: i16,
    b: i8,
}

#[allow(dead_code)]
#[repr(C)]
struct Padded {
    wide: u64,
    tag: u8,
}

#[allow(dead_code)]
#[repr(C)]
struct Mixed {
    word: u32,
    half: u16,
    byte: u8,
}

#[allow(dead_code)]
#[repr(C)]
struct Byte {
    value: u8,
}

/// Built-in sample shapes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Shape {
    /// `struct Foo { c: i16, b: i8 }`
    #[default]
    Foo,
    /// `struct Padded { wide: u64, tag: u8 }`
    Padded,
    /// `struct Mixed { word: u32, half: u16, byte: u8 }`
    Mixed,
    /// `struct Byte { value: u8 }`
    Byte,
}

impl Shape {
    pub fn layout(self) -> LayoutInfo {
        match self {
            Shape::Foo => layout_of!(Foo, b: i8),
            Shape::Padded => layout_of!(Padded, tag: u8),
            Shape::Mixed => layout_of!(Mixed, byte: u8),
            Shape::Byte => layout_of!(Byte, value: u8),
        }
    }

    /// Rust declaration shown as the canvas title
    pub fn declaration(self) -> &'static str {
        match self {
            Shape::Foo => "struct Foo { c: i16, b: i8 }",
            Shape::Padded => "struct Padded { wide: u64, tag: u8 }",
            Shape::Mixed => "struct Mixed { word: u32, half: u16, byte: u8 }",
            Shape::Byte => "struct Byte { value: u8 }",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(LayoutInfo::new(0, 4, 2), Err(LayoutError::ZeroSize));
    }

    #[test]
    fn test_new_rejects_stride_below_size() {
        assert_eq!(
            LayoutInfo::new(5, 4, 1),
            Err(LayoutError::StrideSmallerThanSize { size: 5, stride: 4 })
        );
    }

    #[test]
    fn test_new_bounds_stride() {
        assert!(LayoutInfo::new(1, MAX_STRIDE, 1).is_ok());
        assert_eq!(
            LayoutInfo::new(1, MAX_STRIDE + 1, 1),
            Err(LayoutError::StrideTooLarge {
                stride: MAX_STRIDE + 1,
                max: MAX_STRIDE
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_alignment() {
        assert_eq!(LayoutInfo::new(3, 4, 0), Err(LayoutError::ZeroAlignment));
    }

    #[test]
    fn test_alignment_need_not_divide_stride() {
        let info = LayoutInfo::new(5, 5, 2).unwrap();
        assert_eq!(info.alignment_groups(), 2);
        assert_eq!(info.padding(), 0);
    }

    #[test]
    fn test_foo_layout() {
        let info = Shape::Foo.layout();
        assert_eq!(info.size(), 3);
        assert_eq!(info.stride(), 4);
        assert_eq!(info.alignment(), 2);
        assert_eq!(info.padding(), 1);
    }

    #[test]
    fn test_mixed_and_byte_layouts() {
        let mixed = Shape::Mixed.layout();
        assert_eq!((mixed.size(), mixed.stride(), mixed.alignment()), (7, 8, 4));

        let byte = Shape::Byte.layout();
        assert_eq!((byte.size(), byte.stride(), byte.alignment()), (1, 1, 1));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_padded_layout() {
        let info = Shape::Padded.layout();
        assert_eq!((info.size(), info.stride(), info.alignment()), (9, 16, 8));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::StrideSmallerThanSize { size: 8, stride: 4 }.to_string(),
            "stride 4 is smaller than size 8"
        );
    }
}
