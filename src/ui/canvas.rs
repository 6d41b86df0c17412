//! Byte-cell canvas for a [`LayoutInfo`]
//!
//! Geometry is computed in logical units with the origin at the bottom-left,
//! independent of the terminal. [`compute_geometry`] is the pure step;
//! [`LayoutCanvas::render`] maps the terminal area onto logical units and
//! paints the result through ratatui's [`Canvas`] widget.
//!
//! ```text
//!   y=140 ┌────┐ ┌────┐ ┌────┐ ┌────┐
//!         │ 0  │ │ 1  │ │ 2  │ │ 3  │      cells, W wide, G apart
//!   y=40  └────┘ └────┘ └────┘ └────┘
//!   y=20  ━━━━━━━━━━━━━ ━━━━━━━━━━━━━      one underline per alignment group
//!       M                               M
//! ```

use crate::layout::LayoutInfo;
use crate::selection::{Selection, SelectionHandle};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Painter, Shape},
        Block, Borders,
    },
    Frame,
};

/// Left and right margin
pub const MARGIN: f64 = 20.0;
/// Horizontal gap between cells
pub const GAP: f64 = 10.0;
pub const CELL_Y: f64 = 40.0;
pub const CELL_HEIGHT: f64 = 100.0;
/// Underlines are one half-block pixel (8 units) thick, which already
/// covers a 2-unit stroke.
pub const UNDERLINE_Y: f64 = 20.0;

/// Logical units covered by one terminal column
pub const UNITS_PER_COLUMN: f64 = 8.0;
/// Logical units covered by one terminal row
pub const UNITS_PER_ROW: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl UnitRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Intersection with `[0, width] x [0, height]`, or `None` if nothing
    /// remains.
    fn clipped(&self, width: f64, height: f64) -> Option<UnitRect> {
        let x = self.x.max(0.0);
        let y = self.y.max(0.0);
        let right = self.right().min(width);
        let top = self.top().min(height);
        (right > x && top > y).then(|| UnitRect {
            x,
            y,
            width: right - x,
            height: top - y,
        })
    }
}

/// Fill of one byte cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPaint {
    Inactive,
    Size,
    Stride,
}

impl CellPaint {
    pub fn color(self) -> Color {
        match self {
            CellPaint::Inactive => DEFAULT_THEME.cell_inactive,
            CellPaint::Size => DEFAULT_THEME.cell_size,
            CellPaint::Stride => DEFAULT_THEME.cell_stride,
        }
    }

    pub fn is_active(self) -> bool {
        self != CellPaint::Inactive
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteCell {
    pub index: usize,
    pub rect: UnitRect,
    pub paint: CellPaint,
}

/// Horizontal stroke under one alignment group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underline {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

impl Underline {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGeometry {
    pub cell_width: f64,
    pub cells: Vec<ByteCell>,
    pub underlines: Vec<Underline>,
}

impl CanvasGeometry {
    pub fn active_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.paint.is_active()).count()
    }
}

/// Lay out one cell per stride byte across `width` units and, when the
/// alignment is selected, one underline per complete alignment group.
///
/// The cell width never goes below zero; a narrow canvas yields zero-width
/// cells. A trailing partial alignment group gets no underline.
pub fn compute_geometry(info: &LayoutInfo, selection: Selection, width: f64) -> CanvasGeometry {
    let stride = info.stride();
    let gaps = GAP * (stride - 1) as f64;
    let cell_width = ((width - MARGIN * 2.0 - gaps) / stride as f64).max(0.0);

    let cells = (0..stride)
        .map(|i| {
            let paint = match selection {
                Selection::Size if i < info.size() => CellPaint::Size,
                Selection::Stride => CellPaint::Stride,
                _ => CellPaint::Inactive,
            };
            ByteCell {
                index: i,
                rect: UnitRect {
                    x: MARGIN + i as f64 * (cell_width + GAP),
                    y: CELL_Y,
                    width: cell_width,
                    height: CELL_HEIGHT,
                },
                paint,
            }
        })
        .collect();

    let underlines = if selection == Selection::Alignment {
        let alignment = info.alignment() as f64;
        let group_width = alignment * cell_width + (alignment - 1.0) * GAP;
        (0..info.alignment_groups())
            .map(|i| {
                let x1 = MARGIN + i as f64 * (group_width + GAP);
                Underline {
                    x1,
                    x2: x1 + group_width,
                    y: UNDERLINE_Y,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    CanvasGeometry {
        cell_width,
        cells,
        underlines,
    }
}

/// Solid rectangle for the canvas; ratatui's own `Rectangle` only strokes
/// the outline.
struct FilledRect {
    rect: UnitRect,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let r = self.rect;
        let (Some((left, top)), Some((right, bottom))) =
            (painter.get_point(r.x, r.top()), painter.get_point(r.right(), r.y))
        else {
            return;
        };

        // Right and bottom edges are exclusive so neighbouring cells keep
        // their gap, but every visible rect covers at least one point.
        let right = right.max(left + 1);
        let bottom = bottom.max(top + 1);
        for y in top..bottom {
            for x in left..right {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Canvas view: owns the layout to draw and reads the shared selection
pub struct LayoutCanvas {
    layout_info: Option<LayoutInfo>,
    selection: SelectionHandle,
    title: String,
}

impl LayoutCanvas {
    pub fn new(selection: SelectionHandle) -> Self {
        LayoutCanvas {
            layout_info: None,
            selection,
            title: String::new(),
        }
    }

    pub fn set_layout_info(&mut self, info: LayoutInfo) {
        self.layout_info = Some(info);
        self.selection.mark_dirty();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.selection.mark_dirty();
    }

    pub fn set_selection(&self, selection: Selection) {
        self.selection.set(selection);
    }

    pub fn layout_info(&self) -> Option<LayoutInfo> {
        self.layout_info
    }

    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    /// Handle for listeners that write the selection this canvas draws
    pub fn selection_handle(&self) -> SelectionHandle {
        self.selection.clone()
    }

    /// Whether a repaint was requested since the last call
    pub fn needs_display(&self) -> bool {
        self.selection.take_dirty()
    }

    /// Geometry for the current layout and selection, if a layout is set
    pub fn geometry(&self, width: f64) -> Option<CanvasGeometry> {
        self.layout_info
            .map(|info| compute_geometry(&info, self.selection.get(), width))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(DEFAULT_THEME.fg),
            ));

        let inner = block.inner(area);
        let width = f64::from(inner.width) * UNITS_PER_COLUMN;
        let height = f64::from(inner.height) * UNITS_PER_ROW;

        let Some(geometry) = self.geometry(width) else {
            frame.render_widget(block, area);
            return;
        };

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for cell in &geometry.cells {
                    if let Some(rect) = cell.rect.clipped(width, height) {
                        ctx.draw(&FilledRect {
                            rect,
                            color: cell.paint.color(),
                        });
                    }
                }
                for underline in &geometry.underlines {
                    if underline.y > height || underline.x1 > width {
                        continue;
                    }
                    ctx.draw(&CanvasLine::new(
                        underline.x1.max(0.0),
                        underline.y,
                        underline.x2.min(width),
                        underline.y,
                        DEFAULT_THEME.underline,
                    ));
                }
            });

        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> LayoutInfo {
        LayoutInfo::new(3, 4, 2).unwrap()
    }

    #[test]
    fn test_cell_width_and_positions() {
        let geometry = compute_geometry(&foo(), Selection::None, 400.0);
        assert_eq!(geometry.cell_width, 82.5);
        assert_eq!(geometry.cells.len(), 4);
        assert_eq!(geometry.cells[0].rect.x, 20.0);
        assert_eq!(geometry.cells[1].rect.x, 112.5);
        assert_eq!(geometry.cells[3].rect.x, 297.5);
        assert!(geometry.cells.iter().all(|c| c.rect.y == CELL_Y));
        assert!(geometry.cells.iter().all(|c| c.rect.height == CELL_HEIGHT));
    }

    #[test]
    fn test_size_selection_paints_leading_cells() {
        let geometry = compute_geometry(&foo(), Selection::Size, 400.0);
        let paints: Vec<_> = geometry.cells.iter().map(|c| c.paint).collect();
        assert_eq!(
            paints,
            vec![
                CellPaint::Size,
                CellPaint::Size,
                CellPaint::Size,
                CellPaint::Inactive
            ]
        );
        assert!(geometry.underlines.is_empty());
    }

    #[test]
    fn test_alignment_selection_draws_groups() {
        let geometry = compute_geometry(&foo(), Selection::Alignment, 400.0);
        assert_eq!(geometry.active_cells(), 0);
        assert_eq!(geometry.underlines.len(), 2);
        assert_eq!(geometry.underlines[0].x1, 20.0);
        assert_eq!(geometry.underlines[0].width(), 175.0);
        assert_eq!(geometry.underlines[1].x1, 205.0);
        assert_eq!(geometry.underlines[1].y, UNDERLINE_Y);
    }

    #[test]
    fn test_narrow_canvas_clamps_cell_width() {
        let info = LayoutInfo::new(16, 16, 8).unwrap();
        let geometry = compute_geometry(&info, Selection::Alignment, 50.0);
        assert_eq!(geometry.cell_width, 0.0);
        assert_eq!(geometry.cells.len(), 16);
        assert_eq!(geometry.cells[1].rect.x, MARGIN + GAP);
        assert_eq!(geometry.underlines[0].width(), 7.0 * GAP);
    }

    #[test]
    fn test_clipped_rect() {
        let rect = UnitRect {
            x: 90.0,
            y: 40.0,
            width: 20.0,
            height: 100.0,
        };
        let clipped = rect.clipped(100.0, 80.0).unwrap();
        assert_eq!(clipped.right(), 100.0);
        assert_eq!(clipped.top(), 80.0);
        assert_eq!(rect.clipped(50.0, 80.0), None);
    }

    #[test]
    fn test_canvas_geometry_follows_shared_selection() {
        let handle = SelectionHandle::new();
        let mut canvas = LayoutCanvas::new(handle.clone());
        assert!(canvas.geometry(400.0).is_none());

        canvas.set_layout_info(foo());
        assert!(canvas.needs_display());

        handle.set(Selection::Stride);
        assert!(canvas.needs_display());
        assert_eq!(canvas.geometry(400.0).unwrap().active_cells(), 4);
    }
}
