// Controller tests: hover sequences and full-frame rendering

use std::ops::Range;

use crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, style::Color, Terminal};
use strideview::layout::{LayoutInfo, Shape, MAX_STRIDE};
use strideview::selection::Selection;
use strideview::ui::theme::DEFAULT_THEME;
use strideview::ui::App;

fn setup() -> (App, Terminal<TestBackend>) {
    let mut app = App::new(LayoutInfo::new(3, 4, 2).unwrap(), "struct Foo");
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("first frame");
    (app, terminal)
}

fn label_area(app: &App, selection: Selection) -> Rect {
    app.controls()
        .iter()
        .find(|c| c.selection() == selection)
        .and_then(|c| c.tracking_area())
        .expect("label is laid out")
}

fn move_to(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn hover(app: &mut App, selection: Selection) {
    let area = label_area(app, selection);
    app.handle_event(&move_to(area.x + area.width / 2, area.y));
}

/// Whether any cell in `rows` is drawn in `color`
fn rows_contain(terminal: &Terminal<TestBackend>, rows: Range<usize>, color: Color) -> bool {
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .skip(rows.start)
        .take(rows.len())
        .flatten()
        .any(|cell| cell.fg == color)
}

// With an 80x24 terminal the label row is row 1 and the canvas block spans
// rows 3 to 21; the status bar repeats the palette on row 23.
fn canvas_contains(terminal: &Terminal<TestBackend>, color: Color) -> bool {
    rows_contain(terminal, 3..22, color)
}

#[test]
fn test_hover_selects_property() {
    let (mut app, _) = setup();
    assert_eq!(app.selection(), Selection::None);

    hover(&mut app, Selection::Size);
    assert_eq!(app.selection(), Selection::Size);
    assert!(app.controls()[0].is_highlighted());
}

#[test]
fn test_moving_between_labels_last_enter_wins() {
    let (mut app, _) = setup();

    hover(&mut app, Selection::Size);
    hover(&mut app, Selection::Stride);
    assert_eq!(app.selection(), Selection::Stride);

    hover(&mut app, Selection::Alignment);
    assert_eq!(app.selection(), Selection::Alignment);

    let highlighted: Vec<_> = app
        .controls()
        .iter()
        .filter(|c| c.is_highlighted())
        .map(|c| c.label())
        .collect();
    assert_eq!(highlighted, vec!["Alignment"]);
}

#[test]
fn test_leaving_label_clears_selection() {
    let (mut app, _) = setup();

    hover(&mut app, Selection::Stride);
    app.handle_event(&move_to(40, 12));
    assert_eq!(app.selection(), Selection::None);
    assert!(app.controls().iter().all(|c| !c.is_highlighted()));
}

#[test]
fn test_moving_inside_label_keeps_selection() {
    let (mut app, _) = setup();
    let area = label_area(&app, Selection::Size);

    app.handle_event(&move_to(area.x, area.y));
    app.handle_event(&move_to(area.right() - 1, area.y));
    assert_eq!(app.selection(), Selection::Size);
}

#[test]
fn test_resize_moves_tracking_areas() {
    let (mut app, mut terminal) = setup();
    let before = label_area(&app, Selection::Alignment);

    terminal.backend_mut().resize(120, 30);
    terminal.draw(|f| app.render(f)).unwrap();
    let after = label_area(&app, Selection::Alignment);
    assert_ne!(before, after);

    // The old position of the label no longer tracks it
    let old_only = before.x;
    assert!(old_only < after.x);
    app.handle_event(&move_to(old_only, before.y));
    assert_ne!(app.selection(), Selection::Alignment);
}

#[test]
fn test_frame_colors_follow_selection() {
    let (mut app, mut terminal) = setup();
    assert!(canvas_contains(&terminal, DEFAULT_THEME.cell_inactive));
    assert!(!canvas_contains(&terminal, DEFAULT_THEME.cell_size));

    hover(&mut app, Selection::Size);
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(canvas_contains(&terminal, DEFAULT_THEME.cell_size));
    assert!(canvas_contains(&terminal, DEFAULT_THEME.cell_inactive));
    assert!(rows_contain(&terminal, 1..2, DEFAULT_THEME.label_hover));

    hover(&mut app, Selection::Stride);
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(canvas_contains(&terminal, DEFAULT_THEME.cell_stride));
    assert!(!canvas_contains(&terminal, DEFAULT_THEME.cell_size));

    hover(&mut app, Selection::Alignment);
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(canvas_contains(&terminal, DEFAULT_THEME.underline));
    assert!(!canvas_contains(&terminal, DEFAULT_THEME.cell_stride));
}

#[test]
fn test_redraw_requested_only_on_change() {
    let (mut app, _) = setup();
    // Construction requests the first frame
    assert!(app.canvas().needs_display());
    assert!(!app.canvas().needs_display());

    hover(&mut app, Selection::Size);
    assert!(app.canvas().needs_display());

    let area = label_area(&app, Selection::Size);
    app.handle_event(&move_to(area.x, area.y));
    assert!(!app.canvas().needs_display());
}

#[test]
fn test_title_and_labels_are_drawn() {
    let mut app = App::new(Shape::Foo.layout(), Shape::Foo.declaration());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("struct Foo { c: i16, b: i8 }"));
    assert!(text.contains("Size"));
    assert!(text.contains("Stride"));
    assert!(text.contains("Alignment"));
    assert!(text.contains("stride 4"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(LayoutInfo::new(9, 16, 8).unwrap(), "Padded");
    let mut terminal = Terminal::new(TestBackend::new(6, 3)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    app.handle_event(&move_to(0, 0));
}

#[test]
fn test_underline_is_one_row_thick() {
    let (mut app, mut terminal) = setup();
    hover(&mut app, Selection::Alignment);
    terminal.draw(|f| app.render(f)).unwrap();

    let rows = (3..22)
        .filter(|&row| rows_contain(&terminal, row..row + 1, DEFAULT_THEME.underline))
        .count();
    assert_eq!(rows, 1);
}

#[test]
fn test_largest_stride_renders() {
    let mut app = App::new(LayoutInfo::new(1, MAX_STRIDE, 1).unwrap(), "wide");
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    hover_and_draw(&mut app, &mut terminal, Selection::Stride);
    hover_and_draw(&mut app, &mut terminal, Selection::Alignment);
    assert_eq!(app.selection(), Selection::Alignment);
}

fn hover_and_draw(app: &mut App, terminal: &mut Terminal<TestBackend>, selection: Selection) {
    terminal.draw(|f| app.render(f)).unwrap();
    hover(app, selection);
    terminal.draw(|f| app.render(f)).unwrap();
}
