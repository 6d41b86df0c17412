//! Main TUI application state and logic

use crate::layout::LayoutInfo;
use crate::selection::{Selection, SelectionHandle};
use crate::ui::canvas::LayoutCanvas;
use crate::ui::hover::{HoverControl, HoverTransition};
use crate::ui::status::render_status_bar;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Margin},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows and columns kept free between the label row and the screen edges
const PADDING: Margin = Margin {
    horizontal: 2,
    vertical: 1,
};

/// Columns between neighbouring labels
const LABEL_SPACING: u16 = 1;

/// The controller: three hover labels wired to one layout canvas
pub struct App {
    canvas: LayoutCanvas,
    controls: [HoverControl; 3],
    should_quit: bool,
}

impl App {
    /// Create the app for `layout_info`, titling the canvas with `title`
    pub fn new(layout_info: LayoutInfo, title: impl Into<String>) -> Self {
        let mut canvas = LayoutCanvas::new(SelectionHandle::new());
        canvas.set_layout_info(layout_info);
        canvas.set_title(title);

        let mut controls = [
            HoverControl::new("Size", Selection::Size),
            HoverControl::new("Stride", Selection::Stride),
            HoverControl::new("Alignment", Selection::Alignment),
        ];

        for control in &mut controls {
            let property = control.selection();
            let selection = canvas.selection_handle();
            control.configure(move |highlighted| {
                selection.set(if highlighted {
                    property
                } else {
                    Selection::None
                });
            });
        }

        App {
            canvas,
            controls,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            // Only repaint when something changed since the last frame
            if self.canvas.needs_display() {
                terminal.draw(|f| self.render(f))?;
            }

            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(&event);
            }
        }

        Ok(())
    }

    /// Lay out the label row, canvas and status bar, then paint them
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let content = main_chunks[0].inner(PADDING);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content);

        let label_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(LABEL_SPACING)
            .split(rows[0]);

        // Tracking areas follow the layout every frame, so resizes never
        // leave a stale region behind
        for (control, area) in self.controls.iter_mut().zip(label_areas.iter()) {
            control.update_tracking_area(*area);
            control.render(frame);
        }

        self.canvas.render(frame, rows[2]);

        if let Some(info) = self.canvas.layout_info() {
            render_status_bar(frame, main_chunks[1], &info, self.canvas.selection());
        }
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved
                | MouseEventKind::Drag(_)
                | MouseEventKind::Down(_)
                | MouseEventKind::Up(_) => self.handle_pointer(mouse.column, mouse.row),
                _ => {}
            },
            Event::FocusLost => self.handle_pointer_left(),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                self.canvas.selection_handle().mark_dirty();
            }
            _ => {}
        }
    }

    /// Hit-test every control against a pointer position.
    ///
    /// Exits are delivered before enters: when one move leaves a control and
    /// enters another, the entered control's selection is the one left.
    fn handle_pointer(&mut self, column: u16, row: u16) {
        let mut transitions: Vec<(usize, HoverTransition)> = self
            .controls
            .iter()
            .enumerate()
            .filter_map(|(i, control)| control.pointer_moved(column, row).map(|t| (i, t)))
            .collect();

        if transitions.is_empty() {
            return;
        }

        transitions.sort_by_key(|&(_, transition)| transition == HoverTransition::Entered);
        for (i, transition) in transitions {
            self.controls[i].apply(transition);
        }

        // Label emphasis changed even if the selection did not
        self.canvas.selection_handle().mark_dirty();
    }

    /// The terminal lost focus; treat it as the pointer leaving every control
    fn handle_pointer_left(&mut self) {
        let mut exited = false;
        for control in &mut self.controls {
            exited |= control.pointer_left();
        }
        if exited {
            tracing::debug!("focus lost, hover cleared");
            self.canvas.selection_handle().mark_dirty();
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Keyboard fallback for terminals without mouse reporting
            KeyCode::Char('1') => self.canvas.set_selection(Selection::Size),
            KeyCode::Char('2') => self.canvas.set_selection(Selection::Stride),
            KeyCode::Char('3') => self.canvas.set_selection(Selection::Alignment),
            KeyCode::Char('0') | KeyCode::Backspace => {
                self.canvas.set_selection(Selection::None);
            }
            _ => {}
        }
    }

    pub fn selection(&self) -> Selection {
        self.canvas.selection()
    }

    pub fn canvas(&self) -> &LayoutCanvas {
        &self.canvas
    }

    pub fn controls(&self) -> &[HoverControl] {
        &self.controls
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
