//! Hoverable label that reports pointer enter/exit
//!
//! A [`HoverControl`] owns a tracking region (the screen cells it was last laid
//! out in) and one listener. Pointer positions are hit-tested against the
//! region; crossing its edge produces a [`HoverTransition`], and applying the
//! transition flips the label's emphasis and notifies the listener once.

use crate::selection::Selection;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Edge crossing of a control's tracking region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Entered,
    Exited,
}

type HighlightListener = Box<dyn FnMut(bool)>;

pub struct HoverControl {
    label: &'static str,
    selection: Selection,
    tracking_area: Option<Rect>,
    highlighted: bool,
    listener: Option<HighlightListener>,
}

impl HoverControl {
    pub fn new(label: &'static str, selection: Selection) -> Self {
        HoverControl {
            label,
            selection,
            tracking_area: None,
            highlighted: false,
            listener: None,
        }
    }

    /// Register the listener called with `true` on enter and `false` on exit.
    /// Replaces any previously registered listener.
    pub fn configure(&mut self, on_highlight_change: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(on_highlight_change));
    }

    /// Replace the tracking region with `bounds`.
    ///
    /// The stale region is always dropped first so a control never answers
    /// for two regions. An empty `bounds` leaves the control untracked.
    pub fn update_tracking_area(&mut self, bounds: Rect) {
        let next = (!bounds.is_empty()).then_some(bounds);
        if next != self.tracking_area {
            tracing::debug!(control = self.label, ?next, "tracking area updated");
        }
        self.tracking_area = next;
    }

    /// Hit-test a pointer position, returning a transition only when the
    /// pointer crosses the region's edge.
    pub fn pointer_moved(&self, column: u16, row: u16) -> Option<HoverTransition> {
        let inside = self
            .tracking_area
            .is_some_and(|area| area.contains(Position::new(column, row)));

        match (self.highlighted, inside) {
            (false, true) => Some(HoverTransition::Entered),
            (true, false) => Some(HoverTransition::Exited),
            _ => None,
        }
    }

    /// Apply a transition: update emphasis and notify the listener.
    pub fn apply(&mut self, transition: HoverTransition) {
        let highlighted = transition == HoverTransition::Entered;
        if highlighted == self.highlighted {
            return;
        }
        self.highlighted = highlighted;
        tracing::debug!(control = self.label, ?transition, "hover");

        if let Some(listener) = self.listener.as_mut() {
            listener(highlighted);
        }
    }

    /// The pointer left the terminal; exit if currently highlighted.
    pub fn pointer_left(&mut self) -> bool {
        if self.highlighted {
            self.apply(HoverTransition::Exited);
            true
        } else {
            false
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn tracking_area(&self) -> Option<Rect> {
        self.tracking_area
    }

    /// Draw the label centered in its tracking region
    pub fn render(&self, frame: &mut Frame) {
        let Some(area) = self.tracking_area else {
            return;
        };

        let style = if self.highlighted {
            Style::default()
                .fg(DEFAULT_THEME.label_hover)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.label_idle)
        };

        let paragraph = Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
