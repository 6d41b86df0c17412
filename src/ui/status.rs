//! Status bar with the layout numbers and keybindings

use crate::layout::LayoutInfo;
use crate::selection::Selection;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, info: &LayoutInfo, selection: Selection) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);

    // Left side: the three numbers, each in the color its cells use
    let value_span = |name: &str, value: usize, color: Color, active: bool| {
        let mut style = Style::default().bg(DEFAULT_THEME.status_bg).fg(color);
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Span::styled(format!(" {name} {value} "), style)
    };

    let mut left_spans = vec![
        value_span(
            "size",
            info.size(),
            DEFAULT_THEME.cell_size,
            selection == Selection::Size,
        ),
        Span::styled("│", sep_style),
        value_span(
            "stride",
            info.stride(),
            DEFAULT_THEME.cell_stride,
            selection == Selection::Stride,
        ),
        Span::styled("│", sep_style),
        value_span(
            "align",
            info.alignment(),
            DEFAULT_THEME.underline,
            selection == Selection::Alignment,
        ),
    ];

    if info.padding() > 0 {
        left_spans.push(Span::styled("│", sep_style));
        left_spans.push(Span::styled(
            format!(" {} padding ", info.padding()),
            desc_style,
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybindings
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);

    let right_spans = vec![
        Span::styled(" 1/2/3 ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" 0 ", key_style),
        Span::styled(" clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
