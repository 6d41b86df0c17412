use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,        // Grey
    pub label_idle: Color,     // Grey
    pub label_hover: Color,    // Mint
    pub cell_inactive: Color,  // Light grey
    pub cell_size: Color,      // Red
    pub cell_stride: Color,    // Blue
    pub underline: Color,      // Green
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    label_idle: Color::Rgb(147, 153, 178),
    label_hover: Color::Rgb(148, 226, 213),
    cell_inactive: Color::Rgb(166, 173, 200),
    cell_size: Color::Rgb(243, 139, 168),
    cell_stride: Color::Rgb(137, 180, 250),
    underline: Color::Rgb(166, 227, 161),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
