// ABOUTME: Help overlay component displaying keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Scenario Input:").style(section),
            ListItem::new("  type       Edit the scenario description"),
            ListItem::new("  ←/→        Move cursor (Home/End jump)"),
            ListItem::new("  Enter      Generate AML scenario"),
            ListItem::new("  Esc/Tab    Leave input"),
            ListItem::new(""),
            ListItem::new("Navigation:").style(section),
            ListItem::new("  i/Tab      Edit scenario"),
            ListItem::new("  1-4        Use an example scenario"),
            ListItem::new("  g/Enter    Generate AML scenario"),
            ListItem::new("  h/←  l/→   Previous / next result tab"),
            ListItem::new("  j/↓  k/↑   Scroll result panel"),
            ListItem::new(""),
            ListItem::new("Code Panel:").style(section),
            ListItem::new("  [ / ]      Previous / next code block"),
            ListItem::new("  c          Copy code block"),
            ListItem::new("  d          Download (demo)"),
            ListItem::new("  t          Run test (demo)"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
