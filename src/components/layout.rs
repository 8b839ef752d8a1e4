// ABOUTME: Main layout component: wizard header, input column, tabbed result panels, and menu bar
// Overlays (notifications and help) are drawn last

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap},
};

use super::{
    CodeViewerComponent, DataViewComponent, DocumentationComponent, HelpComponent,
    OverviewComponent, ScenarioInputComponent, TestResultsComponent, WizardHeaderComponent,
};
use crate::app::{AppState, Focus, NotificationType, ResultTab};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const ERROR_RED: Color = Color::Rgb(230, 100, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct LayoutComponent {
    header: WizardHeaderComponent,
    scenario_input: ScenarioInputComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            header: WizardHeaderComponent::new(),
            scenario_input: ScenarioInputComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Content of the active result tab, before wrapping
    pub fn panel_lines(state: &AppState) -> Vec<Line<'static>> {
        match state.active_tab {
            ResultTab::Overview => OverviewComponent::new().lines(state.scenario.as_str()),
            ResultTab::Data => DataViewComponent::new().lines(),
            ResultTab::Code => CodeViewerComponent::new().lines(
                state.code_block,
                state.copy_feedback.label(),
                state.app_config.ui_preferences.syntax_highlighting,
            ),
            ResultTab::Results => TestResultsComponent::new().lines(),
            ResultTab::Docs => DocumentationComponent::new().lines(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(WizardHeaderComponent::height(&state.wizard)),
                Constraint::Min(10),
                Constraint::Length(3), // Menu bar
            ])
            .split(area);

        self.header.render(frame, main_layout[0], &state.wizard);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(main_layout[1]);

        self.scenario_input.render(frame, body[0], state);
        self.render_results(frame, body[1], state);
        self.render_menu_bar(frame, main_layout[2], state);

        self.render_notifications(frame, area, state);

        if state.help_visible {
            self.help.render(frame, area);
        }
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let focused = state.focus == Focus::Navigation && !state.help_visible;
        let border_color = if focused { GOLD } else { SUBDUED_BORDER };

        let titles: Vec<Line> = ResultTab::all()
            .iter()
            .map(|tab| Line::from(tab.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(state.active_tab.index())
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .divider(Span::styled("│", Style::default().fg(SUBDUED_BORDER)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(PANEL_BG)),
            );
        frame.render_widget(tabs, layout[0]);

        let lines = Self::panel_lines(state);

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Line::from(vec![
                        Span::styled(" ", Style::default()),
                        Span::styled(
                            state.active_tab.title(),
                            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" ", Style::default()),
                    ]))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .wrap(Wrap { trim: false })
            .scroll((state.panel_scroll, 0));
        frame.render_widget(panel, layout[1]);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let desc = |d: &'static str| Span::styled(d, Style::default().fg(MUTED_GRAY));
        let sep = || Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER));

        let spans = match state.focus {
            Focus::Input => vec![
                key("Enter", SELECTION_GREEN),
                desc(" generate "),
                key("Esc", GOLD),
                desc(" navigate"),
                sep(),
                key("Ctrl+C", ERROR_RED),
                desc(" quit"),
            ],
            Focus::Navigation => vec![
                key("i", GOLD),
                desc(" edit "),
                key("1-4", GOLD),
                desc(" examples "),
                key("g", SELECTION_GREEN),
                desc(" generate"),
                sep(),
                key("h/l", CORNFLOWER_BLUE),
                desc(" tabs "),
                key("[ ]", CORNFLOWER_BLUE),
                desc(" code "),
                key("c", WARNING_ORANGE),
                desc(" copy"),
                sep(),
                key("?", CORNFLOWER_BLUE),
                desc(" help "),
                key("q", CORNFLOWER_BLUE),
                desc(" quit"),
            ],
        };

        let menu = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 50.min(area.width);
        let notification_height = notifications.len() as u16 * 3;

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break;
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Error => ("✗ ", ERROR_RED),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(Clear, single_notification_area);
            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
