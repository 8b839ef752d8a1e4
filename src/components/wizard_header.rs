// ABOUTME: Dashboard header with the product title, the six-step indicator, and the run gauge
// Step dots follow the wizard snapshot: done steps green, current step gold, the rest muted

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::catalog::{APP_BADGE, APP_SUBTITLE, APP_TITLE};
use crate::wizard::{WizardState, WizardStep};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct WizardHeaderComponent;

impl WizardHeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed for the header given the current snapshot
    pub fn height(wizard: &WizardState) -> u16 {
        if wizard.is_processing {
            7
        } else {
            5
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Step indicator
        ];
        if wizard.is_processing {
            constraints.push(Constraint::Length(1)); // Spacer
            constraints.push(Constraint::Length(1)); // Gauge
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(0)
            .constraints(constraints)
            .split(inner);

        let title = Paragraph::new(Self::title_line()).alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let steps = Paragraph::new(Self::step_line(wizard)).alignment(Alignment::Center);
        frame.render_widget(steps, layout[2]);

        if wizard.is_processing && layout.len() > 4 {
            self.render_gauge(frame, layout[4], wizard.progress_percent);
        }
    }

    fn title_line() -> Line<'static> {
        Line::from(vec![
            Span::styled("🛡 ", Style::default()),
            Span::styled(APP_TITLE, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("  ", Style::default()),
            Span::styled(APP_SUBTITLE, Style::default().fg(SOFT_WHITE)),
            Span::styled("  ", Style::default()),
            Span::styled(
                format!("[{}]", APP_BADGE),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    /// Step dots joined by arrows
    pub fn step_line(wizard: &WizardState) -> Line<'static> {
        let steps = WizardStep::all();
        let mut spans = Vec::with_capacity(steps.len() * 4);

        for (idx, step) in steps.iter().enumerate() {
            let (dot, style) = if wizard.is_step_current(*step) {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else if wizard.is_step_active(*step) {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(dot, style));
            spans.push(Span::styled(format!(" {} ", step.icon()), style));
            spans.push(Span::styled(
                step.label(),
                if wizard.is_step_active(*step) {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        Line::from(spans)
    }

    pub fn progress_label(percent: u8) -> String {
        format!("Processing your AML scenario... {}%", percent)
    }

    fn render_gauge(&self, frame: &mut Frame, area: Rect, percent: u8) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(SUBDUED_BORDER))
            .percent(u16::from(percent.min(100)))
            .label(Span::styled(
                Self::progress_label(percent),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, area);
    }
}

impl Default for WizardHeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
