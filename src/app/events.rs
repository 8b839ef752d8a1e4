// ABOUTME: Event handling system for keyboard input and app actions
// Maps key presses to AppEvents per focus, then applies them to AppState

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, Focus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    FocusInput,
    FocusNavigation,
    // Scenario editing
    InputChar(char),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    PasteText(String),
    SelectExample(usize),
    Generate,
    // Result panels
    NextTab,
    PreviousTab,
    NextCodeBlock,
    PreviousCodeBlock,
    ScrollUp,
    ScrollDown,
    // Code panel actions
    CopyCode,
    DownloadCode,
    RunTest,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match state.focus {
            Focus::Input => Self::handle_input_keys(key_event, state),
            Focus::Navigation => Self::handle_navigation_keys(key_event, state),
        }
    }

    fn handle_input_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Tab => Some(AppEvent::FocusNavigation),
            KeyCode::Enter => Self::generate_if_enabled(state),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Delete => Some(AppEvent::InputDelete),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Home => Some(AppEvent::CursorHome),
            KeyCode::End => Some(AppEvent::CursorEnd),
            KeyCode::Char(c)
                if !key_event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(AppEvent::InputChar(c))
            }
            _ => None,
        }
    }

    fn handle_navigation_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('i') | KeyCode::Tab => Some(AppEvent::FocusInput),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                Some(AppEvent::SelectExample(index))
            }
            KeyCode::Char('g') | KeyCode::Enter => Self::generate_if_enabled(state),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::NextTab),
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::PreviousTab),
            KeyCode::Char(']') => Some(AppEvent::NextCodeBlock),
            KeyCode::Char('[') => Some(AppEvent::PreviousCodeBlock),
            KeyCode::Char('c') => Some(AppEvent::CopyCode),
            KeyCode::Char('d') => Some(AppEvent::DownloadCode),
            KeyCode::Char('t') => Some(AppEvent::RunTest),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollUp),
            _ => None,
        }
    }

    /// The trigger is disabled while the scenario is blank or a run is active
    fn generate_if_enabled(state: &AppState) -> Option<AppEvent> {
        if state.can_generate() {
            Some(AppEvent::Generate)
        } else {
            debug!("Generate key ignored, trigger disabled");
            None
        }
    }

    /// Bracketed paste goes into the scenario when the input has focus
    pub fn handle_paste(text: String, state: &AppState) -> Option<AppEvent> {
        if state.focus == Focus::Input && !state.help_visible {
            Some(AppEvent::PasteText(text))
        } else {
            None
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::FocusInput => state.focus_input(),
            AppEvent::FocusNavigation => state.focus_navigation(),
            AppEvent::InputChar(c) => state.scenario.insert_char(c),
            AppEvent::InputBackspace => state.scenario.backspace(),
            AppEvent::InputDelete => state.scenario.delete(),
            AppEvent::CursorLeft => state.scenario.cursor_left(),
            AppEvent::CursorRight => state.scenario.cursor_right(),
            AppEvent::CursorHome => state.scenario.cursor_home(),
            AppEvent::CursorEnd => state.scenario.cursor_end(),
            AppEvent::PasteText(text) => state.scenario.insert_str(&text),
            AppEvent::SelectExample(index) => state.select_example(index),
            AppEvent::Generate => state.generate_scenario(),
            AppEvent::NextTab => state.next_tab(),
            AppEvent::PreviousTab => state.previous_tab(),
            AppEvent::NextCodeBlock => state.next_code_block(),
            AppEvent::PreviousCodeBlock => state.previous_code_block(),
            AppEvent::ScrollUp => state.scroll_up(),
            AppEvent::ScrollDown => state.scroll_down(),
            AppEvent::CopyCode => state.copy_code(),
            AppEvent::DownloadCode => state.download_code(),
            AppEvent::RunTest => state.run_test(),
        }
    }
}
