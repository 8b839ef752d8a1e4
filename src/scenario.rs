// ABOUTME: Scenario text owned by the user plus the fixed example scenarios
// Edits are cursor-based and char-boundary safe

/// Example scenarios offered next to the input
pub const EXAMPLE_SCENARIOS: [&str; 4] = [
    "Detect unusual cash deposits followed by immediate wire transfers",
    "Identify structuring patterns in customer transactions",
    "Monitor high-risk geography transaction flows",
    "Flag suspicious business account activity patterns",
];

/// Placeholder shown while the input is empty
pub const SCENARIO_PLACEHOLDER: &str =
    "Describe the money laundering pattern or suspicious activity you want to detect...";

/// Free-form scenario description with an editing cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioText {
    text: String,
    /// Cursor position counted in chars
    cursor: usize,
}

impl ScenarioText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut scenario = Self::new();
        scenario.set_text(text);
        scenario
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Blank text does not enable the trigger
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole text and park the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_len();
    }

    /// Overwrite with one of the example scenarios (0-based)
    pub fn select_example(&mut self, index: usize) -> bool {
        match EXAMPLE_SCENARIOS.get(index) {
            Some(example) => {
                self.set_text(example);
                true
            }
            None => false,
        }
    }

    /// Handle text input character
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor; line breaks, tabs and other control
    /// characters become single spaces so the scenario stays on one line
    pub fn insert_str(&mut self, s: &str) {
        let cleaned: String = s
            .replace("\r\n", " ")
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Handle delete key
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
