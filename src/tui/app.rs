//! Form state management for the TUI.

use crate::payload::Submission;
use crate::utils::char_to_byte_index;

/// Controls of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CmdName,
    Data,
    Range,
    Status,
    Submit,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::CmdName => "Cmd Name",
            Field::Data => "Data",
            Field::Range => "Range",
            Field::Status => "Status",
            Field::Submit => "Submit",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::CmdName => Field::Data,
            Field::Data => Field::Range,
            Field::Range => Field::Status,
            Field::Status => Field::Submit,
            Field::Submit => Field::CmdName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::CmdName => Field::Submit,
            Field::Data => Field::CmdName,
            Field::Range => Field::Data,
            Field::Status => Field::Range,
            Field::Submit => Field::Status,
        }
    }
}

/// The two-option status selector. Always holds a value, so the status
/// field can never be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChoice {
    Pass,
    Fail,
}

impl StatusChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusChoice::Pass => "Pass",
            StatusChoice::Fail => "Fail",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            StatusChoice::Pass => StatusChoice::Fail,
            StatusChoice::Fail => StatusChoice::Pass,
        }
    }

    /// Parse a configured default; anything unrecognized falls back to Pass.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("fail") {
            StatusChoice::Fail
        } else {
            StatusChoice::Pass
        }
    }
}

/// Modal dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    /// Validation failed; nothing was sent.
    Warning(String),
    /// The datagram went out.
    Success(String),
    /// Encoding or transmission failed.
    Error(String),
}

/// Application state for the form.
#[derive(Debug)]
pub struct FormApp {
    pub cmd_name: String,
    pub data: String,
    pub range: String,
    pub status: StatusChoice,
    /// Status value restored after a successful submission.
    pub default_status: StatusChoice,
    pub focus: Field,
    /// Cursor position in the focused text field (character index).
    pub cursor: usize,
    pub popup_state: PopupState,
    /// A submission is in flight; further submits are ignored.
    pub sending: bool,
    pub status_message: String,
}

impl FormApp {
    pub fn new(default_status: StatusChoice) -> Self {
        Self {
            cmd_name: String::new(),
            data: String::new(),
            range: String::new(),
            status: default_status,
            default_status,
            focus: Field::CmdName,
            cursor: 0,
            popup_state: PopupState::None,
            sending: false,
            status_message: "Tab: next field | Enter: submit | Ctrl+C: quit".to_string(),
        }
    }

    /// The focused text buffer, if a text field is focused.
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            Field::CmdName => Some(&self.cmd_name),
            Field::Data => Some(&self.data),
            Field::Range => Some(&self.range),
            Field::Status | Field::Submit => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::CmdName => Some(&mut self.cmd_name),
            Field::Data => Some(&mut self.data),
            Field::Range => Some(&mut self.range),
            Field::Status | Field::Submit => None,
        }
    }

    // ----- Input editing helpers -----

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.focused_text_mut() {
            let at = char_to_byte_index(text, cursor);
            text.insert(at, c);
            self.cursor = cursor + 1;
        }
    }

    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        if cursor == 0 {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            let at = char_to_byte_index(text, cursor - 1);
            if at < text.len() {
                text.remove(at);
                self.cursor = cursor - 1;
            }
        }
    }

    pub fn delete(&mut self) {
        let cursor = self.cursor;
        if let Some(text) = self.focused_text_mut() {
            let at = char_to_byte_index(text, cursor);
            if at < text.len() {
                text.remove(at);
            }
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(text) = self.focused_text() {
            if self.cursor < text.chars().count() {
                self.cursor += 1;
            }
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.focused_text().map_or(0, |t| t.chars().count());
    }

    // ----- Focus and status -----

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.move_cursor_end();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.move_cursor_end();
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggle();
    }

    // ----- Submission -----

    /// Build the submission if every text field is filled. The status
    /// selector always holds a value and needs no check.
    pub fn validate(&self) -> Result<Submission, String> {
        if self.cmd_name.is_empty() || self.data.is_empty() || self.range.is_empty() {
            return Err("All fields are required!".to_string());
        }
        Ok(Submission::new(
            self.cmd_name.clone(),
            self.data.clone(),
            self.range.clone(),
            self.status.as_str(),
        ))
    }

    /// Reset the form after a successful submission: empty text fields,
    /// default status, focus back on the first field.
    pub fn clear_fields(&mut self) {
        self.cmd_name.clear();
        self.data.clear();
        self.range.clear();
        self.status = self.default_status;
        self.focus = Field::CmdName;
        self.cursor = 0;
    }

    // ----- Popups -----

    pub fn show_warning(&mut self, message: String) {
        self.popup_state = PopupState::Warning(message);
    }

    pub fn show_success(&mut self, message: String) {
        self.popup_state = PopupState::Success(message);
    }

    pub fn show_error(&mut self, message: String) {
        self.popup_state = PopupState::Error(message);
    }

    pub fn hide_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn is_popup_shown(&self) -> bool {
        self.popup_state != PopupState::None
    }

    // ----- Send lifecycle -----

    pub fn begin_send(&mut self) {
        self.sending = true;
        self.status_message = "Sending...".to_string();
    }

    pub fn finish_send(&mut self) {
        self.sending = false;
        self.status_message = "Tab: next field | Enter: submit | Ctrl+C: quit".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_app() -> FormApp {
        let mut app = FormApp::new(StatusChoice::Pass);
        app.cmd_name = "Test".to_string();
        app.data = "payload".to_string();
        app.range = "0-100".to_string();
        app
    }

    #[test]
    fn validate_rejects_any_empty_text_field() {
        for missing in [Field::CmdName, Field::Data, Field::Range] {
            let mut app = filled_app();
            match missing {
                Field::CmdName => app.cmd_name.clear(),
                Field::Data => app.data.clear(),
                Field::Range => app.range.clear(),
                _ => unreachable!(),
            }
            let err = app.validate().unwrap_err();
            assert_eq!(err, "All fields are required!");
        }
    }

    #[test]
    fn validate_builds_the_four_field_record() {
        let mut app = filled_app();
        app.status = StatusChoice::Fail;
        let record = app.validate().unwrap();
        assert_eq!(record, Submission::new("Test", "payload", "0-100", "Fail"));
        assert_eq!(record.input_other, None);
        assert_eq!(record.output_other, None);
    }

    #[test]
    fn clear_fields_restores_defaults() {
        let mut app = filled_app();
        app.status = StatusChoice::Fail;
        app.focus = Field::Submit;
        app.clear_fields();
        assert!(app.cmd_name.is_empty());
        assert!(app.data.is_empty());
        assert!(app.range.is_empty());
        assert_eq!(app.status, StatusChoice::Pass);
        assert_eq!(app.focus, Field::CmdName);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn editing_is_char_boundary_safe() {
        let mut app = FormApp::new(StatusChoice::Pass);
        for c in "héllo".chars() {
            app.insert_char(c);
        }
        assert_eq!(app.cmd_name, "héllo");
        app.move_cursor_left();
        app.move_cursor_left();
        app.backspace(); // removes the first 'l'
        assert_eq!(app.cmd_name, "hélo");
        app.delete(); // removes the remaining 'l'
        assert_eq!(app.cmd_name, "héo");
        app.move_cursor_home();
        app.delete();
        assert_eq!(app.cmd_name, "éo");
    }

    #[test]
    fn focus_cycle_wraps_both_ways() {
        let mut app = FormApp::new(StatusChoice::Pass);
        let order = [
            Field::Data,
            Field::Range,
            Field::Status,
            Field::Submit,
            Field::CmdName,
        ];
        for field in order {
            app.focus_next();
            assert_eq!(app.focus, field);
        }
        app.focus_prev();
        assert_eq!(app.focus, Field::Submit);
    }

    #[test]
    fn status_toggle_and_default_parsing() {
        assert_eq!(StatusChoice::from_name("fail"), StatusChoice::Fail);
        assert_eq!(StatusChoice::from_name("Pass"), StatusChoice::Pass);
        assert_eq!(StatusChoice::from_name("bogus"), StatusChoice::Pass);
        assert_eq!(StatusChoice::Pass.toggle(), StatusChoice::Fail);
        assert_eq!(StatusChoice::Fail.toggle(), StatusChoice::Pass);
    }
}
