//! Input binding: input specs to editable fields and back to values.
//!
//! Responsibilities:
//! - Build one editable field per `InputSpec`, choosing the field type from
//!   the popup kind and the input's subtype.
//! - Track focus among visible fields.
//! - Read field values back, in spec order, for the confirm handler.
//!
//! Does NOT handle:
//! - Rendering (see `render.rs`).
//! - Deciding when a key confirms or dismisses (see `dispatch.rs`).
//!
//! Invariants:
//! - `values()` has exactly one entry per bound spec, hidden fields included.
//! - Hidden fields never hold focus.
//! - `required` and `min` are display attributes only; nothing enforces them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

use crate::popup::definition::{InputSpec, InputType, PopupKind};

/// Minimum accepted by numeric fields.
pub const NUMERIC_MIN: u64 = 1;

/// Concrete interactive type of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    Text,
    Password,
    Email,
}

impl FieldType {
    /// Numeric popups force numbers; text popups use the subtype or plain text.
    pub fn resolve(kind: PopupKind, input_type: Option<InputType>) -> Self {
        match kind {
            PopupKind::Numeric => Self::Number,
            PopupKind::Text => match input_type {
                Some(InputType::Password) => Self::Password,
                Some(InputType::Email) => Self::Email,
                Some(InputType::Text) | None => Self::Text,
            },
        }
    }
}

/// One editable field on the surface.
#[derive(Debug, Clone)]
pub struct FormField {
    field_type: FieldType,
    placeholder: String,
    hidden: bool,
    input: Input,
}

impl FormField {
    fn from_spec(kind: PopupKind, spec: &InputSpec) -> Self {
        Self {
            field_type: FieldType::resolve(kind, spec.input_type),
            placeholder: spec.placeholder.clone(),
            hidden: spec.hidden,
            input: Input::new(spec.init_value.clone()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_required(&self) -> bool {
        !self.hidden
    }

    /// Lower bound shown for numeric fields.
    pub fn min(&self) -> Option<u64> {
        (self.field_type == FieldType::Number).then_some(NUMERIC_MIN)
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Value as drawn: passwords are masked.
    pub fn display_value(&self) -> String {
        match self.field_type {
            FieldType::Password => "•".repeat(self.input.value().chars().count()),
            _ => self.input.value().to_string(),
        }
    }

    /// Apply an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => InputRequest::GoToPrevWord,
                KeyCode::Right => InputRequest::GoToNextWord,
                KeyCode::Char('u') => InputRequest::DeleteLine,
                KeyCode::Char('w') | KeyCode::Backspace => InputRequest::DeletePrevWord,
                _ => return false,
            };
            self.input.handle(req);
            return true;
        }

        if self.field_type == FieldType::Number {
            match key.code {
                KeyCode::Up => {
                    self.step(1);
                    return true;
                }
                KeyCode::Down => {
                    self.step(-1);
                    return true;
                }
                // Swallow non-digits so the value stays numeric.
                KeyCode::Char(c) if !c.is_ascii_digit() => return true,
                _ => {}
            }
        }

        let req = match key.code {
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return false,
        };
        self.input.handle(req);
        true
    }

    fn step(&mut self, delta: i8) {
        let next = match self.input.value().parse::<u64>() {
            Ok(current) if delta > 0 => current.saturating_add(1).max(NUMERIC_MIN),
            Ok(current) => current.saturating_sub(1).max(NUMERIC_MIN),
            Err(_) => NUMERIC_MIN,
        };
        self.set_value(next.to_string());
    }
}

/// The editable form bound to the surface for one showing.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FormField>,
    focused: Option<usize>,
}

impl Form {
    /// Build fresh fields from specs. Any earlier values are discarded.
    pub fn bind(kind: PopupKind, specs: &[InputSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| FormField::from_spec(kind, spec))
                .collect(),
            focused: None,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// With no specs the whole input region is hidden, not just empty.
    pub fn is_region_hidden(&self) -> bool {
        self.fields.is_empty()
    }

    /// All values in spec order.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value().to_string()).collect()
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.focused.and_then(|i| self.fields.get(i))
    }

    /// Focus a field. Hidden or out-of-range fields are refused.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.fields.get(index) {
            Some(field) if !field.is_hidden() => {
                self.focused = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Focus the first visible field, if any.
    pub fn focus_first_visible(&mut self) -> bool {
        self.focused = self.visible_indices().first().copied();
        self.focused.is_some()
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_hidden())
            .map(|(i, _)| i)
            .collect()
    }

    fn cycle_focus(&mut self, forward: bool) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        let position = self
            .focused
            .and_then(|current| visible.iter().position(|&i| i == current));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => visible.len() - 1,
            (Some(p), true) => (p + 1) % visible.len(),
            (Some(p), false) => (p + visible.len() - 1) % visible.len(),
        };
        self.focused = Some(visible[next]);
    }

    /// Route a key to the focused field.
    ///
    /// `Up`/`Down` step numeric fields and move focus on the others.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(index) = self.focused else {
            return false;
        };
        let is_number = self.fields[index].field_type() == FieldType::Number;
        match key.code {
            KeyCode::Down if !is_number => {
                self.focus_next();
                true
            }
            KeyCode::Up if !is_number => {
                self.focus_prev();
                true
            }
            _ => self.fields[index].handle_key(key),
        }
    }
}
