//! Keyboard-driven forms
//!
//! A form is a column of labelled fields. Tab/Down and BackTab/Up move the
//! focus, Left/Right cycle choice fields, anything else edits the focused
//! text field. `max_len` mirrors an HTML `maxLength`: extra characters are
//! dropped as they are typed.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

const LABEL_WIDTH: usize = 22;

#[derive(Debug, Clone)]
enum FieldKind {
    Text,
    Secret,
    /// `(id, label)` options
    Choice {
        options: Vec<(String, String)>,
        selected: Option<usize>,
    },
}

#[derive(Debug, Clone)]
pub struct Field {
    key: &'static str,
    label: &'static str,
    kind: FieldKind,
    input: Input,
    max_len: Option<usize>,
    placeholder: Option<&'static str>,
}

impl Field {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            input: Input::default(),
            max_len: None,
            placeholder: None,
        }
    }

    pub fn secret(key: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(key, label)
        }
    }

    pub fn choice(key: &'static str, label: &'static str, options: Vec<(String, String)>) -> Self {
        Self {
            kind: FieldKind::Choice {
                options,
                selected: None,
            },
            ..Self::text(key, label)
        }
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn value(&self) -> String {
        match &self.kind {
            FieldKind::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|(id, _)| id.clone())
                .unwrap_or_default(),
            _ => self.input.value().to_string(),
        }
    }

    fn set_value(&mut self, value: &str) {
        match &mut self.kind {
            FieldKind::Choice { options, selected } => {
                *selected = options.iter().position(|(id, _)| id == value);
            }
            _ => {
                let value: String = match self.max_len {
                    Some(n) => value.chars().take(n).collect(),
                    None => value.to_string(),
                };
                self.input = Input::new(value);
            }
        }
    }

    fn display(&self) -> Span<'_> {
        match &self.kind {
            FieldKind::Choice { options, selected } => match selected.and_then(|i| options.get(i)) {
                Some((_, label)) => Span::raw(format!("◀ {label} ▶")),
                None => Span::styled("◀ Selecione ▶", Style::default().fg(Color::DarkGray)),
            },
            _ if self.input.value().is_empty() => match self.placeholder {
                Some(p) => Span::styled(p, Style::default().fg(Color::DarkGray)),
                None => Span::raw(""),
            },
            FieldKind::Secret => Span::raw("*".repeat(self.input.value().chars().count())),
            FieldKind::Text => Span::raw(self.input.value()),
        }
    }

    fn cycle(&mut self, forward: bool) -> bool {
        let FieldKind::Choice { options, selected } = &mut self.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let last = options.len() - 1;
        *selected = Some(match (*selected, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => {
                if i >= last {
                    0
                } else {
                    i + 1
                }
            }
            (Some(i), false) => i.checked_sub(1).unwrap_or(last),
        });
        true
    }

    fn edit(&mut self, key: KeyEvent) -> bool {
        if matches!(self.kind, FieldKind::Choice { .. }) {
            return match key.code {
                KeyCode::Right | KeyCode::Char(' ') => self.cycle(true),
                KeyCode::Left => self.cycle(false),
                _ => false,
            };
        }

        let before = self.input.value().to_string();
        self.input.handle_event(&Event::Key(key));
        if let Some(n) = self.max_len
            && self.input.value().chars().count() > n
        {
            self.input = Input::new(before.clone());
        }
        self.input.value() != before
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Current value of a field; choices yield the option id
    pub fn value(&self, key: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(Field::value)
            .unwrap_or_default()
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.set_value(value);
        }
    }

    /// Clear every field and focus the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.set_value("");
        }
        self.focus = 0;
    }

    pub fn focused_key(&self) -> Option<&'static str> {
        self.fields.get(self.focus).map(|f| f.key)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
        }
    }

    /// Returns `true` when a field value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                false
            }
            _ => self
                .fields
                .get_mut(self.focus)
                .map(|f| f.edit(key))
                .unwrap_or(false),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, active: bool) {
        let block = Block::bordered().title(title.to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = usize::from(inner.height).max(1);
        let offset = (self.focus + 1).saturating_sub(height);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let label_style = if i == self.focus && active {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{:<LABEL_WIDTH$} ", field.label), label_style),
                    field.display(),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(0), 0)),
            inner,
        );

        if let Some(field) = self.fields.get(self.focus)
            && active
            && !matches!(field.kind, FieldKind::Choice { .. })
        {
            let x = inner.x as usize + LABEL_WIDTH + 1 + field.input.visual_cursor();
            let y = inner.y as usize + (self.focus - offset);
            let x = u16::try_from(x).unwrap_or(u16::MAX).min(inner.right().saturating_sub(1));
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            frame.set_cursor_position((x, y));
        }
    }
}
