//! Generation form state
//!
//! Holds everything the index screen shows: field values, focus, dropdown
//! and notice overlays, the server config status, and the in-flight flag.
//! [`GenerationForm::validate`] turns the fields into a [`GenerateRequest`]
//! or per-field errors; no request is built from invalid input.

use vibeparse_core::{Depth, GenerateRequest, GithubTarget, Proficiency, FILE_TYPES};

use crate::config::FormSettings;
use crate::overlay::{OverlayGuard, OverlayKind, PointerRegistry};

/// Fallback message when generation fails without a server detail
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate script";

/// Mode tabs above the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormTab {
    #[default]
    File,
    /// Not available yet; selecting it shows a notice
    RecentChanges,
}

impl FormTab {
    pub const ALL: [FormTab; 2] = [FormTab::File, FormTab::RecentChanges];

    pub fn label(&self) -> &'static str {
        match self {
            FormTab::File => "File",
            FormTab::RecentChanges => "Recent changes",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, FormTab::File)
    }
}

/// Focusable form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Tabs,
    #[default]
    GithubUrl,
    Proficiency,
    Depth,
    FileTypes,
    Email,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Tabs,
        FormField::GithubUrl,
        FormField::Proficiency,
        FormField::Depth,
        FormField::FileTypes,
        FormField::Email,
        FormField::Submit,
    ];

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::GithubUrl | FormField::Email)
    }
}

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Which selector a dropdown edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKind {
    Proficiency,
    Depth,
}

impl DropdownKind {
    pub fn overlay(&self) -> OverlayKind {
        match self {
            DropdownKind::Proficiency => OverlayKind::ProficiencyDropdown,
            DropdownKind::Depth => OverlayKind::DepthDropdown,
        }
    }

    pub fn options(&self) -> Vec<&'static str> {
        match self {
            DropdownKind::Proficiency => Proficiency::ALL.iter().map(|p| p.label()).collect(),
            DropdownKind::Depth => Depth::ALL.iter().map(|d| d.label()).collect(),
        }
    }
}

/// Open dropdown overlay
#[derive(Debug)]
pub struct Dropdown {
    pub kind: DropdownKind,
    pub highlighted: usize,
    pub guard: OverlayGuard,
}

impl Dropdown {
    pub fn option_count(&self) -> usize {
        self.kind.options().len()
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % self.option_count();
    }

    pub fn highlight_prev(&mut self) {
        let n = self.option_count();
        self.highlighted = (self.highlighted + n - 1) % n;
    }
}

/// Modal notice (e.g. "coming soon")
#[derive(Debug)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub guard: OverlayGuard,
}

/// Result of `GET /api/config`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigStatus {
    #[default]
    Pending,
    Loaded,
    /// Request failed; mock mode stays off
    Unavailable,
}

/// Inline validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub github_url: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.github_url.is_none() && self.email.is_none()
    }
}

/// File type checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeOption {
    pub extension: &'static str,
    pub checked: bool,
}

/// Generation form model
#[derive(Debug)]
pub struct GenerationForm {
    pub tab: FormTab,
    pub focus: FormField,
    pub github_url: TextInput,
    pub email: TextInput,
    pub proficiency: Proficiency,
    pub depth: Depth,
    pub file_types: Vec<FileTypeOption>,
    /// Highlighted checkbox within the file type row
    pub file_type_cursor: usize,
    pub save_to_disk: bool,
    pub config: ConfigStatus,
    pub mock_mode: bool,
    /// A generation request is in flight
    pub loading: bool,
    /// Request-level error (server detail or fallback)
    pub error: Option<String>,
    pub field_errors: FieldErrors,
    pub dropdown: Option<Dropdown>,
    pub notice: Option<Notice>,
}

impl GenerationForm {
    pub fn new(settings: &FormSettings) -> Self {
        let file_types = FILE_TYPES
            .iter()
            .map(|ext| FileTypeOption {
                extension: ext,
                checked: settings.file_types.iter().any(|s| s == ext),
            })
            .collect();

        Self {
            tab: FormTab::File,
            focus: FormField::GithubUrl,
            github_url: TextInput::default(),
            email: TextInput::default(),
            proficiency: settings.proficiency,
            depth: settings.depth,
            file_types,
            file_type_cursor: 0,
            save_to_disk: settings.save_to_disk,
            config: ConfigStatus::Pending,
            mock_mode: false,
            loading: false,
            error: None,
            field_errors: FieldErrors::default(),
            dropdown: None,
            notice: None,
        }
    }

    /// Extensions currently checked, in display order
    pub fn selected_file_types(&self) -> Vec<String> {
        self.file_types
            .iter()
            .filter(|opt| opt.checked)
            .map(|opt| opt.extension.to_string())
            .collect()
    }

    pub fn toggle_file_type(&mut self, idx: usize) {
        if let Some(opt) = self.file_types.get_mut(idx) {
            opt.checked = !opt.checked;
        }
    }

    pub fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::GithubUrl => Some(&mut self.github_url),
            FormField::Email => Some(&mut self.email),
            _ => None,
        }
    }

    /// Open a dropdown, acquiring its outside-press listener
    pub fn open_dropdown(&mut self, kind: DropdownKind, pointers: &PointerRegistry) {
        let highlighted = match kind {
            DropdownKind::Proficiency => Proficiency::ALL
                .iter()
                .position(|p| *p == self.proficiency)
                .unwrap_or(0),
            DropdownKind::Depth => Depth::ALL.iter().position(|d| *d == self.depth).unwrap_or(0),
        };
        self.dropdown = Some(Dropdown {
            kind,
            highlighted,
            guard: OverlayGuard::acquire(pointers, kind.overlay()),
        });
    }

    /// Apply option `idx` of the open dropdown and close it
    pub fn select_dropdown_option(&mut self, idx: usize) {
        let Some(dropdown) = self.dropdown.take() else {
            return;
        };
        match dropdown.kind {
            DropdownKind::Proficiency => {
                if let Some(p) = Proficiency::ALL.get(idx) {
                    self.proficiency = *p;
                }
            }
            DropdownKind::Depth => {
                if let Some(d) = Depth::ALL.get(idx) {
                    self.depth = *d;
                }
            }
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn show_notice(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        pointers: &PointerRegistry,
    ) {
        self.notice = Some(Notice {
            title: title.into(),
            message: message.into(),
            guard: OverlayGuard::acquire(pointers, OverlayKind::Notice),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Build the request, or report what is wrong with the fields
    pub fn validate(&self) -> Result<GenerateRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let github_url = self.github_url.value().trim().to_string();
        let email = self.email.value().trim().to_string();

        if !self.mock_mode {
            if github_url.is_empty() {
                errors.github_url = Some("GitHub URL is required".to_string());
            } else if GithubTarget::parse(&github_url).is_none() {
                errors.github_url = Some("Enter a GitHub repository URL".to_string());
            }
        }

        if !email.is_empty() && !is_plausible_email(&email) {
            errors.email = Some("Enter a valid email address".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let file_types = self.selected_file_types();
        Ok(GenerateRequest {
            github_url,
            proficiency: self.proficiency,
            depth: self.depth,
            save_to_disk: self.save_to_disk,
            email: (!email.is_empty()).then_some(email),
            file_types: (!file_types.is_empty()).then_some(file_types),
        })
    }
}

/// `local@domain` with text on both sides of a single `@`
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
