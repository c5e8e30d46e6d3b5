//! TranslatorState - Window Controller State
//!
//! Owns what the window decides: the translation direction, the theme, the
//! pending request and the status bar. The pane texts live in their input
//! widgets; transitions here return the [`PaneUpdate`]s and [`PaneEdit`]s the
//! view applies to them. Nothing here touches GPUI, which keeps the behavior
//! testable without a window.

use snafu::OptionExt;
use tracing::{debug, info, warn};

use crate::domain::Direction;
use crate::error::{Error, NoSelectionSnafu, Result};
use crate::services::clipboard::Clipboard;
use crate::services::translation::TranslationRequest;
use crate::state::pane_edit::{PaneEdit, PaneSnapshot};
use crate::state::status_state::{ModelStatus, StatusLine};
use crate::theme::{Palette, ThemeMode};

/// Identifies one of the two text panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    Input,
    Output,
}

impl PaneId {
    pub fn name(self) -> &'static str {
        match self {
            PaneId::Input => "input",
            PaneId::Output => "output",
        }
    }
}

/// New full text for a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneUpdate {
    pub pane: PaneId,
    pub text: String,
}

impl PaneUpdate {
    fn clear(pane: PaneId) -> Self {
        Self {
            pane,
            text: String::new(),
        }
    }
}

/// What asked for a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateTrigger {
    /// The Translate button, refused while a request is pending
    Button,
    /// A key release in the input pane, always submitted
    KeyRelease,
}

/// Controller state for the translator window
#[derive(Debug)]
pub struct TranslatorState {
    direction: Direction,
    theme: ThemeMode,
    /// Id of the request whose result the output pane is waiting for
    pending: Option<u64>,
    next_request_id: u64,
    model: ModelStatus,
    status: Option<StatusLine>,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorState {
    pub fn new() -> Self {
        Self {
            direction: Direction::default(),
            theme: ThemeMode::default(),
            pending: None,
            next_request_id: 1,
            model: ModelStatus::Loading,
            status: Some(StatusLine::info("Loading translation model...")),
        }
    }

    // ==================== Getters ====================

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn input_label(&self) -> String {
        self.direction.input_label()
    }

    pub fn output_label(&self) -> String {
        self.direction.output_label()
    }

    /// Whether a request is in flight
    pub fn is_translating(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the Translate button accepts clicks
    pub fn can_click_translate(&self) -> bool {
        !self.is_translating()
    }

    pub fn translate_label(&self) -> &'static str {
        if self.is_translating() {
            "Translating..."
        } else {
            "Translate"
        }
    }

    pub fn model_status(&self) -> &ModelStatus {
        &self.model
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    // ==================== Toggles ====================

    /// Swap source and target languages. Both panes are cleared and any
    /// in-flight result is discarded when it arrives.
    pub fn toggle_direction(&mut self) -> [PaneUpdate; 2] {
        self.direction = self.direction.toggled();
        self.pending = None;
        info!(
            source = self.direction.source().code(),
            target = self.direction.target().code(),
            "Translation direction swapped"
        );
        [PaneUpdate::clear(PaneId::Input), PaneUpdate::clear(PaneId::Output)]
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "Theme toggled");
    }

    // ==================== Translation ====================

    /// Build a request from the input pane text for the current direction.
    /// Returns `None` when the input is blank, or when the button is clicked
    /// while a request is pending; nothing changes in either case.
    pub fn begin_translation(
        &mut self,
        input: &str,
        trigger: TranslateTrigger,
    ) -> Option<TranslationRequest> {
        if trigger == TranslateTrigger::Button && !self.can_click_translate() {
            debug!(pending = ?self.pending, "Translate clicked while pending, ignored");
            return None;
        }

        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        let request = TranslationRequest {
            id: self.next_request_id,
            text: text.to_string(),
            source: self.direction.source(),
            target: self.direction.target(),
        };
        self.next_request_id += 1;
        self.pending = Some(request.id);
        Some(request)
    }

    /// Apply a worker result. Results for anything but the pending request
    /// are dropped; otherwise the output pane is replaced.
    pub fn finish_translation(
        &mut self,
        request_id: u64,
        result: Result<String>,
    ) -> Option<PaneUpdate> {
        if self.pending != Some(request_id) {
            debug!(request_id, pending = ?self.pending, "Dropping stale translation result");
            return None;
        }
        self.pending = None;

        let text = match result {
            Ok(translated) => {
                if self.model.is_ready() {
                    self.status = None;
                }
                translated
            }
            Err(e) => {
                warn!(request_id, error = %e, "Showing translation failure");
                self.status = Some(StatusLine::error(e.to_string()));
                format!("Translation failed: {e}")
            }
        };

        Some(PaneUpdate {
            pane: PaneId::Output,
            text,
        })
    }

    /// Forget the pending request after it could not be submitted
    pub fn abandon_translation(&mut self, error: &Error) {
        self.pending = None;
        self.status = Some(StatusLine::error(error.to_string()));
    }

    pub fn set_model_ready(&mut self) {
        self.model = ModelStatus::Ready;
        self.status = Some(StatusLine::info("Model ready"));
    }

    pub fn set_model_failed(&mut self, message: String) {
        self.status = Some(StatusLine::error(format!(
            "Failed to load translation model: {message}"
        )));
        self.model = ModelStatus::Failed(message);
    }

    // ==================== Clipboard ====================

    /// Copy the pane's selection to the clipboard
    pub fn copy(
        &mut self,
        pane: PaneId,
        snapshot: &PaneSnapshot,
        clipboard: &mut impl Clipboard,
    ) -> Result<()> {
        let result = write_selection(snapshot, clipboard);
        self.report_clipboard(pane, "Copied", result)
    }

    /// Copy the pane's selection and return the edit that removes it
    pub fn cut(
        &mut self,
        pane: PaneId,
        snapshot: &PaneSnapshot,
        clipboard: &mut impl Clipboard,
    ) -> Result<PaneEdit> {
        let result = write_selection(snapshot, clipboard)
            .and_then(|()| snapshot.cut_edit().context(NoSelectionSnafu));
        self.report_clipboard(pane, "Cut", result)
    }

    /// Edit inserting the clipboard text at the pane's caret. An empty
    /// clipboard is silently ignored.
    pub fn paste(
        &mut self,
        pane: PaneId,
        snapshot: &PaneSnapshot,
        clipboard: &mut impl Clipboard,
    ) -> Option<PaneEdit> {
        match clipboard.read_text() {
            Some(text) if !text.is_empty() => Some(snapshot.paste_edit(&text)),
            _ => {
                debug!(pane = pane.name(), "Clipboard empty, nothing to paste");
                None
            }
        }
    }

    fn report_clipboard<T>(&mut self, pane: PaneId, verb: &str, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => {
                self.status = Some(StatusLine::info(format!("{verb} to clipboard")));
            }
            Err(Error::NoSelection) => {
                debug!(pane = pane.name(), "{verb} requested without a selection");
                self.status = Some(StatusLine::warn(format!(
                    "Select text in the {} pane first",
                    pane.name()
                )));
            }
            Err(e) => {
                self.status = Some(StatusLine::error(e.to_string()));
            }
        }
        result
    }
}

fn write_selection(snapshot: &PaneSnapshot, clipboard: &mut impl Clipboard) -> Result<()> {
    let selected = snapshot.selected_text().context(NoSelectionSnafu)?;
    clipboard.write_text(selected.to_string());
    Ok(())
}
