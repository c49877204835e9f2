//! State and actions behind the graphical form, independent of any toolkit.
//!
//! A view draws the fields, binds them to [`FormState`] and forwards button
//! presses to [`FormState::generate`] and [`FormState::copy`]. Both calls
//! return the dialog to show, if any.

use log::debug;

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::generate::generate;
use crate::recommend::SymbolPolicy;
use crate::render::Style;
use crate::types::{Context, OutputMode, Request};

pub const DEFAULT_INPUT: &str = "Penrhyn@Slate";
pub const DEFAULT_LIMIT: &str = "12";
pub const DEFAULT_SYMBOL: &str = "@!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub message: String,
}

impl Dialog {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Warning,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            DialogLevel::Info => "Info",
            DialogLevel::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub input: String,
    pub limit: String,
    pub symbol: String,
    pub mode: OutputMode,
    pub single_symbol: bool,
    output: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            limit: DEFAULT_LIMIT.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            mode: OutputMode::All,
            single_symbol: false,
            output: String::new(),
        }
    }
}

impl FormState {
    /// Read-only result text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Validates the fields and builds a request, or the warning to show.
    pub fn request(&self) -> std::result::Result<Request, Dialog> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err(Dialog::warning("Please enter the input string!"));
        }

        let limit_text = self.limit.trim();
        let limit = if limit_text.is_empty() {
            None
        } else {
            match limit_text.parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => return Err(Dialog::warning("Limit must be an integer!")),
            }
        };

        Ok(Request {
            input: input.to_string(),
            limit,
            symbol: self.symbol.clone(),
            mode: self.mode,
            policy: if self.single_symbol {
                SymbolPolicy::Once
            } else {
                SymbolPolicy::Repeat
            },
        })
    }

    /// Replaces the output with a fresh rendering. On validation failure the
    /// output is left untouched and a warning is returned.
    pub fn generate(&mut self, ctx: &Context) -> Option<Dialog> {
        let request = match self.request() {
            Ok(request) => request,
            Err(dialog) => {
                debug!("form validation failed: {}", dialog.message);
                return Some(dialog);
            }
        };
        match generate(ctx, &request) {
            Ok(generated) => {
                self.output = generated.render(&request, Style::plain());
                None
            }
            Err(e) => Some(Dialog::warning(e.to_string())),
        }
    }

    /// Copies the displayed output. `open` is only called when there is
    /// something to copy.
    pub fn copy<F>(&self, open: F) -> Dialog
    where
        F: FnOnce() -> Result<Box<dyn Clipboard>>,
    {
        if self.output.trim().is_empty() {
            return Dialog::info("No content to copy!");
        }
        match open().and_then(|mut clipboard| clipboard.set_text(&self.output)) {
            Ok(()) => Dialog::info("Content copied to clipboard"),
            Err(e) => {
                debug!("copy failed: {}", e);
                Dialog::warning(format!("Clipboard is not available ({})", e))
            }
        }
    }
}
