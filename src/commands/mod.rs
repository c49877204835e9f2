mod generate;

pub use generate::run_generate;

use log::debug;

use crate::io::{write_output, OutputConfig};
use passforge::clipboard::{self, Clipboard};
use passforge::error::{PassforgeError, Result};
use passforge::types::{Context, OutputDest, Request};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

pub struct GenerateCommand {
    pub request: Request,
    pub output: OutputDest,
    pub copy: bool,
    pub json: bool,
    pub no_color: bool,
}

impl GenerateCommand {
    /// Runs the command against the given clipboard opener. Returns the copy
    /// outcome when `--copy` was requested.
    fn execute_with<F>(&self, ctx: &Context, open: F) -> Result<Option<CopyStatus>>
    where
        F: FnOnce() -> Result<Box<dyn Clipboard>>,
    {
        let config = OutputConfig {
            dest: self.output.clone(),
            no_color: self.no_color,
        };
        let (text, recommendation) = run_generate(ctx, &self.request, self.json, config.use_color())?;
        write_output(&text, &config)?;

        if !self.copy {
            return Ok(None);
        }
        Ok(Some(copy_recommendation(&recommendation, open)))
    }
}

impl CommandHandler for GenerateCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        self.execute_with(ctx, clipboard::system_clipboard)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum CopyStatus {
    Copied,
    Unavailable(PassforgeError),
}

/// Clipboard failures are reported on stderr but never fail the command.
fn copy_recommendation<F>(recommendation: &str, open: F) -> CopyStatus
where
    F: FnOnce() -> Result<Box<dyn Clipboard>>,
{
    match open().and_then(|mut clip| clip.set_text(recommendation)) {
        Ok(()) => {
            eprintln!("📋 Recommended password copied to clipboard");
            CopyStatus::Copied
        }
        Err(e) => {
            eprintln!("⚠️ Warning: {}", e);
            CopyStatus::Unavailable(e)
        }
    }
}

pub struct FormCommand;

impl CommandHandler for FormCommand {
    #[cfg(feature = "gui")]
    fn execute(&self, ctx: &Context) -> Result<()> {
        debug!("launching form window");
        crate::gui::run(Context::new(ctx.registry))
    }

    #[cfg(not(feature = "gui"))]
    fn execute(&self, _ctx: &Context) -> Result<()> {
        use clap::CommandFactory;

        debug!("built without the gui feature");
        eprintln!("Graphical form not available in this build; pass --input to use the command line.\n");
        crate::cli::Cli::command().print_help()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge::types::{EncodingKind, OutputMode};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct SharedClipboard(Rc<RefCell<Option<String>>>);

    impl Clipboard for SharedClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn command(request: Request, dir: &tempfile::TempDir, copy: bool) -> GenerateCommand {
        GenerateCommand {
            request,
            output: OutputDest::File(dir.path().join("out.txt")),
            copy,
            json: false,
            no_color: true,
        }
    }

    #[test]
    fn test_copy_places_recommendation_not_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = Request::new("Rock411Gmail");
        request.limit = Some(12);
        request.symbol = "@!".to_string();
        request.mode = OutputMode::All;
        let cmd = command(request, &dir, true);

        let shared = Rc::new(RefCell::new(None));
        let handle = Rc::clone(&shared);
        let status = cmd
            .execute_with(&Context::default(), move || {
                Ok(Box::new(SharedClipboard(handle)) as Box<dyn Clipboard>)
            })
            .unwrap();

        assert!(matches!(status, Some(CopyStatus::Copied)));
        assert_eq!(shared.borrow().as_deref(), Some("Um9jazQxMUdt@!"));
        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert!(written.contains("Encoding Type | Result"));
    }

    #[test]
    fn test_copy_unavailable_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = Request::new("abc");
        request.mode = OutputMode::Single(EncodingKind::Hex);
        let cmd = command(request, &dir, true);

        let status = cmd
            .execute_with(&Context::default(), || {
                Err(PassforgeError::clipboard_unavailable("headless"))
            })
            .unwrap();

        match status {
            Some(CopyStatus::Unavailable(PassforgeError::ClipboardUnavailable { reason })) => {
                assert_eq!(reason, "headless");
            }
            other => panic!("expected unavailable clipboard, got {:?}", other),
        }
        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(written, "HEX : 616263");
    }

    #[test]
    fn test_no_copy_flag_never_opens_clipboard() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(Request::new("abc"), &dir, false);
        let status = cmd
            .execute_with(&Context::default(), || panic!("clipboard must not be opened"))
            .unwrap();
        assert!(status.is_none());
    }
}
