use std::fs::File;
use std::io::{self, Write};

use is_terminal::IsTerminal;
use passforge::error::{PassforgeError, Result};
use passforge::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub no_color: bool,
}

impl OutputConfig {
    /// Color only when printing to an interactive terminal.
    pub fn use_color(&self) -> bool {
        !self.no_color && matches!(self.dest, OutputDest::Stdout) && io::stdout().is_terminal()
    }
}

pub fn write_output(text: &str, config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path).map_err(|e| PassforgeError::file_write(path, e))?;
            file.write_all(text.as_bytes())
                .map_err(|e| PassforgeError::file_write(path, e))?;
            println!("\n📁 Output saved to file: {}", path.display());
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
            Ok(())
        }
    }
}
