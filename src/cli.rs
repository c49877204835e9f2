use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use passforge::types::OutputMode;

#[derive(Parser)]
#[command(name = "passforge")]
#[command(about = "Generate encoded passwords based on an input string")]
#[command(after_help = "Run without arguments to open the graphical form.")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        short = 'i',
        value_parser = NonEmptyStringValueParser::new(),
        help = "Input string (e.g. master password + site name)"
    )]
    pub input: String,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Number of Base64 characters to keep in the recommended password [default: 12]"
    )]
    pub limit: Option<i64>,

    #[arg(long, default_value = "", hide_default_value = true, help = "Special symbol(s) appended to every output")]
    pub symbol: String,

    #[arg(
        long,
        default_value = "all",
        value_parser = OutputMode::parse,
        help = "Output mode: base64, hex, unicode, ascii, md5, sha1, sha256, recommend or all (codec aliases accepted)"
    )]
    pub mode: OutputMode,

    #[arg(long, help = "Write output to file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Copy the recommended password to the clipboard")]
    pub copy: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Append the symbol to the recommended password only once")]
    pub single_symbol: bool,

    #[arg(long, short = 'v', help = "Print debug logs to stderr")]
    pub verbose: bool,
}
