use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "filetoarray [options] file...";

pub const VERSION_INFO: &str = concat!("filetoarray version ", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(
    name = "filetoarray",
    about = "Convert a binary file into a C/C++ byte array",
    override_usage = USAGE,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// File whose bytes are embedded into the generated array
    pub file: Option<PathBuf>,

    /// Place the output into <FILE> (.h/.hpp also produces a .c/.cpp companion)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set indentation width of each line of bytes
    #[arg(short = 'i', long = "indent", value_name = "WIDTH")]
    pub indent: Option<usize>,

    /// Use PROGMEM modifier
    #[arg(short = 'p', long = "progmem")]
    pub progmem: bool,

    /// Display this information
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Display version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}
