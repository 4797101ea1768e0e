use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILENAME: &str = "./array.h";
pub const DEFAULT_LINE_INDENT: usize = 4;

/// What a single run is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Process,
    Help,
    Version,
}

/// Represents the final configuration after merging the defaults file and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    pub mode: Mode,
    pub input_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub indent: usize,
    pub progmem: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            mode: Mode::Process,
            input_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            indent: DEFAULT_LINE_INDENT,
            progmem: false,
        }
    }
}

/// Which fragments of the generated source a single output file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionKind {
    /// Header half: include guard, constants and an `extern` prototype.
    Declaration,
    /// Source half: include of the paired header and the initialized array.
    Definition,
    /// Everything in one file, array declared `static`.
    Combined,
}

impl EmissionKind {
    pub fn declares(self) -> bool {
        matches!(self, EmissionKind::Declaration | EmissionKind::Combined)
    }

    pub fn defines(self) -> bool {
        matches!(self, EmissionKind::Definition | EmissionKind::Combined)
    }

    pub fn storage_class(self) -> &'static str {
        match self {
            EmissionKind::Declaration => "extern ",
            EmissionKind::Definition => "",
            EmissionKind::Combined => "static ",
        }
    }
}
