use crate::app::models::{EmissionKind, RunConfiguration};
use crate::app::naming;
use chrono::{DateTime, Utc};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

pub const BYTES_PER_LINE: u64 = 16;
const ELEMENT_INDENT: usize = 1;
const IO_BUFFER_SIZE: usize = 8192;

const LAST_MODIFIED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

const PROGMEM_MODIFIER: &str = " PROGMEM";
const PROGMEM_IMPORT: &str = "#if defined ESP8266\n#include <pgmspace.h>\n#endif\n\n";

/// Writes `input` as `0xNN` literals, sixteen per line, without a trailing separator.
///
/// The first literal of every line is preceded by `indent` spaces, every other one by a
/// single space after the comma. Returns the number of bytes transcoded.
pub fn write_hex_body<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    indent: usize,
) -> io::Result<u64> {
    let mut buffer = [0u8; IO_BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for &byte in &buffer[..read] {
            let new_line = total % BYTES_PER_LINE == 0;
            if total > 0 {
                output.write_all(if new_line { ",\n" } else { "," }.as_bytes())?;
            }
            let width = if new_line { indent } else { ELEMENT_INDENT };
            write!(output, "{:width$}0x{:02X}", "", byte, width = width)?;
            total += 1;
        }
    }

    Ok(total)
}

/// Size of a seekable stream, leaving its position untouched.
pub fn stream_len<S: Seek>(stream: &mut S) -> io::Result<u64> {
    let current = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(current))?;
    Ok(end)
}

/// Renders the header/source fragments for one input file.
///
/// Names are derived once up front: the array symbol from the input path, the include
/// guard and the paired header name from the output path.
pub struct SourceGenerator<'a> {
    config: &'a RunConfiguration,
    input_name: String,
    symbol: String,
    guard: String,
    header_name: String,
    last_modified: String,
}

impl<'a> SourceGenerator<'a> {
    pub fn new(config: &'a RunConfiguration, input_path: &Path) -> Self {
        Self::with_timestamp(config, input_path, Utc::now())
    }

    pub fn with_timestamp(
        config: &'a RunConfiguration,
        input_path: &Path,
        now: DateTime<Utc>,
    ) -> Self {
        let input = input_path.to_string_lossy();
        let output = config.output_path.to_string_lossy();

        Self {
            config,
            input_name: naming::basename(&input).to_string(),
            symbol: naming::symbol_name(&input),
            guard: naming::symbol_name(&output),
            header_name: naming::basename(&output).to_string(),
            last_modified: now.format(LAST_MODIFIED_FORMAT).to_string(),
        }
    }

    /// Writes one fragment of `kind` for `input` into `output`, returning the input size.
    ///
    /// Body-producing kinds rewind `input` to its start first, so the same stream can be
    /// handed to a declaration pass and a definition pass in either order.
    pub fn generate<R, W>(&self, input: &mut R, output: &mut W, kind: EmissionKind) -> io::Result<u64>
    where
        R: Read + Seek,
        W: Write,
    {
        let size = stream_len(input)?;
        log::debug!("Emitting {:?} fragment for {} ({} bytes)", kind, self.input_name, size);

        write!(
            output,
            "/*\n \
             * File: {}, size: {} bytes.\n \
             *\n \
             * This code was generated by filetoarray tool (https://github.com/xreef/FileToArray).\n \
             * Try filetoarray online: https://www.mischianti.org/online-converter-file-to-cpp-gzip-byte-array-3/.\n \
             */\n\n",
            self.input_name, size
        )?;

        match kind {
            EmissionKind::Declaration => {
                write!(output, "#ifndef {0}\n#define {0}\n\n", self.guard)?;
            }
            EmissionKind::Definition => {
                write!(output, "#include \"{}\"\n\n", self.header_name)?;
            }
            EmissionKind::Combined => {}
        }

        if kind.declares() {
            write!(output, "#define {}_LAST_MODIFIED \"{}\"\n\n", self.symbol, self.last_modified)?;
            write!(output, "#define {}_LEN {}\n\n", self.symbol, size)?;
        }

        let modifier = if self.config.progmem && kind.defines() {
            output.write_all(PROGMEM_IMPORT.as_bytes())?;
            PROGMEM_MODIFIER
        } else {
            ""
        };

        write!(
            output,
            "{}const unsigned char {}[{}]{}",
            kind.storage_class(),
            naming::variable_name(&self.symbol),
            size,
            modifier
        )?;

        if kind.defines() {
            output.write_all(b" = {\n")?;
            input.seek(SeekFrom::Start(0))?;
            write_hex_body(input, output, self.config.indent)?;
            output.write_all(b"}")?;
        }

        output.write_all(b";\n")?;

        if kind == EmissionKind::Declaration {
            write!(output, "\n#endif /* {} */\n", self.guard)?;
        }

        Ok(size)
    }
}
