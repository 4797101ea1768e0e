use crate::app::cli::USAGE;
use crate::app::formatter::SourceGenerator;
use crate::app::models::{EmissionKind, RunConfiguration};
use crate::app::naming;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Generates the output file(s) for the configured input.
///
/// A `.h`/`.hpp` output gets a declaration-only header plus a definition-only
/// `.c`/`.cpp` companion; any other output gets a single combined file.
/// Returns the paths written, in order.
pub fn process_file(config: &RunConfiguration) -> Result<Vec<PathBuf>> {
    let Some(input_path) = config.input_path.as_deref() else {
        bail!("error: no input file\nUsage: {}", USAGE);
    };

    // guard and companion names are derived from the text of the output path
    let output_name = config.output_path.to_str().with_context(|| {
        format!(
            "output file name is not valid UTF-8: {}",
            config.output_path.display()
        )
    })?;

    let mut input = File::open(input_path)
        .with_context(|| format!("cannot find {}", input_path.display()))?;

    let generator = SourceGenerator::new(config, input_path);

    if naming::is_header_file(output_name) {
        let header_path = config.output_path.clone();
        emit(&generator, &mut input, &header_path, EmissionKind::Declaration)?;

        // header stays on disk if the companion cannot be created
        let source_path = PathBuf::from(naming::source_companion(output_name));
        let size = emit(&generator, &mut input, &source_path, EmissionKind::Definition)?;

        log::info!(
            "Embedded {} bytes from {} into {} and {}",
            size,
            input_path.display(),
            header_path.display(),
            source_path.display()
        );
        Ok(vec![header_path, source_path])
    } else {
        let size = emit(&generator, &mut input, &config.output_path, EmissionKind::Combined)?;

        log::info!(
            "Embedded {} bytes from {} into {}",
            size,
            input_path.display(),
            config.output_path.display()
        );
        Ok(vec![config.output_path.clone()])
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("cannot open output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn emit(
    generator: &SourceGenerator<'_>,
    input: &mut File,
    path: &Path,
    kind: EmissionKind,
) -> Result<u64> {
    let mut output = create_output(path)?;
    let size = generator
        .generate(input, &mut output, kind)
        .and_then(|size| output.flush().map(|_| size))
        .with_context(|| format!("cannot write output file {}", path.display()))?;
    log::debug!("Wrote {:?} fragment to {}", kind, path.display());
    Ok(size)
}
