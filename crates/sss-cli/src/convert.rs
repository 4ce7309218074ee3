//! Dictionary-to-syntax conversion: the I/O shell around the generator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sss_ingest::load_dictionary;
use sss_syntax::generate_program;

use crate::types::ConvertSummary;

/// Convert one Triple-S dictionary into an SPSS syntax file.
///
/// The output path defaults to the dictionary's directory and base name with
/// a `.sps` extension. The generated SAVE directive points the interpreter at
/// the same directory for the `.sav` artifact.
pub fn run_convert(
    dictionary_path: &Path,
    data_file: &str,
    output: Option<&Path>,
) -> Result<ConvertSummary> {
    let span = info_span!("convert", dictionary = %dictionary_path.display());
    let _guard = span.enter();

    let dictionary = load_dictionary(dictionary_path)
        .with_context(|| format!("read dictionary {}", dictionary_path.display()))?;

    let stem = output_stem(dictionary_path);
    let directory = parent_directory(dictionary_path);
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dictionary_path.with_file_name(format!("{stem}.sps")));

    let program = generate_program(&dictionary, data_file, &directory, &stem);

    // One scoped write pass; a failure aborts the run and leaves whatever
    // was already flushed on disk.
    let file = File::create(&output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(program.as_bytes())
        .with_context(|| format!("write {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;

    info!(
        output = %output_path.display(),
        variables = dictionary.len(),
        "wrote syntax file"
    );

    Ok(ConvertSummary {
        dictionary_path: dictionary_path.to_path_buf(),
        output_path,
        variables: dictionary.len(),
        layout_entries: dictionary.layout_entry_count(),
        value_label_sections: dictionary.value_label_section_count(),
    })
}

/// Derive the output base name from the dictionary file name.
///
/// The extension characters are trimmed as a set from both ends of the file
/// name, not stripped as a suffix, so names sharing characters with their
/// extension lose them too ("my.xml" becomes "y"). Kept for parity with the
/// conversion this tool replaces; see DESIGN.md.
fn output_stem(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    base.trim_matches(|c: char| extension.contains(c)).to_string()
}

/// Directory the SAVE directive points at: the dictionary's parent, or `.`
/// for a bare file name.
fn parent_directory(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    }
}
