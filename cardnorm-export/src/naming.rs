//! Output file naming: `HDFC-Input-Jan.csv` becomes `HDFC-Output-Jan.csv`.

use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "statement";

/// Derive the export file name from the uploaded file name.
///
/// The first literal "Input" becomes "Output"; otherwise "-Output" goes before
/// the extension, or "-Output.csv" is appended when there is none.
pub fn output_file_name(input_name: &str) -> String {
    if input_name.contains("Input") {
        return input_name.replacen("Input", "Output", 1);
    }

    match input_name.rfind('.') {
        Some(dot) => format!("{}-Output{}", &input_name[..dot], &input_name[dot..]),
        None => format!("{input_name}-Output.csv"),
    }
}

/// Full output path for `input`, placed in `out_dir` when given and next to
/// the input otherwise.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    let file_name = output_file_name(&name);

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
