// src/utils/text_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Saves the concatenated roster text plus an annotation file listing every
/// region a layout pattern captured. Useful when a run reports fewer members
/// than the document visibly contains: the spans show which lines the
/// patterns actually fit.
pub fn dump_extraction_debug(text: &str, dir: &Path, patterns: &[Regex]) -> Result<(), AppError> {
    fs::create_dir_all(dir)?;

    let blob_path = dir.join("roster_text.txt");
    fs::write(&blob_path, text)?;
    tracing::info!("Saved raw roster text to {}", blob_path.display());

    let mut annotations = String::new();
    for (idx, re) in patterns.iter().enumerate() {
        let mut match_count = 0;
        for mat in re.find_iter(text) {
            annotations.push_str(&format!(
                "pattern {} span {}..{}: {:?}\n",
                idx,
                mat.start(),
                mat.end(),
                mat.as_str()
            ));
            match_count += 1;
        }
        annotations.push_str(&format!("pattern {} total matches: {}\n", idx, match_count));
    }

    let spans_path = dir.join("pattern_spans.txt");
    fs::write(&spans_path, annotations)?;
    tracing::info!("Saved pattern match spans to {}", spans_path.display());

    Ok(())
}
