use std::path::Path;

use pagetag::{Document, ScanOptions};

/// Check that an input file exists, with a user-friendly message.
///
/// Runs before any rendering backend is bound, so argument mistakes never
/// depend on a pdfium install.
pub fn require_file(file: &Path) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    Ok(())
}

/// Build scan options from CLI flags, validating them up front.
pub fn scan_options(scale: f64) -> Result<ScanOptions, i32> {
    let options = ScanOptions {
        scale_factor: scale,
        ..ScanOptions::default()
    };
    options.validate().map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    Ok(options)
}

/// Open a document with user-friendly error messages.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    require_file(file)?;
    Document::open_file(file).map_err(|e| {
        eprintln!("Error: failed to open document: {e}");
        1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_file_rejects_missing_path() {
        let result = require_file(Path::new("/nonexistent/batch.pdf"));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn scan_options_accepts_default_scale() {
        let options = scan_options(pagetag::DEFAULT_SCALE_FACTOR).unwrap();
        assert_eq!(options.scale_factor, 6.0);
    }

    #[test]
    fn scan_options_rejects_zero_scale() {
        assert_eq!(scan_options(0.0).unwrap_err(), 1);
    }

    #[test]
    fn scan_options_rejects_negative_scale() {
        assert_eq!(scan_options(-1.5).unwrap_err(), 1);
    }
}
