use std::path::Path;

use pagetag::extract_codes;

use crate::cli::OutputFormat;
use crate::shared::{open_document, require_file, scan_options};

pub fn run(file: &Path, scale: f64, format: &OutputFormat) -> Result<(), i32> {
    require_file(file)?;
    let options = scan_options(scale)?;
    let document = open_document(file)?;

    let extraction = extract_codes(&document, &options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    for warning in &extraction.warnings {
        eprintln!("warning: {warning}");
    }

    match format {
        OutputFormat::Text => {
            for (page, code) in extraction.results.iter().enumerate() {
                if let Some(code) = code {
                    println!("{}\t{}", page + 1, code);
                }
            }
            eprintln!(
                "{} of {} pages produced a code",
                extraction.output_sequence().len(),
                extraction.results.len()
            );
        }
        OutputFormat::Json => {
            let pages: Vec<serde_json::Value> = extraction
                .results
                .iter()
                .enumerate()
                .map(|(page, code)| {
                    serde_json::json!({
                        "page": page,
                        "code": code,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&pages).unwrap());
        }
    }

    Ok(())
}
