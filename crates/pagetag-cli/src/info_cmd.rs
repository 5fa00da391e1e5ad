use std::path::Path;

use crate::shared::{open_document, require_file};

pub fn run(file: &Path) -> Result<(), i32> {
    require_file(file)?;
    let document = open_document(file)?;

    println!("Pages: {}", document.page_count());
    for index in 0..document.page_count() {
        let (width, height) = document.page_size(index).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
        println!("page {:>4}: {width:.2} x {height:.2} pt", index + 1);
    }
    Ok(())
}
