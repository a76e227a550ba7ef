//! Extract command: print a document's text without analyzing it.

use std::path::Path;

use crate::document::UploadedDocument;
use crate::extract::extract;

use super::spinner;

pub fn cmd_extract(file: &Path) -> anyhow::Result<()> {
    let pb = spinner("Reading document...".to_string());
    let loaded = UploadedDocument::from_path(file).and_then(|doc| extract(&doc));
    pb.finish_and_clear();

    println!("{}", loaded?);
    Ok(())
}
