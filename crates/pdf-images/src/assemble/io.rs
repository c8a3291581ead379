//! File I/O for image items and finished documents

use crate::types::*;
use std::path::Path;

/// Read an image file into an item named after its file name
pub async fn load_image_item(path: impl AsRef<Path>, id: ItemId, order: i64) -> Result<ImageItem> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(ImageItem::new(id, name, data, order))
}

/// Load several files; item `i` gets id `i` and order `i`
pub async fn load_image_items(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageItem>> {
    let mut items = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        items.push(load_image_item(path, ItemId(i as u64), i as i64).await?);
    }
    Ok(items)
}

/// Save a serialized PDF
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Output file name with a `.pdf` suffix
pub fn ensure_pdf_extension(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "output.pdf".to_string();
    }
    if name.to_ascii_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}
