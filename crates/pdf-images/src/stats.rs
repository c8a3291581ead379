use crate::layout::DocumentLayout;
use crate::types::*;

/// Calculate statistics for a laid-out document
pub fn calculate_statistics(layout: &DocumentLayout) -> DocumentStatistics {
    let landscape_pages = layout
        .pages
        .iter()
        .filter(|page| page.orientation == Orientation::Landscape)
        .count();

    DocumentStatistics {
        pages: layout.pages.len(),
        portrait_pages: layout.pages.len() - landscape_pages,
        landscape_pages,
        skipped_items: layout.skipped.len(),
        warnings: layout.warnings.len(),
    }
}
