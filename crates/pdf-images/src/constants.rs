//! Shared constants for image-to-PDF assembly
//!
//! This module centralizes unit conversion and the magic numbers used
//! throughout layout and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// A4 short edge in millimeters
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 long edge in millimeters
pub const A4_HEIGHT_MM: f32 = 297.0;

/// US Letter short edge in points (8.5")
pub const LETTER_WIDTH_PT: f32 = 612.0;

/// US Letter long edge in points (11")
pub const LETTER_HEIGHT_PT: f32 = 792.0;

// =============================================================================
// Layout
// =============================================================================

/// Smallest printable width/height in points. Margins that eat the whole
/// page are clamped to this instead of producing a negative draw region.
pub const MIN_PRINTABLE_PT: f32 = 1.0;

/// Default margin on every edge (millimeters)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// =============================================================================
// Rendering
// =============================================================================

/// PDF version written to the header
pub const PDF_VERSION: &str = "1.5";

/// Resource name of the single image XObject on each page
pub const IMAGE_RESOURCE_NAME: &str = "Im0";

// =============================================================================
// Inputs
// =============================================================================

/// Inputs larger than this are still processed, with a warning (50 MiB)
pub const LARGE_IMAGE_WARNING_BYTES: usize = 50 * 1024 * 1024;
