use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for DOCX text (e.g. "Arial", "Calibri"). PDF output always
    /// uses the built-in Helvetica.
    pub body_font: String,

    /// Title font size in points.
    pub title_size: usize,

    /// Body text font size in points.
    pub body_size: usize,

    /// DOCX page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// PDF page geometry.
    pub page: PageGeometry,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            title_size: 16,
            body_size: 12,
            margin_inches: 1.0,
            page: PageGeometry::default(),
        }
    }
}

impl DocumentStyles {
    /// DOCX margin in twentieths of a point.
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}

/// PDF page geometry, in millimetres from the top-left corner.
///
/// Defaults: A4 portrait, title baseline at (20, 20), body from (20, 40),
/// body wrapped to 170 mm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub left_mm: f32,
    pub title_top_mm: f32,
    pub body_top_mm: f32,
    pub content_width_mm: f32,
    /// Lines whose baseline would fall below `height_mm - bottom_mm`
    /// start a new page.
    pub bottom_mm: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            left_mm: 20.0,
            title_top_mm: 20.0,
            body_top_mm: 40.0,
            content_width_mm: 170.0,
            bottom_mm: 20.0,
            line_height: 1.15,
        }
    }
}
