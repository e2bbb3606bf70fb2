//! PDF adapter: printable report rendering via printpdf.
//!
//! Lays out a single-condition report on A4: title band, metadata row,
//! the raw questionnaire answers as key/value rows, and the risk result
//! colored by outcome. Long input lists flow onto additional pages.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfPageIndex, Point, Rgb,
};

use crate::ports::{ReportContent, ReportError, ReportRenderer};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 12.0;
const BOTTOM_MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const LABEL_WIDTH_MM: f32 = 55.0;

// Report palette: navy headings, red/green outcome.
const NAVY: (f32, f32, f32) = (0.10, 0.13, 0.24);
const RED: (f32, f32, f32) = (0.96, 0.26, 0.21);
const GREEN: (f32, f32, f32) = (0.30, 0.69, 0.31);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Report renderer producing PDF bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, content: &ReportContent) -> Result<Vec<u8>, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            format!("{} Report", content.condition),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_err)?;

        let mut writer = PageWriter {
            doc: &doc,
            page,
            layer_index: layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        // Title band
        writer.set_color(NAVY);
        writer.text(&bold, 16.0, MARGIN_MM, "Disease Prediction Report");
        writer.rule(NAVY);
        writer.advance(4.0);

        // Metadata row
        writer.set_color(BLACK);
        let timestamp = content.generated_at.format("%Y-%m-%d %H:%M").to_string();
        writer.text(&regular, 11.0, MARGIN_MM, &format!("Generated: {timestamp}"));
        writer.text(
            &regular,
            11.0,
            PAGE_WIDTH_MM * 0.6,
            &format!("Condition: {}", content.condition),
        );
        writer.advance(LINE_HEIGHT_MM);
        writer.text(
            &bold,
            13.0,
            MARGIN_MM,
            &format!("Patient Name: {}", content.patient_name),
        );
        writer.advance(LINE_HEIGHT_MM + 2.0);

        // Inputs section
        writer.set_color(NAVY);
        writer.text(&bold, 12.0, MARGIN_MM, "Inputs");
        writer.rule(NAVY);
        writer.advance(2.0);
        writer.set_color(BLACK);

        for (label, value) in &content.inputs {
            writer.key_value(&bold, &regular, label, value);
        }

        writer.advance(2.0);

        // Result section
        writer.set_color(NAVY);
        writer.text(&bold, 12.0, MARGIN_MM, "Result");
        writer.rule(NAVY);
        writer.advance(2.0);

        let risk_color = if content.risk_label == "High Risk" {
            RED
        } else {
            GREEN
        };
        writer.set_color(risk_color);
        writer.text(
            &bold,
            12.0,
            MARGIN_MM,
            &format!("Prediction: {}", content.risk_label),
        );
        writer.advance(LINE_HEIGHT_MM);
        writer.set_color(BLACK);
        writer.text(
            &regular,
            11.0,
            MARGIN_MM,
            &format!("Risk Level: {:.1}%", content.probability_percent),
        );

        doc.save_to_bytes().map_err(render_err)
    }
}

fn render_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Render(e.to_string())
}

/// Cursor-based page writer with automatic page breaks.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    page: PdfPageIndex,
    layer_index: printpdf::PdfLayerIndex,
    /// Current baseline, measured from the bottom edge.
    y: f32,
}

impl PageWriter<'_> {
    fn layer(&self) -> printpdf::PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer_index)
    }

    fn set_color(&self, (r, g, b): (f32, f32, f32)) {
        self.layer()
            .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer()
            .set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    /// Write one line of text at the given x offset, then drop the cursor.
    fn text(&mut self, font: &IndirectFontRef, size: f32, x: f32, text: &str) {
        self.break_page_if_needed();
        self.layer().use_text(text, size, Mm(x), Mm(self.y), font);
    }

    /// Write a label/value row at the shared column split.
    fn key_value(
        &mut self,
        bold: &IndirectFontRef,
        regular: &IndirectFontRef,
        label: &str,
        value: &str,
    ) {
        self.text(bold, 11.0, MARGIN_MM, label);
        self.text(regular, 11.0, MARGIN_MM + LABEL_WIDTH_MM, value);
        self.advance(LINE_HEIGHT_MM);
    }

    /// Draw a horizontal section rule just below the current baseline.
    fn rule(&mut self, color: (f32, f32, f32)) {
        self.set_color(color);
        let y = self.y - 2.0;
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
            ],
            is_closed: false,
        };
        let layer = self.layer();
        layer.set_outline_thickness(0.8);
        layer.add_line(line);
        self.advance(LINE_HEIGHT_MM);
    }

    fn advance(&mut self, by: f32) {
        self.y -= by;
    }

    fn break_page_if_needed(&mut self) {
        if self.y >= BOTTOM_MARGIN_MM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.page = page;
        self.layer_index = layer;
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> ReportContent {
        ReportContent {
            condition: "Diabetes".into(),
            patient_name: "Unknown".into(),
            inputs: vec![
                ("Age".into(), "30".into()),
                ("BMI".into(), "25".into()),
            ],
            risk_label: "Low Risk".into(),
            probability_percent: 12.5,
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let renderer = PdfReportRenderer::new();
        let bytes = renderer.render(&sample_content()).expect("render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_long_input_list_paginates() {
        let mut content = sample_content();
        content.inputs = (0..80)
            .map(|i| (format!("Field {i}"), format!("value {i}")))
            .collect();

        let renderer = PdfReportRenderer::new();
        let bytes = renderer.render(&content).expect("render");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
