use anyhow::{anyhow, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect,
};

use crate::audit::{AuditRecord, CategoryScores};
use crate::scoring::Tier;

use super::theme::Theme;

// US letter, in millimeters
const PAGE_W: f32 = 215.9;
const PAGE_H: f32 = 279.4;
const MARGIN: f32 = 15.0;
const CONTENT_W: f32 = PAGE_W - 2.0 * MARGIN;
const TOP_Y: f32 = PAGE_H - 12.0;
const BOTTOM_Y: f32 = 18.0;

const PT_TO_MM: f32 = 0.352_778;

/// Render the audit record to a finished PDF.
///
/// Layout is a single downward cursor with automatic page breaks; given the
/// same record the output is identical apart from the PDF creation
/// timestamps the library stamps into the document info.
pub fn render_to_bytes(record: &AuditRecord) -> Result<Vec<u8>> {
    let theme = Theme::brand();
    let mut painter = Painter::new(&format!("{} - SEO & GEO Audit", record.business_name))?;

    draw_header(&mut painter, &theme, record);
    draw_overview(&mut painter, &theme, record);
    draw_score_rows(&mut painter, &theme, record);
    draw_competitor(&mut painter, &theme, record);
    draw_findings(&mut painter, &theme, record);
    draw_recommendations(&mut painter, &theme, record);
    draw_footer(&mut painter, &theme, record);

    painter
        .doc
        .save_to_bytes()
        .map_err(|e| anyhow!("Failed to serialize PDF: {e}"))
}

/// Downward-cursor painter over the current page. `y` is the top edge of the
/// next block to draw.
struct Painter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl Painter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load builtin font: {e}"))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load builtin font: {e}"))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: TOP_Y,
            pages: 1,
        })
    }

    /// Start a new page when the next block would cross the bottom margin.
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < BOTTOM_Y {
            self.pages += 1;
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_W), Mm(PAGE_H), format!("page {}", self.pages));
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Filled rectangle; `top` is the upper edge.
    fn fill_rect(&self, x: f32, top: f32, w: f32, h: f32, color: &Color) {
        self.layer.set_fill_color(color.clone());
        let rect = Rect::new(Mm(x), Mm(top - h), Mm(x + w), Mm(top)).with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    fn stroke_rect(&self, x: f32, top: f32, w: f32, h: f32, color: &Color, thickness: f32) {
        self.layer.set_outline_color(color.clone());
        self.layer.set_outline_thickness(thickness);
        let rect = Rect::new(Mm(x), Mm(top - h), Mm(x + w), Mm(top)).with_mode(PaintMode::Stroke);
        self.layer.add_rect(rect);
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, color: &Color, thickness: f32) {
        self.layer.set_outline_color(color.clone());
        self.layer.set_outline_thickness(thickness);
        let line = Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y1)), false),
                (Point::new(Mm(x2), Mm(y2)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn text(&self, s: &str, size: f32, x: f32, baseline: f32, font: &IndirectFontRef, color: &Color) {
        self.layer.set_fill_color(color.clone());
        self.layer.use_text(s, size, Mm(x), Mm(baseline), font);
    }

    fn text_centered(
        &self,
        s: &str,
        size: f32,
        center_x: f32,
        baseline: f32,
        font: &IndirectFontRef,
        color: &Color,
    ) {
        let x = center_x - approx_text_width_mm(s, size) / 2.0;
        self.text(s, size, x, baseline, font, color);
    }

    fn text_right(
        &self,
        s: &str,
        size: f32,
        right_x: f32,
        baseline: f32,
        font: &IndirectFontRef,
        color: &Color,
    ) {
        let x = right_x - approx_text_width_mm(s, size);
        self.text(s, size, x, baseline, font, color);
    }
}

fn draw_header(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    const BAND_H: f32 = 26.0;
    let top = p.y;
    let right = MARGIN + CONTENT_W;

    p.fill_rect(MARGIN, top, CONTENT_W, BAND_H, &theme.dark);
    p.text(
        &record.business_name,
        22.0,
        MARGIN + 6.0,
        top - 10.0,
        &p.bold,
        &theme.white,
    );
    p.text_right("QUESO VENTURES", 10.0, right - 6.0, top - 8.0, &p.bold, &theme.yellow);
    p.text(
        &format!("{} | {}", record.business_type, record.business_city),
        11.0,
        MARGIN + 6.0,
        top - 19.0,
        &p.regular,
        &theme.yellow,
    );
    p.text_right(
        "SEO & GEO Audit",
        8.0,
        right - 6.0,
        top - 16.0,
        &p.regular,
        &theme.mid_gray,
    );
    p.text_right(
        &record.audit_date,
        8.0,
        right - 6.0,
        top - 20.5,
        &p.regular,
        &theme.mid_gray,
    );

    p.advance(BAND_H + 8.0);
}

fn draw_overview(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    const STRIP_H: f32 = 19.0;
    let top = p.y;
    let cell_w = CONTENT_W / 4.0;
    let total = record.scores.total();
    let overall = theme.tier_color(Tier::for_score(total, CategoryScores::MAX_TOTAL));

    p.fill_rect(MARGIN, top, cell_w, STRIP_H, &overall);
    p.fill_rect(MARGIN + cell_w, top, cell_w * 3.0, STRIP_H, &theme.light_gray);
    for i in 1..4 {
        let x = MARGIN + cell_w * i as f32;
        p.line(x, top, x, top - STRIP_H, &theme.mid_gray, 0.5);
    }

    let centers: Vec<f32> = (0..4).map(|i| MARGIN + cell_w * (i as f32 + 0.5)).collect();
    let value_y = top - 9.0;
    let label_y = top - 16.0;

    p.text_centered(
        &format!("{}%", record.scores.overall_percent()),
        20.0,
        centers[0],
        value_y,
        &p.bold,
        &theme.white,
    );
    p.text_centered(&record.review_rating, 16.0, centers[1], value_y, &p.bold, &theme.dark);
    p.text_centered(&record.review_count, 16.0, centers[2], value_y, &p.bold, &theme.dark);
    p.text_centered(
        if record.has_website { "Yes" } else { "No" },
        14.0,
        centers[3],
        value_y,
        &p.bold,
        &theme.dark,
    );

    p.text_centered("Overall Score", 8.0, centers[0], label_y, &p.bold, &theme.yellow);
    p.text_centered("Google Rating", 8.0, centers[1], label_y, &p.regular, &theme.text_gray);
    p.text_centered("Reviews", 8.0, centers[2], label_y, &p.regular, &theme.text_gray);
    p.text_centered("Has Website", 8.0, centers[3], label_y, &p.regular, &theme.text_gray);

    p.advance(STRIP_H + 9.0);
}

fn score_categories(scores: &CategoryScores) -> [(&'static str, &'static str, u8); 5] {
    [
        (
            "Website Quality",
            "Existence, clarity, mobile-ready, city+service mentions",
            scores.website,
        ),
        (
            "Mobile Page Speed",
            "Google PageSpeed Insights score on mobile",
            scores.speed,
        ),
        (
            "Google Business Profile",
            "Photos, hours, description, services, posts",
            scores.gbp,
        ),
        (
            "Local Search Visibility",
            "Appears in top 3 map pack results",
            scores.visibility,
        ),
        (
            "GEO / AI Readiness",
            "Appears in ChatGPT / Perplexity results",
            scores.geo,
        ),
    ]
}

fn draw_score_rows(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    const ROW_H: f32 = 14.0;
    const ROW_GAP: f32 = 2.5;

    p.ensure_room(10.0 + ROW_H);
    p.text("Score Breakdown", 11.0, MARGIN, p.y - 4.0, &p.bold, &theme.dark);
    p.advance(8.0);

    for (name, note, score) in score_categories(&record.scores) {
        p.ensure_room(ROW_H + ROW_GAP);
        let top = p.y;
        let tier = Tier::for_score(score, 5);
        let accent = theme.tier_color(tier);

        p.stroke_rect(MARGIN, top, CONTENT_W, ROW_H, &theme.mid_gray, 0.5);
        p.text(name, 9.0, MARGIN + 4.0, top - 5.5, &p.bold, &theme.dark);
        p.text(note, 6.5, MARGIN + 4.0, top - 10.0, &p.regular, &theme.text_gray);

        // Five-segment bar, filled up to the score
        let seg_w = CONTENT_W * 0.062;
        let seg_gap = 1.6;
        let bar_x = MARGIN + CONTENT_W * 0.42;
        for i in 1..=5u8 {
            let x = bar_x + (seg_w + seg_gap) * f32::from(i - 1);
            let color = if i <= score { &accent } else { &theme.mid_gray };
            p.fill_rect(x, top - 5.2, seg_w, 3.5, color);
        }

        p.text_centered(
            &format!("{score}/5"),
            11.0,
            MARGIN + CONTENT_W * 0.835,
            top - 8.5,
            &p.bold,
            &accent,
        );
        p.text(
            tier.label(),
            8.0,
            MARGIN + CONTENT_W * 0.89,
            top - 8.2,
            &p.bold,
            &accent,
        );

        p.advance(ROW_H + ROW_GAP);
    }

    p.advance(6.0);
}

fn draw_competitor(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    const ROW_H: f32 = 9.0;
    let label_w = CONTENT_W * 0.35;
    let value_w = CONTENT_W * 0.325;

    p.ensure_room(8.0 + ROW_H * 4.0 + 8.0);
    p.text("Competitor Comparison", 11.0, MARGIN, p.y - 4.0, &p.bold, &theme.dark);
    p.advance(8.0);

    let top = p.y;
    let col1_center = MARGIN + label_w + value_w / 2.0;
    let col2_center = MARGIN + label_w + value_w * 1.5;

    // Header row on the dark band
    p.fill_rect(MARGIN, top, CONTENT_W, ROW_H, &theme.dark);
    p.text_centered(&record.business_name, 9.0, col1_center, top - 6.0, &p.bold, &theme.white);
    p.text_centered(&record.competitor.name, 9.0, col2_center, top - 6.0, &p.bold, &theme.white);

    let rows = [
        (
            "Google Rating",
            record.review_rating.clone(),
            record.competitor.rating.clone(),
        ),
        (
            "Review Count",
            record.review_count.clone(),
            record.competitor.review_count.clone(),
        ),
        (
            "Has Website",
            yes_no(record.has_website).to_string(),
            yes_no(record.competitor.has_website).to_string(),
        ),
    ];

    for (i, (label, ours, theirs)) in rows.iter().enumerate() {
        let row_top = top - ROW_H * (i as f32 + 1.0);
        if i % 2 == 1 {
            p.fill_rect(MARGIN, row_top, CONTENT_W, ROW_H, &theme.light_gray);
        }
        p.text(label, 7.5, MARGIN + 4.0, row_top - 6.0, &p.regular, &theme.text_gray);
        p.text_centered(ours, 9.0, col1_center, row_top - 6.0, &p.regular, &theme.dark);
        p.text_centered(theirs, 9.0, col2_center, row_top - 6.0, &p.regular, &theme.dark);
    }

    p.stroke_rect(MARGIN, top, CONTENT_W, ROW_H * 4.0, &theme.mid_gray, 0.5);
    p.line(
        MARGIN + label_w,
        top,
        MARGIN + label_w,
        top - ROW_H * 4.0,
        &theme.mid_gray,
        0.5,
    );
    p.line(
        MARGIN + label_w + value_w,
        top,
        MARGIN + label_w + value_w,
        top - ROW_H * 4.0,
        &theme.mid_gray,
        0.5,
    );

    p.advance(ROW_H * 4.0 + 9.0);
}

fn draw_findings(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    if record.findings.is_empty() {
        return;
    }
    const LINE_H: f32 = 4.6;

    p.ensure_room(8.0 + LINE_H);
    p.text("Key Findings", 11.0, MARGIN, p.y - 4.0, &p.bold, &theme.dark);
    p.advance(8.0);

    for finding in &record.findings {
        let lines = wrap_text(finding, 92);
        p.ensure_room(LINE_H * lines.len() as f32 + 1.5);
        let top = p.y;
        p.text(">", 9.0, MARGIN + 1.0, top - 4.0, &p.bold, &theme.yellow);
        for (i, line) in lines.iter().enumerate() {
            p.text(
                line,
                9.0,
                MARGIN + 7.0,
                top - 4.0 - LINE_H * i as f32,
                &p.regular,
                &theme.text_gray,
            );
        }
        p.advance(LINE_H * lines.len() as f32 + 1.5);
    }

    p.advance(5.0);
}

fn draw_recommendations(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    if record.recommendations.is_empty() {
        return;
    }
    const NUM_BAND_H: f32 = 8.0;
    const LINE_H: f32 = 4.4;

    let n = record.recommendations.len();
    let gap = 4.0;
    let box_w = (CONTENT_W - gap * (n as f32 - 1.0)) / n as f32;
    let max_chars = (((box_w - 8.0) / 1.6) as usize).max(8);

    let wrapped: Vec<Vec<String>> = record
        .recommendations
        .iter()
        .map(|rec| wrap_text(rec, max_chars))
        .collect();
    let deepest = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let body_h = LINE_H * deepest as f32 + 6.0;

    p.ensure_room(8.0 + NUM_BAND_H + body_h + 4.0);
    p.text("Top Recommendations", 11.0, MARGIN, p.y - 4.0, &p.bold, &theme.dark);
    p.advance(9.0);

    let top = p.y;
    for (i, lines) in wrapped.iter().enumerate() {
        let x = MARGIN + (box_w + gap) * i as f32;
        p.fill_rect(x, top, box_w, NUM_BAND_H, &theme.dark);
        p.text_centered(
            &(i + 1).to_string(),
            12.0,
            x + box_w / 2.0,
            top - 5.8,
            &p.bold,
            &theme.yellow,
        );
        p.fill_rect(x, top - NUM_BAND_H, box_w, body_h, &theme.light_gray);
        for (j, line) in lines.iter().enumerate() {
            p.text(
                line,
                9.0,
                x + 4.0,
                top - NUM_BAND_H - 5.2 - LINE_H * j as f32,
                &p.regular,
                &theme.text_gray,
            );
        }
    }

    p.advance(NUM_BAND_H + body_h + 10.0);
}

fn draw_footer(p: &mut Painter, theme: &Theme, record: &AuditRecord) {
    p.ensure_room(12.0);
    p.line(MARGIN, p.y, MARGIN + CONTENT_W, p.y, &theme.mid_gray, 0.5);
    p.advance(6.0);
    p.text_centered(
        &format!(
            "Prepared by {}  |  quesoventures.com  |  {}  |  Confidential",
            record.auditor_name, record.audit_date
        ),
        8.0,
        MARGIN + CONTENT_W / 2.0,
        p.y,
        &p.regular,
        &theme.mid_gray,
    );
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

/// Approximate width of Helvetica text in mm. The average glyph is close to
/// half the point size; plenty for centering and right-aligning short labels.
fn approx_text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM
}

/// Greedy word wrap. Words longer than the limit get a line of their own.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_breaks_on_width() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        let lines = wrap_text("a supercalifragilistic word", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_approx_width_scales_with_length_and_size() {
        let short = approx_text_width_mm("abc", 10.0);
        let long = approx_text_width_mm("abcdef", 10.0);
        let big = approx_text_width_mm("abc", 20.0);
        assert!(long > short);
        assert!((long - 2.0 * short).abs() < 1e-4);
        assert!((big - 2.0 * short).abs() < 1e-4);
    }
}
