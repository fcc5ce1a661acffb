use common::encoding::DetailRow;
use common::report::{
    Recommendation, ReportContent, Rgb, ACCENT_RED, BLACK, BRAND_RED, MUTED_GREY, TABLE_HEADER,
    WHITE,
};
use genpdf::elements::{Break, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::render::Area;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Context, Document, Element, Mm, Position, RenderResult, Size};
use thiserror::Error;

const REGULAR_TTF: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");
const BOLD_TTF: &[u8] = include_bytes!("../../fonts/DejaVuSans-Bold.ttf");

const BANNER_HEIGHT_MM: f64 = 25.0;
const ROW_HEIGHT_MM: f64 = 7.0;
const CELL_PADDING_MM: f64 = 2.0;
/// genpdf strokes every line at the PDF default width of 1pt (~0.35 mm), so
/// fills are drawn as horizontal strokes spaced closer than that.
const FILL_STEP_MM: f64 = 0.3;
const STRIPE: Rgb = Rgb(250, 250, 250);

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("embedded report font is unusable: {0}")]
    Font(#[source] genpdf::error::Error),
    #[error("PDF rendering failed: {0}")]
    Render(#[from] genpdf::error::Error),
}

/// Text on an optional solid background, vertically centered in a fixed
/// height. Used for the risk banner and the table cells.
struct FilledText {
    text: String,
    style: Style,
    fill: Option<Color>,
    height_mm: f64,
    alignment: Alignment,
}

impl FilledText {
    fn new(
        text: impl Into<String>,
        style: Style,
        fill: Option<Color>,
        height_mm: f64,
        alignment: Alignment,
    ) -> Self {
        Self {
            text: text.into(),
            style,
            fill,
            height_mm,
            alignment,
        }
    }
}

impl Element for FilledText {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let height = Mm::from(self.height_mm);
        let width = area.size().width;
        if area.size().height < height {
            // Ask for a fresh page instead of drawing a clipped box.
            return Ok(RenderResult {
                size: Size::new(0.0, 0.0),
                has_more: true,
            });
        }

        if let Some(fill) = self.fill {
            let stroke = Style::new().with_color(fill);
            let mut y = FILL_STEP_MM / 2.0;
            while y < self.height_mm {
                area.draw_line(vec![Position::new(0.0, y), Position::new(width, y)], stroke);
                y += FILL_STEP_MM;
            }
        }

        let text_width = self.style.str_width(&context.font_cache, &self.text);
        let line_height = self.style.line_height(&context.font_cache);
        let x = match self.alignment {
            Alignment::Center => (width - text_width) / 2.0,
            Alignment::Right => width - text_width - Mm::from(CELL_PADDING_MM),
            _ => Mm::from(CELL_PADDING_MM),
        };
        let y = (height - line_height) / 2.0;
        area.print_str(&context.font_cache, Position::new(x, y), self.style, &self.text)?;

        Ok(RenderResult {
            size: Size::new(width, height),
            has_more: false,
        })
    }
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn text_style(size: u8, rgb: Rgb) -> Style {
    Style::new().with_font_size(size).with_color(color(rgb))
}

fn line(text: &str, style: Style, alignment: Alignment) -> Paragraph {
    Paragraph::new(StyledString::new(text.to_string(), style)).aligned(alignment)
}

/// The bundled DejaVu Sans family. The report never sets italic, so the
/// italic slots reuse the upright faces.
fn load_font() -> Result<FontFamily<FontData>, ReportError> {
    let regular = FontData::new(REGULAR_TTF.to_vec(), None).map_err(ReportError::Font)?;
    let bold = FontData::new(BOLD_TTF.to_vec(), None).map_err(ReportError::Font)?;
    Ok(FontFamily {
        italic: regular.clone(),
        bold_italic: bold.clone(),
        regular,
        bold,
    })
}

/// Configure and return a genpdf Document with font and decorator set.
fn configure_document(title: &str) -> Result<Document, ReportError> {
    let mut doc = Document::new(load_font()?);
    doc.set_title(title);
    doc.set_font_size(10);
    doc.set_line_spacing(1.25);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

/// Two-column attribute table: red header, striped body.
fn details_table(rows: &[DetailRow]) -> Result<TableLayout, ReportError> {
    let mut table = TableLayout::new(vec![1, 1]);

    let header_style = text_style(10, WHITE).bold();
    let mut header = table.row();
    for title in TABLE_HEADER {
        header = header.element(FilledText::new(
            title,
            header_style,
            Some(color(ACCENT_RED)),
            ROW_HEIGHT_MM,
            Alignment::Left,
        ));
    }
    header.push()?;

    let body_style = text_style(10, BLACK);
    for (i, detail) in rows.iter().enumerate() {
        let fill = (i % 2 == 1).then(|| color(STRIPE));
        table
            .row()
            .element(FilledText::new(
                detail.label.clone(),
                body_style,
                fill,
                ROW_HEIGHT_MM,
                Alignment::Left,
            ))
            .element(FilledText::new(
                detail.value.clone(),
                body_style,
                fill,
                ROW_HEIGHT_MM,
                Alignment::Left,
            ))
            .push()?;
    }
    Ok(table)
}

/// Numbered recommendations without decoration.
fn recommendations_table(items: &[Recommendation]) -> Result<TableLayout, ReportError> {
    let mut table = TableLayout::new(vec![1, 12]);
    let style = text_style(10, BLACK);
    for item in items {
        table
            .row()
            .element(FilledText::new(
                item.rank.to_string(),
                style,
                None,
                ROW_HEIGHT_MM,
                Alignment::Left,
            ))
            .element(FilledText::new(
                item.text.clone(),
                style,
                None,
                ROW_HEIGHT_MM,
                Alignment::Left,
            ))
            .push()?;
    }
    Ok(table)
}

/// Lays out `content` as an A4 PDF and returns the encoded bytes.
pub fn render_pdf(content: &ReportContent) -> Result<Vec<u8>, ReportError> {
    let mut doc = configure_document(&content.title)?;

    doc.push(line(&content.title, text_style(22, ACCENT_RED).bold(), Alignment::Center));
    doc.push(line(&content.subtitle, text_style(16, BLACK), Alignment::Center));
    doc.push(Break::new(1));
    doc.push(line(&content.customer_line, text_style(14, BLACK), Alignment::Left));
    doc.push(Break::new(0.5));

    doc.push(FilledText::new(
        content.banner.text.clone(),
        text_style(14, content.banner.text_color),
        Some(color(content.banner.fill_color)),
        BANNER_HEIGHT_MM,
        Alignment::Center,
    ));
    doc.push(Break::new(0.5));
    doc.push(line(&content.generated_line, text_style(10, MUTED_GREY), Alignment::Left));
    doc.push(Break::new(1));

    doc.push(line(&content.details_heading, text_style(14, BLACK), Alignment::Left));
    doc.push(Break::new(0.5));
    doc.push(details_table(&content.details)?);
    doc.push(Break::new(1.5));

    doc.push(line(&content.recommendations_heading, text_style(14, BLACK), Alignment::Left));
    doc.push(Break::new(0.5));
    doc.push(recommendations_table(&content.recommendations)?);
    doc.push(Break::new(3));

    doc.push(line(&content.disclaimer, text_style(10, MUTED_GREY), Alignment::Center));
    doc.push(Break::new(1));
    doc.push(line(&content.brand, text_style(10, BRAND_RED), Alignment::Center));

    let mut buffer = Vec::new();
    doc.render(&mut buffer)?;
    Ok(buffer)
}
