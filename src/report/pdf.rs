//! Renders a [ReportLayout] to PDF bytes.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, Point, Pt};

use crate::Error;

use super::layout::{DrawOp, Font, PAGE_HEIGHT, PAGE_WIDTH, ReportLayout};

const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

/// Draw each page of `layout` with the built-in Helvetica fonts.
///
/// # Errors
///
/// Returns [Error::ReportRenderError] if the fonts could not be added or the
/// document could not be serialised.
pub fn render_pdf(layout: &ReportLayout) -> Result<Vec<u8>, Error> {
    let (document, first_page, first_layer) = PdfDocument::new(
        &layout.title,
        mm(PAGE_WIDTH),
        mm(PAGE_HEIGHT),
        LAYER_NAME,
    );

    let regular = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = document
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            document.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME)
        };
        let layer = document.get_page(page_index).get_layer(layer_index);

        for op in &page.ops {
            match op {
                DrawOp::Text {
                    text,
                    x,
                    y,
                    font,
                    size,
                } => {
                    let font: &IndirectFontRef = match font {
                        Font::Regular => &regular,
                        Font::Bold => &bold,
                    };
                    layer.use_text(text.as_str(), *size, mm(*x), mm(*y), font);
                }
                DrawOp::Rule { from_x, to_x, y } => {
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(mm(*from_x), mm(*y)), false),
                            (Point::new(mm(*to_x), mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    document.save_to_bytes().map_err(render_error)
}

fn render_error(error: printpdf::Error) -> Error {
    tracing::error!("could not render PDF report: {error:?}");
    Error::ReportRenderError(format!("{error:?}"))
}
