//! `printpdf`-backed canvas.

use std::io::{BufWriter, Cursor};

use chrono::NaiveDate;
use printpdf::image_crate::ImageDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use invoicegen_invoicing::InvoiceRequest;

use crate::canvas::{Canvas, FontWeight, TextStyle};
use crate::error::RenderError;
use crate::layout::{self, PAGE_HEIGHT, PAGE_WIDTH};
use crate::letterhead::Letterhead;
use crate::metrics::ASCENT;

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// A4 PDF using the built-in Helvetica faces (no font files).
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfCanvas {
    pub fn a4(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_thickness(0.75);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
        })
    }

    fn point(x: f32, y: f32) -> Point {
        Point::new(mm(x), mm(PAGE_HEIGHT - y))
    }

    fn stroke(&self, points: &[(f32, f32)], closed: bool) {
        self.layer.add_line(Line {
            points: points.iter().map(|(x, y)| (Self::point(*x, *y), false)).collect(),
            is_closed: closed,
        });
    }
}

impl Canvas for PdfCanvas {
    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.layer.set_outline_thickness(0.75);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        let font = match style.weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        };
        let baseline = y + style.size * ASCENT;
        self.layer
            .use_text(text, style.size, mm(x), mm(PAGE_HEIGHT - baseline), font);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.stroke(
            &[(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
            true,
        );
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.stroke(&[from, to], false);
    }

    fn image(&mut self, png: &[u8], x: f32, y: f32, width: f32, height: f32) -> Result<(), RenderError> {
        let decoder = PngDecoder::new(Cursor::new(png)).map_err(RenderError::image)?;
        let (px_width, px_height) = decoder.dimensions();
        if px_width == 0 || px_height == 0 {
            return Err(RenderError::image("empty image"));
        }
        let image = Image::try_from(decoder).map_err(RenderError::image)?;

        // At 72 dpi one pixel is one point, so the scale is target / pixels.
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(mm(x)),
                translate_y: Some(mm(PAGE_HEIGHT - y - height)),
                scale_x: Some(width / px_width as f32),
                scale_y: Some(height / px_height as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut writer = BufWriter::new(Vec::<u8>::new());
        self.doc.save(&mut writer)?;
        writer.into_inner().map_err(|e| RenderError::Io(e.into_error()))
    }
}

/// Render `invoice` into PDF bytes.
pub fn render_pdf(
    invoice: &InvoiceRequest,
    issued_on: NaiveDate,
    letterhead: &Letterhead,
    signature: Option<&[u8]>,
) -> Result<Vec<u8>, RenderError> {
    let mut canvas = PdfCanvas::a4(&format!("Invoice {}", invoice.invoice_num))?;
    layout::render_invoice(&mut canvas, invoice, issued_on, letterhead, signature);
    canvas.finish()
}
