//! Invoice layout.
//!
//! Positions are in points on an A4 page (top-left origin). The item table
//! grows with its content; everything below it is pushed down accordingly,
//! continuing on a new page when a block would cross the bottom margin.

use chrono::NaiveDate;

use invoicegen_invoicing::{Contact, InvoiceRequest, LineItem};

use crate::canvas::{Canvas, TextStyle};
use crate::letterhead::Letterhead;

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

const MARGIN: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN;
const CELL_PADDING: f32 = 5.0;
const SUMMARY_ROW_HEIGHT: f32 = 25.0;
const SUMMARY_LABEL_WIDTH: f32 = 200.0;
const DETAILS_BOX_WIDTH: f32 = 143.0;

const PARTY_BOX_TOP: f32 = 170.0;
const PARTY_BOX_HEIGHT: f32 = 90.0;
const TABLE_TOP: f32 = 300.0;
const TERMS_MIN_TOP: f32 = 596.0;
const SIGNATURE_MIN_TOP: f32 = 700.0;
const SIGNATURE_WIDTH: f32 = 100.0;
const SIGNATURE_HEIGHT: f32 = 50.0;

const ITEM_COLUMNS: [f32; 5] = [40.0, 160.0, 100.0, 100.0, 100.0];
const ITEM_HEADERS: [&str; 5] = ["SL", "ITEM DESCRIPTION", "RATE/ITEM", "QUANTITY", "AMOUNT"];

const TITLE: TextStyle = TextStyle::bold(16.0);
const COMPANY: TextStyle = TextStyle::bold(18.0);
const HEADING: TextStyle = TextStyle::bold(12.0);
const BODY: TextStyle = TextStyle::regular(10.0);
const BODY_BOLD: TextStyle = TextStyle::bold(10.0);

/// Vertical write position across pages.
struct Flow {
    y: f32,
    page: usize,
}

impl Flow {
    fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Make room for a block of `height` at `y`, breaking to a new page when
    /// it would cross the bottom margin. Returns whether a page was started.
    ///
    /// A block taller than a whole page is drawn where it is.
    fn fit<C: Canvas>(&mut self, canvas: &mut C, height: f32) -> bool {
        if self.y + height <= CONTENT_BOTTOM || self.y <= MARGIN {
            return false;
        }
        canvas.new_page();
        self.page += 1;
        self.y = MARGIN;
        true
    }
}

/// Draw `invoice` onto `canvas`.
///
/// The signature is optional. A signature that cannot be embedded is logged
/// and left out; it never fails the invoice.
pub fn render_invoice<C: Canvas>(
    canvas: &mut C,
    invoice: &InvoiceRequest,
    issued_on: NaiveDate,
    letterhead: &Letterhead,
    signature: Option<&[u8]>,
) {
    draw_header(canvas, invoice, issued_on, letterhead);
    draw_parties(canvas, invoice, &letterhead.default_region);

    let mut flow = Flow { y: TABLE_TOP, page: 0 };
    draw_items(canvas, &mut flow, &invoice.items);
    draw_summary(canvas, &mut flow, invoice);
    draw_terms(canvas, &mut flow, letterhead);

    if let Some(png) = signature {
        flow.y += 20.0;
        if flow.on_first_page() {
            flow.y = flow.y.max(SIGNATURE_MIN_TOP);
        }
        flow.fit(canvas, SIGNATURE_HEIGHT);
        let x = PAGE_WIDTH - MARGIN - 150.0;
        if let Err(e) = canvas.image(png, x, flow.y, SIGNATURE_WIDTH, SIGNATURE_HEIGHT) {
            tracing::warn!(invoice_num = %invoice.invoice_num, "signature skipped: {e}");
        }
    }
}

fn draw_header<C: Canvas>(canvas: &mut C, invoice: &InvoiceRequest, issued_on: NaiveDate, letterhead: &Letterhead) {
    canvas.text_centered("INVOICE", 0.0, MARGIN, PAGE_WIDTH, TITLE);
    canvas.text(&letterhead.company_name, MARGIN, 45.0, COMPANY);

    for (i, line) in letterhead.detail_lines().iter().enumerate() {
        canvas.text(line, MARGIN, 60.0 + 15.0 * i as f32, BODY);
    }

    canvas.stroke_line((MARGIN, 160.0), (PAGE_WIDTH - MARGIN, 160.0));

    let details_x = PAGE_WIDTH - MARGIN - DETAILS_BOX_WIDTH;
    canvas.text_centered(
        &format!("Invoice No: {}", invoice.invoice_num),
        details_x,
        80.0,
        DETAILS_BOX_WIDTH,
        BODY_BOLD,
    );
    canvas.text_centered(
        &format!("Invoice Date: {}", issued_on.format("%d/%m/%Y")),
        details_x,
        95.0,
        DETAILS_BOX_WIDTH,
        BODY_BOLD,
    );
}

fn draw_parties<C: Canvas>(canvas: &mut C, invoice: &InvoiceRequest, region: &str) {
    let column = CONTENT_WIDTH / 2.0;
    canvas.stroke_rect(MARGIN, PARTY_BOX_TOP, CONTENT_WIDTH, PARTY_BOX_HEIGHT);
    canvas.stroke_line(
        (MARGIN + column, PARTY_BOX_TOP),
        (MARGIN + column, PARTY_BOX_TOP + PARTY_BOX_HEIGHT),
    );

    draw_party(canvas, "Bill To:", &invoice.bill_to, &invoice.gst_num, region, MARGIN);
    draw_party(canvas, "Ship To:", &invoice.ship_to, &invoice.gst_num, region, MARGIN + column);
}

fn draw_party<C: Canvas>(canvas: &mut C, heading: &str, party: &Contact, gst_num: &str, region: &str, x: f32) {
    let top = PARTY_BOX_TOP + 10.0;
    canvas.text(heading, x + 10.0, top, HEADING);
    canvas.text(party.name(), x + 20.0, top + 15.0, BODY);
    canvas.text(party.address().unwrap_or(region), x + 20.0, top + 30.0, BODY);
    if let Some(phone) = party.phone() {
        canvas.text(phone, x + 20.0, top + 45.0, BODY);
    }
    canvas.text(gst_num, x + 20.0, top + 60.0, BODY);
}

fn draw_items<C: Canvas>(canvas: &mut C, flow: &mut Flow, items: &[LineItem]) {
    let headers = ITEM_HEADERS.map(str::to_string);
    draw_row(canvas, flow, &headers, BODY_BOLD);
    for (index, item) in items.iter().enumerate() {
        let cells = [
            (index + 1).to_string(),
            item.description.clone(),
            format!("{:.2}", item.rate),
            item.quantity.to_string(),
            format!("{:.2}", item.amount()),
        ];
        let height = row_height(canvas, &cells, BODY);
        // continuation pages repeat the column headers
        if flow.fit(canvas, height) {
            draw_row(canvas, flow, &headers, BODY_BOLD);
        }
        draw_row(canvas, flow, &cells, BODY);
    }
}

/// A row is as tall as its tallest wrapped cell.
fn row_height<C: Canvas>(canvas: &C, cells: &[String; 5], style: TextStyle) -> f32 {
    cells
        .iter()
        .zip(ITEM_COLUMNS)
        .map(|(cell, width)| canvas.text_height(cell, width - 2.0 * CELL_PADDING, style))
        .fold(0.0_f32, f32::max)
        + 2.0 * CELL_PADDING
}

fn draw_row<C: Canvas>(canvas: &mut C, flow: &mut Flow, cells: &[String; 5], style: TextStyle) {
    let height = row_height(canvas, cells, style);
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(ITEM_COLUMNS) {
        canvas.stroke_rect(x, flow.y, width, height);
        canvas.text_box(cell, x + CELL_PADDING, flow.y + CELL_PADDING, width - 2.0 * CELL_PADDING, style);
        x += width;
    }
    flow.y += height;
}

fn draw_summary<C: Canvas>(canvas: &mut C, flow: &mut Flow, invoice: &InvoiceRequest) {
    let value_x = MARGIN + SUMMARY_LABEL_WIDTH;
    let value_width = CONTENT_WIDTH - SUMMARY_LABEL_WIDTH;

    let words = invoice.amount_in_words();
    let words_height = SUMMARY_ROW_HEIGHT
        .max(canvas.text_height(&words, value_width - 2.0 * CELL_PADDING, BODY_BOLD) + 2.0 * CELL_PADDING);

    // both rows stay together
    flow.y += 20.0;
    flow.fit(canvas, SUMMARY_ROW_HEIGHT + words_height);
    let top = flow.y;

    canvas.stroke_rect(MARGIN, top, SUMMARY_LABEL_WIDTH, SUMMARY_ROW_HEIGHT);
    canvas.text("Amount Payable", MARGIN + CELL_PADDING, top + CELL_PADDING, BODY_BOLD);
    canvas.stroke_rect(value_x, top, value_width, SUMMARY_ROW_HEIGHT);
    canvas.text(&invoice.amount_payable(), value_x + CELL_PADDING, top + CELL_PADDING, BODY_BOLD);

    let words_top = top + SUMMARY_ROW_HEIGHT;
    canvas.stroke_rect(MARGIN, words_top, SUMMARY_LABEL_WIDTH, words_height);
    canvas.text("In Words", MARGIN + CELL_PADDING, words_top + CELL_PADDING, BODY_BOLD);
    canvas.stroke_rect(value_x, words_top, value_width, words_height);
    canvas.text_box(
        &words,
        value_x + CELL_PADDING,
        words_top + CELL_PADDING,
        value_width - 2.0 * CELL_PADDING,
        BODY_BOLD,
    );

    flow.y = words_top + words_height;
}

fn draw_terms<C: Canvas>(canvas: &mut C, flow: &mut Flow, letterhead: &Letterhead) {
    let height = letterhead
        .terms
        .iter()
        .map(|term| canvas.text_height(term, CONTENT_WIDTH, BODY) + 3.0)
        .sum::<f32>()
        + 16.0;

    flow.y += 30.0;
    if flow.on_first_page() {
        flow.y = flow.y.max(TERMS_MIN_TOP);
    }
    flow.fit(canvas, height);

    canvas.text("Terms and Conditions:", MARGIN, flow.y, BODY_BOLD);
    flow.y += 16.0;
    for term in &letterhead.terms {
        flow.y += canvas.text_box(term, MARGIN, flow.y, CONTENT_WIDTH, BODY);
        flow.y += 3.0;
    }
}
