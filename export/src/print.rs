//! FILENAME: export/src/print.rs
//! PURPOSE: Printable HTML document builders.
//! CONTEXT: Two templates: a single chalan, and a customer report with
//! the chalan list nested. Both produce a self-contained HTML string
//! (header block, table body, summary block) that a detached browsing
//! context can render. Totals are formatted, never recomputed. The
//! print trigger itself belongs to the output sink, not the template.

use records::{format_money, Chalan, Customer, FieldValue};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// A built document ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub html: String,
}

const CELL: &str = "padding:8px;border:1px solid #ddd";
const HEAD_ROW: &str = "background:#047857;color:white";

/// Escape text interpolated into markup.
fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn date_or_dash(value: FieldValue) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.as_text()
    }
}

fn document_shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body style=\"font-family:Arial,Helvetica,sans-serif;padding:20px;color:#111\">{}</body></html>",
        esc(title),
        body
    )
}

/// Build the single-chalan document.
pub fn chalan_document(customer: &Customer, chalan: &Chalan) -> Document {
    let header = format!(
        "<div style=\"display:flex;justify-content:space-between;align-items:center;margin-bottom:12px\">\
           <div>\
             <div style=\"font-size:20px;color:#047857;font-weight:700\">{name}</div>\
             <div style=\"font-size:13px;color:#333\">{address} • {phone}</div>\
           </div>\
           <div style=\"text-align:right\">\
             <div style=\"font-weight:700\">Chalan #{chalan_id}</div>\
             <div style=\"font-size:13px;color:#666\">Date: {created}</div>\
           </div>\
         </div>",
        name = esc(&customer.name),
        address = esc(&customer.address),
        phone = esc(&customer.phone),
        chalan_id = chalan.chalan_id,
        created = date_or_dash(FieldValue::Date(chalan.created_at)),
    );

    let table = format!(
        "<table style=\"width:100%;border-collapse:collapse;margin-top:8px\">\
           <thead><tr style=\"{head}\">\
             <th style=\"{cell}\">গ্রেড</th>\
             <th style=\"{cell}\">পরিমান</th>\
             <th style=\"{cell}\">রেট</th>\
             <th style=\"{cell}\">মোটা মূল্য</th>\
             <th style=\"{cell}\">ডিসকাউন্ট</th>\
             <th style=\"{cell}\">VAT</th>\
             <th style=\"{cell}\">সর্বমোট</th>\
           </tr></thead>\
           <tbody><tr>\
             <td style=\"{cell}\">{category}</td>\
             <td style=\"{cell}\">{qty}</td>\
             <td style=\"{cell}\">{rate}</td>\
             <td style=\"{cell}\">{value}</td>\
             <td style=\"{cell}\">{discount}</td>\
             <td style=\"{cell}\">{vat}</td>\
             <td style=\"{cell}\">{total}</td>\
           </tr></tbody>\
         </table>",
        head = HEAD_ROW,
        cell = CELL,
        category = esc(&chalan.category),
        qty = chalan.qty,
        rate = format_money(chalan.rate),
        value = format_money(chalan.value),
        discount = format_money(chalan.discount),
        vat = format_money(chalan.vat),
        total = format_money(chalan.total),
    );

    let summary = format!(
        "<div style=\"margin-top:12px;padding:10px;border:1px solid #d1fae5;background:#ecfdf5\">\
           <div>নগদ: {paid}</div>\
           <div>বাকি: {due}</div>\
           <div>ডেলিভারি: {delivery}</div>\
         </div>",
        paid = format_money(chalan.paid),
        due = format_money(chalan.due),
        delivery = date_or_dash(FieldValue::from(chalan.delivery_day)),
    );

    let title = format!("Chalan {}", chalan.chalan_id);
    let html = document_shell(&title, &format!("{}{}{}", header, table, summary));
    Document { title, html }
}

/// Build the customer report: identity header plus one row per chalan.
pub fn customer_document(customer: &Customer) -> Document {
    let header = format!(
        "<div style=\"display:flex;justify-content:space-between;align-items:center;margin-bottom:12px\">\
           <div>\
             <div style=\"font-size:22px;color:#047857;font-weight:700\">{name} (#{id})</div>\
             <div style=\"font-size:13px;color:#333\">{address} • {phone}</div>\
           </div>\
           <div style=\"text-align:right\">\
             <div style=\"font-weight:700\">মোট চালান: {count}</div>\
           </div>\
         </div>",
        name = esc(&customer.name),
        id = customer.id,
        address = esc(&customer.address),
        phone = esc(&customer.phone),
        count = customer.chalans.len(),
    );

    let rows: String = customer
        .chalans
        .iter()
        .map(|r| {
            format!(
                "<tr>\
                   <td style=\"{cell}\">{chalan_id}</td>\
                   <td style=\"{cell}\">{address}</td>\
                   <td style=\"{cell}\">{category}</td>\
                   <td style=\"{cell}\">{qty}</td>\
                   <td style=\"{cell}\">{rate}</td>\
                   <td style=\"{cell}\">{total}</td>\
                   <td style=\"{cell}\">{paid}</td>\
                   <td style=\"{cell}\">{due}</td>\
                   <td style=\"{cell}\">{delivery}</td>\
                 </tr>",
                cell = CELL,
                chalan_id = r.chalan_id,
                address = esc(&r.address),
                category = esc(&r.category),
                qty = r.qty,
                rate = format_money(r.rate),
                total = format_money(r.total),
                paid = format_money(r.paid),
                due = format_money(r.due),
                delivery = date_or_dash(FieldValue::from(r.delivery_day)),
            )
        })
        .collect();

    let table = format!(
        "<table style=\"width:100%;border-collapse:collapse\">\
           <thead><tr style=\"{head}\">\
             <th style=\"{cell}\">#</th>\
             <th style=\"{cell}\">ঠিকানা</th>\
             <th style=\"{cell}\">গ্রেড</th>\
             <th style=\"{cell}\">পরিমান</th>\
             <th style=\"{cell}\">রেট</th>\
             <th style=\"{cell}\">সর্বমোট</th>\
             <th style=\"{cell}\">নগদ</th>\
             <th style=\"{cell}\">বাকি</th>\
             <th style=\"{cell}\">ডেলিভারি</th>\
           </tr></thead>\
           <tbody>{rows}</tbody>\
         </table>",
        head = HEAD_ROW,
        cell = CELL,
        rows = rows,
    );

    let title = format!("Customer {} Report", customer.id);
    let html = document_shell(&title, &format!("{}{}", header, table));
    Document { title, html }
}

/// Look up a chalan and build its document.
///
/// Missing customer or chalan ids are a `NotFound`, never a panic, so
/// the caller can show its fallback view.
pub fn build_chalan(
    customers: &[Customer],
    customer_id: u32,
    chalan_id: u32,
) -> Result<Document, ExportError> {
    let customer = customers
        .iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| ExportError::NotFound(format!("customer {}", customer_id)))?;
    let chalan = customer
        .chalan(chalan_id)
        .ok_or_else(|| ExportError::NotFound(format!("chalan {}", chalan_id)))?;
    Ok(chalan_document(customer, chalan))
}

/// Look up a customer and build their full report.
pub fn build_customer_report(
    customers: &[Customer],
    customer_id: u32,
) -> Result<Document, ExportError> {
    let customer = customers
        .iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| ExportError::NotFound(format!("customer {}", customer_id)))?;
    Ok(customer_document(customer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::sample;

    #[test]
    fn test_chalan_document_contains_identity_and_totals() {
        let customers = sample::customers();
        let customer = &customers[0];
        let chalan = &customer.chalans[0];
        let doc = chalan_document(customer, chalan);

        assert!(doc.html.starts_with("<!doctype html>"));
        assert!(doc.html.contains(&customer.name));
        assert!(doc.html.contains(&format!("Chalan #{}", chalan.chalan_id)));
        // Paid amount appears through the shared money formatter.
        assert!(doc.html.contains(&format_money(chalan.paid)));
    }

    #[test]
    fn test_customer_report_has_one_row_per_chalan() {
        let customers = sample::customers();
        let customer = customers
            .iter()
            .max_by_key(|c| c.chalans.len())
            .expect("sample has customers");
        let doc = customer_document(customer);
        assert_eq!(doc.html.matches("<tr>").count(), customer.chalans.len());
    }

    #[test]
    fn test_documents_are_byte_identical_across_calls() {
        let customers = sample::customers();
        let a = customer_document(&customers[2]);
        let b = customer_document(&customers[2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let customers = sample::customers();
        assert!(matches!(
            build_chalan(&customers, 999_999, 1),
            Err(ExportError::NotFound(_))
        ));
        let existing = customers[0].id;
        assert!(matches!(
            build_chalan(&customers, existing, 999_999),
            Err(ExportError::NotFound(_))
        ));
    }

    #[test]
    fn test_markup_escapes_text_fields() {
        let mut customers = sample::customers();
        customers[0].name = "A < B & C".to_string();
        let doc = customer_document(&customers[0]);
        assert!(doc.html.contains("A &lt; B &amp; C"));
    }

    #[test]
    fn test_no_print_script_in_template() {
        let customers = sample::customers();
        let doc = customer_document(&customers[0]);
        assert!(!doc.html.contains("window.print"));
    }
}
