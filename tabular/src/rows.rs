//! FILENAME: tabular/src/rows.rs
//! PURPOSE: Per-page adapters: searchable fields, filter predicates,
//! and page sizes for every list in the dashboard.
//! CONTEXT: These mirror the list pages one to one. Each page defines
//! which fields its search box looks at and which filter tags mean
//! anything; everything else defaults to "show the row".

use crate::filter::FilterTag;
use crate::view::TableRow;
use records::{AreaSales, CreditEntry, Customer, FieldValue, RentEntry, Task, Transaction};

/// Customers page shows 8 rows per page.
pub const CUSTOMER_PAGE_SIZE: usize = 8;
/// Rent, credit, and transaction lists show 10 rows per page.
pub const RENT_PAGE_SIZE: usize = 10;
pub const CREDIT_PAGE_SIZE: usize = 10;
pub const TRANSACTION_PAGE_SIZE: usize = 10;
/// Area report default; the page offers 5/10/15 via the `per_page`
/// argument.
pub const AREA_PAGE_SIZE: usize = 10;

impl TableRow for Customer {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(self.id),
            FieldValue::from(self.name.as_str()),
            FieldValue::from(self.address.as_str()),
            FieldValue::from(self.phone.as_str()),
        ]
    }

    fn matches_tag(&self, tag: FilterTag) -> bool {
        match tag {
            FilterTag::Overdue => self.has_overdue(),
            FilterTag::Unpaid => self.has_unpaid(),
            _ => true,
        }
    }
}

impl TableRow for RentEntry {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(self.id),
            FieldValue::from(self.address.as_str()),
            FieldValue::from(self.area.as_str()),
            FieldValue::from(self.rent),
        ]
    }
}

impl TableRow for CreditEntry {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(self.id),
            FieldValue::from(self.name.as_str()),
            FieldValue::from(self.location.as_str()),
            FieldValue::from(self.owed),
        ]
    }
}

impl TableRow for AreaSales {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![FieldValue::from(self.area.as_str())]
    }
}

impl TableRow for Transaction {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(self.description.as_str()),
            FieldValue::from(self.note.as_str()),
            FieldValue::Date(self.date),
        ]
    }

    fn matches_tag(&self, tag: FilterTag) -> bool {
        match tag {
            FilterTag::Income => self.is_income(),
            FilterTag::Expense => !self.is_income(),
            _ => true,
        }
    }
}

impl TableRow for Task {
    fn search_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(self.title.as_str()),
            FieldValue::from(self.assignee.as_str()),
        ]
    }

    fn matches_tag(&self, tag: FilterTag) -> bool {
        match tag {
            FilterTag::Pending => !self.done,
            FilterTag::Done => self.done,
            _ => true,
        }
    }
}
