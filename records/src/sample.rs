//! FILENAME: records/src/sample.rs
//! PURPOSE: Deterministic sample datasets standing in for a real store.
//! CONTEXT: The dashboard runs over in-memory data; these generators
//! produce the same collections on every call so that views, exports,
//! and printable documents are reproducible byte for byte.

use chrono::NaiveDate;

use crate::area::AreaSales;
use crate::credit::CreditEntry;
use crate::customer::{Chalan, Customer};
use crate::rent::RentEntry;
use crate::task::{Repeat, Task};
use crate::vehicle::{Transaction, TransactionKind, Vehicle};

fn august(day: u32) -> NaiveDate {
    // Sample data lives entirely in August 2025.
    NaiveDate::from_ymd_opt(2025, 8, day).expect("valid sample date")
}

/// Twelve sample customers with one to four chalans each.
pub fn customers() -> Vec<Customer> {
    let names = ["রাকিব", "রাজিব", "এমদাদুল", "হাফিজুর", "আয়ানাল", "সুমন"];
    let addresses = ["বগলাগাড়ি", "বাগদা", "পলু পাড়া", "কাপ্তানবাজার", "ধানমন্ডি"];
    let phones = [
        "0000222551",
        "0000000662",
        "00000055557",
        "00009998852",
        "00000022228",
        "00011223344",
    ];
    let packets: [i64; 6] = [2000, 300, 100, 200, 50, 120];
    let amounts: [f64; 6] = [20800.0, 1200.0, 1050.0, 2100.0, 325.0, 7800.0];

    (0..12u32)
        .map(|i| {
            let idx = (i as usize) % names.len();

            let chalans: Vec<Chalan> = (0..(i % 4) + 1)
                .map(|j| {
                    let value = amounts[idx];
                    let discount = (value * 0.02 * j as f64).round();
                    let vat = 0.0;
                    let total = value - discount + vat;
                    let paid = (total * if j == 0 { 0.8 } else { 1.0 }).round();
                    Chalan {
                        chalan_id: 3843 + j + i * 10,
                        address: addresses[(i as usize + j as usize) % addresses.len()]
                            .to_string(),
                        category: format!("{} নং", (j % 3) + 1),
                        qty: packets[idx],
                        rate: 10.5,
                        value,
                        discount,
                        vat,
                        total,
                        paid,
                        due: total - paid,
                        return_count: 0,
                        delivery_day: (j % 2 == 0).then(|| august((j % 28) + 1)),
                        delivery_note: if j % 2 == 0 {
                            "ডেলিভারির সময় খোলা রাখবেন".to_string()
                        } else {
                            String::new()
                        },
                        created_at: august(((i + j) % 28) + 1),
                        serial: 2425 + j,
                    }
                })
                .collect();

            Customer {
                id: 2952 - i,
                name: names[idx].to_string(),
                address: addresses[(i as usize) % addresses.len()].to_string(),
                phone: phones[idx % phones.len()].to_string(),
                total_packets: packets[idx % packets.len()],
                delivered: packets[idx % packets.len()],
                amount: amounts[idx % amounts.len()],
                last_due: (i % 3 == 0).then(|| august((i % 28) + 1)),
                notes: if i % 4 == 0 {
                    "বিক্রেতা নোট আছে".to_string()
                } else {
                    String::new()
                },
                chalans,
            }
        })
        .collect()
}

/// Twenty rent rows, one per delivery address.
pub fn rents() -> Vec<RentEntry> {
    let base = [
        ("মাজারপাড়া", "ভাটার আশপাশে", 450.0),
        ("বেঙ্গনবাড়ি", "ভাটার আশপাশে", 0.0),
        ("নাহিরাবাদ", "ভাটার আশপাশে", 0.0),
        ("পলুপাড়া", "পলুপাড়া", 0.0),
        ("বেতারা", "বাগদা", 500.0),
        ("দক্ষিণ বেতারা", "বাগদা", 600.0),
        ("দরবস্ত", "", 0.0),
        ("২ নং কাটা বাড়ি", "কাটাবাড়ি", 0.0),
        ("কালুকুঙ্গর", "ঘাটঘাট", 500.0),
        ("সাহেবগঞ্জ", "মেরি", 700.0),
    ];

    (0..20u32)
        .map(|i| {
            let (address, area, rent) = base[(i as usize) % base.len()];
            RentEntry {
                id: i + 1,
                address: address.to_string(),
                area: area.to_string(),
                rent,
            }
        })
        .collect()
}

/// Eight credit positions.
pub fn credits() -> Vec<CreditEntry> {
    let rows = [
        ("রাকিব", "বগলাগাড়ি", "0000222551", 20800.0),
        ("রাজিব", "বাগদা", "0000000662", 0.0),
        ("এমদাদুল", "পলু পাড়া", "00000055557", 1050.0),
        ("হাফিজুর", "কাপ্তানবাজার", "00009998852", 2100.0),
        ("আয়ানাল", "ধানমন্ডি", "00000022228", 0.0),
        ("সুমন", "বগলাগাড়ি", "00011223344", 7800.0),
        ("নাহিদ", "বেতারা", "00012300456", 325.0),
        ("জসিম", "সাহেবগঞ্জ", "00098700321", 0.0),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, location, phone, owed))| CreditEntry {
            id: i as u32 + 1,
            name: name.to_string(),
            location: location.to_string(),
            phone: phone.to_string(),
            owed: *owed,
        })
        .collect()
}

/// The fleet.
pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "v1".to_string(),
            name: "বেকে".to_string(),
        },
        Vehicle {
            id: "v2".to_string(),
            name: "মেসি".to_string(),
        },
        Vehicle {
            id: "v3".to_string(),
            name: "ট্র্যাক্টর-৩".to_string(),
        },
    ]
}

/// Account-book entries for one vehicle. Unknown ids get an empty book.
pub fn transactions(vehicle_id: &str) -> Vec<Transaction> {
    match vehicle_id {
        "v1" => vec![
            Transaction {
                id: 1,
                kind: TransactionKind::Income,
                description: "রাবিশের টিপ ১ টি".to_string(),
                amount: 5000.0,
                paid: 5000.0,
                date: august(1),
                note: String::new(),
            },
            Transaction {
                id: 2,
                kind: TransactionKind::Income,
                description: "বালুর টিপ ৩ টা".to_string(),
                amount: 12000.0,
                paid: 10000.0,
                date: august(2),
                note: String::new(),
            },
            Transaction {
                id: 3,
                kind: TransactionKind::Expense,
                description: "ডিজেল ৫০ লিটার".to_string(),
                amount: 5500.0,
                paid: 5500.0,
                date: august(3),
                note: String::new(),
            },
            Transaction {
                id: 4,
                kind: TransactionKind::Expense,
                description: "ড্রাইভার বেতন (অগ্রিম)".to_string(),
                amount: 2000.0,
                paid: 2000.0,
                date: august(4),
                note: "ড্রাইভার".to_string(),
            },
            Transaction {
                id: 5,
                kind: TransactionKind::Income,
                description: "লোকাল ট্রিপ".to_string(),
                amount: 3000.0,
                paid: 0.0,
                date: august(5),
                note: String::new(),
            },
        ],
        "v2" => vec![Transaction {
            id: 6,
            kind: TransactionKind::Income,
            description: "চালান বিক্রি #3848".to_string(),
            amount: 22000.0,
            paid: 22000.0,
            date: august(8),
            note: String::new(),
        }],
        _ => Vec::new(),
    }
}

/// Per-area sales rows. The original report simulated these with
/// `Math.random()`; here the figures are fixed arithmetic series so the
/// report and its exports are reproducible.
pub fn area_sales() -> Vec<AreaSales> {
    let areas = [
        "Dhaka (City)",
        "Vattor Ashapash",
        "Bagda",
        "Gopalpur",
        "Polupara",
        "Boglagari",
        "Meji",
        "Belamari",
        "Rajnibari",
        "Chatalgari",
        "Raninagor",
        "Komdia",
    ];

    areas
        .iter()
        .enumerate()
        .map(|(i, area)| {
            let i64i = i as i64;
            let customers = if i == 0 { 1574 } else { 150 + (i64i * 137) % 1600 };
            let chalans = customers + (i64i * 71) % 300 + 1;
            let units = 1000 + i64i * 1000 + (i64i * 389) % 4000;
            let sales = (units * (7 + i64i % 10)) as f64;
            AreaSales {
                idx: i as u32 + 1,
                area: area.to_string(),
                customers,
                chalans,
                units,
                sales,
            }
        })
        .collect()
}

/// Three seed tasks.
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "হাওয়া কনট্রাক্ট বিল".to_string(),
            repeat: Repeat::Never,
            assignee: "আমি".to_string(),
            due: NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid sample date"),
            done: false,
        },
        Task {
            id: 2,
            title: "রিপোর্ট চেক করা".to_string(),
            repeat: Repeat::Weekly,
            assignee: "সুমন".to_string(),
            due: NaiveDate::from_ymd_opt(2025, 9, 16).expect("valid sample date"),
            done: false,
        },
        Task {
            id: 3,
            title: "কাস্টমার ফোন".to_string(),
            repeat: Repeat::Never,
            assignee: "তুমি".to_string(),
            due: NaiveDate::from_ymd_opt(2025, 9, 10).expect("valid sample date"),
            done: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_deterministic() {
        assert_eq!(customers(), customers());
        assert_eq!(area_sales(), area_sales());
    }

    #[test]
    fn test_customer_ids_are_unique() {
        let all = customers();
        let mut ids: Vec<u32> = all.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_chalan_totals_are_consistent() {
        for customer in customers() {
            for chalan in &customer.chalans {
                assert_eq!(chalan.total, chalan.value - chalan.discount + chalan.vat);
                assert_eq!(chalan.due, chalan.total - chalan.paid);
            }
        }
    }

    #[test]
    fn test_unknown_vehicle_has_empty_book() {
        assert!(transactions("v3").is_empty());
        assert!(transactions("nope").is_empty());
    }
}
