//! FILENAME: dashboard/src/state.rs
//! PURPOSE: Explicit top-level ownership of every record collection.
//! CONTEXT: One store per list page. Consumers receive the state by
//! reference; nothing reaches for a global. Vehicle account books are
//! keyed by vehicle id, matching the accounts page.

use std::collections::HashMap;

use records::{
    sample, AreaSales, CreditEntry, Customer, RecordStore, RentEntry, Task, Transaction,
    Vehicle,
};

/// All record collections behind the dashboard.
pub struct DashboardState {
    pub customers: RecordStore<Customer>,
    pub rents: RecordStore<RentEntry>,
    pub credits: RecordStore<CreditEntry>,
    pub areas: RecordStore<AreaSales>,
    pub tasks: RecordStore<Task>,
    pub vehicles: Vec<Vehicle>,
    pub transactions: HashMap<String, RecordStore<Transaction>>,
}

impl DashboardState {
    /// An empty state (used by tests that build their own fixtures).
    pub fn empty() -> Self {
        DashboardState {
            customers: RecordStore::new(Vec::new()),
            rents: RecordStore::new(Vec::new()),
            credits: RecordStore::new(Vec::new()),
            areas: RecordStore::new(Vec::new()),
            tasks: RecordStore::new(Vec::new()),
            vehicles: Vec::new(),
            transactions: HashMap::new(),
        }
    }

    /// The account book for one vehicle; unknown ids read as empty.
    pub fn vehicle_book(&self, vehicle_id: &str) -> &[Transaction] {
        self.transactions
            .get(vehicle_id)
            .map(|s| s.all())
            .unwrap_or(&[])
    }
}

/// Build the state over the sample datasets.
pub fn create_dashboard_state() -> DashboardState {
    log::info!("creating dashboard state from sample data");
    let vehicles = sample::vehicles();
    let transactions = vehicles
        .iter()
        .map(|v| (v.id.clone(), RecordStore::new(sample::transactions(&v.id))))
        .collect();

    DashboardState {
        customers: RecordStore::new(sample::customers()),
        rents: RecordStore::new(sample::rents()),
        credits: RecordStore::new(sample::credits()),
        areas: RecordStore::new(sample::area_sales()),
        tasks: RecordStore::new(sample::tasks()),
        vehicles,
        transactions,
    }
}
