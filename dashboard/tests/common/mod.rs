//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

use dashboard::{DashboardState, ExportError, ExportOutput, OutputSink};

/// Test harness around a dashboard state.
pub struct TestHarness {
    pub state: DashboardState,
}

impl TestHarness {
    /// Harness over the deterministic sample datasets.
    pub fn with_sample_data() -> Self {
        TestHarness {
            state: dashboard::create_dashboard_state(),
        }
    }

    /// Harness with no records at all.
    pub fn empty() -> Self {
        TestHarness {
            state: DashboardState::empty(),
        }
    }

    /// Id of the first sample customer.
    pub fn first_customer_id(&self) -> u32 {
        self.state.customers.all()[0].id
    }

    /// Id of the first chalan of the first sample customer.
    pub fn first_chalan_id(&self) -> u32 {
        self.state.customers.all()[0].chalans[0].chalan_id
    }
}

/// A sink whose output surface is always refused (popup blocker).
pub struct BlockedSink;

impl OutputSink for BlockedSink {
    fn deliver(&mut self, _output: &ExportOutput) -> Result<(), ExportError> {
        Err(ExportError::Blocked("pop-up blocked".to_string()))
    }
}
