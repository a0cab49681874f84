//! FILENAME: records/src/task.rs
//! PURPOSE: Task records for the task-manager list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// How often a task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    Never,
    Daily,
    Weekly,
    Monthly,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Never
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub repeat: Repeat,
    pub assignee: String,
    pub due: NaiveDate,
    pub done: bool,
}

impl Keyed for Task {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
