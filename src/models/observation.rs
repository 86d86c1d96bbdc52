use chrono::{DateTime, Utc};

// A single close-price observation at an instant in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub at: DateTime<Utc>,
    pub price: f64,
}
