use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Fixed number of decimal digits kept from each weight. `None` picks the
    /// smallest count that makes every fitting weight integral.
    pub precision_digits: Option<u32>,

    /// Upper bound for the automatic digit search
    pub max_precision_digits: u32,

    /// Ceiling on (items + 1) x (scaled capacity + 1)
    pub max_table_cells: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            precision_digits: None,
            max_precision_digits: 9,
            max_table_cells: 10_000_000,
        }
    }
}

impl Params {
    /// One decimal digit, scale factor 10.
    pub fn reference() -> Self {
        Self {
            precision_digits: Some(1),
            ..Self::default()
        }
    }

    pub fn initialize(h: &Option<Map<String, Value>>) -> Self {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = m.get("precision_digits").and_then(|v| v.as_u64()).and_then(|v| u32::try_from(v).ok()) { p.precision_digits = Some(v); }
            if let Some(v) = m.get("max_precision_digits").and_then(|v| v.as_u64()).and_then(|v| u32::try_from(v).ok()) { p.max_precision_digits = v; }
            if let Some(v) = m.get("max_table_cells").and_then(|v| v.as_u64()).and_then(|v| usize::try_from(v).ok()) { p.max_table_cells = v; }
        }
        p
    }
}
