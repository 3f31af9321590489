use serde::{Deserialize, Serialize};
use std::fmt;

/// Label for descriptions no rule matched.
pub const OTROS: &str = "Otros";
/// Label for payment-like descriptions no rule matched.
pub const PAGOS_Y_ABONOS: &str = "Pagos y Abonos";

/// A spending-category label.
///
/// Values come from the rule taxonomy plus the two sentinels above; the
/// taxonomy is configuration, so labels stay open strings rather than a
/// closed enum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Category(label.into())
    }

    pub fn uncategorized() -> Self {
        Category(OTROS.to_string())
    }

    pub fn payments() -> Self {
        Category(PAGOS_Y_ABONOS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0 == OTROS
    }

    pub fn is_payments(&self) -> bool {
        self.0 == PAGOS_Y_ABONOS
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
