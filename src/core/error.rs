//! Fatal setup errors.
//!
//! Only conditions that make a legal setup impossible are errors. Everything
//! recoverable is reported as an [`Advisory`](super::Advisory) instead.

use thiserror::Error;

use crate::cards::Category;

/// Errors that abort a generation.
#[derive(Error, Debug)]
pub enum SetupError {
    /// A category the setup cannot do without is empty after set filtering.
    #[error("no {category} available in the selected sets")]
    DataUnavailable { category: Category },

    /// Player count outside the supported 1-5 range.
    #[error("unsupported player count {0} (expected 1-5)")]
    InvalidPlayerCount(u8),

    /// Category name not recognised.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// Catalog JSON handed in by the caller could not be parsed.
    #[error("failed to parse catalog records")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
    },
}
