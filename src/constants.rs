//! Application constants for the contribution processor
//!
//! Field positions follow the FEC individual contributions data dictionary.

// =============================================================================
// Input Record Layout
// =============================================================================

/// Field delimiter used by FEC bulk data files
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a conforming individual contributions record
pub const EXPECTED_FIELD_COUNT: usize = 21;

/// Field positions within a record
pub mod fields {
    /// CMTE_ID - the recipient committee
    pub const RECIPIENT_ID: usize = 0;

    /// ZIP_CODE - contributor zip, 5 or 9 characters in practice
    pub const ZIP_CODE: usize = 10;

    /// TRANSACTION_DT - MMDDYYYY
    pub const TRANSACTION_DATE: usize = 13;

    /// TRANSACTION_AMT - whole currency units
    pub const TRANSACTION_AMOUNT: usize = 14;

    /// OTHER_ID - non-empty when the contribution came from an entity
    pub const OTHER_ID: usize = 15;
}

// =============================================================================
// Aggregation
// =============================================================================

/// Number of leading zip characters used as the geographic grouping key
pub const ZIP_PREFIX_LEN: usize = 5;

/// chrono format for transaction dates, both parsed and reported
pub const DATE_FORMAT: &str = "%m%d%Y";

/// Width of a transaction date field (MM + DD + YYYY)
pub const DATE_FIELD_LEN: usize = 8;

// =============================================================================
// Runtime
// =============================================================================

/// Environment variable selecting the malformed line policy (skip or abort)
pub const ENV_MALFORMED_LINES: &str = "POLITICAL_DONORS_MALFORMED_LINES";

/// Environment variable toggling the progress spinner
pub const ENV_PROGRESS: &str = "POLITICAL_DONORS_PROGRESS";

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "political_donors=info";

/// Lines between progress spinner updates
pub const PROGRESS_TICK_INTERVAL: usize = 10_000;
