//! Core types used throughout the system
//!
//! Identifiers arrive from callers as opaque strings; these aliases give
//! them semantic meaning at module boundaries.

/// Inventory item identifier (primary key of the inventory table).
pub type ItemId = String;

/// Order identifier supplied by the caller.
///
/// # Constraints:
/// - Primary key of the order table
/// - Reported back verbatim in `WorkflowResult::Accepted`
pub type OrderId = String;

/// Two-letter destination region code, matched case-sensitively.
pub type RegionCode = String;

/// Stock counts and requested quantities
pub type Quantity = i64;
