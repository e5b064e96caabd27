//! Eligibility check: stock against requested quantity, destination against
//! the serviceable region set.
//!
//! Quantity is evaluated first. When both rules fail, the reported reason is
//! `InsufficientInventory`.

use crate::core_types::Quantity;

use super::outcome::RejectReason;
use super::regions::ServiceableRegions;
use super::types::InventoryItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Rejected(RejectReason),
}

/// Pure and deterministic; no I/O.
pub fn check(
    item: &InventoryItem,
    requested_quantity: Quantity,
    region_code: &str,
    regions: &ServiceableRegions,
) -> Eligibility {
    // exact stock match passes
    if requested_quantity > item.count {
        return Eligibility::Rejected(RejectReason::InsufficientInventory {
            requested: requested_quantity,
            available: item.count,
        });
    }

    if !regions.contains(region_code) {
        return Eligibility::Rejected(RejectReason::UnserviceableRegion(
            region_code.to_string(),
        ));
    }

    Eligibility::Eligible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(count: Quantity) -> InventoryItem {
        InventoryItem::new("I1", count)
    }

    #[test]
    fn test_eligible_when_stock_covers_quantity() {
        let regions = ServiceableRegions::us_states();
        assert_eq!(check(&item(5), 3, "CA", &regions), Eligibility::Eligible);
    }

    #[test]
    fn test_exact_stock_match_passes() {
        let regions = ServiceableRegions::us_states();
        assert_eq!(check(&item(3), 3, "CA", &regions), Eligibility::Eligible);
    }

    #[test]
    fn test_insufficient_inventory() {
        let regions = ServiceableRegions::us_states();
        assert_eq!(
            check(&item(2), 3, "CA", &regions),
            Eligibility::Rejected(RejectReason::InsufficientInventory {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_zero_stock_rejects_any_quantity() {
        let regions = ServiceableRegions::us_states();
        let result = check(&item(0), 1, "NY", &regions);
        assert!(matches!(
            result,
            Eligibility::Rejected(RejectReason::InsufficientInventory { .. })
        ));
    }

    #[test]
    fn test_unserviceable_region() {
        let regions = ServiceableRegions::us_states();
        assert_eq!(
            check(&item(5), 3, "ZZ", &regions),
            Eligibility::Rejected(RejectReason::UnserviceableRegion("ZZ".into()))
        );
    }

    #[test]
    fn test_lowercase_region_rejected() {
        let regions = ServiceableRegions::us_states();
        assert_ne!(check(&item(5), 1, "ca", &regions), Eligibility::Eligible);
    }

    #[test]
    fn test_quantity_checked_before_region() {
        let regions = ServiceableRegions::us_states();
        let result = check(&item(1), 3, "ZZ", &regions);
        match result {
            Eligibility::Rejected(reason) => assert_eq!(reason.code(), "InsufficientInventory"),
            Eligibility::Eligible => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let regions = ServiceableRegions::us_states();
        let inputs = [(5, 3, "CA"), (2, 3, "CA"), (5, 3, "ZZ"), (0, 0, "")];
        for (count, qty, region) in inputs {
            let first = check(&item(count), qty, region, &regions);
            let second = check(&item(count), qty, region, &regions);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_custom_region_set() {
        let regions = ServiceableRegions::from_codes(["PR"]);
        assert_eq!(check(&item(5), 1, "PR", &regions), Eligibility::Eligible);
        assert_ne!(check(&item(5), 1, "CA", &regions), Eligibility::Eligible);
    }
}
