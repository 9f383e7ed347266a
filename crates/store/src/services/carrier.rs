//! Mock carrier tracking.
//!
//! Adapts the shape of a third-party carrier API to an in-process trait. The
//! mock maps a tracking code to a status via a stable hash, so repeated
//! lookups for the same shipment always agree; there is no forward
//! progression over time. A real carrier integration would implement
//! [`CarrierQuery`] against its API and model monotonic progression.

use chrono::NaiveDate;

use tangelo_core::ShipmentStatus;

use crate::models::Shipment;

/// Fixed delivery estimate returned by the mock carrier.
const ESTIMATED_DELIVERY: NaiveDate = match NaiveDate::from_ymd_opt(2025, 11, 15) {
    Some(date) => date,
    None => panic!("invalid estimated delivery date"),
};

/// Tracking information reported by a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingInfo {
    /// Current shipment status.
    pub status: ShipmentStatus,
    /// Estimated delivery date.
    pub estimated_delivery: NaiveDate,
}

/// A carrier that can be queried for tracking information.
pub trait CarrierQuery {
    /// Look up the current status and delivery estimate for a tracking code.
    fn lookup(&self, tracking_code: &str) -> TrackingInfo;

    /// Refresh a shipment's status in memory from a lookup.
    ///
    /// The updated status is not persisted here; it is stale on disk until
    /// the order is next saved.
    fn refresh(&self, shipment: &mut Shipment) -> ShipmentStatus {
        let info = self.lookup(&shipment.tracking_code);
        shipment.status = info.status;
        info.status
    }
}

/// The simulated carrier.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCarrier;

impl CarrierQuery for MockCarrier {
    /// Pure function of the tracking code: the code's FNV-1a hash is reduced
    /// into the six carrier-reported statuses.
    fn lookup(&self, tracking_code: &str) -> TrackingInfo {
        let statuses = ShipmentStatus::CARRIER_REPORTED;
        let index = fnv1a(tracking_code.as_bytes()) as usize % statuses.len();
        TrackingInfo {
            status: statuses[index],
            estimated_delivery: ESTIMATED_DELIVERY,
        }
    }
}

/// 64-bit FNV-1a. Stable across processes and platforms, unlike the standard
/// library's randomized hasher, which the deterministic-lookup contract
/// rules out.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
