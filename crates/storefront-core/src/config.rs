//! # Store Configuration
//!
//! Pricing policy applied at checkout.
//!
//! Read-only once a store is built, so no locking is needed around it.
//! Loading from the environment is the app's job; this crate does no I/O.

use serde::{Deserialize, Serialize};

use crate::types::SurchargeRate;
use crate::validation::{validate_surcharge_bps, ValidationResult};

/// Surcharge charged to non-premium members: 7% (shipping not waived).
pub const DEFAULT_NON_MEMBER_SURCHARGE_BPS: u32 = 700;

/// Store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Added on top of the subtotal for customers who are not premium members.
    pub non_member_surcharge: SurchargeRate,
}

impl StoreConfig {
    /// Builds a config with the given surcharge, rejecting rates above 100%.
    pub fn with_surcharge_bps(bps: u32) -> ValidationResult<Self> {
        validate_surcharge_bps(bps)?;
        Ok(StoreConfig {
            non_member_surcharge: SurchargeRate::from_bps(bps),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            non_member_surcharge: SurchargeRate::from_bps(DEFAULT_NON_MEMBER_SURCHARGE_BPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surcharge_is_seven_percent() {
        assert_eq!(StoreConfig::default().non_member_surcharge.bps(), 700);
    }

    #[test]
    fn test_with_surcharge_bps() {
        assert_eq!(
            StoreConfig::with_surcharge_bps(0).unwrap().non_member_surcharge,
            SurchargeRate::zero()
        );
        assert!(StoreConfig::with_surcharge_bps(20_000).is_err());
    }

    #[test]
    fn test_config_json_shape() {
        let json = serde_json::to_string(&StoreConfig::default()).unwrap();
        assert_eq!(json, r#"{"nonMemberSurcharge":700}"#);

        let parsed: StoreConfig = serde_json::from_str(r#"{"nonMemberSurcharge":500}"#).unwrap();
        assert_eq!(parsed.non_member_surcharge.bps(), 500);
    }

    #[test]
    fn test_config_json_rejects_out_of_range_surcharge() {
        assert!(serde_json::from_str::<StoreConfig>(r#"{"nonMemberSurcharge":20000}"#).is_err());
        assert!(
            serde_json::from_str::<StoreConfig>(r#"{"nonMemberSurcharge":4000000000}"#).is_err()
        );
        assert!(serde_json::from_str::<StoreConfig>(r#"{"nonMemberSurcharge":10000}"#).is_ok());
    }
}
