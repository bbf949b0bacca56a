//! Member type records.

use crate::record::Record;
use crate::types::MemberTypeId;
use serde::{Deserialize, Serialize};

/// A membership tier.
///
/// Member types are keyed by well-known strings and seeded when the store
/// opens; they are never created or deleted at runtime, only patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    /// Well-known key, e.g. `"basic"`.
    pub id: MemberTypeId,
    /// Discount percentage granted to members of this tier.
    pub discount: f64,
    /// Posts a member of this tier may create per month.
    pub monthly_post_limit: u32,
}

impl MemberType {
    /// Creates a member type with the given key and terms.
    pub fn new(id: impl Into<MemberTypeId>, discount: f64, monthly_post_limit: u32) -> Self {
        Self {
            id: id.into(),
            discount,
            monthly_post_limit,
        }
    }

    /// The default `basic` tier.
    #[must_use]
    pub fn basic() -> Self {
        Self::new(MemberTypeId::basic(), 0.0, 20)
    }

    /// The default `business` tier.
    #[must_use]
    pub fn business() -> Self {
        Self::new(MemberTypeId::business(), 5.0, 100)
    }
}

impl Record for MemberType {
    type Key = MemberTypeId;
    type Patch = MemberTypePatch;

    fn key(&self) -> &MemberTypeId {
        &self.id
    }

    fn apply(&mut self, patch: MemberTypePatch) {
        if let Some(discount) = patch.discount {
            self.discount = discount;
        }
        if let Some(monthly_post_limit) = patch.monthly_post_limit {
            self.monthly_post_limit = monthly_post_limit;
        }
    }
}

/// Partial update for a member type. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTypePatch {
    /// New discount percentage.
    pub discount: Option<f64>,
    /// New monthly post limit.
    pub monthly_post_limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers() {
        let basic = MemberType::basic();
        assert_eq!(basic.discount, 0.0);
        assert_eq!(basic.monthly_post_limit, 20);

        let business = MemberType::business();
        assert_eq!(business.discount, 5.0);
        assert_eq!(business.monthly_post_limit, 100);
    }

    #[test]
    fn patch_preserves_unpatched_fields() {
        let mut tier = MemberType::basic();
        tier.apply(MemberTypePatch {
            discount: Some(2.5),
            monthly_post_limit: None,
        });
        assert_eq!(tier.discount, 2.5);
        assert_eq!(tier.monthly_post_limit, 20);
    }
}
