//! Monthly cost model for a server fleet
//!
//! A linear model: one fixed charge for the surrounding architecture plus a
//! per-server charge, both in whole currency units per month.

use crate::types::ServerCount;
use serde::{Deserialize, Serialize};

/// Linear monthly cost model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    /// Fixed monthly cost of the architecture, independent of fleet size
    pub fixed_monthly: u64,
    /// Monthly cost of each back-end server
    pub per_server_monthly: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fixed_monthly: 70,
            per_server_monthly: 41,
        }
    }
}

impl CostModel {
    pub fn new(fixed_monthly: u64, per_server_monthly: u64) -> Self {
        Self {
            fixed_monthly,
            per_server_monthly,
        }
    }

    /// Total monthly cost for a fleet of the given size
    pub fn monthly_total(&self, servers: ServerCount) -> u64 {
        self.fixed_monthly
            .saturating_add(self.per_server_monthly.saturating_mul(servers as u64))
    }

    /// Itemized monthly cost for a fleet of the given size
    pub fn breakdown(&self, servers: ServerCount) -> CostBreakdown {
        CostBreakdown {
            fixed: self.fixed_monthly,
            variable: self.per_server_monthly.saturating_mul(servers as u64),
            total: self.monthly_total(servers),
        }
    }
}

/// Itemized monthly cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fixed: u64,
    pub variable: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let model = CostModel::default();
        assert_eq!(model.fixed_monthly, 70);
        assert_eq!(model.per_server_monthly, 41);
    }

    #[test]
    fn test_monthly_total() {
        let model = CostModel::default();
        assert_eq!(model.monthly_total(1), 111);
        assert_eq!(model.monthly_total(3), 193);
        assert_eq!(model.monthly_total(0), 70);
    }

    #[test]
    fn test_breakdown_adds_up() {
        let model = CostModel::new(100, 25);
        let breakdown = model.breakdown(4);
        assert_eq!(breakdown.fixed, 100);
        assert_eq!(breakdown.variable, 100);
        assert_eq!(breakdown.total, 200);
        assert_eq!(breakdown.total, breakdown.fixed + breakdown.variable);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let model = CostModel::new(u64::MAX, u64::MAX);
        assert_eq!(model.monthly_total(ServerCount::MAX), u64::MAX);
    }
}
