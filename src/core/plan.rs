//! Billing plans and the immutable plan selection passed through checkout.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Billing tier offered on the premium page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    #[display("monthly")]
    Monthly,
    #[display("annual")]
    Annual,
}

impl Plan {
    /// Price in KES. The mapping is fixed: no other amount is ever produced.
    pub fn amount(&self) -> u32 {
        match self {
            Plan::Monthly => 1000,
            Plan::Annual => 10000,
        }
    }

    /// Amount as shown in the payment summary
    pub fn display_amount(&self) -> &'static str {
        match self {
            Plan::Monthly => "KES 1,000",
            Plan::Annual => "KES 10,000",
        }
    }

    /// Title used on the pricing card `<h3>`
    pub fn title(&self) -> &'static str {
        match self {
            Plan::Monthly => "Monthly",
            Plan::Annual => "Annual",
        }
    }
}

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Plan::Monthly),
            "annual" => Ok(Plan::Annual),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown plan: {0}")]
pub struct UnknownPlan(pub String);

/// The plan a user picked on a pricing card.
///
/// Created once per modal open and handed to the submit path; the amount is
/// always derived from the plan rather than stored next to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanSelection {
    plan: Plan,
}

impl PlanSelection {
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn amount(&self) -> u32 {
        self.plan.amount()
    }

    pub fn display_amount(&self) -> &'static str {
        self.plan.display_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_amounts() {
        assert_eq!(Plan::Monthly.amount(), 1000);
        assert_eq!(Plan::Annual.amount(), 10000);
        assert_eq!(PlanSelection::new(Plan::Annual).amount(), 10000);
    }

    #[test]
    fn test_display_amount_matches_amount() {
        assert_eq!(Plan::Monthly.display_amount(), "KES 1,000");
        assert_eq!(PlanSelection::new(Plan::Annual).display_amount(), "KES 10,000");
    }

    #[test]
    fn test_default_selection_is_monthly() {
        let selection = PlanSelection::default();
        assert_eq!(selection.plan(), Plan::Monthly);
        assert_eq!(selection.amount(), 1000);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("annual".parse::<Plan>(), Ok(Plan::Annual));
        assert_eq!(Plan::Monthly.to_string(), "monthly");
        assert!("weekly".parse::<Plan>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Plan::Annual).unwrap(), "\"annual\"");
        let plan: Plan = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(plan, Plan::Monthly);
    }
}
