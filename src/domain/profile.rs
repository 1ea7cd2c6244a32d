use crate::error::{MatchError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases a key and folds `-` into `_`, so `Online-Only` and `online_only` match.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

/// The merchant's vertical as submitted, e.g. `restaurant` or `saas`.
///
/// Kept as free text: unknown verticals are legal and expand to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BusinessType(String);

impl BusinessType {
    pub fn new(raw: &str) -> Self {
        Self(normalize_key(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BusinessType {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for BusinessType {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<BusinessType> for String {
    fn from(value: BusinessType) -> Self {
        value.0
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest monthly volume accepted: one quadrillion currency units.
pub const MAX_MONTHLY_VOLUME: Decimal = dec!(1_000_000_000_000_000);

/// Estimated monthly sales in currency units, held to the cent.
/// Never negative and never above [`MAX_MONTHLY_VOLUME`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MonthlyVolume(Decimal);

impl MonthlyVolume {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validates and rounds `value` to cents; sub-cent volumes become zero.
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(MatchError::ValidationError(
                "Monthly volume must not be negative".to_string(),
            ));
        }
        if value > MAX_MONTHLY_VOLUME {
            return Err(MatchError::ValidationError(format!(
                "Monthly volume must not exceed {}",
                MAX_MONTHLY_VOLUME
            )));
        }
        Ok(Self(
            value
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        ))
    }

    /// Parses form input, treating anything non-numeric, negative or too
    /// large as zero.
    pub fn parse_lenient(raw: &str) -> Self {
        Decimal::from_str(raw.trim())
            .ok()
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for MonthlyVolume {
    type Error = MatchError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MonthlyVolume> for Decimal {
    fn from(volume: MonthlyVolume) -> Self {
        volume.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum PaymentEnvironment {
    InPersonOnly,
    OnlineOnly,
    #[default]
    Both,
}

impl From<&str> for PaymentEnvironment {
    fn from(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "in_person_only" | "in_person" => Self::InPersonOnly,
            "online_only" | "online" => Self::OnlineOnly,
            _ => Self::Both,
        }
    }
}

impl From<String> for PaymentEnvironment {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

/// What the merchant cares about most. Drives the base priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BudgetPriority {
    #[default]
    LowestTotalCost,
    NoMonthlyFees,
    EasySetup,
    AdvancedFeatures,
}

impl BudgetPriority {
    /// Human-facing label shown next to the top match.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LowestTotalCost => "Lowest fees possible",
            Self::NoMonthlyFees => "No monthly fees",
            Self::EasySetup => "Easy setup & support",
            Self::AdvancedFeatures => "Advanced features & tools",
        }
    }
}

impl From<&str> for BudgetPriority {
    fn from(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "no_monthly_fees" => Self::NoMonthlyFees,
            "easy_setup" => Self::EasySetup,
            "advanced_features" => Self::AdvancedFeatures,
            _ => Self::LowestTotalCost,
        }
    }
}

impl From<String> for BudgetPriority {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

/// The quiz answers a merchant submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_type: BusinessType,
    pub monthly_volume: MonthlyVolume,
    #[serde(default)]
    pub payment_environment: PaymentEnvironment,
    #[serde(default)]
    pub budget_priority: BudgetPriority,
}

impl BusinessProfile {
    pub fn new(
        business_type: impl Into<BusinessType>,
        monthly_volume: MonthlyVolume,
        payment_environment: PaymentEnvironment,
        budget_priority: BudgetPriority,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            monthly_volume,
            payment_environment,
            budget_priority,
        }
    }
}
