use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorStatus {
    Active,
    #[serde(alias = "coming-soon")]
    ComingSoon,
    /// Anything not listed above deserializes here and is never a candidate.
    #[serde(other)]
    Inactive,
}

impl ProcessorStatus {
    pub fn is_candidate(&self) -> bool {
        matches!(self, Self::Active | Self::ComingSoon)
    }
}

/// One catalog entry as supplied by the catalog loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProcessor")]
pub struct ProcessorRecord {
    pub id: String,
    pub name: String,
    /// Percentage of volume, e.g. `2.9` for 2.9%.
    pub primary_rate: Decimal,
    /// Flat fee per transaction.
    pub primary_fixed_fee: Decimal,
    pub monthly_fee: Decimal,
    /// Verticals served. Empty means every vertical.
    pub business_types: Vec<String>,
    pub min_monthly_volume: Option<Decimal>,
    pub max_monthly_volume: Option<Decimal>,
    pub api_available: bool,
    pub no_monthly_fee: bool,
    pub featured: bool,
    pub features: Vec<String>,
    pub status: ProcessorStatus,
}

impl ProcessorRecord {
    /// Creates an active record with no restrictions and no flags set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        primary_rate: Decimal,
        primary_fixed_fee: Decimal,
        monthly_fee: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            primary_rate,
            primary_fixed_fee,
            monthly_fee,
            business_types: Vec::new(),
            min_monthly_volume: None,
            max_monthly_volume: None,
            api_available: false,
            no_monthly_fee: monthly_fee.is_zero(),
            featured: false,
            features: Vec::new(),
            status: ProcessorStatus::Active,
        }
    }

    /// Lower volume bound, if one is declared. A zero bound counts as undeclared.
    pub fn volume_floor(&self) -> Option<Decimal> {
        self.min_monthly_volume.filter(|v| !v.is_zero())
    }

    /// Upper volume bound, if one is declared. A zero bound counts as undeclared.
    pub fn volume_ceiling(&self) -> Option<Decimal> {
        self.max_monthly_volume.filter(|v| !v.is_zero())
    }
}

/// Wire shape of a catalog record. `no_monthly_fee` may be omitted, in which
/// case it is derived from `monthly_fee`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawProcessor {
    pub id: String,
    pub name: String,
    pub primary_rate: Decimal,
    #[serde(default)]
    pub primary_fixed_fee: Decimal,
    #[serde(default)]
    pub monthly_fee: Decimal,
    #[serde(default)]
    pub business_types: Option<Vec<String>>,
    #[serde(default)]
    pub min_monthly_volume: Option<Decimal>,
    #[serde(default)]
    pub max_monthly_volume: Option<Decimal>,
    #[serde(default)]
    pub api_available: bool,
    #[serde(default)]
    pub no_monthly_fee: Option<bool>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    pub status: ProcessorStatus,
}

impl From<RawProcessor> for ProcessorRecord {
    fn from(raw: RawProcessor) -> Self {
        let no_monthly_fee = raw
            .no_monthly_fee
            .unwrap_or_else(|| raw.monthly_fee.is_zero());
        Self {
            id: raw.id,
            name: raw.name,
            primary_rate: raw.primary_rate,
            primary_fixed_fee: raw.primary_fixed_fee,
            monthly_fee: raw.monthly_fee,
            business_types: raw.business_types.unwrap_or_default(),
            min_monthly_volume: raw.min_monthly_volume,
            max_monthly_volume: raw.max_monthly_volume,
            api_available: raw.api_available,
            no_monthly_fee,
            featured: raw.featured,
            features: raw.features.unwrap_or_default(),
            status: raw.status,
        }
    }
}
