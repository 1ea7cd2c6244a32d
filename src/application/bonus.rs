//! Domain bonuses added on top of the base priority score.
//!
//! Every bonus is a row in [`BONUS_RULES`]: who it applies to, which
//! processors receive it, and how much. Rules stack.

use crate::domain::processor::ProcessorRecord;
use crate::domain::profile::BusinessProfile;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PARTNER_VERTICALS: &[&str] = &[
    "restaurant",
    "cafe",
    "bar",
    "food_truck",
    "catering",
    "service",
    "hospitality",
    "healthcare",
    "fitness",
    "beauty",
];
const FOOD_VERTICALS: &[&str] = &["restaurant", "cafe", "bar", "food_truck", "catering"];
const ONLINE_VERTICALS: &[&str] = &["online", "saas", "digital", "subscription"];
const RETAIL_VERTICALS: &[&str] = &["retail", "fashion", "electronics", "grocery"];
const SERVICE_VERTICALS: &[&str] = &["service", "healthcare", "fitness", "beauty", "education"];
const POS_VERTICALS: &[&str] = &["retail", "restaurant"];

pub const HIGH_VOLUME_THRESHOLD: Decimal = dec!(50000);
pub const SMALL_BUSINESS_THRESHOLD: Decimal = dec!(10000);

/// Which merchants a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Audience {
    /// Submitted vertical is one of these keys (not the expanded set).
    Verticals(&'static [&'static str]),
    VolumeAtLeast(Decimal),
    VolumeBelow(Decimal),
    Everyone,
}

impl Audience {
    pub fn includes(&self, profile: &BusinessProfile) -> bool {
        let volume = profile.monthly_volume.value();
        match self {
            Self::Verticals(keys) => keys.contains(&profile.business_type.as_str()),
            Self::VolumeAtLeast(threshold) => volume >= *threshold,
            Self::VolumeBelow(threshold) => volume < *threshold,
            Self::Everyone => true,
        }
    }
}

/// Which processors receive a rule's bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recipient {
    /// Exact processor name match against any of these.
    Named(&'static [&'static str]),
    ApiAvailable,
    NoMonthlyFee,
    Featured,
}

impl Recipient {
    pub fn matches(&self, processor: &ProcessorRecord) -> bool {
        match self {
            Self::Named(names) => names.contains(&processor.name.as_str()),
            Self::ApiAvailable => processor.api_available,
            Self::NoMonthlyFee => processor.no_monthly_fee,
            Self::Featured => processor.featured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusRule {
    pub label: &'static str,
    pub audience: Audience,
    pub recipient: Recipient,
    pub amount: Decimal,
}

impl BonusRule {
    pub fn applies(&self, profile: &BusinessProfile, processor: &ProcessorRecord) -> bool {
        self.audience.includes(profile) && self.recipient.matches(processor)
    }
}

const fn rule(
    label: &'static str,
    audience: Audience,
    recipient: Recipient,
    amount: Decimal,
) -> BonusRule {
    BonusRule {
        label,
        audience,
        recipient,
        amount,
    }
}

pub const BONUS_RULES: &[BonusRule] = &[
    // Largest bonus: partner processors win service and hospitality merchants.
    rule(
        "recommended_partner",
        Audience::Verticals(PARTNER_VERTICALS),
        Recipient::Named(&["PayBrite Dual Pricing", "GoPayBright", "PayBright"]),
        dec!(600),
    ),
    // Food & beverage
    rule(
        "restaurant_toast",
        Audience::Verticals(FOOD_VERTICALS),
        Recipient::Named(&["Toast"]),
        dec!(300),
    ),
    rule(
        "restaurant_lightspeed",
        Audience::Verticals(FOOD_VERTICALS),
        Recipient::Named(&["Lightspeed"]),
        dec!(280),
    ),
    rule(
        "restaurant_square",
        Audience::Verticals(FOOD_VERTICALS),
        Recipient::Named(&["Square"]),
        dec!(200),
    ),
    rule(
        "restaurant_clover",
        Audience::Verticals(FOOD_VERTICALS),
        Recipient::Named(&["Clover"]),
        dec!(180),
    ),
    // Online & digital
    rule(
        "online_stripe",
        Audience::Verticals(ONLINE_VERTICALS),
        Recipient::Named(&["Stripe"]),
        dec!(300),
    ),
    rule(
        "online_api",
        Audience::Verticals(ONLINE_VERTICALS),
        Recipient::ApiAvailable,
        dec!(150),
    ),
    // High volume
    rule(
        "high_volume_stax",
        Audience::VolumeAtLeast(HIGH_VOLUME_THRESHOLD),
        Recipient::Named(&["Stax"]),
        dec!(250),
    ),
    rule(
        "high_volume_helcim",
        Audience::VolumeAtLeast(HIGH_VOLUME_THRESHOLD),
        Recipient::Named(&["Helcim"]),
        dec!(200),
    ),
    // Small business
    rule(
        "small_no_monthly_fee",
        Audience::VolumeBelow(SMALL_BUSINESS_THRESHOLD),
        Recipient::NoMonthlyFee,
        dec!(200),
    ),
    rule(
        "small_square_paypal",
        Audience::VolumeBelow(SMALL_BUSINESS_THRESHOLD),
        Recipient::Named(&["Square", "PayPal"]),
        dec!(150),
    ),
    rule(
        "small_clover",
        Audience::VolumeBelow(SMALL_BUSINESS_THRESHOLD),
        Recipient::Named(&["Clover"]),
        dec!(100),
    ),
    rule(
        "small_gopaybright",
        Audience::VolumeBelow(SMALL_BUSINESS_THRESHOLD),
        Recipient::Named(&["GoPayBright"]),
        dec!(120),
    ),
    // Retail
    rule(
        "retail_clover",
        Audience::Verticals(RETAIL_VERTICALS),
        Recipient::Named(&["Clover"]),
        dec!(200),
    ),
    rule(
        "retail_lightspeed",
        Audience::Verticals(RETAIL_VERTICALS),
        Recipient::Named(&["Lightspeed"]),
        dec!(180),
    ),
    rule(
        "retail_square",
        Audience::Verticals(RETAIL_VERTICALS),
        Recipient::Named(&["Square"]),
        dec!(150),
    ),
    rule(
        "retail_gopaybright",
        Audience::Verticals(RETAIL_VERTICALS),
        Recipient::Named(&["GoPayBright"]),
        dec!(130),
    ),
    // Services
    rule(
        "service_gopaybright",
        Audience::Verticals(SERVICE_VERTICALS),
        Recipient::Named(&["GoPayBright"]),
        dec!(150),
    ),
    rule(
        "service_square",
        Audience::Verticals(SERVICE_VERTICALS),
        Recipient::Named(&["Square"]),
        dec!(140),
    ),
    // Figure POS integration
    rule(
        "pos_gopaybright",
        Audience::Verticals(POS_VERTICALS),
        Recipient::Named(&["GoPayBright"]),
        dec!(80),
    ),
    // Editorial curation
    rule(
        "featured",
        Audience::Everyone,
        Recipient::Featured,
        dec!(400),
    ),
];

/// Rules from `rules` that fire for this profile and processor.
pub fn applicable<'a>(
    rules: &'a [BonusRule],
    profile: &'a BusinessProfile,
    processor: &'a ProcessorRecord,
) -> impl Iterator<Item = &'a BonusRule> + 'a {
    rules
        .iter()
        .filter(move |rule| rule.applies(profile, processor))
}

/// Sum of every bonus in [`BONUS_RULES`] that fires.
pub fn total_bonus(profile: &BusinessProfile, processor: &ProcessorRecord) -> Decimal {
    applicable(BONUS_RULES, profile, processor)
        .map(|rule| rule.amount)
        .sum()
}
