use super::{compare, engine};
use crate::config::RankingPolicy;
use crate::domain::ports::CatalogSourceBox;
use crate::domain::profile::{BusinessProfile, MonthlyVolume};
use crate::domain::recommendation::{CostComparison, ScoredProcessor};
use crate::error::Result;

/// Pairs a catalog source with the recommendation engine.
///
/// The catalog is reloaded on every call, so edits made through the source
/// are visible to the next request.
pub struct RecommendationService {
    catalog: CatalogSourceBox,
    policy: RankingPolicy,
}

impl RecommendationService {
    /// Creates a new `RecommendationService`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Where processor records are loaded from.
    /// * `policy` - Ranking constants to apply.
    pub fn new(catalog: CatalogSourceBox, policy: RankingPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Loads the catalog and returns the best matches for `profile`.
    ///
    /// A failed catalog load is an error. An empty `Ok` means no processor fits.
    pub async fn recommend(&self, profile: &BusinessProfile) -> Result<Vec<ScoredProcessor>> {
        let catalog = self.catalog.load().await?;
        Ok(engine::recommend_with(profile, &catalog, &self.policy))
    }

    /// Loads the catalog and projects costs for the selected processors.
    pub async fn compare(
        &self,
        ids: &[String],
        volume: MonthlyVolume,
    ) -> Result<Vec<CostComparison>> {
        let catalog = self.catalog.load().await?;
        compare::compare(&catalog, ids, volume, &self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::CatalogSource;
    use crate::domain::processor::ProcessorRecord;
    use crate::domain::profile::{BudgetPriority, PaymentEnvironment};
    use crate::error::MatchError;
    use crate::infrastructure::in_memory::InMemoryCatalog;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FailingCatalog;

    #[async_trait]
    impl CatalogSource for FailingCatalog {
        async fn load(&self) -> Result<Vec<ProcessorRecord>> {
            Err(MatchError::IoError(std::io::Error::other("catalog offline")))
        }
    }

    fn profile() -> BusinessProfile {
        BusinessProfile::new(
            "online",
            MonthlyVolume::new(dec!(10000)).unwrap(),
            PaymentEnvironment::OnlineOnly,
            BudgetPriority::LowestTotalCost,
        )
    }

    #[tokio::test]
    async fn test_recommend_through_service() {
        let mut stripe = ProcessorRecord::new("stripe", "Stripe", dec!(2.9), dec!(0.30), dec!(0));
        stripe.api_available = true;
        let terminal = ProcessorRecord::new("terminal", "Terminal Co", dec!(1.5), dec!(0), dec!(0));

        let service = RecommendationService::new(
            Box::new(InMemoryCatalog::with_records(vec![stripe, terminal])),
            RankingPolicy::default(),
        );

        let result = service.recommend(&profile()).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "stripe");
    }

    #[tokio::test]
    async fn test_empty_catalog_is_not_an_error() {
        let service = RecommendationService::new(
            Box::new(InMemoryCatalog::new()),
            RankingPolicy::default(),
        );
        assert!(service.recommend(&profile()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_is_reported() {
        let service =
            RecommendationService::new(Box::new(FailingCatalog), RankingPolicy::default());
        assert!(matches!(
            service.recommend(&profile()).await,
            Err(MatchError::IoError(_))
        ));
        assert!(service.compare(&[], MonthlyVolume::ZERO).await.is_err());
    }

    #[tokio::test]
    async fn test_catalog_changes_are_visible() {
        let catalog = InMemoryCatalog::new();
        let service =
            RecommendationService::new(Box::new(catalog.clone()), RankingPolicy::default());
        assert!(service.recommend(&profile()).await.unwrap().is_empty());

        let mut stripe = ProcessorRecord::new("stripe", "Stripe", dec!(2.9), dec!(0.30), dec!(0));
        stripe.api_available = true;
        catalog.insert(stripe).await;

        let result = service.recommend(&profile()).await.unwrap();
        assert_eq!(result[0].id(), "stripe");
    }
}
