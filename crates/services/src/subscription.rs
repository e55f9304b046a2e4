use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use signlearn_catalog::{CatalogError, PackageRepository};
use signlearn_core::model::PackageId;

use crate::Clock;
use crate::error::SubscriptionError;
use crate::paywall::PaywallFlow;

/// Delay of the simulated payment when nothing else is configured.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2000);

/// Outcome of a simulated payment. Nothing is charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub package_id: PackageId,
    pub completed_at: DateTime<Utc>,
}

/// Owns the session-wide premium flag and drives the mock payment.
pub struct SubscriptionService {
    clock: Clock,
    packages: Arc<dyn PackageRepository>,
    premium: AtomicBool,
    payment_delay: Duration,
}

impl SubscriptionService {
    #[must_use]
    pub fn new(clock: Clock, packages: Arc<dyn PackageRepository>, payment_delay: Duration) -> Self {
        Self {
            clock,
            packages,
            premium: AtomicBool::new(false),
            payment_delay,
        }
    }

    /// Start the session with premium already active.
    #[must_use]
    pub fn with_premium(self, premium: bool) -> Self {
        self.premium.store(premium, Ordering::SeqCst);
        self
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn payment_delay(&self) -> Duration {
        self.payment_delay
    }

    /// Open a fresh paywall over the catalog packages.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::Catalog` if packages cannot be read and
    /// `PaywallError::NoPackages` if none are on offer.
    pub async fn start_paywall(&self) -> Result<PaywallFlow, SubscriptionError> {
        let packages = self.packages.list_packages().await?;
        let flow = PaywallFlow::new(packages)?;
        tracing::info!(selected = %flow.selected_id(), "paywall opened");
        Ok(flow)
    }

    /// Wait out the configured delay, then report success. There is no failure path.
    ///
    /// # Errors
    ///
    /// Returns `PaywallError::UnknownPackage` for a package not in the catalog.
    pub async fn simulate_payment(
        &self,
        package_id: &PackageId,
    ) -> Result<PaymentReceipt, SubscriptionError> {
        self.ensure_package(package_id).await?;
        tracing::info!(
            package = %package_id,
            delay_ms = self.payment_delay.as_millis() as u64,
            "simulated payment started"
        );
        tokio::time::sleep(self.payment_delay).await;
        tracing::info!(package = %package_id, "simulated payment finished");
        Ok(PaymentReceipt {
            package_id: package_id.clone(),
            completed_at: self.clock.now(),
        })
    }

    /// Turn premium on for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns `PaywallError::UnknownPackage` for a package not in the catalog.
    pub async fn activate(&self, package_id: &PackageId) -> Result<(), SubscriptionError> {
        self.ensure_package(package_id).await?;
        let was_premium = self.premium.swap(true, Ordering::SeqCst);
        tracing::info!(package = %package_id, was_premium, "premium activated");
        Ok(())
    }

    async fn ensure_package(&self, package_id: &PackageId) -> Result<(), SubscriptionError> {
        match self.packages.get_package(package_id).await {
            Ok(_) => Ok(()),
            Err(CatalogError::NotFound) => {
                Err(crate::error::PaywallError::UnknownPackage(package_id.clone()).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaywallError;
    use signlearn_catalog::Catalog;
    use signlearn_core::time::fixed_clock;

    fn service() -> SubscriptionService {
        SubscriptionService::new(
            fixed_clock(),
            Catalog::builtin().unwrap().packages,
            DEFAULT_PAYMENT_DELAY,
        )
    }

    #[tokio::test]
    async fn activation_sets_premium() {
        let svc = service();
        assert!(!svc.is_premium());
        svc.activate(&PackageId::new("yearly").unwrap()).await.unwrap();
        assert!(svc.is_premium());
    }

    #[tokio::test]
    async fn unknown_package_does_not_activate() {
        let svc = service();
        let err = svc
            .activate(&PackageId::new("lifetime").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubscriptionError::Paywall(PaywallError::UnknownPackage(_))
        ));
        assert!(!svc.is_premium());
    }

    #[tokio::test]
    async fn premium_can_be_preset() {
        assert!(service().with_premium(true).is_premium());
    }

    #[tokio::test(start_paused = true)]
    async fn payment_waits_for_configured_delay() {
        let svc = service();
        let yearly = PackageId::new("yearly").unwrap();
        let started = tokio::time::Instant::now();
        let receipt = svc.simulate_payment(&yearly).await.unwrap();
        assert!(started.elapsed() >= DEFAULT_PAYMENT_DELAY);
        assert_eq!(receipt.package_id, yearly);
        assert!(!svc.is_premium());
    }

    #[tokio::test]
    async fn paywall_starts_on_popular_package() {
        let flow = service().start_paywall().await.unwrap();
        assert_eq!(flow.selected_id().as_str(), "yearly");
        assert_eq!(flow.packages().len(), 2);
    }
}
