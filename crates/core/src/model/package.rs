use thiserror::Error;

use crate::model::ids::PackageId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackageError {
    #[error("package name cannot be empty")]
    EmptyName,

    #[error("package price cannot be empty")]
    EmptyPrice,
}

/// A subscription plan offered on the paywall.
///
/// Prices are display strings; nothing is ever charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPackage {
    id: PackageId,
    name: String,
    price: String,
    period: String,
    original_price: Option<String>,
    discount: Option<String>,
    features: Vec<String>,
    popular: bool,
}

impl SubscriptionPackage {
    /// # Errors
    ///
    /// Returns `PackageError` when the name or price is blank.
    pub fn new(
        id: PackageId,
        name: impl Into<String>,
        price: impl Into<String>,
        period: impl Into<String>,
        features: Vec<String>,
        popular: bool,
    ) -> Result<Self, PackageError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PackageError::EmptyName);
        }
        let price = price.into().trim().to_string();
        if price.is_empty() {
            return Err(PackageError::EmptyPrice);
        }
        Ok(Self {
            id,
            name,
            price,
            period: period.into().trim().to_string(),
            original_price: None,
            discount: None,
            features: features
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            popular,
        })
    }

    /// Strike-through price and savings label shown next to discounted plans.
    #[must_use]
    pub fn with_discount(
        mut self,
        original_price: Option<String>,
        discount: Option<String>,
    ) -> Self {
        self.original_price = original_price.filter(|s| !s.trim().is_empty());
        self.discount = discount.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub fn id(&self) -> &PackageId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    #[must_use]
    pub fn original_price(&self) -> Option<&str> {
        self.original_price.as_deref()
    }

    #[must_use]
    pub fn discount(&self) -> Option<&str> {
        self.discount.as_deref()
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.popular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_features_are_dropped() {
        let pkg = SubscriptionPackage::new(
            PackageId::new("monthly").unwrap(),
            "Monthly",
            "$9.99",
            "per month",
            vec!["Unlimited lessons".into(), " ".into()],
            false,
        )
        .unwrap();
        assert_eq!(pkg.features(), ["Unlimited lessons".to_string()]);
        assert_eq!(pkg.discount(), None);
    }

    #[test]
    fn discount_is_attached() {
        let pkg = SubscriptionPackage::new(
            PackageId::new("yearly").unwrap(),
            "Yearly",
            "$79.99",
            "per year",
            Vec::new(),
            true,
        )
        .unwrap()
        .with_discount(Some("$119.88".into()), Some("Save 33%".into()));
        assert_eq!(pkg.original_price(), Some("$119.88"));
        assert_eq!(pkg.discount(), Some("Save 33%"));
        assert!(pkg.is_popular());
    }

    #[test]
    fn price_is_required() {
        let err = SubscriptionPackage::new(
            PackageId::new("x").unwrap(),
            "X",
            "",
            "",
            Vec::new(),
            false,
        )
        .unwrap_err();
        assert_eq!(err, PackageError::EmptyPrice);
    }
}
