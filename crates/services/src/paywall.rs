//! Subscription paywall: package choice, mock payment form, confirmation.

use signlearn_core::model::{PackageId, SubscriptionPackage};

use crate::error::PaywallError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaywallStep {
    Benefits,
    Payment,
    Processing,
    ThankYou,
}

impl PaywallStep {
    /// Position in the three visible steps; processing still shows the payment screen.
    #[must_use]
    pub fn screen_index(self) -> usize {
        match self {
            Self::Benefits => 0,
            Self::Payment | Self::Processing => 1,
            Self::ThankYou => 2,
        }
    }
}

/// Fields of the mock payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    ExpiryDate,
    Cvv,
    CardholderName,
    Email,
}

impl PaymentField {
    pub const ALL: [Self; 5] = [
        Self::CardNumber,
        Self::ExpiryDate,
        Self::Cvv,
        Self::CardholderName,
        Self::Email,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::ExpiryDate => "Expiry Date",
            Self::Cvv => "CVV",
            Self::CardholderName => "Cardholder Name",
            Self::Email => "Email Address",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::CardNumber => "1234 5678 9012 3456",
            Self::ExpiryDate => "MM/YY",
            Self::Cvv => "123",
            Self::CardholderName => "John Doe",
            Self::Email => "john@example.com",
        }
    }

    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::CardNumber => "card-number",
            Self::ExpiryDate => "expiry-date",
            Self::Cvv => "cvv",
            Self::CardholderName => "cardholder-name",
            Self::Email => "email",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

/// Free-form payment form values. Never validated or sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub email: String,
}

impl PaymentDetails {
    #[must_use]
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardNumber => &self.card_number,
            PaymentField::ExpiryDate => &self.expiry_date,
            PaymentField::Cvv => &self.cvv,
            PaymentField::CardholderName => &self.cardholder_name,
            PaymentField::Email => &self.email,
        }
    }

    fn slot(&mut self, field: PaymentField) -> &mut String {
        match field {
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::ExpiryDate => &mut self.expiry_date,
            PaymentField::Cvv => &mut self.cvv,
            PaymentField::CardholderName => &mut self.cardholder_name,
            PaymentField::Email => &mut self.email,
        }
    }
}

/// State of one paywall visit.
///
/// Transitions are only legal from the step that shows the matching control;
/// anything else returns `PaywallError::InvalidStep` and leaves the flow untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaywallFlow {
    packages: Vec<SubscriptionPackage>,
    selected: PackageId,
    step: PaywallStep,
    details: PaymentDetails,
}

impl PaywallFlow {
    /// Start at the benefits step with the popular package preselected.
    ///
    /// # Errors
    ///
    /// Returns `PaywallError::NoPackages` if `packages` is empty.
    pub fn new(packages: Vec<SubscriptionPackage>) -> Result<Self, PaywallError> {
        let selected = packages
            .iter()
            .find(|p| p.is_popular())
            .or_else(|| packages.first())
            .map(|p| p.id().clone())
            .ok_or(PaywallError::NoPackages)?;
        Ok(Self {
            packages,
            selected,
            step: PaywallStep::Benefits,
            details: PaymentDetails::default(),
        })
    }

    #[must_use]
    pub fn step(&self) -> PaywallStep {
        self.step
    }

    #[must_use]
    pub fn packages(&self) -> &[SubscriptionPackage] {
        &self.packages
    }

    #[must_use]
    pub fn selected_id(&self) -> &PackageId {
        &self.selected
    }

    /// The chosen package. Always one of `packages()`.
    #[must_use]
    pub fn selected_package(&self) -> &SubscriptionPackage {
        self.packages
            .iter()
            .find(|p| p.id() == &self.selected)
            .unwrap_or(&self.packages[0])
    }

    #[must_use]
    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.step == PaywallStep::Processing
    }

    /// The close control exists on every step before the confirmation.
    #[must_use]
    pub fn can_close(&self) -> bool {
        self.step != PaywallStep::ThankYou
    }

    fn require(&self, step: PaywallStep, action: &'static str) -> Result<(), PaywallError> {
        if self.step == step {
            Ok(())
        } else {
            Err(PaywallError::InvalidStep {
                action,
                step: self.step,
            })
        }
    }

    /// # Errors
    ///
    /// `UnknownPackage` for an id not on offer, `InvalidStep` outside benefits.
    pub fn select_package(&mut self, id: &PackageId) -> Result<(), PaywallError> {
        self.require(PaywallStep::Benefits, "select a package")?;
        if !self.packages.iter().any(|p| p.id() == id) {
            return Err(PaywallError::UnknownPackage(id.clone()));
        }
        self.selected = id.clone();
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidStep` outside benefits.
    pub fn continue_to_payment(&mut self) -> Result<(), PaywallError> {
        self.require(PaywallStep::Benefits, "continue to payment")?;
        self.step = PaywallStep::Payment;
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidStep` outside payment.
    pub fn back(&mut self) -> Result<(), PaywallError> {
        self.require(PaywallStep::Payment, "go back")?;
        self.step = PaywallStep::Benefits;
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidStep` outside payment.
    pub fn set_field(
        &mut self,
        field: PaymentField,
        value: impl Into<String>,
    ) -> Result<(), PaywallError> {
        self.require(PaywallStep::Payment, "edit payment details")?;
        *self.details.slot(field) = value.into();
        Ok(())
    }

    /// Lock the form and return the package being paid for.
    ///
    /// # Errors
    ///
    /// `InvalidStep` outside payment, including a second tap while processing.
    pub fn begin_payment(&mut self) -> Result<PackageId, PaywallError> {
        self.require(PaywallStep::Payment, "pay")?;
        self.step = PaywallStep::Processing;
        Ok(self.selected.clone())
    }

    /// # Errors
    ///
    /// `InvalidStep` unless processing.
    pub fn payment_succeeded(&mut self) -> Result<(), PaywallError> {
        self.require(PaywallStep::Processing, "confirm payment")?;
        self.step = PaywallStep::ThankYou;
        Ok(())
    }

    /// Unlock the form again after a payment attempt that did not go through.
    ///
    /// # Errors
    ///
    /// `InvalidStep` unless processing.
    pub fn payment_failed(&mut self) -> Result<(), PaywallError> {
        self.require(PaywallStep::Processing, "reopen payment")?;
        self.step = PaywallStep::Payment;
        Ok(())
    }

    /// Finish from the confirmation screen, yielding the purchased package.
    ///
    /// # Errors
    ///
    /// `InvalidStep` before the confirmation.
    pub fn finish(&self) -> Result<PackageId, PaywallError> {
        self.require(PaywallStep::ThankYou, "finish")?;
        Ok(self.selected.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str, popular: bool) -> SubscriptionPackage {
        SubscriptionPackage::new(
            PackageId::new(id).unwrap(),
            id,
            "$1",
            "per month",
            Vec::new(),
            popular,
        )
        .unwrap()
    }

    fn flow() -> PaywallFlow {
        PaywallFlow::new(vec![package("monthly", false), package("yearly", true)]).unwrap()
    }

    #[test]
    fn defaults_to_popular_package() {
        let flow = flow();
        assert_eq!(flow.step(), PaywallStep::Benefits);
        assert_eq!(flow.selected_id().as_str(), "yearly");
        assert!(flow.can_close());
    }

    #[test]
    fn falls_back_to_first_package_without_popular() {
        let flow = PaywallFlow::new(vec![package("a", false), package("b", false)]).unwrap();
        assert_eq!(flow.selected_package().id().as_str(), "a");
    }

    #[test]
    fn empty_package_list_is_rejected() {
        assert_eq!(PaywallFlow::new(Vec::new()).unwrap_err(), PaywallError::NoPackages);
    }

    #[test]
    fn back_returns_to_benefits_and_keeps_choice() {
        let mut flow = flow();
        flow.select_package(&PackageId::new("monthly").unwrap()).unwrap();
        flow.continue_to_payment().unwrap();
        flow.set_field(PaymentField::Email, "a@b.c").unwrap();
        flow.back().unwrap();
        assert_eq!(flow.step(), PaywallStep::Benefits);
        assert_eq!(flow.selected_id().as_str(), "monthly");
        assert_eq!(flow.details().get(PaymentField::Email), "a@b.c");
    }

    #[test]
    fn unknown_package_is_rejected() {
        let mut flow = flow();
        let err = flow
            .select_package(&PackageId::new("weekly").unwrap())
            .unwrap_err();
        assert!(matches!(err, PaywallError::UnknownPackage(_)));
        assert_eq!(flow.selected_id().as_str(), "yearly");
    }

    #[test]
    fn pay_is_inert_while_processing() {
        let mut flow = flow();
        flow.continue_to_payment().unwrap();
        assert_eq!(flow.begin_payment().unwrap().as_str(), "yearly");
        assert!(flow.is_processing());

        let err = flow.begin_payment().unwrap_err();
        assert_eq!(
            err,
            PaywallError::InvalidStep {
                action: "pay",
                step: PaywallStep::Processing
            }
        );
        assert!(flow.set_field(PaymentField::Cvv, "1").is_err());
        assert!(flow.back().is_err());
    }

    #[test]
    fn failed_payment_reopens_the_form() {
        let mut flow = flow();
        assert!(flow.payment_failed().is_err());
        flow.continue_to_payment().unwrap();
        flow.set_field(PaymentField::CardNumber, "4242").unwrap();
        flow.begin_payment().unwrap();
        flow.payment_failed().unwrap();

        assert_eq!(flow.step(), PaywallStep::Payment);
        assert_eq!(flow.details().get(PaymentField::CardNumber), "4242");
        assert_eq!(flow.begin_payment().unwrap().as_str(), "yearly");
    }

    #[test]
    fn full_flow_reaches_thank_you() {
        let mut flow = flow();
        assert!(flow.finish().is_err());
        flow.continue_to_payment().unwrap();
        flow.begin_payment().unwrap();
        flow.payment_succeeded().unwrap();
        assert_eq!(flow.step(), PaywallStep::ThankYou);
        assert_eq!(flow.step().screen_index(), 2);
        assert!(!flow.can_close());
        assert_eq!(flow.finish().unwrap().as_str(), "yearly");
    }

    #[test]
    fn package_choice_is_locked_after_benefits() {
        let mut flow = flow();
        flow.continue_to_payment().unwrap();
        assert!(flow
            .select_package(&PackageId::new("monthly").unwrap())
            .is_err());
        assert!(flow.continue_to_payment().is_err());
    }
}
