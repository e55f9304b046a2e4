use services::{PaymentField, PaywallFlow};
use signlearn_core::model::PackageId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaywallIntent {
    SelectPackage(PackageId),
    ContinueToPayment,
    Back,
    Edit(PaymentField, String),
    Pay,
    Close,
    Finish,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageCardVm {
    pub id: PackageId,
    pub name: String,
    pub price: String,
    pub period: String,
    pub original_price: Option<String>,
    pub discount: Option<String>,
    pub features: Vec<String>,
    pub popular: bool,
    pub selected: bool,
}

#[must_use]
pub fn map_package_cards(flow: &PaywallFlow) -> Vec<PackageCardVm> {
    flow.packages()
        .iter()
        .map(|pkg| PackageCardVm {
            id: pkg.id().clone(),
            name: pkg.name().to_string(),
            price: pkg.price().to_string(),
            period: pkg.period().to_string(),
            original_price: pkg.original_price().map(str::to_string),
            discount: pkg.discount().map(str::to_string),
            features: pkg.features().to_vec(),
            popular: pkg.is_popular(),
            selected: pkg.id() == flow.selected_id(),
        })
        .collect()
}
