use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sellable unit as exported from the sales registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub code: String,
    pub building: String,
    pub number: u32,
    pub floor: i32,
    pub area: f64,
    pub rooms: u32,
    pub size: String,
    pub view: String,
    /// Coarser view bucket used by the CRM; selects the nightly rate column.
    pub view_crm: String,
    pub status: String,
    #[serde(default)]
    pub site_price_sqm: Option<f64>,
    #[serde(default)]
    pub full_payment_price: Option<f64>,
    #[serde(default)]
    pub installment_price: Option<f64>,
}

impl Lot {
    pub fn summary(&self) -> LotSummary {
        LotSummary {
            number: self.number,
            code: self.code.clone(),
            floor: self.floor,
            area: self.area,
            rooms: self.rooms,
            size: self.size.clone(),
            status: self.status.clone(),
        }
    }

    pub fn price_for(&self, plan: PaymentPlan) -> Option<f64> {
        match plan {
            PaymentPlan::FullPayment => self.full_payment_price,
            PaymentPlan::Installment => self.installment_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPlan {
    FullPayment,
    Installment,
}

impl PaymentPlan {
    pub const fn from_installment(installment: bool) -> Self {
        if installment {
            Self::Installment
        } else {
            Self::FullPayment
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullPayment => "full payment",
            Self::Installment => "installment",
        }
    }
}

/// Row shown in the lot picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotSummary {
    pub number: u32,
    pub code: String,
    pub floor: i32,
    pub area: f64,
    pub rooms: u32,
    pub size: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotOptions {
    pub buildings: Vec<String>,
    pub lots: BTreeMap<String, Vec<LotSummary>>,
}
