use super::assumptions::ProfitabilityAssumptions;

/// Resale price of a lot for every year from purchase to the horizon.
///
/// Points are kept unrounded; rounding happens when the report is built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PriceCurve {
    base_year: i32,
    purchase_price: f64,
    prices: Vec<f64>,
}

impl PriceCurve {
    pub(crate) fn project(purchase_price: f64, assumptions: &ProfitabilityAssumptions) -> Self {
        let mut prices = Vec::with_capacity(assumptions.price_growth_rates.len() + 1);
        prices.push(purchase_price);

        let mut current = purchase_price;
        for rate in assumptions.price_growth_rates {
            current *= 1.0 + rate;
            prices.push(current);
        }

        Self {
            base_year: assumptions.base_year,
            purchase_price,
            prices,
        }
    }

    pub(crate) fn years(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.prices.len()).map(move |offset| self.base_year + offset as i32)
    }

    pub(crate) fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub(crate) fn horizon_price(&self) -> f64 {
        self.prices
            .last()
            .copied()
            .unwrap_or(self.purchase_price)
    }

    pub(crate) fn horizon_profit(&self) -> f64 {
        self.horizon_price() - self.purchase_price
    }

    pub(crate) fn price_in(&self, year: i32) -> Option<f64> {
        let offset = usize::try_from(year - self.base_year).ok()?;
        self.prices.get(offset).copied()
    }

    /// Resale gain if sold in `year`; years past the horizon keep the
    /// horizon gain.
    pub(crate) fn profit_in(&self, year: i32) -> f64 {
        match self.price_in(year) {
            Some(price) => price - self.purchase_price,
            None => self.horizon_profit(),
        }
    }
}
