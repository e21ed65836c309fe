//! The `Signal` trait and the shared input bundle.

use ronda_panel::WidePanel;

use crate::SignalError;

/// Input panels shared by the signal library.
///
/// All panels must be aligned to the price panel's calendar and asset
/// universe; `validate` checks this before any signal runs.
#[derive(Debug, Clone)]
pub struct SignalInputs {
    /// Daily close prices.
    pub prices: WidePanel,
    /// Book value per share over price.
    pub book_to_price: WidePanel,
    /// Price times shares outstanding.
    pub market_cap: WidePanel,
    /// Net income over stockholders equity.
    pub roe: WidePanel,
    /// Total debt over total assets.
    pub debt_to_assets: WidePanel,
    /// Pre-scored sentiment, when a sentiment source is configured.
    pub sentiment: Option<WidePanel>,
}

impl SignalInputs {
    /// Check that every input panel shares the price panel's calendar
    /// and asset universe.
    ///
    /// # Errors
    /// Returns `PanelError::Misaligned` (wrapped) describing the first
    /// divergence found.
    pub fn validate(&self) -> Result<(), SignalError> {
        self.check_against_prices(&self.book_to_price, "book_to_price")?;
        self.check_against_prices(&self.market_cap, "market_cap")?;
        self.check_against_prices(&self.roe, "roe")?;
        self.check_against_prices(&self.debt_to_assets, "debt_to_assets")?;
        if let Some(sentiment) = &self.sentiment {
            self.check_against_prices(sentiment, "sentiment")?;
        }
        Ok(())
    }

    fn check_against_prices(&self, other: &WidePanel, name: &str) -> Result<(), SignalError> {
        self.prices.ensure_aligned(other)?;
        if self.prices.symbols() != other.symbols() {
            return Err(SignalError::Panel(ronda_panel::PanelError::Misaligned(format!(
                "{name}: asset universe differs from prices"
            ))));
        }
        Ok(())
    }
}

/// A factor signal producing one wide raw-score panel.
///
/// Scores dated `t` must only use information available strictly before
/// `t`'s close; backward-looking signals lag their last input by one
/// trading day.
pub trait Signal {
    /// Stable lowercase identifier, used as the factor column name.
    fn name(&self) -> &'static str;

    /// Which input panels this signal consumes.
    fn required_inputs(&self) -> &'static [&'static str];

    /// Compute the raw score panel on the input calendar and universe.
    ///
    /// # Errors
    /// Fails on missing inputs, invalid configuration, or panel errors.
    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError>;
}
