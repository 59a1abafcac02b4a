//! Money with currency-aware quantization.
//!
//! Monetary amounts are `rust_decimal::Decimal` values carrying an explicit
//! currency. Before any amount leaves the payload layer it is quantized to
//! the currency's minor-unit precision with banker's rounding, so a USD
//! total of `10.005` goes out as `"10.00"` and a JPY total as `"1000"`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes the platform sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    CHF,
    SEK,
    NOK,
    DKK,
    PLN,
    CZK,
    JPY,
    KRW,
    VND,
    ISK,
    CLP,
    BHD,
    JOD,
    KWD,
    OMR,
    TND,
}

impl Currency {
    /// ISO 4217 currency code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::CHF => "CHF",
            Self::SEK => "SEK",
            Self::NOK => "NOK",
            Self::DKK => "DKK",
            Self::PLN => "PLN",
            Self::CZK => "CZK",
            Self::JPY => "JPY",
            Self::KRW => "KRW",
            Self::VND => "VND",
            Self::ISK => "ISK",
            Self::CLP => "CLP",
            Self::BHD => "BHD",
            Self::JOD => "JOD",
            Self::KWD => "KWD",
            Self::OMR => "OMR",
            Self::TND => "TND",
        }
    }

    /// Number of digits after the decimal point in the currency's standard
    /// minor unit.
    #[must_use]
    pub const fn minor_unit(&self) -> u32 {
        match self {
            Self::JPY | Self::KRW | Self::VND | Self::ISK | Self::CLP => 0,
            Self::BHD | Self::JOD | Self::KWD | Self::OMR | Self::TND => 3,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "CHF" => Ok(Self::CHF),
            "SEK" => Ok(Self::SEK),
            "NOK" => Ok(Self::NOK),
            "DKK" => Ok(Self::DKK),
            "PLN" => Ok(Self::PLN),
            "CZK" => Ok(Self::CZK),
            "JPY" => Ok(Self::JPY),
            "KRW" => Ok(Self::KRW),
            "VND" => Ok(Self::VND),
            "ISK" => Ok(Self::ISK),
            "CLP" => Ok(Self::CLP),
            "BHD" => Ok(Self::BHD),
            "JOD" => Ok(Self::JOD),
            "KWD" => Ok(Self::KWD),
            "OMR" => Ok(Self::OMR),
            "TND" => Ok(Self::TND),
            _ => Err(format!("unknown currency code: {s}")),
        }
    }
}

/// Round a monetary amount to the currency's minor-unit precision.
///
/// Uses banker's rounding (round half to even), and always emits the full
/// minor-unit scale: `10` in USD quantizes to `10.00`, not `10`.
#[must_use]
pub fn quantize_price(amount: Decimal, currency: Currency) -> Decimal {
    let mut quantized = amount.round_dp_with_strategy(
        currency.minor_unit(),
        RoundingStrategy::MidpointNearestEven,
    );
    quantized.rescale(currency.minor_unit());
    quantized
}

/// A monetary amount with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Quantize the amount to the currency's minor-unit precision.
    #[must_use]
    pub fn quantized(self) -> Self {
        Self {
            amount: quantize_price(self.amount, self.currency),
            currency: self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantize_rounds_to_two_places_for_usd() {
        assert_eq!(quantize_price(dec!(10.005), Currency::USD), dec!(10.00));
        assert_eq!(quantize_price(dec!(10.015), Currency::USD), dec!(10.02));
        assert_eq!(quantize_price(dec!(10.1), Currency::USD), dec!(10.10));
    }

    #[test]
    fn quantize_uses_bankers_rounding() {
        // Half-to-even: .125 rounds down to .12, .135 rounds up to .14
        assert_eq!(quantize_price(dec!(0.125), Currency::EUR), dec!(0.12));
        assert_eq!(quantize_price(dec!(0.135), Currency::EUR), dec!(0.14));
    }

    #[test]
    fn quantize_respects_zero_decimal_currencies() {
        assert_eq!(quantize_price(dec!(1000.4), Currency::JPY), dec!(1000));
        assert_eq!(quantize_price(dec!(1000.5), Currency::JPY), dec!(1000));
        assert_eq!(quantize_price(dec!(1001.5), Currency::JPY), dec!(1002));
    }

    #[test]
    fn quantize_respects_three_decimal_currencies() {
        assert_eq!(quantize_price(dec!(1.23456), Currency::KWD), dec!(1.235));
        assert_eq!(quantize_price(dec!(1.2), Currency::BHD), dec!(1.200));
    }

    #[test]
    fn quantized_amount_keeps_full_scale() {
        let q = quantize_price(dec!(5), Currency::USD);
        assert_eq!(q.to_string(), "5.00");
    }

    #[test]
    fn currency_code_round_trips() {
        for currency in [Currency::USD, Currency::JPY, Currency::KWD] {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
        assert!("XXX".parse::<Currency>().is_err());
    }

    #[test]
    fn money_quantized_helper() {
        let money = Money::new(dec!(19.999), Currency::USD).quantized();
        assert_eq!(money.amount, dec!(20.00));
    }
}
