//! Summary presentation settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use rust_decimal::Decimal;
use serde::Deserialize;

const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

/// Presentation settings for [`Employee::describe_with`](crate::Employee::describe_with).
///
/// Hosts may layer these from files, the environment (`EMPLOYEE_*`), or
/// command-line arguments. The employee itself never loads them.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE")]
pub struct SummarySettings {
    /// Currency symbol appended to the salary.
    #[ortho_config(default = String::from(DEFAULT_CURRENCY_SYMBOL))]
    pub currency_symbol: String,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }
}

impl SummarySettings {
    /// Return the configured currency symbol.
    #[must_use]
    pub const fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_str()
    }

    /// Render `amount` with two decimal places and the currency symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee::SummarySettings;
    /// use rust_decimal::Decimal;
    ///
    /// let settings = SummarySettings::default();
    /// assert_eq!(settings.format_currency(Decimal::ZERO), "0.00 ₽");
    /// ```
    #[must_use]
    pub fn format_currency(&self, amount: Decimal) -> String {
        format!("{:.2} {}", amount.round_dp(2), self.currency_symbol())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for summary settings parsing and currency rendering.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> SummarySettings {
        SummarySettings::load_from_iter([OsString::from("employee")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([("EMPLOYEE_CURRENCY_SYMBOL", None::<String>)]);

        let settings = load_from_empty_args();
        assert_eq!(settings.currency_symbol(), DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(
            settings.currency_symbol(),
            SummarySettings::default().currency_symbol()
        );
        assert_eq!(settings.format_currency(Decimal::ZERO), "0.00 ₽");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([("EMPLOYEE_CURRENCY_SYMBOL", Some("EUR".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(settings.currency_symbol(), "EUR");
    }

    #[rstest]
    #[case(Decimal::ZERO, "0.00 ₽")]
    #[case(Decimal::new(5_000_050, 2), "50000.50 ₽")]
    #[case(Decimal::new(12_346, 3), "12.35 ₽")]
    fn formats_two_decimal_places(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(SummarySettings::default().format_currency(amount), expected);
    }

    #[test]
    fn custom_symbol_is_appended() {
        let settings = SummarySettings {
            currency_symbol: "$".to_owned(),
        };
        assert_eq!(settings.format_currency(Decimal::ZERO), "0.00 $");
    }
}
