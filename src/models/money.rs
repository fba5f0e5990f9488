//! Currency formatting for display amounts
//!
//! Amounts arrive as `f64` (the backend stores them as floats) and are shown
//! the way `en-US` number formatting renders Malaysian Ringgit: `MYR 1,234.50`,
//! with a no-break space after the currency indicator and the minus sign in
//! front of it.

use std::fmt;

/// Locale conventions used to render a currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// ISO 4217 code of the currency
    pub currency_code: &'static str,
    /// Text placed before the number (symbol or code)
    pub indicator: &'static str,
    /// Separator between the indicator and the number
    pub indicator_separator: char,
    /// Separator between integer digit groups
    pub grouping_separator: char,
    /// Separator between the integer and fraction parts
    pub decimal_separator: char,
    /// Number of integer digits per group
    pub group_size: usize,
    /// Number of fraction digits always shown
    pub fraction_digits: usize,
    /// Prefix for negative amounts
    pub minus_sign: char,
    /// Text shown for NaN
    pub nan: &'static str,
    /// Text shown for infinite amounts
    pub infinity: &'static str,
}

/// `en-US` digit conventions with the Malaysian Ringgit
pub const EN_US_MYR: CurrencyFormat = CurrencyFormat {
    currency_code: "MYR",
    indicator: "MYR",
    indicator_separator: '\u{a0}',
    grouping_separator: ',',
    decimal_separator: '.',
    group_size: 3,
    fraction_digits: 2,
    minus_sign: '-',
    nan: "NaN",
    infinity: "∞",
};

impl CurrencyFormat {
    /// Format an amount using these conventions
    ///
    /// Rounds half away from zero on the shortest decimal representation
    /// of `amount`, so `1.005` becomes `1.01`.
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}{}{}", self.indicator, self.indicator_separator, self.nan);
        }

        let mut output = String::new();
        if amount.is_sign_negative() {
            output.push(self.minus_sign);
        }
        output.push_str(self.indicator);
        output.push(self.indicator_separator);

        if amount.is_infinite() {
            output.push_str(self.infinity);
            return output;
        }

        // f64's Display never uses exponent notation
        let plain = amount.abs().to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let (int_digits, frac_digits) = round_half_up(int_part, frac_part, self.fraction_digits);

        output.push_str(&self.group_digits(&int_digits));
        if self.fraction_digits > 0 {
            output.push(self.decimal_separator);
            output.push_str(&frac_digits);
        }

        output
    }

    /// Insert grouping separators into a run of integer digits
    fn group_digits(&self, digits: &str) -> String {
        if self.group_size == 0 {
            return digits.to_string();
        }

        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / self.group_size);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % self.group_size == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// Round a non-negative decimal, given as digit strings, to `digits` fraction digits
fn round_half_up(int_part: &str, frac_part: &str, digits: usize) -> (String, String) {
    let mut frac: Vec<u8> = frac_part.bytes().collect();
    let round_up = frac.get(digits).is_some_and(|d| *d >= b'5');
    frac.resize(digits, b'0');

    let mut all: Vec<u8> = int_part.bytes().chain(frac).collect();
    if round_up {
        let mut carry = true;
        for d in all.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            all.insert(0, b'1');
        }
    }

    let split = all.len() - digits;
    let frac_digits = String::from_utf8_lossy(&all[split..]).into_owned();
    all.truncate(split);
    (String::from_utf8_lossy(&all).into_owned(), frac_digits)
}

/// Format an amount as `en-US` Malaysian Ringgit
pub fn format_currency(amount: f64) -> String {
    EN_US_MYR.format(amount)
}

/// An amount that displays as formatted Ringgit
///
/// Honors width and alignment flags, so it can be used in padded columns.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ringgit(pub f64);

impl fmt::Display for Ringgit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_currency(self.0))
    }
}
