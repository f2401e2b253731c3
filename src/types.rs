use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest amount the entry form accepts, in cents (999 999 999.99).
pub const MAX_AMOUNT_CENTS: u64 = 99_999_999_999;
const MAX_INTEGER_DIGITS: usize = 9;
const FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Gbp => write!(f, "GBP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Check,
    Wire,
    EPayment,
    VirtualCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Check,
        PaymentMethod::Wire,
        PaymentMethod::EPayment,
        PaymentMethod::VirtualCard,
    ];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Check => write!(f, "Check"),
            PaymentMethod::Wire => write!(f, "Wire"),
            PaymentMethod::EPayment => write!(f, "ePayment"),
            PaymentMethod::VirtualCard => write!(f, "Virtual Card"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is not a number: {0:?}")]
    Invalid(String),
    #[error("amount has more than 2 decimal places")]
    TooManyFractionDigits,
    #[error("amount exceeds 999999999.99")]
    OutOfRange,
}

/// A non-negative money amount with two fraction digits, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(u64);

impl Amount {
    pub fn from_cents(cents: u64) -> Result<Self, AmountError> {
        if cents > MAX_AMOUNT_CENTS {
            return Err(AmountError::OutOfRange);
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Takes exactly the text the input mask would accept; surrounding whitespace is invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty()) {
            return Err(AmountError::Invalid(s.to_string()));
        }
        if frac_part.len() > FRACTION_DIGITS {
            return Err(AmountError::TooManyFractionDigits);
        }

        let int_part = int_part.trim_start_matches('0');
        if int_part.len() > MAX_INTEGER_DIGITS {
            return Err(AmountError::OutOfRange);
        }

        let units: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| AmountError::Invalid(s.to_string()))?
        };
        // "5" means 50 cents, "05" means 5
        let cents: u64 = match frac_part.len() {
            0 => 0,
            1 => frac_part.parse::<u64>().unwrap_or(0) * 10,
            _ => frac_part.parse::<u64>().unwrap_or(0),
        };

        Amount::from_cents(units * 100 + cents)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents() / 100, self.cents() % 100)
    }
}

/// Per-keystroke check for the amount field.
///
/// Accepts partial input such as `""`, `"."` or `"12."` so the user can keep typing,
/// but never more than nine integer digits or two decimals.
pub fn amount_mask_accepts(text: &str) -> bool {
    let mut parts = text.splitn(2, '.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next().unwrap_or_default();

    if frac_part.contains('.') {
        return false;
    }

    let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    digits_only(int_part)
        && digits_only(frac_part)
        && int_part.trim_start_matches('0').len() <= MAX_INTEGER_DIGITS
        && frac_part.len() <= FRACTION_DIGITS
}

/// Text buffer behind the masked amount field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput {
    text: String,
}

impl AmountInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Applies `candidate` if the mask accepts it. Returns false when the edit was rejected.
    pub fn edit(&mut self, candidate: &str) -> bool {
        if amount_mask_accepts(candidate) {
            self.text = candidate.to_string();
            true
        } else {
            false
        }
    }

    pub fn value(&self) -> Option<Amount> {
        self.text.parse().ok()
    }
}
