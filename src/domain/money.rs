use {
    super::error::AdapterError,
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Non-negative order total.
///
/// `Display` is locale independent: `.` separator, no grouping, and the
/// scale of the underlying decimal is kept (`19.90` stays `19.90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(mut value: Decimal) -> Result<Self, AdapterError> {
        if value.is_zero() {
            value.set_sign_positive(true);
        } else if value.is_sign_negative() {
            return Err(AdapterError::Format(format!(
                "price cannot be negative, got: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = AdapterError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_canonical(s) {
            return Err(AdapterError::Format(format!(
                "price {s:?} is not a plain decimal"
            )));
        }
        let value = Decimal::from_str(s)
            .map_err(|e| AdapterError::Format(format!("invalid price {s:?}: {e}")))?;
        Self::new(value)
    }
}

/// Digits with an optional `.` and fractional digits: what `Display` emits.
/// No sign, grouping, underscores, leading zeros or dangling separator.
fn is_canonical(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    digits(int)
        && !(int.len() > 1 && int.starts_with('0'))
        && frac.is_none_or(digits)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_scale_without_grouping() {
        let price: Price = "1234567.50".parse().unwrap();
        assert_eq!(price.to_string(), "1234567.50");
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            "-0.01".parse::<Price>(),
            Err(AdapterError::Format(_))
        ));
    }

    #[test]
    fn accepts_only_plain_decimals() {
        for ok in ["0", "0.5", "19.99", "100", "7.000"] {
            let price: Price = ok.parse().unwrap();
            assert_eq!(price.to_string(), ok);
        }
        for bad in ["1_000", "5.", ".5", "+5", "007", "1e3", " 5", "1,000"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(AdapterError::Format(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!("abc".parse::<Price>(), Err(AdapterError::Format(_))));
        assert!(matches!("".parse::<Price>(), Err(AdapterError::Format(_))));
    }
}
