//! Serde helpers for node API wire formats.

/// Deserialization for hastings amounts as `u128`.
///
/// Hastings figures routinely exceed `u64` (1 SC = 10^24 hastings) and some
/// node builds serialize them as decimal strings rather than JSON numbers;
/// both encodings are accepted.
pub mod currency {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct CurrencyVisitor;

    impl<'de> Visitor<'de> for CurrencyVisitor {
        type Value = u128;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u128, E> {
            Ok(u128::from(value))
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<u128, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u128, E> {
            u128::try_from(value)
                .map_err(|_| de::Error::custom("negative value for unsigned currency"))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<u128, E> {
            if value < 0.0 {
                return Err(de::Error::custom("negative value for unsigned currency"));
            }
            Ok(value as u128)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u128, E> {
            value.trim().parse::<u128>().map_err(de::Error::custom)
        }
    }

    /// Deserialize a hastings amount from a JSON number or decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CurrencyVisitor)
    }
}

/// Deserialization for possibly-signed hastings deltas as `i128`.
///
/// Unconfirmed wallet figures carry no documented sign convention; the raw
/// integer is preserved untouched.
pub mod currency_signed {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct SignedCurrencyVisitor;

    impl<'de> Visitor<'de> for SignedCurrencyVisitor {
        type Value = i128;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i128, E> {
            Ok(i128::from(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i128, E> {
            Ok(i128::from(value))
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<i128, E> {
            i128::try_from(value).map_err(|_| de::Error::custom("currency value out of range"))
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<i128, E> {
            Ok(value)
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i128, E> {
            Ok(value as i128)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i128, E> {
            value.trim().parse::<i128>().map_err(de::Error::custom)
        }
    }

    /// Deserialize a hastings delta from a JSON number or decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i128, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SignedCurrencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Unsigned {
        #[serde(with = "super::currency")]
        value: u128,
    }

    #[derive(Deserialize)]
    struct Signed {
        #[serde(with = "super::currency_signed")]
        value: i128,
    }

    #[test]
    fn currency_accepts_numbers_and_strings() {
        let from_number: Unsigned = serde_json::from_str(r#"{"value": 12345}"#).unwrap();
        assert_eq!(from_number.value, 12345);

        // 2.5 SC in hastings, well past u64::MAX
        let from_string: Unsigned =
            serde_json::from_str(r#"{"value": "2500000000000000000000000"}"#).unwrap();
        assert_eq!(from_string.value, 2_500_000_000_000_000_000_000_000);
    }

    #[test]
    fn currency_rejects_negative_and_garbage() {
        assert!(serde_json::from_str::<Unsigned>(r#"{"value": -1}"#).is_err());
        assert!(serde_json::from_str::<Unsigned>(r#"{"value": "12x"}"#).is_err());
    }

    #[test]
    fn signed_currency_keeps_sign() {
        let negative: Signed = serde_json::from_str(r#"{"value": "-42"}"#).unwrap();
        assert_eq!(negative.value, -42);

        let positive: Signed = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(positive.value, 42);
    }
}
