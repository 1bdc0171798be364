use super::value_objects::Price;

/// Raw product attributes as received from a client.
///
/// Both fields are kept as text: the transport has already turned JSON
/// numbers into their decimal text and dropped explicit nulls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<String>,
}

/// Attributes that passed validation and may be handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.price_missing")]
    PriceMissing,
    #[error("product.price_not_numeric")]
    PriceNotNumeric,
    #[error("product.price_not_positive")]
    PriceNotPositive,
}

/// Validation gate run before any create or update reaches the repository.
///
/// Only the price is checked: it must be present, numeric and greater than
/// zero. The name is passed through untouched, absent or not.
pub fn validate(input: ProductInput) -> Result<ProductFields, ValidationError> {
    let raw_price = input.price.ok_or(ValidationError::PriceMissing)?;
    let price = Price::parse(&raw_price)?;

    Ok(ProductFields {
        name: input.name,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: Option<&str>, price: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.map(str::to_string),
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn should_accept_named_product_with_positive_price() {
        let fields = validate(input(Some("Super Product"), Some("23.30"))).unwrap();

        assert_eq!(fields.name.as_deref(), Some("Super Product"));
        assert_eq!(fields.price.to_string(), "23.30");
    }

    #[test]
    fn should_not_require_a_name() {
        let fields = validate(input(None, Some("23.30"))).unwrap();
        assert!(fields.name.is_none());
    }

    #[test]
    fn should_accept_empty_name() {
        let fields = validate(input(Some(""), Some("1"))).unwrap();
        assert_eq!(fields.name.as_deref(), Some(""));
    }

    #[test]
    fn should_reject_missing_price() {
        assert_eq!(
            validate(input(Some("Super Product"), None)),
            Err(ValidationError::PriceMissing)
        );
    }

    #[test]
    fn should_reject_price_in_words() {
        assert_eq!(
            validate(input(Some("Super Product"), Some("two dollars"))),
            Err(ValidationError::PriceNotNumeric)
        );
    }

    #[test]
    fn should_reject_negative_price() {
        assert_eq!(
            validate(input(Some("Super Product"), Some("-1"))),
            Err(ValidationError::PriceNotPositive)
        );
    }

    proptest! {
        #[test]
        fn accepts_every_positive_decimal(units in 1u64..10_000_000, cents in 0u8..100) {
            let raw = format!("{units}.{cents:02}");
            let fields = validate(input(Some("p"), Some(&raw))).unwrap();
            prop_assert_eq!(fields.price.to_string(), raw);
        }

        #[test]
        fn rejects_every_non_positive_integer(amount in -10_000_000i64..=0) {
            let raw = amount.to_string();
            prop_assert_eq!(
                validate(input(Some("p"), Some(&raw))),
                Err(ValidationError::PriceNotPositive)
            );
        }

        #[test]
        fn rejects_every_word(word in "[a-df-zA-DF-Z][a-zA-Z ]{0,19}") {
            prop_assert_eq!(
                validate(input(Some("p"), Some(&word))),
                Err(ValidationError::PriceNotNumeric)
            );
        }

        #[test]
        fn passes_any_name_through(name in ".*") {
            let fields = validate(input(Some(&name), Some("9.99"))).unwrap();
            prop_assert_eq!(fields.name, Some(name));
        }
    }
}
