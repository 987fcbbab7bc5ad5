//! Checkout Errors

use salvo::http::StatusError;
use storefront::checkout::CheckoutError;
use tracing::error;

use storefront_app::domain::checkout::CheckoutServiceError;

use crate::extensions::capitalised_brief;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::Invalid(CheckoutError::Pricing(source)) if source.is_limit() => {
            StatusError::bad_request().brief(capitalised_brief(&source))
        }
        CheckoutServiceError::Invalid(CheckoutError::Pricing(source)) => {
            error!("failed to total cart at checkout: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Invalid(invalid) => {
            StatusError::bad_request().brief(capitalised_brief(&invalid))
        }
        CheckoutServiceError::Orders(source) => {
            error!("failed to place order: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::http::StatusCode;
    use storefront::pricing::PricingError;

    use super::*;

    #[test]
    fn missing_fields_are_listed_in_brief() {
        let error = into_status_error(CheckoutServiceError::Invalid(
            CheckoutError::MissingFields(vec!["phone", "city"]),
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Missing required fields: phone, city");
    }

    #[test]
    fn empty_cart_is_a_bad_request() {
        let error = into_status_error(CheckoutServiceError::Invalid(CheckoutError::EmptyCart));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Cart is empty");
    }

    #[test]
    fn totals_past_storage_limit_are_bad_requests() {
        let error = into_status_error(CheckoutServiceError::Invalid(CheckoutError::Pricing(
            PricingError::AmountTooLarge(Decimal::from(45_000_000_000_i64)),
        )));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert!(
            error.brief.starts_with("Total 45000000000 exceeds"),
            "unexpected brief {:?}",
            error.brief
        );
    }

    #[test]
    fn overflow_is_a_server_error() {
        let error = into_status_error(CheckoutServiceError::Invalid(CheckoutError::Pricing(
            PricingError::Overflow,
        )));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
