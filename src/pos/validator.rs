use crate::dtos::sale::SaleRequest;
use crate::error::AppError;

/// Pre-flight check on raw terminal input. Pure and synchronous: nothing is
/// enqueued and no storage is touched until a request has passed here.
pub fn validate_sale(product_id_raw: &str, quantity_raw: &str) -> Result<SaleRequest, AppError> {
    let product_id_raw = product_id_raw.trim();
    let quantity_raw = quantity_raw.trim();

    if product_id_raw.is_empty() || quantity_raw.is_empty() {
        return Err(AppError::MissingField);
    }

    let product_id: i64 = product_id_raw.parse().map_err(|_| AppError::NotNumeric)?;
    let quantity: i64 = quantity_raw.parse().map_err(|_| AppError::NotNumeric)?;

    if quantity <= 0 {
        return Err(AppError::NonPositiveQuantity);
    }

    Ok(SaleRequest { product_id, quantity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let req = validate_sale("1", "3").unwrap();
        assert_eq!(req, SaleRequest { product_id: 1, quantity: 3 });
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let req = validate_sale(" 42 ", " 7 ").unwrap();
        assert_eq!(req, SaleRequest { product_id: 42, quantity: 7 });
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(validate_sale("", "3"), Err(AppError::MissingField)));
        assert!(matches!(validate_sale("1", ""), Err(AppError::MissingField)));
        assert!(matches!(validate_sale("  ", "  "), Err(AppError::MissingField)));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(matches!(validate_sale("abc", "3"), Err(AppError::NotNumeric)));
        assert!(matches!(validate_sale("1", "two"), Err(AppError::NotNumeric)));
        assert!(matches!(validate_sale("1", "3.5"), Err(AppError::NotNumeric)));
    }

    #[test]
    fn rejects_non_positive_quantity() {
        assert!(matches!(validate_sale("1", "0"), Err(AppError::NonPositiveQuantity)));
        assert!(matches!(validate_sale("1", "-2"), Err(AppError::NonPositiveQuantity)));
    }
}
