//! # Validation Module
//!
//! Field checks applied to catalog products when the catalog is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      When Validation Runs                               │
//! │                                                                         │
//! │  Startup: Catalog::new(products)                                       │
//! │  ├── validate_product()  ◄── THIS MODULE (every product)               │
//! │  └── duplicate id check  ◄── catalog.rs                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Runtime: products are immutable, nothing is validated again           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_image_url, validate_product_name};
//!
//! assert!(validate_product_name("بدلة رسمية").is_ok());
//! assert!(validate_image_url("https://example.com/images/suit1.jpg").is_ok());
//! assert!(validate_image_url("suit1.jpg").is_err());
//! ```

use url::Url;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_PRODUCT_DESCRIPTION_CHARS, MAX_PRODUCT_NAME_CHARS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters (counted as chars, not bytes: names are Arabic)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_CHARS,
        });
    }

    Ok(())
}

/// Validates a product description. Empty is allowed.
pub fn validate_product_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_PRODUCT_DESCRIPTION_CHARS {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_PRODUCT_DESCRIPTION_CHARS,
        });
    }

    Ok(())
}

/// Validates an image URL.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
pub fn validate_image_url(image: &str) -> ValidationResult<()> {
    let image = image.trim();

    if image.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    let url = Url::parse(image).map_err(|e| ValidationError::InvalidFormat {
        field: "image".to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Product Validator
// =============================================================================

/// Runs every field check on a product, stopping at the first failure.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_product_description(&product.description)?;
    validate_price(product.price)?;
    validate_image_url(&product.image)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
