//! Runtime check of the slot contract.

use vitrine_core::ThemeSlug;

use super::error::ThemeError;
use super::types::ThemePackage;

/// Reject a package that leaves any contract slot empty.
///
/// Every missing slot is reported at once so a theme author sees the whole
/// list instead of fixing them one render failure at a time.
pub fn validate_package(slug: &ThemeSlug, package: &ThemePackage) -> Result<(), ThemeError> {
    let missing = package.missing_slots();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::ContractViolation {
            slug: slug.clone(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{component_fn, Markup};
    use vitrine_core::SlotName;

    #[test]
    fn test_partial_package_flags_checkout() {
        let slug = ThemeSlug::new("partial").unwrap();
        let package = ThemePackage::builder()
            .all_slots(|_| component_fn(|_, _| Ok(Markup::default())))
            .without(SlotName::CheckoutPage)
            .build();

        let err = validate_package(&slug, &package).unwrap_err();
        assert_eq!(err.missing_slots(), &[SlotName::CheckoutPage]);
    }

    #[test]
    fn test_complete_package_passes() {
        let slug = ThemeSlug::new("complete").unwrap();
        let package = ThemePackage::builder()
            .all_slots(|_| component_fn(|_, _| Ok(Markup::default())))
            .build();
        assert!(validate_package(&slug, &package).is_ok());
    }
}
