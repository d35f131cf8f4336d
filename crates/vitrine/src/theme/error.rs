use vitrine_core::{InvalidSlug, SlotName, ThemeSlug};

/// Errors raised while registering, resolving or switching themes.
///
/// Cloneable so a [`ThemeSnapshot`](super::ThemeSnapshot) can carry the last
/// failure to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    InvalidSlug(#[from] InvalidSlug),

    #[error("theme {0} is already registered")]
    DuplicateTheme(ThemeSlug),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("failed to load theme {slug}: {message}")]
    Load { slug: ThemeSlug, message: String },

    #[error("theme {slug} is missing required slots: {}", slot_list(.missing))]
    ContractViolation {
        slug: ThemeSlug,
        missing: Vec<SlotName>,
    },

    #[error("theme context is not ready (status: {0})")]
    NotReady(&'static str),
}

impl ThemeError {
    /// Slots a contract violation complained about. Empty for other errors.
    pub fn missing_slots(&self) -> &[SlotName] {
        match self {
            ThemeError::ContractViolation { missing, .. } => missing,
            _ => &[],
        }
    }
}

fn slot_list(slots: &[SlotName]) -> String {
    slots
        .iter()
        .map(|slot| slot.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by a single slot component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{slot} cannot render props meant for {got}")]
    PropsMismatch { slot: SlotName, got: SlotName },

    #[error("theme has no component for {0}")]
    MissingSlot(SlotName),

    #[error("{slot} failed to render: {message}")]
    Failed { slot: SlotName, message: String },

    #[error("{slot} panicked while rendering: {message}")]
    Panicked { slot: SlotName, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_names_every_missing_slot() {
        let err = ThemeError::ContractViolation {
            slug: ThemeSlug::new("partial").unwrap(),
            missing: vec![SlotName::CheckoutPage, SlotName::Footer],
        };
        assert_eq!(
            err.to_string(),
            "theme partial is missing required slots: CheckoutPage, Footer"
        );
        assert_eq!(err.missing_slots(), &[SlotName::CheckoutPage, SlotName::Footer]);
    }

    #[test]
    fn test_unknown_theme_message_names_slug() {
        let err = ThemeError::UnknownTheme("nonexistent".into());
        assert_eq!(err.to_string(), "unknown theme: nonexistent");
        assert!(err.missing_slots().is_empty());
    }
}
