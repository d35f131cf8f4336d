//! Per-slot error boundary.
//!
//! A failing or panicking component must not take the page down with it:
//! its output is replaced by a small fallback block and the failure is logged.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::error::RenderError;
use super::types::{Markup, RenderContext, ThemePackage};
use crate::props::SlotProps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutput {
    Rendered(Markup),
    Fallback { error: RenderError, markup: Markup },
}

impl SlotOutput {
    pub fn markup(&self) -> &Markup {
        match self {
            SlotOutput::Rendered(markup) => markup,
            SlotOutput::Fallback { markup, .. } => markup,
        }
    }

    pub fn into_markup(self) -> Markup {
        match self {
            SlotOutput::Rendered(markup) => markup,
            SlotOutput::Fallback { markup, .. } => markup,
        }
    }

    pub fn error(&self) -> Option<&RenderError> {
        match self {
            SlotOutput::Rendered(_) => None,
            SlotOutput::Fallback { error, .. } => Some(error),
        }
    }
}

/// Render the component for `props.slot()`, containing any failure.
pub fn render_slot(
    package: &ThemePackage,
    props: &SlotProps,
    cx: &RenderContext<'_>,
) -> SlotOutput {
    let slot = props.slot();
    let result = match package.component(slot) {
        Some(component) => catch_unwind(AssertUnwindSafe(|| component.render(props, cx)))
            .unwrap_or_else(|payload| {
                Err(RenderError::Panicked {
                    slot,
                    message: panic_message(payload.as_ref()),
                })
            }),
        None => Err(RenderError::MissingSlot(slot)),
    };

    match result {
        Ok(markup) => SlotOutput::Rendered(markup),
        Err(error) => {
            tracing::error!("Slot {} failed: {}", slot, error);
            let markup = Markup::new(format!(
                r#"<div class="vitrine-slot-error" data-slot="{}" role="alert">{}</div>"#,
                slot,
                crate::kits::markup::escape(&cx.t("error.slot_unavailable"))
            ));
            SlotOutput::Fallback { error, markup }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ThemeI18n;
    use crate::props::{FooterProps, HeaderProps};
    use crate::theme::{component_fn, ThemeConfig};
    use vitrine_core::SlotName;

    fn package() -> ThemePackage {
        ThemePackage::builder()
            .slot(
                SlotName::Header,
                component_fn(|_, _| Ok(Markup::new("<header>ok</header>"))),
            )
            .slot(
                SlotName::Footer,
                component_fn(|_, _| panic!("footer exploded")),
            )
            .build()
    }

    #[test]
    fn test_healthy_slot_renders() {
        let config = ThemeConfig::default();
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);

        let output = render_slot(&package(), &HeaderProps::default().into(), &cx);
        assert_eq!(output, SlotOutput::Rendered(Markup::new("<header>ok</header>")));
    }

    #[test]
    fn test_panicking_slot_is_contained() {
        let config = ThemeConfig::default();
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);

        let output = render_slot(&package(), &FooterProps::default().into(), &cx);
        assert_eq!(
            output.error(),
            Some(&RenderError::Panicked {
                slot: SlotName::Footer,
                message: "footer exploded".into()
            })
        );
        assert!(output.markup().as_str().contains(r#"data-slot="Footer""#));
    }

    #[test]
    fn test_missing_slot_falls_back() {
        let config = ThemeConfig::default();
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);

        let output = render_slot(
            &package(),
            &crate::props::TermsPageProps::default().into(),
            &cx,
        );
        assert_eq!(output.error(), Some(&RenderError::MissingSlot(SlotName::TermsPage)));
    }
}
