//! Props of the informational pages.

use super::{Callback, ContactMessage, Dispatch, ThemeAction};

#[derive(Debug, Clone, Default)]
pub struct NotFoundPageProps {
    pub path: String,
    pub on_go_home: Callback<()>,
}

impl Dispatch for NotFoundPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::GoHome => self.on_go_home.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AboutPageProps {
    pub title: Option<String>,
    /// Paragraphs of plain text supplied by the tenant.
    pub paragraphs: Vec<String>,
    pub on_contact_click: Callback<()>,
}

impl Dispatch for AboutPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::Navigate(path) if path == "/contact" => self.on_contact_click.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPageProps {
    pub is_submitting: bool,
    pub submitted: bool,
    pub error: Option<String>,
    pub support_email: Option<String>,
    pub on_submit: Callback<ContactMessage>,
}

impl Dispatch for ContactPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SubmitContact(message) => self.on_submit.call(message),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct FaqPageProps {
    pub entries: Vec<FaqEntry>,
    /// Index of the expanded entry, if any.
    pub expanded: Option<usize>,
    pub on_toggle: Callback<usize>,
}

impl Dispatch for FaqPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ToggleFaq(index) if index < self.entries.len() => {
                self.on_toggle.call(index)
            }
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermsPageProps {
    pub paragraphs: Vec<String>,
    pub last_updated: Option<String>,
}

impl Dispatch for TermsPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        Err(action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrivacyPageProps {
    pub paragraphs: Vec<String>,
    pub last_updated: Option<String>,
}

impl Dispatch for PrivacyPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        Err(action)
    }
}
