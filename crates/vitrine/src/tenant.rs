//! Per-tenant theme selection.

use std::collections::BTreeMap;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::i18n::ThemeI18n;
use crate::theme::{ThemeConfig, ThemeContext, ThemeError, ThemeRegistry};

/// Theme choice and overrides of one tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TenantSettings {
    /// Theme slug; the directory default when unset.
    pub theme: Option<String>,
    pub locale: Option<String>,
    /// Layered over the theme's defaults.
    pub config: ThemeConfig,
}

#[derive(Debug, Clone)]
pub struct TenantDirectory {
    default_theme: String,
    default_locale: String,
    cache_packages: bool,
    tenants: BTreeMap<String, TenantSettings>,
}

impl TenantDirectory {
    pub fn new(default_theme: impl Into<String>) -> Self {
        Self {
            default_theme: default_theme.into(),
            default_locale: "en".to_string(),
            cache_packages: false,
            tenants: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_theme: config.default_theme.clone(),
            default_locale: config.locale.clone(),
            cache_packages: config.cache_packages,
            tenants: config.tenants.clone(),
        }
    }

    pub fn with_tenant(mut self, id: impl Into<String>, settings: TenantSettings) -> Self {
        self.tenants.insert(id.into(), settings);
        self
    }

    pub fn get(&self, tenant: &str) -> Option<&TenantSettings> {
        self.tenants.get(tenant)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tenants.keys().map(String::as_str)
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    pub fn theme_for(&self, tenant: &str) -> &str {
        self.get(tenant)
            .and_then(|settings| settings.theme.as_deref())
            .unwrap_or(&self.default_theme)
    }

    /// Tenant locale, then the locale in the tenant's config, then the
    /// directory default.
    pub fn locale_for(&self, tenant: &str) -> &str {
        self.get(tenant)
            .and_then(|settings| {
                settings
                    .locale
                    .as_deref()
                    .or(settings.config.i18n.locale.as_deref())
            })
            .unwrap_or(&self.default_locale)
    }

    pub fn i18n_for(&self, tenant: &str) -> ThemeI18n {
        ThemeI18n::new(self.locale_for(tenant))
    }

    /// A context seeded with the tenant's overrides, with the tenant's theme
    /// requested.
    ///
    /// When the tenant's theme fails to resolve the directory default is
    /// tried instead. The returned context is in the error state when that
    /// fails too, and can be retried.
    pub async fn context_for(&self, tenant: &str, registry: Arc<ThemeRegistry>) -> ThemeContext {
        let context = self.tenant_context(tenant, registry);
        let theme = self.theme_for(tenant);
        if let Err(e) = context.set_theme(theme).await {
            if theme == self.default_theme {
                tracing::warn!("Tenant {}: {}", tenant, e);
            } else {
                tracing::warn!(
                    "Tenant {}: {}, falling back to {}",
                    tenant,
                    e,
                    self.default_theme
                );
                if let Err(e) = context.set_theme(&self.default_theme).await {
                    tracing::warn!("Tenant {}: default theme failed too: {}", tenant, e);
                }
            }
        }
        context
    }

    /// A context for `tenant` showing `theme` instead of the tenant's own
    /// choice, still layered with the tenant's overrides. There is no
    /// fallback: a theme that fails to resolve is returned as the error.
    pub async fn context_with_theme(
        &self,
        tenant: &str,
        theme: &str,
        registry: Arc<ThemeRegistry>,
    ) -> Result<ThemeContext, ThemeError> {
        let context = self.tenant_context(tenant, registry);
        context.set_theme(theme).await?;
        Ok(context)
    }

    fn tenant_context(&self, tenant: &str, registry: Arc<ThemeRegistry>) -> ThemeContext {
        let base = match self.get(tenant) {
            Some(settings) => settings.config.clone(),
            None => {
                tracing::debug!("Unknown tenant {}, using defaults", tenant);
                ThemeConfig::default()
            }
        };
        ThemeContext::with_base_config(registry, base).with_package_cache(self.cache_packages)
    }
}

impl Default for TenantDirectory {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::I18nConfig;

    fn directory() -> TenantDirectory {
        TenantDirectory::new("default")
            .with_tenant(
                "roam",
                TenantSettings {
                    theme: Some("TravelPass".to_string()),
                    locale: Some("uk".to_string()),
                    config: ThemeConfig::default(),
                },
            )
            .with_tenant(
                "acme",
                TenantSettings {
                    config: ThemeConfig {
                        i18n: I18nConfig {
                            locale: Some("de".to_string()),
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
    }

    #[test]
    fn test_theme_falls_back_to_default() {
        let directory = directory();
        assert_eq!(directory.theme_for("roam"), "TravelPass");
        assert_eq!(directory.theme_for("acme"), "default");
        assert_eq!(directory.theme_for("unknown"), "default");
    }

    #[test]
    fn test_locale_precedence() {
        let directory = directory();
        assert_eq!(directory.locale_for("roam"), "uk");
        assert_eq!(directory.locale_for("acme"), "de");
        assert_eq!(directory.locale_for("unknown"), "en");
    }
}
