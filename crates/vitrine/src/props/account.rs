//! Props of the profile and authentication pages.
//!
//! Themes collect the form input and hand it to the host. Authentication
//! itself stays with the host's session store.

use vitrine_core::models::UserProfile;

use super::{
    Callback, Credentials, Dispatch, PasswordReset, ProfileUpdate, Registration, ThemeAction,
};

#[derive(Debug, Clone, Default)]
pub struct ProfilePageProps {
    pub user: Option<UserProfile>,
    pub is_saving: bool,
    pub on_save_profile: Callback<ProfileUpdate>,
    pub on_logout: Callback<()>,
    pub on_orders_click: Callback<()>,
}

impl Dispatch for ProfilePageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SaveProfile(update) => self.on_save_profile.call(update),
            ThemeAction::Logout => self.on_logout.call(()),
            ThemeAction::OpenOrders => self.on_orders_click.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginPageProps {
    pub is_submitting: bool,
    pub error: Option<String>,
    pub on_login: Callback<Credentials>,
    pub on_register_click: Callback<()>,
    pub on_forgot_password_click: Callback<()>,
}

impl Dispatch for LoginPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SubmitLogin(credentials) => self.on_login.call(credentials),
            ThemeAction::OpenRegister => self.on_register_click.call(()),
            ThemeAction::OpenForgotPassword => self.on_forgot_password_click.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterPageProps {
    pub is_submitting: bool,
    pub error: Option<String>,
    pub on_register: Callback<Registration>,
    pub on_login_click: Callback<()>,
}

impl Dispatch for RegisterPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SubmitRegistration(registration) => self.on_register.call(registration),
            ThemeAction::OpenLogin => self.on_login_click.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordPageProps {
    pub is_submitting: bool,
    /// Set once the reset mail was requested.
    pub submitted: bool,
    pub error: Option<String>,
    pub on_submit: Callback<String>,
    pub on_back_to_login: Callback<()>,
}

impl Dispatch for ForgotPasswordPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::RequestPasswordReset(email) => self.on_submit.call(email),
            ThemeAction::OpenLogin => self.on_back_to_login.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordPageProps {
    pub token: String,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub on_submit: Callback<PasswordReset>,
    pub on_back_to_login: Callback<()>,
}

impl Dispatch for ResetPasswordPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ResetPassword(reset) => self.on_submit.call(reset),
            ThemeAction::OpenLogin => self.on_back_to_login.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}
