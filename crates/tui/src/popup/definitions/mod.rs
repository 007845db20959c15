//! The concrete account and settings popups.
//!
//! Definitions capture their collaborators (`PopupServices`) at registration
//! time. Handlers read field values positionally, in the order the inputs
//! are declared.

mod account;
mod settings;

pub use account::{
    add_password_auth, clear_tag_pb, delete_account, reset_personal_bests, unlink_discord,
    update_email, update_name, update_password,
};
pub use settings::{apply_custom_font, normalize_font_name, reset_settings};

use crate::popup::error::PopupError;
use crate::popup::registry::PopupRegistry;
use crate::services::PopupServices;

/// Registered popup ids.
pub mod ids {
    pub const UPDATE_EMAIL: &str = "updateEmail";
    pub const UPDATE_NAME: &str = "updateName";
    pub const UPDATE_PASSWORD: &str = "updatePassword";
    pub const ADD_PASSWORD_AUTH: &str = "addPasswordAuth";
    pub const DELETE_ACCOUNT: &str = "deleteAccount";
    pub const CLEAR_TAG_PB: &str = "clearTagPb";
    pub const APPLY_CUSTOM_FONT: &str = "applyCustomFont";
    pub const RESET_PERSONAL_BESTS: &str = "resetPersonalBests";
    pub const RESET_SETTINGS: &str = "resetSettings";
    pub const UNLINK_DISCORD: &str = "unlinkDiscord";
}

/// Value at `index`, or an empty string when the form had fewer fields.
///
/// Pre-show hooks may clear a definition's inputs, so handlers must not
/// assume every declared value arrives.
pub(crate) fn value_at(values: &[String], index: usize) -> &str {
    values.get(index).map(String::as_str).unwrap_or_default()
}

/// Register every account and settings popup.
///
/// # Errors
///
/// `PopupError::DuplicateId` if any of these ids is already registered.
pub fn register_all(registry: &mut PopupRegistry, services: &PopupServices) -> Result<(), PopupError> {
    let definitions = [
        update_email(services),
        update_name(services),
        update_password(services),
        add_password_auth(services),
        delete_account(services),
        clear_tag_pb(services),
        apply_custom_font(services),
        reset_personal_bests(services),
        reset_settings(services),
        unlink_discord(services),
    ];
    for definition in definitions {
        registry.register(definition)?;
    }
    tracing::debug!(count = registry.len(), "Registered popups");
    Ok(())
}
