//! Layout constants and the settings-page rows.
//!
//! Each row is a trigger control: selecting it raises `Action::ShowPopup`
//! for its popup id with the row's parameters.

use crate::action::Action;
use crate::popup::definitions::ids;
use crate::services::AccountState;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// One selectable row of the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub section: &'static str,
    pub label: String,
    pub popup_id: &'static str,
    pub parameters: Vec<String>,
}

impl SettingsRow {
    fn new(section: &'static str, label: impl Into<String>, popup_id: &'static str) -> Self {
        Self {
            section,
            label: label.into(),
            popup_id,
            parameters: Vec::new(),
        }
    }

    /// The action that opens this row's popup.
    pub fn action(&self) -> Action {
        Action::ShowPopup {
            id: self.popup_id.to_string(),
            parameters: self.parameters.clone(),
        }
    }

    /// Rows for the given account. Account rows only appear when signed in.
    pub fn build(account: &AccountState) -> Vec<Self> {
        let mut rows = Vec::new();

        if account.is_signed_in() {
            rows.push(Self::new("account", "Update name", ids::UPDATE_NAME));
            if !account.has_password() {
                rows.push(Self::new(
                    "account",
                    "Add password authentication",
                    ids::ADD_PASSWORD_AUTH,
                ));
            }
            rows.push(Self::new("account", "Update email", ids::UPDATE_EMAIL));
            rows.push(Self::new("account", "Update password", ids::UPDATE_PASSWORD));
            rows.push(Self::new(
                "account",
                "Reset personal bests",
                ids::RESET_PERSONAL_BESTS,
            ));
            rows.push(Self::new("account", "Delete account", ids::DELETE_ACCOUNT));

            let linked = account
                .profile
                .as_ref()
                .is_some_and(|p| p.discord_id.is_some());
            if linked {
                rows.push(Self::new("account", "Unlink Discord", ids::UNLINK_DISCORD));
            }
        }

        rows.push(Self::new("settings", "Custom font", ids::APPLY_CUSTOM_FONT));
        rows.push(Self::new("settings", "Reset settings", ids::RESET_SETTINGS));

        if let Some(profile) = account.profile.as_ref() {
            for tag in &profile.tags {
                rows.push(Self {
                    section: "tags",
                    label: format!("Clear PB: {}", tag.name),
                    popup_id: ids::CLEAR_TAG_PB,
                    parameters: vec![tag.id.clone(), tag.name.clone()],
                });
            }
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typist_client::{AuthProviderId, AuthUser, PersonalBests, Tag, UserSnapshot};

    fn signed_in(providers: Vec<AuthProviderId>, discord: Option<&str>) -> AccountState {
        AccountState {
            auth: Some(AuthUser {
                uid: "u1".into(),
                email: "a@example.com".into(),
                providers,
            }),
            profile: Some(UserSnapshot {
                name: "alice".into(),
                discord_id: discord.map(str::to_string),
                tags: vec![Tag {
                    id: "t1".into(),
                    name: "long".into(),
                    personal_bests: PersonalBests::default(),
                }],
                ..UserSnapshot::default()
            }),
        }
    }

    #[test]
    fn test_signed_out_has_only_settings_rows() {
        let rows = SettingsRow::build(&AccountState::default());
        let ids: Vec<_> = rows.iter().map(|r| r.popup_id).collect();
        assert_eq!(ids, vec![ids::APPLY_CUSTOM_FONT, ids::RESET_SETTINGS]);
    }

    #[test]
    fn test_discord_row_only_when_linked() {
        let rows = SettingsRow::build(&signed_in(vec![AuthProviderId::Password], None));
        assert!(!rows.iter().any(|r| r.popup_id == ids::UNLINK_DISCORD));
        assert!(!rows.iter().any(|r| r.popup_id == ids::ADD_PASSWORD_AUTH));

        let rows = SettingsRow::build(&signed_in(vec![AuthProviderId::Google], Some("d1")));
        assert!(rows.iter().any(|r| r.popup_id == ids::UNLINK_DISCORD));
        assert!(rows.iter().any(|r| r.popup_id == ids::ADD_PASSWORD_AUTH));
    }

    #[test]
    fn test_tag_rows_carry_id_and_name() {
        let rows = SettingsRow::build(&signed_in(vec![AuthProviderId::Password], None));
        let tag_row = rows
            .iter()
            .find(|r| r.popup_id == ids::CLEAR_TAG_PB)
            .unwrap();
        assert_eq!(tag_row.parameters, vec!["t1".to_string(), "long".to_string()]);
    }
}
