//! Account management popups.
//!
//! Every handler follows the same shape: local validation first (mismatched
//! confirmation fields become a neutral toast and an early return), then
//! reauthentication where the change is sensitive, then the service calls
//! with the loader raised. Non-200 responses are reported with the service's
//! message. Errors from reauthentication or transport go through
//! `PopupServices::report_failure`, and the loader is lowered on every exit.
//!
//! Pre-show hooks restore the registered inputs and labels on the branch
//! where they do not apply, since hook mutations persist between showings.

use secrecy::SecretString;
use std::future::Future;
use std::time::Duration;
use typist_client::{AuthProviderId, ClientError, PersonalBests};
use typist_config::constants::{
    ACCOUNT_DELETED_RELOAD_DELAY_MS, ACCOUNT_RELOAD_DELAY_MS, GOODBYE_TOAST_SECS,
};

use crate::popup::definition::{InputSpec, InputType, PopupDefinition};
use crate::popup::definitions::{ids, value_at};
use crate::services::{PopupServices, SharedAccount, read_account};
use crate::ui::ToastLevel;

/// Run a handler body, reporting failures and always lowering the loader.
async fn guarded<Fut>(services: &PopupServices, body: Fut)
where
    Fut: Future<Output = Result<(), ClientError>>,
{
    let result = body.await;
    services.loading(false).await;
    if let Err(e) = result {
        services.report_failure(&e).await;
    }
}

fn primary_is(account: &SharedAccount, provider: AuthProviderId) -> bool {
    read_account(account).primary_provider() == Some(provider)
}

fn has_password(account: &SharedAccount) -> bool {
    read_account(account).has_password()
}

pub fn update_email(services: &PopupServices) -> PopupDefinition {
    let inputs = vec![
        InputSpec::password("Password"),
        InputSpec::new("New email"),
        InputSpec::new("Confirm new email"),
    ];
    let account = services.account.clone();
    let defaults = inputs.clone();
    let services = services.clone();

    PopupDefinition::builder(ids::UPDATE_EMAIL)
        .title("Update Email")
        .inputs(inputs)
        .button_text("Update")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let password = value_at(&values, 0);
                let email = value_at(&values, 1);
                let confirm = value_at(&values, 2);
                if email != confirm {
                    services
                        .notify(ToastLevel::Info, "Emails don't match")
                        .await;
                    return;
                }
                guarded(&services, async {
                    let user = services.auth_user().ok_or(ClientError::NotSignedIn)?;
                    if user.primary_provider() == Some(AuthProviderId::Password) {
                        services.reauthenticate_with_password(password).await?;
                    }
                    services.loading(true).await;
                    let response = services.client.update_email(email, &user.email).await?;
                    services.loading(false).await;
                    if !response.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to update email: {}", response.message),
                            )
                            .await;
                        return Ok(());
                    }
                    services.notify(ToastLevel::Success, "Email updated").await;
                    services.reload_after(Duration::from_millis(ACCOUNT_RELOAD_DELAY_MS));
                    Ok(())
                })
                .await;
            }
        })
        .before_show(move |popup| {
            if has_password(&account) {
                popup.inputs = defaults.clone();
                popup.button_text = "Update".to_string();
                popup.text.clear();
            } else {
                popup.inputs.clear();
                popup.button_text.clear();
                popup.text = "Password authentication is not enabled".to_string();
            }
        })
        .build()
}

pub fn update_name(services: &PopupServices) -> PopupDefinition {
    let account = services.account.clone();
    let services = services.clone();

    PopupDefinition::builder(ids::UPDATE_NAME)
        .title("Update Name")
        .input(InputSpec::password("Password"))
        .input(InputSpec::new("New name").with_type(InputType::Text))
        .button_text("Update")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let password = value_at(&values, 0);
                let new_name = value_at(&values, 1).to_string();
                guarded(&services, async {
                    services.reauthenticate(password).await?;
                    services.loading(true).await;

                    let check = services.client.get_name_availability(&new_name).await?;
                    if !check.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to check name: {}", check.message),
                            )
                            .await;
                        return Ok(());
                    }

                    let update = services.client.update_name(&new_name).await?;
                    if !update.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to update name: {}", update.message),
                            )
                            .await;
                        return Ok(());
                    }

                    services.notify(ToastLevel::Success, "Name updated").await;
                    services.update_profile(|profile| profile.name = new_name.clone());
                    Ok(())
                })
                .await;
            }
        })
        .before_show(move |popup| {
            let google = primary_is(&account, AuthProviderId::Google);
            if let Some(password) = popup.inputs.first_mut() {
                password.hidden = google;
            }
            popup.button_text = if google {
                "Reauthenticate to update".to_string()
            } else {
                "Update".to_string()
            };
        })
        .build()
}

pub fn update_password(services: &PopupServices) -> PopupDefinition {
    let inputs = vec![
        InputSpec::password("Password"),
        InputSpec::password("New password"),
        InputSpec::password("Confirm new password"),
    ];
    let account = services.account.clone();
    let defaults = inputs.clone();
    let services = services.clone();

    PopupDefinition::builder(ids::UPDATE_PASSWORD)
        .title("Update Password")
        .inputs(inputs)
        .button_text("Update")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let previous = value_at(&values, 0);
                let new_password = value_at(&values, 1);
                let confirm = value_at(&values, 2);
                if new_password != confirm {
                    services
                        .notify(ToastLevel::Info, "New passwords don't match")
                        .await;
                    return;
                }
                guarded(&services, async {
                    services.loading(true).await;
                    services.reauthenticate_with_password(previous).await?;
                    let secret = SecretString::new(new_password.into());
                    services.client.update_password(&secret).await?;
                    services.loading(false).await;
                    services.notify(ToastLevel::Success, "Password updated").await;
                    services.reload_after(Duration::from_millis(ACCOUNT_RELOAD_DELAY_MS));
                    Ok(())
                })
                .await;
            }
        })
        .before_show(move |popup| {
            if has_password(&account) {
                popup.inputs = defaults.clone();
                popup.button_text = "Update".to_string();
                popup.text.clear();
            } else {
                popup.inputs.clear();
                popup.button_text.clear();
                popup.text = "Password authentication is not enabled".to_string();
            }
        })
        .build()
}

pub fn add_password_auth(services: &PopupServices) -> PopupDefinition {
    let services = services.clone();

    PopupDefinition::builder(ids::ADD_PASSWORD_AUTH)
        .title("Add Password Authentication")
        .inputs([
            InputSpec::email("email"),
            InputSpec::email("confirm email"),
            InputSpec::password("new password"),
            InputSpec::password("confirm new password"),
        ])
        .button_text("Add")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let email = value_at(&values, 0);
                let email_confirm = value_at(&values, 1);
                let password = value_at(&values, 2);
                let password_confirm = value_at(&values, 3);
                if email != email_confirm {
                    services
                        .notify(ToastLevel::Info, "Emails don't match")
                        .await;
                    return;
                }
                if password != password_confirm {
                    services
                        .notify(ToastLevel::Info, "Passwords don't match")
                        .await;
                    return;
                }
                guarded(&services, async {
                    services.loading(true).await;
                    let secret = SecretString::new(password.into());
                    services.client.add_password_auth(email, &secret).await?;
                    services
                        .notify(ToastLevel::Success, "Password authentication added")
                        .await;
                    services.reload_after(Duration::from_millis(ACCOUNT_RELOAD_DELAY_MS));
                    Ok(())
                })
                .await;
            }
        })
        .build()
}

pub fn delete_account(services: &PopupServices) -> PopupDefinition {
    let inputs = vec![InputSpec::password("Password")];
    let account = services.account.clone();
    let defaults = inputs.clone();
    let services = services.clone();

    PopupDefinition::builder(ids::DELETE_ACCOUNT)
        .title("Delete Account")
        .inputs(inputs)
        .text(
            "This is the last time you can change your mind. \
             After pressing the button everything is gone.",
        )
        .button_text("Delete")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let password = value_at(&values, 0);
                guarded(&services, async {
                    services.reauthenticate(password).await?;

                    services.loading(true).await;
                    services.notify(ToastLevel::Info, "Deleting stats...").await;
                    let users = services.client.delete_user().await?;
                    services.loading(false).await;
                    if !users.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to delete user stats: {}", users.message),
                            )
                            .await;
                        return Ok(());
                    }

                    services.loading(true).await;
                    services.notify(ToastLevel::Info, "Deleting results...").await;
                    let results = services.client.delete_all_results().await?;
                    services.loading(false).await;
                    if !results.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to delete user results: {}", results.message),
                            )
                            .await;
                        return Ok(());
                    }

                    services
                        .notify(ToastLevel::Info, "Deleting login information...")
                        .await;
                    services.client.delete_login().await?;

                    services
                        .notify_for(
                            ToastLevel::Success,
                            "Goodbye",
                            Duration::from_secs(GOODBYE_TOAST_SECS),
                        )
                        .await;
                    services.reload_after(Duration::from_millis(ACCOUNT_DELETED_RELOAD_DELAY_MS));
                    Ok(())
                })
                .await;
            }
        })
        .before_show(move |popup| {
            if primary_is(&account, AuthProviderId::Google) {
                popup.inputs.clear();
                popup.button_text = "Reauthenticate to delete".to_string();
            } else {
                popup.inputs = defaults.clone();
                popup.button_text = "Delete".to_string();
            }
        })
        .build()
}

pub fn clear_tag_pb(services: &PopupServices) -> PopupDefinition {
    let services = services.clone();

    PopupDefinition::builder(ids::CLEAR_TAG_PB)
        .title("Clear Tag PB")
        .text("Are you sure you want to clear this tags PB?")
        .button_text("Clear")
        .exec(move |invocation, _| {
            let services = services.clone();
            async move {
                let tag_id = value_at(&invocation.parameters, 0).to_string();
                guarded(&services, async {
                    services.loading(true).await;
                    let response = services.client.delete_tag_personal_best(&tag_id).await?;
                    services.loading(false).await;

                    if !response.is_ok() {
                        services
                            .notify(
                                ToastLevel::Info,
                                format!("Failed to delete tag's PB: {}", response.message),
                            )
                            .await;
                        return Ok(());
                    }

                    if response.data.map(|d| d.result_code) == Some(1) {
                        let mut found = false;
                        services.update_profile(|profile| {
                            if let Some(tag) = profile.tag_mut(&tag_id) {
                                tag.personal_bests = PersonalBests::cleared();
                                found = true;
                            }
                        });
                        if found {
                            services.notify(ToastLevel::Info, "Tag PB cleared.").await;
                        }
                    } else {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Something went wrong: {}", response.message),
                            )
                            .await;
                    }
                    Ok(())
                })
                .await;
            }
        })
        .before_show(|popup| {
            let name = value_at(&popup.parameters, 1).to_string();
            popup.text = format!("Are you sure you want to clear PB for tag {name}?");
        })
        .build()
}

pub fn reset_personal_bests(services: &PopupServices) -> PopupDefinition {
    let inputs = vec![InputSpec::password("Password")];
    let account = services.account.clone();
    let defaults = inputs.clone();
    let services = services.clone();

    PopupDefinition::builder(ids::RESET_PERSONAL_BESTS)
        .title("Reset Personal Bests")
        .inputs(inputs)
        .button_text("Reset")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let password = value_at(&values, 0);
                guarded(&services, async {
                    services.reauthenticate(password).await?;
                    services.loading(true).await;
                    let response = services.client.delete_personal_bests().await?;
                    services.loading(false).await;

                    if !response.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to reset personal bests: {}", response.message),
                            )
                            .await;
                        return Ok(());
                    }

                    services
                        .notify(ToastLevel::Success, "Personal bests have been reset")
                        .await;
                    services.update_profile(|profile| {
                        profile.personal_bests = PersonalBests::cleared();
                    });
                    Ok(())
                })
                .await;
            }
        })
        .before_show(move |popup| {
            if primary_is(&account, AuthProviderId::Google) {
                popup.inputs.clear();
                popup.button_text = "Reauthenticate to reset".to_string();
            } else {
                popup.inputs = defaults.clone();
                popup.button_text = "Reset".to_string();
            }
        })
        .build()
}

pub fn unlink_discord(services: &PopupServices) -> PopupDefinition {
    let services = services.clone();

    PopupDefinition::builder(ids::UNLINK_DISCORD)
        .title("Unlink Discord")
        .text("Are you sure you want to unlink your Discord account?")
        .button_text("Unlink")
        .exec(move |_, _| {
            let services = services.clone();
            async move {
                guarded(&services, async {
                    services.loading(true).await;
                    let response = services.client.unlink_discord().await?;
                    services.loading(false).await;

                    if !response.is_ok() {
                        services
                            .notify(
                                ToastLevel::Error,
                                format!("Failed to unlink Discord: {}", response.message),
                            )
                            .await;
                        return Ok(());
                    }

                    services.notify(ToastLevel::Success, "Accounts unlinked").await;
                    services.update_profile(|profile| profile.discord_id = None);
                    Ok(())
                })
                .await;
            }
        })
        .build()
}
