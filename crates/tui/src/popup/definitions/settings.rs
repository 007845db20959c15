//! Settings popups. These only raise settings actions; the runtime persists.

use crate::action::Action;
use crate::popup::definition::{InputSpec, PopupDefinition};
use crate::popup::definitions::{ids, value_at};
use crate::services::PopupServices;

/// Font names are stored with whitespace replaced by underscores.
pub fn normalize_font_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

pub fn apply_custom_font(services: &PopupServices) -> PopupDefinition {
    let services = services.clone();

    PopupDefinition::builder(ids::APPLY_CUSTOM_FONT)
        .title("Custom font")
        .input(InputSpec::new("Font name"))
        .text("Make sure you have the font installed on your computer before applying.")
        .button_text("Apply")
        .exec(move |_, values| {
            let services = services.clone();
            async move {
                let name = value_at(&values, 0);
                if name.is_empty() {
                    return;
                }
                services
                    .send(Action::SetFontFamily(normalize_font_name(name)))
                    .await;
            }
        })
        .build()
}

pub fn reset_settings(services: &PopupServices) -> PopupDefinition {
    let services = services.clone();

    PopupDefinition::builder(ids::RESET_SETTINGS)
        .title("Reset Settings")
        .text("Are you sure you want to reset all your settings?")
        .button_text("Reset")
        .exec(move |_, _| {
            let services = services.clone();
            async move {
                services.send(Action::ResetSettings).await;
            }
        })
        .build()
}
