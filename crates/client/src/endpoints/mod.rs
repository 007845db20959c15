//! REST API endpoint implementations.
//!
//! Free functions taking the HTTP client, base URL and bearer token. The
//! [`crate::AccountClient`] methods delegate here.

mod account;
mod auth;
mod request;
mod response;
pub mod url_encoding;

pub use account::{
    delete_all_results, delete_personal_bests, delete_tag_personal_best, delete_user,
    get_name_availability, get_user, unlink_discord, update_email, update_name,
};
pub use auth::{
    add_password_auth, current_user, delete_login, reauthenticate_with_password,
    reauthenticate_with_provider, update_password,
};
pub use request::send_request_with_retry;
pub use url_encoding::encode_path_segment;
