//! Decoding of service response bodies.
//!
//! Account endpoints wrap their payload in `{ "message": ..., "data": ... }`.
//! Auth endpoints report failures as `{ "code": ..., "message": ... }`.

use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::models::ApiResponse;

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct AuthFailure {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

async fn read_envelope(response: Response) -> Result<(u16, Envelope)> {
    let status = response.status();
    let body = response.text().await?;

    if body.trim().is_empty() {
        return Ok((
            status.as_u16(),
            Envelope {
                message: String::new(),
                data: None,
            },
        ));
    }

    match serde_json::from_str::<Envelope>(&body) {
        Ok(envelope) => Ok((status.as_u16(), envelope)),
        // Proxies answer errors with plain text; keep it as the message.
        Err(_) if !status.is_success() => Ok((
            status.as_u16(),
            Envelope {
                message: body.trim().to_string(),
                data: None,
            },
        )),
        Err(e) => Err(ClientError::InvalidResponse(format!(
            "Failed to parse response envelope: {}",
            e
        ))),
    }
}

/// Decode an account response whose `data` carries a payload.
pub(crate) async fn into_api_response<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>> {
    let (status, envelope) = read_envelope(response).await?;

    let data = match envelope.data {
        Some(value) if (200..300).contains(&status) && !value.is_null() => Some(
            serde_json::from_value(value).map_err(|e| {
                ClientError::InvalidResponse(format!("Failed to parse response data: {}", e))
            })?,
        ),
        _ => None,
    };

    Ok(ApiResponse {
        status,
        message: envelope.message,
        data,
    })
}

/// Decode an account response, discarding any `data`.
pub(crate) async fn into_empty_response(response: Response) -> Result<ApiResponse<()>> {
    let (status, envelope) = read_envelope(response).await?;
    Ok(ApiResponse {
        status,
        message: envelope.message,
        data: None,
    })
}

/// Turn a non-2xx auth response into [`ClientError::Auth`].
pub(crate) async fn check_auth_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let failure = serde_json::from_str::<AuthFailure>(&body).unwrap_or(AuthFailure {
        code: String::new(),
        message: body.trim().to_string(),
    });

    Err(ClientError::Auth {
        status: status.as_u16(),
        code: if failure.code.is_empty() {
            "auth/unknown".to_string()
        } else {
            failure.code
        },
        message: failure.message,
    })
}
