use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailConfig};

/// Template parameters understood by the contact email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not build email request: {0}")]
    Build(String),
    #[error("email request failed: {0}")]
    Network(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Deliver one contact message through EmailJS. Any 2xx is success.
pub async fn send(email: &EmailConfig, params: &EmailParams) -> Result<(), SubmitError> {
    let body = SendRequest {
        service_id: email.service_id,
        template_id: email.template_id,
        user_id: email.public_key,
        template_params: params,
    };

    let response = Request::post(config::emailjs_endpoint())
        .json(&body)
        .map_err(|e| SubmitError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let email = EmailConfig {
            service_id: "svc",
            template_id: "tpl",
            public_key: "pk",
            to_email: "me@example.com",
        };
        let params = EmailParams {
            from_name: "Ada".into(),
            from_email: "ada@example.com".into(),
            message: "Hello".into(),
            to_email: email.to_email.into(),
        };
        let body = SendRequest {
            service_id: email.service_id,
            template_id: email.template_id,
            user_id: email.public_key,
            template_params: &params,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello",
                    "to_email": "me@example.com"
                }
            })
        );
    }

    #[test]
    fn rejection_message_names_status() {
        let err = SubmitError::Rejected { status: 400, body: "The user ID is invalid".into() };
        assert_eq!(
            err.to_string(),
            "email service rejected the message (400): The user ID is invalid"
        );
    }
}
