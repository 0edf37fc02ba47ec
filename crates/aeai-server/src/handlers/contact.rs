//! Contact handlers: form display and submission.
//!
//! Submissions are logged and acknowledged; nothing is persisted and no
//! outbound mail is sent. A short delay simulates processing, mirroring the
//! form's original behaviour.

use std::time::Duration;

use aeai_content::pages;
use axum::extract::Form;
use maud::Markup;
use serde::Deserialize;

/// Fields posted by the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Sender organization, if given.
    #[serde(default)]
    pub organization: String,
    /// Selected inquiry type value.
    #[serde(default)]
    pub inquiry_type: String,
    /// Message body.
    pub message: String,
}

/// `GET /contact`
pub async fn form() -> Markup {
    let types = pages::inquiry_types();
    aeai_views::pages::contact(&types)
}

/// `POST /contact`
pub async fn submit(Form(form): Form<ContactForm>) -> Markup {
    tracing::info!(
        name = %form.name,
        email = %form.email,
        organization = %form.organization,
        inquiry_type = %form.inquiry_type,
        message_len = form.message.len(),
        "contact form submitted"
    );

    tokio::time::sleep(Duration::from_secs(1)).await;

    aeai_views::pages::contact_submitted()
}
