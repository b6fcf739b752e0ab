use crate::contact::mailer::EmailJsConfig;

#[cfg(debug_assertions)]
pub fn get_email_api_url() -> &'static str {
    match option_env!("EMAILJS_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => "https://api.emailjs.com/api/v1.0/email/send",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_email_api_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

/// EmailJS credentials baked in by the build (`EMAILJS_*` in the Trunk env).
pub fn email_config() -> EmailJsConfig {
    EmailJsConfig::new(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
    )
}
