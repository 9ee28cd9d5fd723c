use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Scene edges and nav jumps are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn emailjs_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

/// EmailJS account settings. Values are baked in at build time so the
/// static bundle needs no runtime configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
    pub to_email: &'static str,
}

pub fn email_config() -> EmailConfig {
    EmailConfig {
        service_id: option_env!("GLOW_EMAILJS_SERVICE_ID").unwrap_or("YOUR_SERVICE_ID"),
        template_id: option_env!("GLOW_EMAILJS_TEMPLATE_ID").unwrap_or("YOUR_TEMPLATE_ID"),
        public_key: option_env!("GLOW_EMAILJS_PUBLIC_KEY").unwrap_or("YOUR_PUBLIC_KEY"),
        to_email: option_env!("GLOW_CONTACT_EMAIL").unwrap_or("your-email@example.com"),
    }
}

pub fn whatsapp_number() -> &'static str {
    option_env!("GLOW_WHATSAPP_NUMBER").unwrap_or("+1234567890")
}
