// Adapters layer: concrete implementations of the domain ports against the
// real external systems (headless browser, SMTP relay).

pub mod mailer;
pub mod portal;
