use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_EMAIL: &str = "SEU_EMAIL@dominio.com";
pub const DEFAULT_SUBJECT: &str = "Projeto / Parceria — Portfólio";
pub const DEFAULT_BODY: &str = "Oi Helamã! Vi seu portfólio e queria falar sobre:\n\n\
• Contexto:\n\
• Objetivo:\n\
• Prazo/urgência:\n\
• Stack/ambiente atual:\n\n\
Pode me responder por aqui. Obrigado!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub subject: String,
    pub body: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
            github: "https://github.com/SEU_USER".to_string(),
            linkedin: "https://www.linkedin.com/in/SEU_USER/".to_string(),
        }
    }
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        mailto_link(&self.email, &self.subject, &self.body)
    }
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// `mailto:` link with a prefilled subject and body. The address itself is
/// used as given.
pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("/?#+"), "%2F%3F%23%2B");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("•\n"), "%E2%80%A2%0A");
    }

    #[test]
    fn mailto_prefills_subject_and_body() {
        let link = mailto_link("me@example.com", "Oi / tudo", "linha 1\nlinha 2");
        assert_eq!(
            link,
            "mailto:me@example.com?subject=Oi%20%2F%20tudo&body=linha%201%0Alinha%202"
        );
    }

    #[test]
    fn default_contact_encodes_em_dash() {
        let link = ContactInfo::default().mailto();
        assert!(link.starts_with("mailto:SEU_EMAIL@dominio.com?subject=Projeto%20%2F%20Parceria%20%E2%80%94%20Portf%C3%B3lio&body=Oi%20Helam%C3%A3!"));
        assert!(!link.contains(' '));
    }
}
