use crate::email::{EmailParams, SubmitError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Required-field check: every field must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub fn email_params(&self, to_email: &str) -> EmailParams {
        EmailParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            to_email: to_email.to_string(),
        }
    }

    pub fn whatsapp_text(&self) -> String {
        format!(
            "New contact form submission:\nName: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

/// `https://wa.me/<digits>?text=<encoded>`. wa.me only accepts digits, so
/// `+`, spaces and dashes are dropped from the number.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Form fields plus the submission state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub is_submitting: bool,
}

impl ContactState {
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Start a submission. Returns the snapshot to deliver, or `None` when a
    /// submission is already in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_submitting || !self.form.is_complete() {
            return None;
        }
        self.is_submitting = true;
        Some(self.form.clone())
    }

    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    pub fn dismiss(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.edit(Field::Name, "Ada".into());
        state.edit(Field::Email, "ada@example.com".into());
        state.edit(Field::Message, "Hi there".into());
        state
    }

    #[test]
    fn success_clears_fields() {
        let mut state = filled();
        let snapshot = state.begin_submit().expect("complete form submits");
        assert_eq!(snapshot.name, "Ada");
        assert!(state.is_submitting);

        state.finish(&Ok(()));
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.is_submitting);
    }

    #[test]
    fn failure_keeps_fields() {
        let mut state = filled();
        let before = state.form.clone();
        state.begin_submit().unwrap();
        state.finish(&Err(SubmitError::Network("offline".into())));
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.form, before);
        assert!(!state.is_submitting);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = filled();
        let mut deliveries = 0;
        for _ in 0..3 {
            if state.begin_submit().is_some() {
                deliveries += 1;
            }
        }
        assert_eq!(deliveries, 1);

        state.finish(&Err(SubmitError::Rejected { status: 500, body: String::new() }));
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn empty_field_blocks_submit() {
        let mut state = filled();
        state.edit(Field::Message, String::new());
        assert_eq!(state.begin_submit(), None);
        assert!(!state.is_submitting);
    }

    #[test]
    fn dismiss_returns_to_idle() {
        let mut state = filled();
        state.begin_submit();
        state.finish(&Ok(()));
        state.dismiss();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn email_params_carry_all_fields() {
        let params = filled().form.email_params("me@example.com");
        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.from_email, "ada@example.com");
        assert_eq!(params.message, "Hi there");
        assert_eq!(params.to_email, "me@example.com");
    }

    #[test]
    fn whatsapp_link_encodes_multiline_body() {
        let form = filled().form;
        let link = whatsapp_link("+1 234-567-890", &form.whatsapp_text());
        assert_eq!(
            link,
            "https://wa.me/1234567890?text=New%20contact%20form%20submission%3A%0AName%3A%20Ada%0AEmail%3A%20ada%40example.com%0AMessage%3A%20Hi%20there"
        );
    }
}
