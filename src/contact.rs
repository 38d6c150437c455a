//! Contact form checks run before the browser submits the form.
//!
//! All three fields are checked on every attempt, so a single submit reports
//! every problem at once.

/// Border class marking an invalid input.
pub const ERROR_BORDER_CLASS: &str = "border-red-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Id of the message shown under the input when it is invalid.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Message => "message-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Invalid fields in form order. Only a loose `@` check is done on the
    /// email address.
    pub fn validate(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&f| !is_valid(f, self.value(f)))
            .collect()
    }
}

fn is_valid(field: Field, value: &str) -> bool {
    let filled = !value.trim().is_empty();
    match field {
        Field::Email => filled && value.contains('@'),
        Field::Name | Field::Message => filled,
    }
}

/// Where error markers are drawn.
pub trait FormSurface {
    fn clear_error(&mut self, field: Field);
    fn show_error(&mut self, field: Field);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accept,
    Cancel(Vec<Field>),
}

/// Resets every marker, then marks each invalid field.
pub fn check_submission<S: FormSurface + ?Sized>(form: &ContactForm, surface: &mut S) -> Submission {
    for field in Field::ALL {
        surface.clear_error(field);
    }
    let invalid = form.validate();
    if invalid.is_empty() {
        return Submission::Accept;
    }
    for &field in &invalid {
        surface.show_error(field);
    }
    log::debug!("contact form rejected: {invalid:?}");
    Submission::Cancel(invalid)
}
