#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Message shown after a 2xx response.
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

/// Fallback when the server rejects the submission without an `error` body.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Message shown when no response was received at all.
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

/// The four required contact form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The DOM id of the input element, also used for the `{id}-error` slot.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Raw field values, read fresh from the inputs on every submit attempt.
/// Serialized as the JSON body of the submission POST.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

/// Lightweight `local@domain.tld` check: no whitespace, exactly one `@`,
/// and at least one `.` with non-empty segments after the `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(dot) = domain.find('.') else {
        return false;
    };
    dot > 0 && dot + 1 < domain.len()
}

/// Validate all four fields at once against their trimmed values.
///
/// Every invalid field gets its message, not just the first one found, so
/// the user sees the full correction list in a single pass.
#[must_use]
pub fn validate(fields: &ContactFields) -> [Option<&'static str>; 4] {
    let mut errors = [None; 4];
    for field in Field::ALL {
        let value = fields.value(field).trim();
        if value.is_empty() {
            errors[field.index()] = Some(match field {
                Field::Name => "Name is required",
                Field::Email => "Email is required",
                Field::Subject => "Subject is required",
                Field::Message => "Message is required",
            });
        } else if field == Field::Email && !is_valid_email(value) {
            errors[field.index()] = Some("Please enter a valid email address");
        }
    }
    errors
}

/// The tagged result of one submission attempt.
///
/// Exactly one visible message follows from each variant; success and error
/// are never shown together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Any 2xx response.
    Success,
    /// Non-2xx response; carries the server's message (or the generic
    /// fallback when the body had none).
    ServerError(String),
    /// No response received, or an unreadable one.
    NetworkError,
}

/// Classify a completed HTTP exchange into an outcome.
///
/// `ok` is the 2xx flag; `error` is the `error` field of a parsed rejection
/// body, when the server sent one. A rejection without a message gets the
/// generic fallback. Transport failures never reach this function.
#[must_use]
pub fn classify_response(ok: bool, error: Option<String>) -> SubmissionOutcome {
    if ok {
        SubmissionOutcome::Success
    } else {
        SubmissionOutcome::ServerError(error.unwrap_or_else(|| GENERIC_ERROR.to_owned()))
    }
}

/// Full controller state for the contact form.
///
/// Owned by a single signal in the form component. `submitting` doubles as
/// the submit lock: set immediately before the request and cleared in every
/// outcome branch.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub fields: ContactFields,
    field_errors: [Option<&'static str>; 4],
    pub submitting: bool,
    pub success: Option<&'static str>,
    pub error: Option<String>,
}

impl ContactState {
    /// The validation message for one field, if it failed the last attempt.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors[field.index()]
    }

    /// Run validation and, if it passes, enter the submitting state.
    ///
    /// Returns `false` when any field is invalid; in that case all invalid
    /// fields are marked and no network call may be made. Each attempt
    /// revalidates from scratch; nothing carries over from earlier tries.
    pub fn begin_submit(&mut self) -> bool {
        self.field_errors = validate(&self.fields);
        if self.field_errors.iter().any(Option::is_some) {
            return false;
        }
        self.submitting = true;
        self.success = None;
        self.error = None;
        true
    }

    /// Apply the outcome of the network exchange.
    ///
    /// Clears the submit lock in every branch. Success wipes the field
    /// values; both failure variants leave them intact for correction.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        self.submitting = false;
        match outcome {
            SubmissionOutcome::Success => {
                self.fields = ContactFields::default();
                self.success = Some(SUCCESS_MESSAGE);
                self.error = None;
            }
            SubmissionOutcome::ServerError(message) => {
                self.success = None;
                self.error = Some(message);
            }
            SubmissionOutcome::NetworkError => {
                self.success = None;
                self.error = Some(NETWORK_ERROR.to_owned());
            }
        }
    }
}
