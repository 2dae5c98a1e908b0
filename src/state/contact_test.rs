use super::*;

fn valid_fields() -> ContactFields {
    ContactFields {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "A question about your work.".to_owned(),
    }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.co"));
}

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("ada.example.com"));
}

#[test]
fn rejects_multiple_at_signs() {
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn rejects_missing_dot_after_at() {
    assert!(!is_valid_email("ada@example"));
}

#[test]
fn rejects_empty_segments() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example."));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("ada smith@example.com"));
    assert!(!is_valid_email("ada@exa mple.com"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn all_empty_marks_all_four_fields() {
    let errors = validate(&ContactFields::default());
    assert!(errors.iter().all(Option::is_some));
    assert_eq!(errors[0], Some("Name is required"));
    assert_eq!(errors[1], Some("Email is required"));
    assert_eq!(errors[2], Some("Subject is required"));
    assert_eq!(errors[3], Some("Message is required"));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut fields = valid_fields();
    fields.name = "   ".to_owned();
    fields.message = "\n\t".to_owned();
    let errors = validate(&fields);
    assert_eq!(errors[0], Some("Name is required"));
    assert_eq!(errors[3], Some("Message is required"));
    assert_eq!(errors[1], None);
}

#[test]
fn bad_email_marks_only_email() {
    let mut fields = valid_fields();
    fields.email = "not-an-address".to_owned();
    let errors = validate(&fields);
    assert_eq!(errors[1], Some("Please enter a valid email address"));
    assert_eq!(errors.iter().filter(|e| e.is_some()).count(), 1);
}

#[test]
fn email_is_validated_after_trimming() {
    let mut fields = valid_fields();
    fields.email = "  ada@example.com  ".to_owned();
    assert!(validate(&fields).iter().all(Option::is_none));
}

#[test]
fn valid_fields_produce_no_errors() {
    assert!(validate(&valid_fields()).iter().all(Option::is_none));
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn two_xx_classifies_as_success() {
    assert_eq!(classify_response(true, None), SubmissionOutcome::Success);
    // A stray body on a 2xx response changes nothing.
    assert_eq!(
        classify_response(true, Some("ignored".to_owned())),
        SubmissionOutcome::Success
    );
}

#[test]
fn rejection_message_is_surfaced_verbatim() {
    assert_eq!(
        classify_response(false, Some("Too many requests".to_owned())),
        SubmissionOutcome::ServerError("Too many requests".to_owned())
    );
}

#[test]
fn rejection_without_message_gets_the_generic_fallback() {
    assert_eq!(
        classify_response(false, None),
        SubmissionOutcome::ServerError(GENERIC_ERROR.to_owned())
    );
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_blocks_on_invalid_fields() {
    let mut state = ContactState::default();
    assert!(!state.begin_submit());
    assert!(!state.submitting);
    for field in Field::ALL {
        assert!(state.field_error(field).is_some());
    }
}

#[test]
fn begin_submit_enters_loading_state_when_valid() {
    let mut state = ContactState {
        fields: valid_fields(),
        ..ContactState::default()
    };
    assert!(state.begin_submit());
    assert!(state.submitting);
    assert!(state.success.is_none());
    assert!(state.error.is_none());
}

#[test]
fn begin_submit_revalidates_from_scratch() {
    let mut state = ContactState::default();
    assert!(!state.begin_submit());

    // Correcting the fields clears every stale marker on the next attempt.
    state.fields = valid_fields();
    assert!(state.begin_submit());
    for field in Field::ALL {
        assert!(state.field_error(field).is_none());
    }
}

#[test]
fn success_clears_fields_and_shows_only_success() {
    let mut state = ContactState {
        fields: valid_fields(),
        ..ContactState::default()
    };
    state.begin_submit();
    state.finish_submit(SubmissionOutcome::Success);

    assert!(!state.submitting);
    assert_eq!(state.fields, ContactFields::default());
    assert_eq!(state.success, Some(SUCCESS_MESSAGE));
    assert!(state.error.is_none());
}

#[test]
fn server_error_surfaces_message_and_keeps_fields() {
    let mut state = ContactState {
        fields: valid_fields(),
        ..ContactState::default()
    };
    state.begin_submit();
    state.finish_submit(SubmissionOutcome::ServerError("Too many requests".to_owned()));

    assert!(!state.submitting);
    assert_eq!(state.fields, valid_fields());
    assert_eq!(state.error.as_deref(), Some("Too many requests"));
    assert!(state.success.is_none());
}

#[test]
fn network_error_shows_generic_message_and_keeps_fields() {
    let mut state = ContactState {
        fields: valid_fields(),
        ..ContactState::default()
    };
    state.begin_submit();
    state.finish_submit(SubmissionOutcome::NetworkError);

    assert!(!state.submitting);
    assert_eq!(state.fields, valid_fields());
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));
    assert!(state.success.is_none());
}

#[test]
fn submit_lock_clears_in_every_outcome() {
    for outcome in [
        SubmissionOutcome::Success,
        SubmissionOutcome::ServerError("x".to_owned()),
        SubmissionOutcome::NetworkError,
    ] {
        let mut state = ContactState {
            fields: valid_fields(),
            ..ContactState::default()
        };
        state.begin_submit();
        assert!(state.submitting);
        state.finish_submit(outcome);
        assert!(!state.submitting);
    }
}

#[test]
fn failed_attempt_can_be_resubmitted() {
    let mut state = ContactState {
        fields: valid_fields(),
        ..ContactState::default()
    };
    state.begin_submit();
    state.finish_submit(SubmissionOutcome::NetworkError);

    // Same values are still present; a retry re-enters the loading state
    // and hides the stale error.
    assert!(state.begin_submit());
    assert!(state.error.is_none());
}

#[test]
fn field_values_serialize_for_the_post_body() {
    let json = serde_json::to_value(valid_fields()).unwrap();
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["subject"], "Hello");
    assert_eq!(json["message"], "A question about your work.");
}

#[test]
fn field_ids_match_the_error_slots() {
    let ids: Vec<&str> = Field::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["name", "email", "subject", "message"]);
}

#[test]
fn set_and_value_round_trip() {
    let mut fields = ContactFields::default();
    for field in Field::ALL {
        fields.set(field, field.id().to_owned());
    }
    for field in Field::ALL {
        assert_eq!(fields.value(field), field.id());
    }
}
