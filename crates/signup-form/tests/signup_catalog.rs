//! End-to-end behaviour of the built-in signup catalog

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use signup_form::{validate, ErrorMap, Field, FieldValue, InputRecord, RuleCatalog};

#[fixture]
fn catalog() -> RuleCatalog {
    RuleCatalog::signup()
}

#[fixture]
fn valid_record() -> InputRecord {
    InputRecord::new()
        .with(Field::FirstName, "Ada")
        .with(Field::LastName, "Lovelace")
        .with(Field::Email, "ada@example.com")
        .with(Field::PhoneNumber, "0123456789")
        .with(Field::Password, "Passw0rd!")
        .with(Field::ConfirmPassword, "Passw0rd!")
        .with(Field::Age, "45")
        .with(Field::Gender, "female")
        .with(Field::Interests, vec!["coding", "reading"])
        .with(Field::BirthDate, "1815-12-10")
}

#[rstest]
fn valid_record_has_no_errors(catalog: RuleCatalog, valid_record: InputRecord) {
    let errors = validate(&valid_record, &catalog);
    assert_eq!(errors, ErrorMap::new());
    assert!(errors.is_valid());
}

#[rstest]
fn blank_form_reports_every_required_message(catalog: RuleCatalog) {
    let errors = validate(&InputRecord::blank(), &catalog);

    let expected: ErrorMap = [
        (Field::FirstName, "First name is required"),
        (Field::LastName, "Last name is required"),
        (Field::Email, "Email is required"),
        (Field::PhoneNumber, "Phone number is required"),
        (Field::Password, "Password is required"),
        (Field::ConfirmPassword, "Confirm password is required"),
        (Field::Age, "Age is required"),
        (Field::Gender, "Gender is required"),
        (Field::Interests, "Select at least one interest"),
        (Field::BirthDate, "Date of birth is required"),
    ]
    .into_iter()
    .map(|(field, message)| (field, message.to_string()))
    .collect();

    assert_eq!(errors, expected);
}

#[rstest]
#[case(Field::FirstName, FieldValue::from(""), "First name is required")]
#[case(Field::LastName, FieldValue::from(""), "Last name is required")]
#[case(Field::Email, FieldValue::from(""), "Email is required")]
#[case(Field::PhoneNumber, FieldValue::from(""), "Phone number is required")]
#[case(Field::ConfirmPassword, FieldValue::from(""), "Confirm password is required")]
#[case(Field::Age, FieldValue::from(""), "Age is required")]
#[case(Field::Gender, FieldValue::from(""), "Gender is required")]
#[case(Field::Interests, FieldValue::Many(vec![]), "Select at least one interest")]
#[case(Field::BirthDate, FieldValue::from(""), "Date of birth is required")]
fn missing_field_reports_only_its_required_message(
    catalog: RuleCatalog,
    valid_record: InputRecord,
    #[case] field: Field,
    #[case] empty: FieldValue,
    #[case] message: &str,
) {
    let record = valid_record.with(field, empty);
    let errors = validate(&record, &catalog);

    assert_eq!(errors.get(field), Some(message));
    assert_eq!(errors.len(), 1, "unexpected errors: {:?}", errors);
}

#[rstest]
fn missing_password_also_flags_the_now_mismatched_confirmation(
    catalog: RuleCatalog,
    valid_record: InputRecord,
) {
    let errors = validate(&valid_record.with(Field::Password, ""), &catalog);

    assert_eq!(errors.get(Field::Password), Some("Password is required"));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords must match"));
}

#[rstest]
#[case("abc", "Password must be at least 8 characters")]
#[case("abcdefgh", "Password must contain at least one symbol")]
#[case("abcdefg!", "Password must contain at least one number")]
#[case("abcdef1!", "Password must contain at least one uppercase letter")]
#[case("ABCDEF1!", "Password must contain at least one lowercase letter")]
fn password_reports_first_missing_property(
    catalog: RuleCatalog,
    valid_record: InputRecord,
    #[case] password: &str,
    #[case] message: &str,
) {
    let record = valid_record
        .with(Field::Password, password)
        .with(Field::ConfirmPassword, password);

    assert_eq!(validate(&record, &catalog).get(Field::Password), Some(message));
}

#[rstest]
fn confirm_password_tracks_latest_password(catalog: RuleCatalog, valid_record: InputRecord) {
    let mut record = valid_record
        .with(Field::Password, "Other0ne!")
        .with(Field::ConfirmPassword, "Passw0rd!");

    let errors = validate(&record, &catalog);
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords must match"));

    record.set(Field::Password, "Passw0rd!");
    assert!(!validate(&record, &catalog).contains(Field::ConfirmPassword));
}

#[rstest]
#[case("17", Some("Age must be at least 18"))]
#[case("101", Some("Age must not be greater than 100"))]
#[case("abc", Some("Age must be a number"))]
#[case("4 5", Some("Age must be a number"))]
#[case("17.9", Some("Age must be at least 18"))]
#[case("99999999999999999999", Some("Age must not be greater than 100"))]
#[case("18", None)]
#[case("45.5", None)]
#[case("45", None)]
#[case("100", None)]
fn age_bounds_and_type(
    catalog: RuleCatalog,
    valid_record: InputRecord,
    #[case] age: &str,
    #[case] expected: Option<&str>,
) {
    let errors = validate(&valid_record.with(Field::Age, age), &catalog);
    assert_eq!(errors.get(Field::Age), expected);
}

#[rstest]
#[case("ada@example")]
#[case("ada example.com")]
#[case("@example.com")]
fn malformed_email_is_rejected(
    catalog: RuleCatalog,
    valid_record: InputRecord,
    #[case] email: &str,
) {
    let errors = validate(&valid_record.with(Field::Email, email), &catalog);
    assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
}

#[rstest]
#[case("012345678")]
#[case("01234567890")]
#[case("012-345-6789")]
fn phone_number_needs_exactly_ten_digits(
    catalog: RuleCatalog,
    valid_record: InputRecord,
    #[case] phone: &str,
) {
    let errors = validate(&valid_record.with(Field::PhoneNumber, phone), &catalog);
    assert_eq!(
        errors.get(Field::PhoneNumber),
        Some("Phone number must be 10 digits")
    );
}

#[rstest]
fn birth_date_is_only_checked_for_presence(catalog: RuleCatalog, valid_record: InputRecord) {
    let record = valid_record.with(Field::BirthDate, "not-a-date");
    assert!(validate(&record, &catalog).is_valid());
}

#[rstest]
fn toggling_interests_round_trips(catalog: RuleCatalog, valid_record: InputRecord) {
    let mut record = valid_record.with(Field::Interests, vec!["coding", "sports", "reading"]);

    record.toggle(Field::Interests, "sports", false);
    assert_eq!(
        record.value(Field::Interests),
        &FieldValue::from(vec!["coding", "reading"])
    );

    record.toggle(Field::Interests, "coding", false);
    record.toggle(Field::Interests, "reading", false);
    assert_eq!(
        validate(&record, &catalog).get(Field::Interests),
        Some("Select at least one interest")
    );

    record.toggle(Field::Interests, "sports", true);
    assert!(validate(&record, &catalog).is_valid());
}

#[rstest]
fn validation_is_idempotent(catalog: RuleCatalog) {
    let record = InputRecord::new()
        .with(Field::Email, "nope")
        .with(Field::Password, "abcdefgh")
        .with(Field::Age, "abc");

    let first = validate(&record, &catalog);
    let second = validate(&record, &catalog);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
