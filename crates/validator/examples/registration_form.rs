//! Validating a registration form with formcheck-validator

use formcheck_validator::prelude::*;
use serde_json::json;

fn main() {
    let form = FormValidator::new()
        .field("name", ValidationRule::new().required().min_length(2))
        .field("email", ValidationRule::new().required().validator(email()))
        .field("password", ValidationRule::new().required().validator(password()))
        .field("zip", ValidationRule::new().required().validator(polish_postal_code()))
        .field("pesel", ValidationRule::new().validator(pesel()));

    let submitted = json!({
        "name": "J",
        "email": "jan@example.pl",
        "password": "weak",
        "zip": "00950",
        "pesel": "44051401359"
    });
    let Some(values) = submitted.as_object() else {
        return;
    };

    let report = form.validate(values);
    if report.is_valid() {
        println!("✓ form is valid");
    } else {
        for (field, message) in report.messages() {
            println!("✗ {field}: {message}");
        }
    }

    // Same response body a web handler would return
    match serde_json::to_string_pretty(&report) {
        Ok(body) => println!("\n{body}"),
        Err(e) => println!("✗ serialization failed: {e}"),
    }

    // Standalone checks
    match decode_pesel("02270803624") {
        Ok(details) => println!("\nPESEL: born {}, {:?}", details.birth_date, details.sex),
        Err(e) => println!("\n✗ PESEL: {e}"),
    }
    match validate_nip("1234567890") {
        Ok(()) => println!("✓ NIP valid"),
        Err(e) => println!("✗ NIP: {e}"),
    }
}
