//! Demo command
//!
//! Validates two hard-coded users against a typed schema and prints the
//! outcome of each.

use crate::cli::common::EXIT_SUCCESS;
use crate::engine::{Record, Schema, ValidationOutcome, validate};
use once_cell::sync::Lazy;

/// Sample record type used by the demo
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

static USER_SCHEMA: Lazy<Schema<User>> = Lazy::new(|| {
    Schema::builder()
        .field("Name", "min=2,max=32", |u: &User| u.name.as_str())
        .field("Email", "required,email", |u: &User| u.email.as_str())
        .build()
        .expect("demo schema uses fixed, valid field names")
});

impl Record for User {
    fn schema() -> &'static Schema<Self> {
        &USER_SCHEMA
    }
}

/// One report line for a validation outcome
pub fn describe(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => "User is valid".to_string(),
        ValidationOutcome::Invalid(violation) => format!("Validation error: {}", violation),
    }
}

/// Report lines for the two sample users
pub fn demo_lines() -> Vec<String> {
    let users = [
        User::new("Alice", "alice@example.com"),
        User::new("A", "aliceexample.com"),
    ];

    users.iter().map(|user| describe(&validate(user))).collect()
}

/// Run the demo command
pub fn run_demo() -> i32 {
    for line in demo_lines() {
        println!("{}", line);
    }
    EXIT_SUCCESS
}
