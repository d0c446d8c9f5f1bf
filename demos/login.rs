//! Login Pipeline
//!
//! This example demonstrates building and consuming outcomes.
//!
//! Key concepts:
//! - Constructing outcomes directly and from fallible producers
//! - Transforming with `map` and rebinding with `flat_map`
//! - Branching on the variant with `on_success` / `on_failure`
//!
//! Run with: cargo run --example login

use outcome::Outcome;
use std::fmt;

#[derive(Debug)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug)]
enum LoginError {
    InvalidInput(String),
    Rejected(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            LoginError::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}

fn validate_inputs(login: &str, password: &str) -> Outcome<(), String> {
    if !login.is_empty() && !password.is_empty() {
        Outcome::empty_success()
    } else {
        Outcome::failure("Login or password is not valid.".to_string())
    }
}

fn perform_login(credentials: &Credentials) -> Outcome<String, LoginError> {
    if credentials.username.eq_ignore_ascii_case("username")
        && credentials.password.eq_ignore_ascii_case("password")
    {
        Outcome::success("hurrah".to_string())
    } else {
        Outcome::failure(LoginError::Rejected(
            "Wrong login or password.".to_string(),
        ))
    }
}

fn login(username: &str, password: &str) -> Outcome<String, LoginError> {
    validate_inputs(username, password)
        .map(|_| Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
        .flat_map(|checked| match checked {
            Outcome::Success(Some(credentials)) => perform_login(&credentials),
            Outcome::Success(None) => Outcome::empty_failure(),
            Outcome::Failure(error) => Outcome::Failure(error.map(LoginError::InvalidInput)),
        })
}

fn tour() {
    println!("Simplest way to create an Outcome:");
    println!("  {}", Outcome::<&str, &str>::success("success"));
    println!("  {}", Outcome::<&str, &str>::failure("failure"));
    println!("  {}", Outcome::<&str, &str>::of("success"));
    println!(
        "  {:?}",
        Outcome::from_fn(|| -> Result<&str, String> { Ok("success") })
    );
    println!(
        "  {:?}",
        Outcome::<i32, ()>::or_default(|| "invalid".parse::<i32>(), -1)
    );
    println!(
        "  {:?}",
        Outcome::<i32, &str>::or_fail_with(|| "invalid".parse::<i32>(), "not a number")
    );

    println!("\nTransforming an Outcome:");
    let length = Outcome::<&str, ()>::of("success").map(|value| value.map_or(0, str::len));
    println!("  map to length: {:?}", length);

    let rebound: Outcome<usize, String> =
        Outcome::<&str, ()>::of("success").flat_map(|outcome| match outcome.into_value() {
            Some(value) => Outcome::success(value.len()),
            None => Outcome::failure("no value".to_string()),
        });
    println!("  flat_map to length: {:?}", rebound);

    println!("\nConsuming an Outcome:");
    println!("  value: {:?}", Outcome::<&str, ()>::success("success").value());
    println!("  error: {:?}", Outcome::<(), &str>::failure("failure").error());
    Outcome::<&str, &str>::of("success")
        .on_success(|value| println!("  on_success: {:?}", value))
        .on_failure(|error| eprintln!("  on_failure: {:?}", error));
    let fallback = Outcome::<&str, &str>::failure("failure").or("success");
    println!("  or: {}", fallback);
}

fn main() {
    println!("=== Outcome Example ===\n");

    tour();

    println!("\nReal life login example:");
    for (username, password) in [("username", "password"), ("username", "guess"), ("", "")] {
        login(username, password)
            .on_success(|greeting| println!("  {:?} -> {:?}", username, greeting))
            .on_failure(|error| match error {
                Some(error) => eprintln!("  {:?} -> {}", username, error),
                None => eprintln!("  {:?} -> failed", username),
            });
    }

    println!("\n=== Example Complete ===");
}
