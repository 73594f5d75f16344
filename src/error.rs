use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    /// Infrastructure failures use codes below 100; everything above is bad input.
    pub fn is_input_error(&self) -> bool {
        self.code >= 100
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 100,
        message: "invalid input".into(),
    }
}

pub fn invalid_coordinates_error(lat: f64, lng: f64) -> Error {
    Error {
        code: 101,
        message: format!("coordinates out of range: {},{}", lat, lng),
    }
}

pub fn duplicate_place_error(id: &str) -> Error {
    Error {
        code: 102,
        message: format!("duplicate place id: {}", id),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn configuration_error(detail: &str) -> Error {
    Error {
        code: 1,
        message: format!("configuration error: {}", detail),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn serialization_error<T: Debug>(_: T) -> Error {
    Error {
        code: 5,
        message: "serialization error".into(),
    }
}

pub fn io_error(err: io::Error) -> Error {
    Error {
        code: 6,
        message: format!("io error: {}", err.kind()),
    }
}

pub fn map_init_error(detail: &str) -> Error {
    Error {
        code: 7,
        message: format!("map initialization failed: {}", detail),
    }
}

#[test]
fn input_errors_are_distinguished_from_infrastructure_errors() {
    assert!(invalid_input_error().is_input_error());
    assert!(duplicate_place_error("moma").is_input_error());
    assert!(!upstream_error().is_input_error());
    assert!(!configuration_error("missing key").is_input_error());
}
