use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid number for {what}: '{token}'")]
    InvalidNumber { what: &'static str, token: String },
}
