use crate::PnError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PnError::NonFinite { what, value: v })
    }
}

/// Parse a model-file number token.
///
/// Rust's float grammar accepts `inf` and `NaN`; model files never carry those,
/// so non-finite results are rejected along with malformed tokens.
pub fn parse_real(token: &str, what: &'static str) -> Result<Real, PnError> {
    let value: Real = token.parse().map_err(|_| PnError::InvalidNumber {
        what,
        token: token.to_string(),
    })?;
    ensure_finite(value, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn parse_real_accepts_model_numbers() {
        assert_eq!(parse_real("100", "elevation").unwrap(), 100.0);
        assert_eq!(parse_real("-3.5", "x").unwrap(), -3.5);
        assert_eq!(parse_real("1e3", "length").unwrap(), 1000.0);
        assert_eq!(parse_real(".25", "roughness").unwrap(), 0.25);
    }

    #[test]
    fn parse_real_rejects_garbage_and_non_finite() {
        assert!(matches!(
            parse_real("abc", "elevation"),
            Err(PnError::InvalidNumber { what: "elevation", .. })
        ));
        assert!(matches!(
            parse_real("inf", "head"),
            Err(PnError::NonFinite { .. })
        ));
        assert!(parse_real("NaN", "head").is_err());
        assert!(parse_real("", "head").is_err());
    }
}
