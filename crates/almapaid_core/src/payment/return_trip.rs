//! Return-trip detection after a gateway redirect.
//!
//! # Responsibility
//! - Recognize the correlated `paid` + `ref` query parameters on the
//!   page load that follows checkout.
//!
//! # Invariants
//! - Both parameters must be present; a lone `paid=true` is ignored.
//! - `paid` accepts "true" or "1", case-insensitive. Anything else is
//!   not a payment signal.

/// Successful-payment signal carried back from the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSignal {
    /// The reference string originally placed on the checkout link.
    pub reference: String,
}

impl ReturnSignal {
    /// Scans query parameters for a paid/reference pair.
    ///
    /// Later duplicates win, matching common query-string handling.
    pub fn from_params<'a, I>(params: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut paid = false;
        let mut reference: Option<&str> = None;

        for (key, value) in params {
            match key {
                "paid" => {
                    paid = matches!(value.to_ascii_lowercase().as_str(), "true" | "1");
                }
                "ref" => {
                    reference = Some(value).filter(|value| !value.is_empty());
                }
                _ => {}
            }
        }

        if !paid {
            return None;
        }
        reference.map(|reference| Self {
            reference: reference.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ReturnSignal;

    #[test]
    fn detects_paid_with_reference() {
        let signal = ReturnSignal::from_params([("ref", "30123456"), ("paid", "true")]);
        assert_eq!(signal.map(|s| s.reference), Some("30123456".to_string()));
    }

    #[test]
    fn paid_flag_accepts_one_and_mixed_case() {
        assert!(ReturnSignal::from_params([("ref", "x"), ("paid", "1")]).is_some());
        assert!(ReturnSignal::from_params([("ref", "x"), ("paid", "TRUE")]).is_some());
    }

    #[test]
    fn paid_false_is_not_a_signal() {
        assert!(ReturnSignal::from_params([("ref", "x"), ("paid", "false")]).is_none());
    }

    #[test]
    fn missing_reference_is_not_a_signal() {
        assert!(ReturnSignal::from_params([("paid", "true")]).is_none());
        assert!(ReturnSignal::from_params([("paid", "true"), ("ref", "")]).is_none());
    }
}
