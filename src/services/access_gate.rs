/// Access gate - the shared-PIN check guarding the gallery's entry page
///
/// Plain string equality against one configured secret. No hashing, no
/// lockout, no audit trail; the HTTP surface maps the outcome to a status
/// code and the frontend navigates on success.
#[derive(Clone)]
pub struct AccessGate {
    pin: String,
}

impl AccessGate {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    /// True iff `submitted` is non-empty and matches the configured PIN exactly
    pub fn verify(&self, submitted: &str) -> bool {
        !submitted.is_empty() && submitted == self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_pin_is_allowed() {
        let gate = AccessGate::new("2468");
        assert!(gate.verify("2468"));
    }

    #[test]
    fn wrong_pin_is_denied() {
        let gate = AccessGate::new("2468");
        assert!(!gate.verify("1234"));
        assert!(!gate.verify("24680"));
        assert!(!gate.verify(" 2468"));
    }

    #[test]
    fn empty_pin_is_always_denied() {
        assert!(!AccessGate::new("2468").verify(""));
        // Even when the configured secret is itself empty
        assert!(!AccessGate::new("").verify(""));
    }
}
