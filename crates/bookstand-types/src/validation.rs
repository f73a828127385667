use serde::{Deserialize, Serialize};

/// One validated-field failure, in the wire shape `{msg, param}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Human-readable message for inline display next to the field.
    pub msg: String,
    /// The offending field name, when attributable to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldViolation {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
        }
    }

    /// A violation not tied to any single field (e.g. a credentials failure).
    pub fn general(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

/// Accumulator for exhaustive validation.
///
/// Validation never fails fast: every rule runs and every failure is
/// recorded, so the client receives the full batch in one response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure against a field.
    pub fn push(&mut self, param: impl Into<String>, msg: impl Into<String>) {
        self.items.push(FieldViolation::new(param, msg));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consume the accumulator: `Ok(())` if clean, the batch otherwise.
    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self.items)
        }
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn collects_all_failures() {
        let mut v = Violations::new();
        v.push("title", "Title is required");
        v.push("price", "Price must be a positive number");
        let errs = v.into_result().unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].param.as_deref(), Some("title"));
        assert_eq!(errs[1].msg, "Price must be a positive number");
    }

    #[test]
    fn wire_shape_matches_msg_param() {
        let v = FieldViolation::new("email", "Email already registered");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["msg"], "Email already registered");
        assert_eq!(json["param"], "email");
    }

    #[test]
    fn general_violation_omits_param() {
        let v = FieldViolation::general("Invalid email or password.");
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("param"));
    }
}
