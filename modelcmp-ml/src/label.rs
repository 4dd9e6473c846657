//! Binary class labels.

use serde::{Deserialize, Serialize};

use modelcmp_core::{ModelCmpError, Result};

/// A binary class label.
///
/// Serializes as the integer `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    /// Whether this is the positive class.
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = ModelCmpError;

    fn try_from(v: u8) -> Result<Self> {
        Label::try_from(i64::from(v))
    }
}

impl TryFrom<i64> for Label {
    type Error = ModelCmpError;

    fn try_from(v: i64) -> Result<Self> {
        match v {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(ModelCmpError::InvalidInput(format!(
                "label must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// Convert raw integers into labels.
///
/// # Errors
///
/// Returns an error naming the first position whose value is not 0 or 1.
pub fn labels_from_ints(values: &[i64]) -> Result<Vec<Label>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Label::try_from(v).map_err(|_| {
                ModelCmpError::InvalidInput(format!("label at index {i} must be 0 or 1, got {v}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_zero_and_one() {
        assert_eq!(Label::try_from(0i64).unwrap(), Label::Negative);
        assert_eq!(Label::try_from(1i64).unwrap(), Label::Positive);
        assert_eq!(u8::from(Label::Positive), 1);
    }

    #[test]
    fn rejects_other_values() {
        assert!(Label::try_from(2u8).is_err());
        assert!(Label::try_from(-1i64).is_err());
    }

    #[test]
    fn labels_from_ints_reports_index() {
        let err = labels_from_ints(&[1, 0, 7]).unwrap_err();
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn serde_uses_integers() {
        let json = serde_json::to_string(&[Label::Positive, Label::Negative]).unwrap();
        assert_eq!(json, "[1,0]");
        let back: Vec<Label> = serde_json::from_str("[0,1,1]").unwrap();
        assert_eq!(back, vec![Label::Negative, Label::Positive, Label::Positive]);
        assert!(serde_json::from_str::<Vec<Label>>("[3]").is_err());
    }
}
