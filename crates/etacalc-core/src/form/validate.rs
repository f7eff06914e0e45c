//! Input validation messages for the three form fields.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::options::Field;

/// A problem with the entered quantities, attached to one field.
///
/// The core calculations never fail; these only tell the user why the ETA is
/// blank or the percentage looks wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("Speed must be positive")]
    SpeedNotPositive,
    #[error("Total size must be positive")]
    TotalNotPositive,
    #[error("Total size must be greater than or equal to downloaded so far")]
    TotalBelowDownloaded,
    #[error("Downloaded so far must be non-negative")]
    DownloadedNegative,
    #[error("Downloaded so far must be less than or equal to total size")]
    DownloadedAboveTotal,
}

impl InputIssue {
    pub fn field(self) -> Field {
        match self {
            InputIssue::SpeedNotPositive => Field::Speed,
            InputIssue::TotalNotPositive | InputIssue::TotalBelowDownloaded => Field::Total,
            InputIssue::DownloadedNegative | InputIssue::DownloadedAboveTotal => Field::Downloaded,
        }
    }
}

impl Serialize for InputIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("InputIssue", 2)?;
        s.serialize_field("field", &self.field())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

/// At most one issue per field, in total, downloaded, speed order.
///
/// Each field keeps its last failing check: the size comparison wins over
/// the speed check for total and downloaded.
pub fn validate(total_bits: f64, downloaded_bits: f64, speed_bits_per_sec: f64) -> Vec<InputIssue> {
    let speed_invalid = speed_bits_per_sec <= 0.0;
    let sizes_inverted = total_bits < downloaded_bits;

    let mut total = None;
    let mut downloaded = None;
    if speed_invalid {
        total = Some(InputIssue::TotalNotPositive);
        downloaded = Some(InputIssue::DownloadedNegative);
    }
    if sizes_inverted {
        total = Some(InputIssue::TotalBelowDownloaded);
        downloaded = Some(InputIssue::DownloadedAboveTotal);
    }
    let speed = speed_invalid.then_some(InputIssue::SpeedNotPositive);

    [total, downloaded, speed].into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_inputs_have_no_issues() {
        assert!(validate(100.0, 10.0, 1.0).is_empty());
        assert!(validate(100.0, 100.0, 1.0).is_empty());
    }

    #[test]
    fn zero_speed_flags_every_field() {
        assert_eq!(
            validate(100.0, 10.0, 0.0),
            vec![
                InputIssue::TotalNotPositive,
                InputIssue::DownloadedNegative,
                InputIssue::SpeedNotPositive
            ]
        );
    }

    #[test]
    fn inverted_sizes_override_speed_messages() {
        assert_eq!(
            validate(10.0, 100.0, 0.0),
            vec![
                InputIssue::TotalBelowDownloaded,
                InputIssue::DownloadedAboveTotal,
                InputIssue::SpeedNotPositive
            ]
        );
        assert_eq!(
            validate(10.0, 100.0, 5.0),
            vec![InputIssue::TotalBelowDownloaded, InputIssue::DownloadedAboveTotal]
        );
    }

    #[test]
    fn issue_messages_and_fields() {
        let issue = InputIssue::DownloadedAboveTotal;
        assert_eq!(issue.field(), Field::Downloaded);
        assert_eq!(
            issue.to_string(),
            "Downloaded so far must be less than or equal to total size"
        );
    }
}
