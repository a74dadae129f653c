//! Submission payload models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::file::FileMeta;

/// Content handed to the detector on submit.
///
/// A tagged union: a submission carries either text or files, never both.
/// Sessions only emit a submission when the chosen slot is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    /// Pasted or typed text.
    Text(String),
    /// Uploaded files, in the order the user added them.
    Files(Vec<FileMeta>),
}

impl Submission {
    /// Returns the submitted text, if this is a text submission.
    pub fn text(&self) -> Option<&str> {
        match self {
            Submission::Text(s) => Some(s),
            Submission::Files(_) => None,
        }
    }

    /// Returns the submitted files, if this is a file submission.
    pub fn files(&self) -> Option<&[FileMeta]> {
        match self {
            Submission::Text(_) => None,
            Submission::Files(files) => Some(files),
        }
    }

    /// Number of items carried: 1 for text, file count otherwise.
    pub fn item_count(&self) -> usize {
        match self {
            Submission::Text(_) => 1,
            Submission::Files(files) => files.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text = Submission::Text("hello".to_string());
        assert_eq!(text.text(), Some("hello"));
        assert!(text.files().is_none());

        let files = Submission::Files(vec![FileMeta::new("a.png", 10, "image/png")]);
        assert!(files.text().is_none());
        assert_eq!(files.files().unwrap().len(), 1);
        assert_eq!(files.item_count(), 1);
    }

    #[test]
    fn test_serde_tagging() {
        let s = Submission::Text("hi".to_string());
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "{\"text\":\"hi\"}");
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
