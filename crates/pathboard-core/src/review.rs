//! Review draft validation and display helpers
//!
//! Validation runs client-side before any network submission: a missing
//! rating is an avoidable round trip.

use pathboard_types::ReviewSubmission;

/// In-progress review form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// 0 means "not selected yet"
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    /// Check the draft is submittable
    ///
    /// Only the rating is required; free text is optional.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self.rating {
            0 => Err("Please select a rating before submitting"),
            1..=5 => Ok(()),
            _ => Err("Rating must be between 1 and 5"),
        }
    }

    /// Wire payload for a validated draft
    pub fn to_submission(&self) -> ReviewSubmission {
        let text = self.text.trim();
        ReviewSubmission {
            rating: self.rating,
            review: (!text.is_empty()).then(|| text.to_string()),
        }
    }
}

/// Avatar initial shown next to a review: first alphanumeric character of
/// the username, uppercased, `?` when there is none
pub fn avatar_initial(username: &str) -> char {
    username
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_rating_rejected() {
        let draft = ReviewDraft {
            rating: 0,
            text: "great roadmap".to_string(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_valid_ratings_accepted() {
        for rating in 1..=5 {
            let draft = ReviewDraft {
                rating,
                text: String::new(),
            };
            assert!(draft.validate().is_ok());
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let draft = ReviewDraft {
            rating: 6,
            text: String::new(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_submission_trims_empty_text_to_none() {
        let draft = ReviewDraft {
            rating: 4,
            text: "   ".to_string(),
        };
        assert_eq!(draft.to_submission().review, None);

        let draft = ReviewDraft {
            rating: 4,
            text: " solid ".to_string(),
        };
        assert_eq!(draft.to_submission().review.as_deref(), Some("solid"));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("alice"), 'A');
        assert_eq!(avatar_initial("_bob42"), 'B');
        assert_eq!(avatar_initial("---"), '?');
        assert_eq!(avatar_initial(""), '?');
    }
}
