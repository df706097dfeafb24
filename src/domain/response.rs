use std::fmt;

/// Akismet's verdict on a piece of content.
///
/// There are two spam statuses because Akismet distinguishes ordinary spam
/// from "pervasive" spam, which it flags with the `X-Akismet-Pro-Tip: discard`
/// header. [`SpamStatus::Unknown`] is the zero value; a successful check never
/// returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpamStatus {
    #[default]
    Unknown,
    /// Legitimate content.
    Ham,
    /// Spam; worth a review before deleting.
    ProbableSpam,
    /// Blatant spam that can be discarded without review.
    DefiniteSpam,
}

impl SpamStatus {
    pub fn is_spam(self) -> bool {
        matches!(self, Self::ProbableSpam | Self::DefiniteSpam)
    }
}

impl fmt::Display for SpamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::Ham => "Ham",
            Self::ProbableSpam => "Probable Spam",
            Self::DefiniteSpam => "Definite Spam",
        })
    }
}
