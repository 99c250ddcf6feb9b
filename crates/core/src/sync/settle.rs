//! Settled/unsettled vocabulary shared by every status enum.

/// A two-state status whose terminal positive value means "settled"
/// (paid, received).
pub trait Settlement: Copy {
    /// True for the settled value.
    fn is_settled(self) -> bool;

    /// Status matching the given settled flag.
    fn from_settled(settled: bool) -> Self;

    /// The opposite status.
    #[must_use]
    fn toggled(self) -> Self {
        Self::from_settled(!self.is_settled())
    }

    /// Converts between two settlement vocabularies (paid → received, ...).
    fn convert<T: Settlement>(self) -> T {
        T::from_settled(self.is_settled())
    }
}

/// Reads a status cell into a settled flag.
///
/// Accepts the stored code or its display label, case-insensitively: the
/// pending words (`pending`, `pendente`) and any word in `settled`. Anything
/// else is `None`.
#[must_use]
pub fn parse_flag(raw: &str, settled: &[&str]) -> Option<bool> {
    let word = raw.trim().to_lowercase();
    if word == "pending" || word == "pendente" {
        Some(false)
    } else if settled.contains(&word.as_str()) {
        Some(true)
    } else {
        None
    }
}
