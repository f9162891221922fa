//! Enumerated FIX fields offered as menu choices.

/// A FIX field whose values come from a closed code set.
///
/// `ALL` is the menu order; labels are what the operator sees, codes are
/// what goes on the message.
pub trait EnumeratedField: Sized + Copy + 'static {
    /// Prompt label, also used in `Invalid <label>` errors.
    const FIELD_NAME: &'static str;

    /// Every value, in menu order.
    const ALL: &'static [Self];

    /// FIX code for this value.
    fn code(self) -> &'static str;

    /// Menu label for this value.
    fn label(self) -> &'static str;

    /// Look up a value by FIX code.
    #[must_use]
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.code() == code)
    }

    /// Menu labels in order.
    #[must_use]
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.label()).collect()
    }

    /// FIX codes in menu order.
    #[must_use]
    fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.code()).collect()
    }
}
