/// Exact-match filter on an enum-coded column, parsed from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFilter<T> {
    /// Parameter absent or empty.
    Any,
    Is(T),
    /// A non-empty code no variant knows. Matches no rows.
    Unknown,
}

impl<T> Default for CodeFilter<T> {
    fn default() -> Self {
        CodeFilter::Any
    }
}

impl<T> CodeFilter<T> {
    pub fn from_param(raw: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        match raw {
            None | Some("") => CodeFilter::Any,
            Some(code) => parse(code).map_or(CodeFilter::Unknown, CodeFilter::Is),
        }
    }
}
