//! Class name joining.
//!
//! The joiner takes an ordered sequence of class tokens, drops the absent or
//! empty ones, and joins the rest with single spaces. Whitespace inside a
//! token is collapsed, so `" a   b "` contributes `a` and `b`.

/// A value that can contribute class tokens to a [`ClassList`].
///
/// Implemented for strings, `Option`s (absent contributes nothing),
/// `(value, condition)` pairs (contributes only when the condition holds),
/// and slices/vectors (flattened in order).
pub trait ClassValue {
    /// Appends this value's tokens to `list`.
    fn append_to(&self, list: &mut ClassList);
}

/// An ordered, space-joined list of class tokens.
///
/// # Example
///
/// ```rust
/// use classvariance::ClassList;
///
/// let classes = ClassList::new()
///     .add("btn")
///     .add(None::<&str>)
///     .add(("active", true))
///     .add(("disabled", false))
///     .build();
/// assert_eq!(classes, "btn active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    buf: String,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning the list for chaining.
    pub fn add<V: ClassValue>(mut self, value: V) -> Self {
        value.append_to(&mut self);
        self
    }

    /// Appends the whitespace-separated pieces of `token`.
    pub fn push(&mut self, token: &str) {
        for piece in token.split_whitespace() {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            self.buf.push_str(piece);
        }
    }

    /// Returns the joined classes so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns true if no token has been added.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the list, returning the joined string.
    pub fn build(self) -> String {
        self.buf
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}

impl ClassValue for str {
    fn append_to(&self, list: &mut ClassList) {
        list.push(self);
    }
}

impl ClassValue for String {
    fn append_to(&self, list: &mut ClassList) {
        list.push(self);
    }
}

impl<T: ClassValue + ?Sized> ClassValue for &T {
    fn append_to(&self, list: &mut ClassList) {
        (**self).append_to(list);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn append_to(&self, list: &mut ClassList) {
        if let Some(value) = self {
            value.append_to(list);
        }
    }
}

impl<T: ClassValue> ClassValue for (T, bool) {
    fn append_to(&self, list: &mut ClassList) {
        if self.1 {
            self.0.append_to(list);
        }
    }
}

impl<T: ClassValue> ClassValue for [T] {
    fn append_to(&self, list: &mut ClassList) {
        for value in self {
            value.append_to(list);
        }
    }
}

impl<T: ClassValue, const N: usize> ClassValue for [T; N] {
    fn append_to(&self, list: &mut ClassList) {
        self.as_slice().append_to(list);
    }
}

impl<T: ClassValue> ClassValue for Vec<T> {
    fn append_to(&self, list: &mut ClassList) {
        self.as_slice().append_to(list);
    }
}

/// Joins class tokens with single spaces, eliding absent and empty entries.
///
/// # Example
///
/// ```rust
/// use classvariance::join_classes;
///
/// assert_eq!(join_classes([Some("btn"), None, Some(""), Some("btn-lg")]), "btn btn-lg");
/// assert_eq!(join_classes(["  card ", "shadow"]), "card shadow");
/// ```
pub fn join_classes<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: ClassValue,
{
    let mut list = ClassList::new();
    for token in tokens {
        token.append_to(&mut list);
    }
    list.build()
}
