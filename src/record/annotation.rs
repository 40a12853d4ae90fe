//! Name/value annotations attached to a log message.
//!
//! Order is significant and duplicates are kept; both show up verbatim in
//! the rendered `Data {...}` block.

use std::fmt;
use std::ops::Deref;

/// A single name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Annotation {
    fn from((name, value): (N, V)) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// An ordered list of annotations, usually kept around and attached to many
/// messages (e.g. a request's identifiers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.0.push(Annotation::new(name, value));
    }

    /// Builder form of [`Annotations::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(name, value);
        self
    }

    pub fn into_vec(self) -> Vec<Annotation> {
        self.0
    }
}

impl Deref for Annotations {
    type Target = [Annotation];

    fn deref(&self) -> &[Annotation] {
        &self.0
    }
}

impl From<Vec<Annotation>> for Annotations {
    fn from(items: Vec<Annotation>) -> Self {
        Self(items)
    }
}

impl<A: Into<Annotation>> FromIterator<A> for Annotations {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Annotation>> Extend<A> for Annotations {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Annotations {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Concatenate a persistent list with an ad-hoc one, persistent entries first.
pub fn combine(persistent: &[Annotation], adhoc: &[Annotation]) -> Vec<Annotation> {
    let mut combined = Vec::with_capacity(persistent.len() + adhoc.len());
    combined.extend_from_slice(persistent);
    combined.extend_from_slice(adhoc);
    combined
}

/// Build an [`Annotations`] list from `name => value` pairs.
///
/// ```
/// let data = linelog::annotations!["user" => "alice", "attempt" => 3];
/// assert_eq!(data.len(), 2);
/// ```
#[macro_export]
macro_rules! annotations {
    () => {
        $crate::Annotations::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Annotations::from(vec![$($crate::Annotation::new($name, $value)),+])
    };
}
