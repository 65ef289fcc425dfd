//! Element attributes, read by widgets at construction.
//!
//! Names are matched ASCII case-insensitively, the way HTML treats them, so `showAt` and `showat` are the same attribute.
//! Numeric helpers follow the prefix rules of `parseFloat`/`parseInt`: leading whitespace is skipped and parsing stops
//! at the first character that can't continue the number, so `"50px"` reads as `50` and `"px"` as nothing.

use smallvec::SmallVec;

/// An ordered set of `name="value"` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    entries: SmallVec<[(String, String); 4]>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets an attribute, replacing an existing value with the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The attribute parsed as a float, or `NaN` if it's missing or doesn't start with a number.
    pub fn float(&self, name: &str) -> f64 {
        self.get(name).map_or(f64::NAN, parse_float)
    }

    /// The attribute parsed as an integer, or `default` if it's missing or doesn't start with one.
    pub fn int_or(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(parse_int).unwrap_or(default)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(&name.into(), value);
        }
        attrs
    }
}

/// Parses the longest numeric prefix of `text`. Returns `NaN` if there isn't one.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            digits += 1;
        }
        if frac > end + 1 || digits > 0 {
            end = frac;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > start {
            end = exp;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Parses the longest base-10 integer prefix of `text`.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }

    text[..end].parse().ok()
}
