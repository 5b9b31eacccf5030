//! Folds markers and key/value pairs into a plain message.

use std::borrow::Cow;
use std::fmt::Write;

use crate::native::{KeyValuePair, Marker};

/// Prefixes `message` with every marker, then every `key=value` pair, each
/// followed by a single space.
///
/// With no markers and no pairs the message is returned as-is.
#[must_use]
pub fn flatten<'m>(
    markers: &[Marker],
    key_value_pairs: &[KeyValuePair],
    message: &'m str,
) -> Cow<'m, str> {
    if markers.is_empty() && key_value_pairs.is_empty() {
        return Cow::Borrowed(message);
    }

    let mut flat = String::with_capacity(message.len() + 16 * (markers.len() + key_value_pairs.len()));
    for marker in markers {
        flat.push_str(marker.name());
        flat.push(' ');
    }
    for pair in key_value_pairs {
        let _ = write!(flat, "{}={} ", pair.key, pair.value);
    }
    flat.push_str(message);
    Cow::Owned(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_then_pairs_then_message() {
        let markers = [Marker::new("TAG1"), Marker::new("TAG2")];
        let pairs = [KeyValuePair::new("k", "v")];
        assert_eq!(flatten(&markers, &pairs, "hello"), "TAG1 TAG2 k=v hello");
    }

    #[test]
    fn test_empty_is_identity() {
        let flat = flatten(&[], &[], "hello");
        assert!(matches!(flat, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_pairs_only() {
        let pairs = [KeyValuePair::new("a", "1"), KeyValuePair::new("b", "2")];
        assert_eq!(flatten(&[], &pairs, "msg"), "a=1 b=2 msg");
    }

    #[test]
    fn test_empty_message_keeps_trailing_space() {
        assert_eq!(flatten(&[Marker::new("M")], &[], ""), "M ");
    }
}
