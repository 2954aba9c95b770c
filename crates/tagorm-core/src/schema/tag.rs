use indexmap::IndexMap;

/// Parsed field tags, in declaration order.
///
/// The source is a `;` separated list of `key` or `key:value` pieces. Keys
/// and values are trimmed. A repeated key keeps its first position but takes
/// the later value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tags {
    entries: IndexMap<String, Option<String>>,
}

impl Tags {
    pub fn parse(src: &str) -> Tags {
        let mut entries = IndexMap::new();

        for piece in src.split(';') {
            let piece = piece.trim();

            if piece.is_empty() {
                continue;
            }

            let (key, value) = match piece.split_once(':') {
                Some((key, value)) => (key.trim(), Some(value.trim().to_string())),
                None => (piece, None),
            };

            entries.insert(key.to_string(), value);
        }

        Tags { entries }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the value of `key`, if the key is present and carries one.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
