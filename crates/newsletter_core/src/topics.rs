/// Ordered, duplicate-free list of trimmed, non-empty topics.
///
/// Matching is exact and case-sensitive. No limit is placed on the number or
/// length of topics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicList {
    items: Vec<String>,
}

impl TopicList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed `raw` text. Returns `false` when it was empty or
    /// already present, in which case the list is unchanged.
    pub fn add(&mut self, raw: &str) -> bool {
        let topic = raw.trim();
        if topic.is_empty() || self.contains(topic) {
            return false;
        }
        self.items.push(topic.to_owned());
        true
    }

    /// Removes the exact match, if any.
    pub fn remove(&mut self, topic: &str) -> bool {
        match self.items.iter().position(|item| item == topic) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.items.iter().any(|item| item == topic)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}
