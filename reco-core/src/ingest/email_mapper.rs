use std::collections::HashMap;

use crate::models::UserId;

/// Encodes user emails as sequential user ids, starting at 1, in first-seen order.
/// Rows without an email all share one id.
#[derive(Debug, Default)]
pub struct EmailMapper {
    codes: HashMap<Option<String>, UserId>,
    next: UserId,
}

impl EmailMapper {
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
            next: 1,
        }
    }

    pub fn encode(&mut self, email: Option<&str>) -> UserId {
        let key = email.map(str::to_string);
        if let Some(id) = self.codes.get(&key) {
            return *id;
        }
        let id = self.next;
        self.codes.insert(key, id);
        self.next += 1;
        id
    }

    /// Number of distinct users encoded so far.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
