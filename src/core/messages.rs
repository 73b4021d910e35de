/// Ordered birthday messages with a cursor that never leaves the list.
#[derive(Clone, Debug)]
pub struct MessageDeck {
    messages: Vec<String>,
    index: usize,
}

/// What the overlay shows for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessagePage {
    pub text: String,
    pub indicator: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl MessageDeck {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        self.messages.get(self.index).map(String::as_str).unwrap_or("")
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.messages.len()
    }

    /// Move by `direction` pages. Out-of-range moves are ignored.
    pub fn change(&mut self, direction: i32) -> bool {
        let next = self.index as i64 + direction as i64;
        if next < 0 || next >= self.messages.len() as i64 {
            return false;
        }
        self.index = next as usize;
        true
    }

    pub fn indicator(&self) -> String {
        format!("Message {} of {}", self.index + 1, self.messages.len())
    }

    pub fn page(&self) -> MessagePage {
        MessagePage {
            text: self.current().to_string(),
            indicator: self.indicator(),
            prev_enabled: self.can_prev(),
            next_enabled: self.can_next(),
        }
    }
}
