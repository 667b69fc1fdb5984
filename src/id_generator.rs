/// Hands out shape ids in creation order, starting at 1.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> usize {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}
