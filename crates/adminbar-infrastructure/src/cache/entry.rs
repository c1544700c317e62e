pub struct Entry {
    pub value: String,
    pub expires_at_ms: u64, // 0 none
}

impl Entry {
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at_ms != 0 && now >= self.expires_at_ms
    }
}
