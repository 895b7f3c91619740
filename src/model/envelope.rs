/// List response: the backend's declared total plus the items in backend order.
///
/// `total` is informational; nothing requires it to equal `items.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEnvelope<T> {
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Whether the declared total disagrees with the items actually sent.
    pub fn total_mismatch(&self) -> bool {
        u64::try_from(self.items.len()).map_or(true, |len| len != self.total)
    }
}
