use crate::board::Move;
use crate::search::score::Score;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub depth: u32,
    pub score: Score,
    pub best: Option<Move>,
    pub bound: Bound,
}

const DEFAULT_WAYS: usize = 4;
const DEFAULT_ENTRIES: usize = 1 << 18;

#[derive(Default, Clone, Copy)]
struct Bucket {
    slots: [Option<Entry>; DEFAULT_WAYS],
}

pub struct Tt {
    buckets: Vec<Bucket>,
}

impl Default for Tt {
    fn default() -> Self {
        let mut t = Self { buckets: Vec::new() };
        t.set_capacity_entries(DEFAULT_ENTRIES);
        t
    }
}

impl Tt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buckets.fill(Bucket::default());
    }

    fn bucket_index(&self, key: u64) -> usize {
        let mixed = key ^ (key >> 32);
        (mixed as usize) % self.buckets.len().max(1)
    }

    pub fn get(&self, key: u64) -> Option<Entry> {
        if self.buckets.is_empty() {
            return None;
        }
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket.slots.iter().flatten().find(|e| e.key == key).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.slots.iter().flatten().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len() * DEFAULT_WAYS
    }

    pub fn set_capacity_entries(&mut self, cap: usize) {
        let entries = cap.max(DEFAULT_WAYS);
        let buckets = (entries + DEFAULT_WAYS - 1) / DEFAULT_WAYS;
        self.buckets.clear();
        self.buckets.resize(buckets, Bucket::default());
    }

    pub fn set_capacity_mb(&mut self, mb: usize) {
        let entry_bytes = std::mem::size_of::<Option<Entry>>().max(1);
        let entries = (mb.saturating_mul(1024 * 1024) / entry_bytes).max(DEFAULT_WAYS);
        self.set_capacity_entries(entries);
    }

    // Same key: replaced only by an entry at least as deep. Full bucket: the
    // shallowest entry goes.
    pub fn put(&mut self, e: Entry) {
        if self.buckets.is_empty() {
            return;
        }
        let idx = self.bucket_index(e.key);
        let bucket = &mut self.buckets[idx];
        for slot in bucket.slots.iter_mut() {
            if let Some(cur) = slot {
                if cur.key == e.key {
                    if e.depth >= cur.depth {
                        *slot = Some(e);
                    }
                    return;
                }
            }
        }
        if let Some(slot) = bucket.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(e);
            return;
        }
        let victim = bucket
            .slots
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| s.map_or(0, |cur| cur.depth))
            .map_or(0, |(i, _)| i);
        bucket.slots[victim] = Some(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: u64, depth: u32, score: Score) -> Entry {
        Entry { key, depth, score, best: None, bound: Bound::Exact }
    }

    #[test]
    fn deeper_or_equal_replaces_shallower_does_not() {
        let mut tt = Tt::new();
        tt.put(entry(42, 3, 10));
        tt.put(entry(42, 2, 20));
        assert_eq!(tt.get(42).unwrap().score, 10);
        tt.put(entry(42, 3, 30));
        assert_eq!(tt.get(42).unwrap().score, 30);
        tt.put(entry(42, 5, 40));
        assert_eq!(tt.get(42).unwrap().depth, 5);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = Tt::new();
        for k in 0..100 {
            tt.put(entry(k, 1, 0));
        }
        assert!(!tt.is_empty());
        tt.clear();
        assert!(tt.is_empty());
        assert!(tt.get(5).is_none());
    }

    #[test]
    fn capacity_from_megabytes() {
        let mut tt = Tt::new();
        tt.set_capacity_mb(1);
        assert!(tt.capacity() >= 1024);
        assert!(tt.capacity() <= 1024 * 1024);
    }
}
