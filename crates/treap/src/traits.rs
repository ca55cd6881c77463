/// Positional access to a sequence.
pub trait SequenceBase {
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, index: usize) -> Option<&Self::Value>;
    fn insert_at(&mut self, index: usize, value: Self::Value);
    fn remove_at(&mut self, index: usize) -> Option<Self::Value>;

    fn push_back(&mut self, value: Self::Value) {
        let index = self.len();
        self.insert_at(index, value);
    }
}

pub trait SequenceSplitMerge: SequenceBase + Sized {
    /// Keeps the first `index` elements and returns the rest.
    fn split_at(&mut self, index: usize) -> Self;
    fn append(&mut self, right: Self);
}
