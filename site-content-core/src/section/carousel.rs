/// Index after `current` in a list of `len`, wrapping. `None` for an empty list.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (current + 1) % len)
}

/// Index before `current` in a list of `len`, wrapping. `None` for an empty list.
pub fn prev_index(current: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (current % len + len - 1) % len)
}

/// Items plus the index of the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
        }
    }
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// Replaces the items; the index survives if it is still in range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.current >= self.items.len() {
            self.current = 0;
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        let next = next_index(self.current, self.items.len())?;
        self.current = next;
        Some(next)
    }

    pub fn prev(&mut self) -> Option<usize> {
        let prev = prev_index(self.current, self.items.len())?;
        self.current = prev;
        Some(prev)
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        self.current = index;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c']);
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(carousel.next(), Some(0));
        carousel.go_to(2);
        assert_eq!(carousel.next(), Some(0));
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel: Carousel<u8> = Carousel::default();
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.go_to(0), None);
        assert!(carousel.current().is_none());
    }

    #[test]
    fn shrinking_items_resets_out_of_range_index() {
        let mut carousel = Carousel::new(vec![1, 2, 3]);
        carousel.go_to(2);
        carousel.set_items(vec![1, 2]);
        assert_eq!(carousel.index(), 0);
        carousel.go_to(1);
        carousel.set_items(vec![4, 5, 6]);
        assert_eq!(carousel.index(), 1);
    }
}
