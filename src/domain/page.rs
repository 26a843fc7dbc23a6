// src/domain/page.rs

/// Metadata for one page of a paged result set.
///
/// Constructed only through [`PageDescriptor::new`], which keeps `number`
/// inside `0..total_pages` (and at 0 when there are no pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    number: u32,
    total_pages: u32,
    total_elements: u64,
    size: u32,
    len: u32,
}

impl PageDescriptor {
    pub fn new(number: u32, total_pages: u32, total_elements: u64, size: u32, len: u32) -> Self {
        let number = if total_pages == 0 {
            0
        } else {
            number.min(total_pages - 1)
        };

        Self {
            number,
            total_pages,
            total_elements,
            size,
            len,
        }
    }

    /// Descriptor for "nothing loaded yet" or "nothing found".
    pub fn empty(size: u32) -> Self {
        Self::new(0, 0, 0, size, 0)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number == self.total_pages - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One-based positions of the first and last item on this page.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.len == 0 {
            return None;
        }
        let first = u64::from(self.number) * u64::from(self.size) + 1;
        Some((first, first + u64::from(self.len) - 1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub descriptor: PageDescriptor,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty(size: u32) -> Self {
        Self {
            descriptor: PageDescriptor::empty(size),
            items: Vec::new(),
        }
    }
}
