use crate::domain::{Page, PageDescriptor};
use serde::Deserialize;

// Spring Data `Page<T>` as the listings service returns it:
//
//  ├── content[]
//  ├── totalPages / totalElements
//  ├── size / number / numberOfElements
//  ├── first / last / empty
//  ├── sort { empty, sorted, unsorted }
//  └── pageable { offset, pageNumber, pageSize, paged, unpaged, sort }
//
// Only the fields below are read; serde skips the rest.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePage<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    pub number: u32,
}

impl<T> RemotePage<T> {
    /// first/last/empty are re-derived from the counts so the descriptor
    /// invariants hold whatever arrives.
    pub fn into_page(self) -> Page<T> {
        let len = u32::try_from(self.content.len()).unwrap_or(u32::MAX);
        Page {
            descriptor: PageDescriptor::new(
                self.number,
                self.total_pages,
                self.total_elements,
                self.size,
                len,
            ),
            items: self.content,
        }
    }
}
