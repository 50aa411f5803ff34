//! Sort and pagination state for the product grid.
//!
//! Header clicks cycle a column through ascending, descending, and unsorted.
//! Pages are fixed-size slices of the sorted rows; any change to the rows or
//! the sort goes back to the first page.

use std::cmp::Ordering;

use crate::product::{Column, Product};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub column: Column,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: Option<SortBy>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero page size is treated as one row per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn sort_by(&self) -> Option<SortBy> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Header click: none -> ascending -> descending -> none.
    ///
    /// A different column always starts at ascending.
    pub fn toggle_sort(&mut self, column: Column) {
        let current = self.sort.filter(|s| s.column == column).map(|s| s.direction);
        self.sort = match current {
            None => Some(SortBy { column, direction: SortDirection::Ascending }),
            Some(SortDirection::Ascending) => {
                Some(SortBy { column, direction: SortDirection::Descending })
            }
            Some(SortDirection::Descending) => None,
        };
        self.reset_page();
    }

    pub fn direction_of(&self, column: Column) -> Option<SortDirection> {
        self.sort.filter(|s| s.column == column).map(|s| s.direction)
    }

    /// Stable in-place sort of `rows` by the active sort, if any.
    pub fn sort(&self, rows: &mut [&Product]) {
        let Some(SortBy { column, direction }) = self.sort else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = compare_by(column, a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    /// Number of pages for `total` rows; zero rows means zero pages.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The slice of `rows` on the current page.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn next_page(&mut self, total: usize) {
        if self.can_next_page(total) {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.page_index -= 1;
        }
    }

    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }
}

fn compare_by(column: Column, a: &Product, b: &Product) -> Ordering {
    match column {
        Column::Id => a.id.cmp(&b.id),
        _ => compare_alphanumeric(&a.field(column), &b.field(column)),
    }
}

/// Compare strings chunk by chunk, digit runs numerically.
///
/// `"8GB" < "16GB" < "512GB"`, and `"Intel i5" < "Intel i7"`.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x, y) {
                    (Chunk::Digits(x), Chunk::Digits(y)) => compare_digit_runs(x, y),
                    (x, y) => x.text().cmp(y.text()),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

// Digit runs of any length: strip leading zeros, longer run is larger.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn text(self) -> &'a str {
        match self {
            Chunk::Digits(s) | Chunk::Text(s) => s,
        }
    }
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits { Chunk::Digits(chunk) } else { Chunk::Text(chunk) })
    }
}
