//! View state behind the product table.
//!
//! Everything the components render is derived here from one fetch of the
//! catalogue: filter options, the filtered row set, sort order, and the
//! current page. Plain Rust, so it builds and tests natively.

use catalog_products::{Column, FilterOptions, FilterSelection, Product, SortDirection, TableState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet (or the fetch failed).
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    phase: Phase,
    products: Vec<Product>,
    options: FilterOptions,
    selection: FilterSelection,
    // Indices into `products` that pass `selection`, in fetch order.
    filtered: Vec<usize>,
    table: TableState,
}

impl Default for ProductView {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            products: Vec::new(),
            options: FilterOptions::default(),
            selection: FilterSelection::new(),
            filtered: Vec::new(),
            table: TableState::new(),
        }
    }
}

impl ProductView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the fetched catalogue and derive the filter options from it.
    pub fn load(&mut self, products: Vec<Product>) {
        self.options = FilterOptions::from_products(&products);
        self.products = products;
        self.phase = Phase::Loaded;
        self.refilter();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn is_checked(&self, column: Column, value: &str) -> bool {
        self.selection.is_checked(column, value)
    }

    /// Checkbox change: update the selection and recompute the rows.
    pub fn set_filter(&mut self, column: Column, value: impl Into<String>, checked: bool) {
        self.selection.set(column, value, checked);
        self.refilter();
    }

    /// Grid columns: always the full schema, whatever survives the filter.
    pub fn columns(&self) -> &'static [Column] {
        &Column::ALL
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Filtered rows in display order.
    pub fn rows(&self) -> Vec<&Product> {
        let mut rows: Vec<&Product> = self.filtered.iter().map(|&i| &self.products[i]).collect();
        self.table.sort(&mut rows);
        rows
    }

    /// Rows on the current page.
    pub fn page(&self) -> Vec<&Product> {
        let rows = self.rows();
        self.table.page(&rows).to_vec()
    }

    pub fn toggle_sort(&mut self, column: Column) {
        self.table.toggle_sort(column);
    }

    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.table.direction_of(column)
    }

    pub fn page_index(&self) -> usize {
        self.table.page_index()
    }

    pub fn page_count(&self) -> usize {
        self.table.page_count(self.filtered.len())
    }

    /// `"<page> of <pages>"`, one-based.
    pub fn page_label(&self) -> String {
        format!("{} of {}", self.page_index() + 1, self.page_count())
    }

    pub fn can_previous_page(&self) -> bool {
        self.table.can_previous_page()
    }

    pub fn can_next_page(&self) -> bool {
        self.table.can_next_page(self.filtered.len())
    }

    pub fn next_page(&mut self) {
        self.table.next_page(self.filtered.len());
    }

    pub fn previous_page(&mut self) {
        self.table.previous_page();
    }

    fn refilter(&mut self) {
        self.filtered = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.selection.matches(p))
            .map(|(i, _)| i)
            .collect();
        self.table.reset_page();
    }
}
