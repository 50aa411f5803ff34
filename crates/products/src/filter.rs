//! Checkbox filtering over the fetched catalogue.
//!
//! `FilterOptions` lists the distinct values per filterable column.
//! `FilterSelection` holds what the user has checked and decides which
//! records pass: AND across columns, OR within a column, and a column with
//! nothing checked imposes no constraint.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::product::{Column, Product};

/// Distinct values per filterable column, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    by_column: BTreeMap<Column, Vec<String>>,
}

impl FilterOptions {
    /// Derive the options from a full fetch.
    ///
    /// An empty catalogue yields no option groups at all.
    pub fn from_products(products: &[Product]) -> Self {
        let mut by_column = BTreeMap::new();
        if products.is_empty() {
            return Self { by_column };
        }

        for column in Column::FILTERABLE {
            let mut seen = HashSet::new();
            let values = products
                .iter()
                .map(|p| p.field(column))
                .filter(|v| seen.insert(v.clone()))
                .map(|v| v.into_owned())
                .collect();
            by_column.insert(column, values);
        }

        Self { by_column }
    }

    pub fn values(&self, column: Column) -> &[String] {
        self.by_column.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Option groups in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[String])> {
        self.by_column.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_column.is_empty()
    }
}

/// The values the user has checked, per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    checked: BTreeMap<Column, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, column: Column, value: impl Into<String>) {
        self.checked.entry(column).or_default().insert(value.into());
    }

    /// Removing a value that was never checked is a no-op.
    pub fn uncheck(&mut self, column: Column, value: &str) {
        if let Some(values) = self.checked.get_mut(&column) {
            values.remove(value);
            if values.is_empty() {
                self.checked.remove(&column);
            }
        }
    }

    /// Apply a checkbox change event.
    pub fn set(&mut self, column: Column, value: impl Into<String>, checked: bool) {
        let value = value.into();
        if checked {
            self.check(column, value);
        } else {
            self.uncheck(column, &value);
        }
    }

    pub fn is_checked(&self, column: Column, value: &str) -> bool {
        self.checked
            .get(&column)
            .is_some_and(|values| values.contains(value))
    }

    pub fn checked(&self, column: Column) -> impl Iterator<Item = &str> {
        self.checked
            .get(&column)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// True when no column constrains anything.
    pub fn is_empty(&self) -> bool {
        self.checked.values().all(BTreeSet::is_empty)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.checked
            .iter()
            .all(|(column, values)| values.is_empty() || values.contains(&*product.field(*column)))
    }

    /// Records passing the selection, in input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
