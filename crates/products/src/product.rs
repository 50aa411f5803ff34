use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ProductId};

/// A CSV row before the store has assigned it an identifier.
///
/// Fields are copied verbatim. A column missing from the source file
/// deserialises as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub processor_type: String,
    pub memory: String,
    pub storage: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        processor_type: impl Into<String>,
        memory: impl Into<String>,
        storage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            processor_type: processor_type.into(),
            memory: memory.into(),
            storage: storage.into(),
        }
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            processor_type: self.processor_type,
            memory: self.memory,
            storage: self.storage,
        }
    }
}

/// Stored product record, as served by `GET /api/products`.
///
/// Field order here is the JSON field order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub processor_type: String,
    pub memory: String,
    pub storage: String,
}

impl Product {
    /// Value of `column` for this record as display text.
    ///
    /// Text columns borrow; the identifier is formatted.
    pub fn field(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Id => Cow::Owned(self.id.to_string()),
            Column::Name => Cow::Borrowed(&self.name),
            Column::Category => Cow::Borrowed(&self.category),
            Column::ProcessorType => Cow::Borrowed(&self.processor_type),
            Column::Memory => Cow::Borrowed(&self.memory),
            Column::Storage => Cow::Borrowed(&self.storage),
        }
    }
}

/// The product schema.
///
/// Declaration order is display order; `Ord` follows it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Name,
    Category,
    ProcessorType,
    Memory,
    Storage,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Name,
        Column::Category,
        Column::ProcessorType,
        Column::Memory,
        Column::Storage,
    ];

    /// Columns offered as checkbox filters (everything but id and name).
    pub const FILTERABLE: [Column; 4] = [
        Column::Category,
        Column::ProcessorType,
        Column::Memory,
        Column::Storage,
    ];

    /// Wire / database name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Category => "category",
            Column::ProcessorType => "processor_type",
            Column::Memory => "memory",
            Column::Storage => "storage",
        }
    }

    /// Table header label.
    pub fn header(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn is_filterable(&self) -> bool {
        Self::FILTERABLE.contains(self)
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::unknown_column(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        NewProduct::new("Laptop X", "Laptops", "Intel i7", "16GB", "512GB").with_id(ProductId::new(1))
    }

    #[test]
    fn serialises_with_wire_field_names() {
        let value = serde_json::to_value(laptop()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Laptop X",
                "category": "Laptops",
                "processor_type": "Intel i7",
                "memory": "16GB",
                "storage": "512GB",
            })
        );
    }

    #[test]
    fn field_reads_every_column() {
        let p = laptop();
        let values: Vec<_> = Column::ALL.iter().map(|c| p.field(*c).into_owned()).collect();
        assert_eq!(values, ["1", "Laptop X", "Laptops", "Intel i7", "16GB", "512GB"]);
    }

    #[test]
    fn filterable_excludes_id_and_name() {
        assert!(!Column::Id.is_filterable());
        assert!(!Column::Name.is_filterable());
        assert!(Column::FILTERABLE.iter().all(Column::is_filterable));
    }

    #[test]
    fn header_is_upper_cased_wire_name() {
        assert_eq!(Column::ProcessorType.header(), "PROCESSOR_TYPE");
        assert_eq!(Column::Id.header(), "ID");
    }

    #[test]
    fn column_parses_from_wire_name() {
        for column in Column::ALL {
            assert_eq!(column.as_str().parse::<Column>().unwrap(), column);
        }
        assert_eq!(
            "price".parse::<Column>(),
            Err(DomainError::UnknownColumn("price".into()))
        );
    }

    #[test]
    fn new_product_defaults_missing_fields_to_empty() {
        let row: NewProduct = serde_json::from_value(json!({ "name": "Bare" })).unwrap();
        assert_eq!(row.name, "Bare");
        assert_eq!(row.category, "");
        assert_eq!(row.storage, "");
    }
}
