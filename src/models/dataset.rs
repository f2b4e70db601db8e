use serde::Deserialize;

use crate::models::{Customer, Product};

/// Root shape of the bundled fixture. Both sections are optional in the
/// source document; a missing section is a valid state, not a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDocument {
    pub crm: Option<CrmSection>,
    pub inventory: Option<InventorySection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrmSection {
    /// Defaults to empty so a section written as `{"crm": {}}` still parses.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventorySection {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sections_parse() {
        let doc: DatasetDocument = serde_json::from_str(
            r#"{"crm":{"customers":[{"id":1}]},"inventory":{"products":[{"sku":"X"}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.crm.unwrap().customers.len(), 1);
        assert_eq!(doc.inventory.unwrap().products.len(), 1);
    }

    #[test]
    fn absent_sections_parse_as_none() {
        let doc: DatasetDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.crm.is_none());
        assert!(doc.inventory.is_none());
    }

    #[test]
    fn section_without_its_array_parses_as_empty() {
        let doc: DatasetDocument = serde_json::from_str(r#"{"crm":{}}"#).unwrap();
        assert!(doc.crm.unwrap().customers.is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(serde_json::from_str::<DatasetDocument>("[1,2,3]").is_err());
    }
}
