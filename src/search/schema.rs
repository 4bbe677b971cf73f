//! Index Schema
//!
//! Builds the `SCHEMA` section of FT.CREATE.
//!
//! ```text
//! FT.CREATE books
//!   NOOFFSETS
//!   SCHEMA
//!     title TEXT WEIGHT 5.0 SORTABLE
//!     year NUMERIC SORTABLE
//!     tags TAG SEPARATOR ;
//!     location GEO
//! ```

use std::fmt;

/// Field list for FT.CREATE
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexSchema {
    pub fields: Vec<SchemaField>,
}

impl IndexSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, name: impl Into<String>, field_type: FieldType, sortable: bool) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            field_type,
            sortable,
            no_index: false,
            weight: None,
            separator: None,
        });
        self
    }

    /// Add a full-text field
    #[must_use]
    pub fn text(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Text, false)
    }

    /// Add a full-text field with a relevance weight (engine default 1.0)
    #[must_use]
    pub fn text_weighted(mut self, name: impl Into<String>, weight: f64) -> Self {
        self = self.push(name, FieldType::Text, false);
        if let Some(field) = self.fields.last_mut() {
            field.weight = Some(weight);
        }
        self
    }

    #[must_use]
    pub fn text_sortable(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Text, true)
    }

    #[must_use]
    pub fn numeric(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Numeric, false)
    }

    #[must_use]
    pub fn numeric_sortable(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Numeric, true)
    }

    #[must_use]
    pub fn tag(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Tag, false)
    }

    /// Add a tag field with a custom separator (engine default `,`)
    #[must_use]
    pub fn tag_separated(mut self, name: impl Into<String>, separator: char) -> Self {
        self = self.push(name, FieldType::Tag, false);
        if let Some(field) = self.fields.last_mut() {
            field.separator = Some(separator);
        }
        self
    }

    #[must_use]
    pub fn geo(self, name: impl Into<String>) -> Self {
        self.push(name, FieldType::Geo, false)
    }

    /// Mark the last added field NOINDEX (stored and sortable, not searchable)
    #[must_use]
    pub fn no_index(mut self) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.no_index = true;
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `SCHEMA` followed by every field definition
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["SCHEMA".to_string()];
        for field in &self.fields {
            args.extend(field.to_schema_args());
        }
        args
    }
}

/// One schema field
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
    pub sortable: bool,
    pub no_index: bool,
    /// TEXT only
    pub weight: Option<f64>,
    /// TAG only
    pub separator: Option<char>,
}

impl SchemaField {
    fn to_schema_args(&self) -> Vec<String> {
        let mut args = vec![self.name.clone(), self.field_type.to_string()];

        if let Some(weight) = self.weight {
            args.push("WEIGHT".to_string());
            args.push(format!("{:?}", weight));
        }

        if let Some(separator) = self.separator {
            args.push("SEPARATOR".to_string());
            args.push(separator.to_string());
        }

        if self.sortable {
            args.push("SORTABLE".to_string());
        }

        if self.no_index {
            args.push("NOINDEX".to_string());
        }

        args
    }
}

/// Field types supported by RediSearch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Full-text searchable field
    Text,
    /// Numeric field (supports range filters)
    Numeric,
    /// Tag field (exact match, supports OR)
    Tag,
    /// Geographic field (longitude, latitude)
    Geo,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "TEXT"),
            FieldType::Numeric => write!(f, "NUMERIC"),
            FieldType::Tag => write!(f, "TAG"),
            FieldType::Geo => write!(f, "GEO"),
        }
    }
}
