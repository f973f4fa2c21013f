//! Case-insensitive substring matching across a record's fields.

use crate::models::Record;

/// Type of searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    /// Contact name
    Name,
    /// Any phone number
    Phone,
    /// Any email address
    Email,
    /// Postal address
    Address,
    /// Free-text notes
    Notes,
}

impl SearchableField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Notes => "notes",
        }
    }
}

/// A record that matched a query, with the fields the query was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub record: &'a Record,
    pub fields: Vec<SearchableField>,
}

/// A normalized search query.
///
/// Queries are lower-cased once up front and matched as typed, surrounding
/// whitespace included. A query that is blank matches nothing.
#[derive(Debug, Clone)]
pub struct SubstringQuery {
    needle: String,
}

impl SubstringQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.trim().is_empty()
    }

    fn hits(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    /// Fields of `record` containing the query, in a fixed field order.
    pub fn matched_fields(&self, record: &Record) -> Vec<SearchableField> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut fields = Vec::new();
        if self.hits(record.name().as_str()) {
            fields.push(SearchableField::Name);
        }
        if record.phones().iter().any(|p| self.hits(p.as_str())) {
            fields.push(SearchableField::Phone);
        }
        if record.emails().iter().any(|e| self.hits(e.as_str())) {
            fields.push(SearchableField::Email);
        }
        if record.address().is_some_and(|a| self.hits(a)) {
            fields.push(SearchableField::Address);
        }
        if record.notes().is_some_and(|n| self.hits(n)) {
            fields.push(SearchableField::Notes);
        }
        fields
    }

    /// Match `record`, returning a hit when any field contains the query.
    pub fn search<'a>(&self, record: &'a Record) -> Option<SearchHit<'a>> {
        let fields = self.matched_fields(record);
        if fields.is_empty() {
            None
        } else {
            Some(SearchHit { record, fields })
        }
    }
}
