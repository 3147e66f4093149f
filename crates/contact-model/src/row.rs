//! Flat input rows as delivered by the row source.

/// Value of one named column within a row.
///
/// Columns whose name repeats in the header collapse into a single
/// [`FieldValue::Repeated`] holding the values in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Repeated(Vec<String>),
}

impl FieldValue {
    /// All values of the column, in header order.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Repeated(values) => values,
        }
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self, Self::Repeated(_))
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Repeated(vec![first, value]);
            }
            Self::Repeated(values) => values.push(value),
        }
    }
}

/// One data line from the source table, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    line: u64,
    columns: Vec<(String, FieldValue)>,
}

impl InputRow {
    pub fn new(line: u64) -> Self {
        Self {
            line,
            columns: Vec::new(),
        }
    }

    /// Source line of the row (1-based, header included).
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Adds a column value, grouping it with an earlier column of the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, field)) => field.push(value),
            None => self.columns.push((name, FieldValue::Single(value))),
        }
    }

    /// Builder form of [`InputRow::push`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// Columns in order of first appearance.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.columns
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
