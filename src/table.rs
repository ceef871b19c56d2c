/// Placeholder shown for every field that was left blank.
pub const MISSING_MARKER: &str = "---";

pub const COLUMN_NAMES: [&str; 6] = ["First Name", "Last Name", "Height", "Weight", "Belt", "Dojo"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub height: String,
    pub weight: String,
    pub belt: String,
    pub dojo: String,
}

impl Record {
    /// Builds a record, replacing every empty field with [`MISSING_MARKER`].
    pub fn new(fields: [&str; 6]) -> Self {
        let [first_name, last_name, height, weight, belt, dojo] = fields.map(Self::normalize);
        Self {
            first_name,
            last_name,
            height,
            weight,
            belt,
            dojo,
        }
    }

    /// Field values in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.first_name,
            &self.last_name,
            &self.height,
            &self.weight,
            &self.belt,
            &self.dojo,
        ]
    }

    pub fn has_missing(&self) -> bool {
        self.fields().iter().any(|f| *f == MISSING_MARKER)
    }

    fn normalize(value: &str) -> String {
        if value.is_empty() {
            MISSING_MARKER.to_string()
        } else {
            value.to_string()
        }
    }
}

/// Immutable table of records with their display column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: [&'static str; 6],
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            columns: COLUMN_NAMES,
            records,
        }
    }

    pub fn columns(&self) -> [&'static str; 6] {
        self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with at least one missing field.
    pub fn missing_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_missing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_become_marker() {
        let record = Record::new(["Ann", "", "5'1\"", "", "Blue", ""]);
        assert_eq!(record.last_name, MISSING_MARKER);
        assert_eq!(record.weight, MISSING_MARKER);
        assert_eq!(record.dojo, MISSING_MARKER);
        assert_eq!(record.first_name, "Ann");
        assert!(record.has_missing());
    }

    #[test]
    fn complete_record_has_nothing_missing() {
        let record = Record::new(["Ann", "Lee", "5'1\"", "110", "Blue", "Home Dojo"]);
        assert!(!record.has_missing());
        assert!(record.fields().iter().all(|f| !f.is_empty()));
    }

    #[test]
    fn whitespace_is_not_blank() {
        let record = Record::new([" ", "Lee", "5'1\"", "110", "Blue", "Home Dojo"]);
        assert_eq!(record.first_name, " ");
        assert!(!record.has_missing());
    }

    #[test]
    fn missing_count_counts_records_not_fields() {
        let table = Table::new(vec![
            Record::new(["", "", "", "", "", ""]),
            Record::new(["A", "B", "C", "D", "E", "F"]),
            Record::new(["A", "", "C", "D", "E", "F"]),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.missing_count(), 2);
    }

    #[test]
    fn empty_table() {
        let table = Table::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.missing_count(), 0);
        assert_eq!(table.columns(), COLUMN_NAMES);
    }
}
