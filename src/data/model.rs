use indexmap::IndexMap;

/// Separator between the parts of an identity key.
pub const KEY_SEPARATOR: char = '_';

// ---------------------------------------------------------------------------
// CourseRecord – one row of the schedule export
// ---------------------------------------------------------------------------

/// A single course offering.
///
/// `catalog` and `section` are kept as text: catalog numbers such as `0141`
/// or `141A` must survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub subject: String,
    pub catalog: String,
    pub section: String,
    /// Lecture, lab, ...
    pub component: String,
    pub session: String,
    pub units: u32,
    pub tot_enrl: u32,
    pub cap_enrl: u32,
    /// Conventionally `Last,First`.
    pub instructor: String,
}

impl CourseRecord {
    /// `Subject_Catalog_Section`, the key this record is stored under.
    pub fn identity_key(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.subject,
            self.catalog,
            self.section,
            sep = KEY_SEPARATOR
        )
    }

    /// Everything before the first comma of the instructor name.
    pub fn last_name_segment(&self) -> &str {
        match self.instructor.split_once(',') {
            Some((last, _)) => last,
            None => &self.instructor,
        }
    }

    /// Fixed-width report line. Widths are minimums; long values are not cut.
    pub fn format_row(&self) -> String {
        format!(
            "{:<8}{:<8}{:<10}{:<10}{:<8}{:>6}{:>10}{:>10}  {}",
            self.subject,
            self.catalog,
            self.section,
            self.component,
            self.session,
            self.units,
            self.tot_enrl,
            self.cap_enrl,
            self.instructor
        )
    }

    /// Column titles laid out like [`CourseRecord::format_row`].
    pub fn header_row() -> String {
        format!(
            "{:<8}{:<8}{:<10}{:<10}{:<8}{:>6}{:>10}{:>10}  {}",
            "Subject",
            "Catalog",
            "Section",
            "Component",
            "Session",
            "Units",
            "TotEnrl",
            "CapEnrl",
            "Instructor"
        )
    }
}

// ---------------------------------------------------------------------------
// Catalog – keyed collection of records
// ---------------------------------------------------------------------------

/// All loaded records keyed by [`CourseRecord::identity_key`].
///
/// Iteration follows insertion order. Replacing a record keeps the position
/// its key was first inserted at.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: IndexMap<String, CourseRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its identity key, returning the record it replaced.
    pub fn insert_or_replace(&mut self, record: CourseRecord) -> Option<CourseRecord> {
        let key = record.identity_key();
        self.records.insert(key, record)
    }

    /// Every stored record in iteration order.
    pub fn all(&self) -> Vec<&CourseRecord> {
        self.records.values().collect()
    }

    /// Read-only view of the underlying map.
    pub fn items(&self) -> &IndexMap<String, CourseRecord> {
        &self.records
    }

    pub fn get(&self, key: &str) -> Option<&CourseRecord> {
        self.records.get(key)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. Loading never does this on its own.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
pub(crate) fn record(subject: &str, catalog: &str, section: &str, instructor: &str) -> CourseRecord {
    CourseRecord {
        subject: subject.to_string(),
        catalog: catalog.to_string(),
        section: section.to_string(),
        component: "LEC".to_string(),
        session: "FALL".to_string(),
        units: 3,
        tot_enrl: 25,
        cap_enrl: 30,
        instructor: instructor.to_string(),
    }
}
