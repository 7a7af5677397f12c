/// Data layer: course records, loading, and lookup queries.
///
/// Architecture:
/// ```text
///   courses.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  validate header → Vec<CourseRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  identity key → CourseRecord, insertion ordered
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  subject / catalog / instructor predicates → matches
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
