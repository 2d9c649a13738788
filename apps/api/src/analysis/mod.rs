// Resume analysis core: section location, category scoring, ATS readiness,
// field classification, and report aggregation.
// Pure string scanning over immutable catalogs; no I/O anywhere in here.

pub mod catalog;
pub mod categories;
pub mod document;
pub mod field;
pub mod handlers;
pub mod readiness;
pub mod report;
pub mod sections;
