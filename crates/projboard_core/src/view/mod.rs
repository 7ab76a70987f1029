//! Headless list views fed by store snapshots.

pub mod project_list;
