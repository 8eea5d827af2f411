pub mod datetime;
pub mod field_update;

pub use datetime::parse_due_date;
pub use field_update::FieldUpdate;
