pub mod record_type;
