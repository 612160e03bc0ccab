pub mod csv_converter;
pub mod source_resolver;
