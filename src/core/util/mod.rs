pub mod partition_rows;
pub mod pixel_to_complex;
