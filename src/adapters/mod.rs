pub mod pixel_format;
