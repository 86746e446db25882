pub mod bridge;
pub mod iso_bson_chrono;
