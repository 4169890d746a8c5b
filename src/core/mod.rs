pub mod distance_metric;
pub mod matrix_profile;
