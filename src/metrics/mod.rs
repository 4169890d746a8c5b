pub mod absolute;
pub mod euclidean;
pub mod minkowski;
