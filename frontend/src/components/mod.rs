pub mod landing;
pub mod prediction;
