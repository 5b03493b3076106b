mod bucket_name;

pub use bucket_name::BucketName;
