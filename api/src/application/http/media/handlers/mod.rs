pub mod create_upload_url;
pub mod get_image;
