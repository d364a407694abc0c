mod save_uploaded_file;

pub mod admin_classify_video_reference;
pub mod admin_upload_media;

pub use admin_classify_video_reference::admin_classify_video_reference;
pub use admin_upload_media::admin_upload_media;
