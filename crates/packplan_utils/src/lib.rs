pub mod data_uri;
pub mod integrity;
pub mod path_ext;
pub mod sanitize_file_name;
