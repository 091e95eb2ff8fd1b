pub(crate) mod admin;
pub(crate) mod change_password;
pub(crate) mod dashboard;
pub(crate) mod feed;
pub(crate) mod file_upload;
pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod not_found;
pub(crate) mod profile;
pub(crate) mod security_info;
pub(crate) mod signup;
