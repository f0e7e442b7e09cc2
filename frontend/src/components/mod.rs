pub mod admin_login;
pub mod contact_form;
pub mod dashboard;
