pub mod get_dashboard_cmd;
pub mod login_cmd;
pub mod signup_cmd;
