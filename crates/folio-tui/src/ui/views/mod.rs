pub mod contacts;
pub mod login;
pub mod project_form;
pub mod projects;
pub mod skill_form;
pub mod skills;
