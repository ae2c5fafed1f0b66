pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;
pub mod system;
