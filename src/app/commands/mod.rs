pub mod backup;
pub mod check;
pub mod logs;
pub mod projects;
pub mod settings;
pub mod versions;
