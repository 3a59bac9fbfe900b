pub mod create;
pub mod install;
pub mod secrets;
pub mod vcs;
