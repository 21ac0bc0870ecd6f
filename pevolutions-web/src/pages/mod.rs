pub mod account;
pub mod community;
pub mod downloads;
pub mod forum;
pub mod home;
pub mod login;
pub mod not_found;
pub mod online_players;
pub mod register;
pub mod support;
