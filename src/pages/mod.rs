pub mod channel;
pub mod direct_message;
pub mod login;
pub mod workspace;
