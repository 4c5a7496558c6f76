pub mod completion;
pub mod google_auth;
pub mod http_client;
pub mod knowledge;
pub mod language;
pub mod speech;
