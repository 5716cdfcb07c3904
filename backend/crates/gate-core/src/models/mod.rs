pub mod user;
pub mod user_document;
pub mod user_id;
pub mod user_record;
