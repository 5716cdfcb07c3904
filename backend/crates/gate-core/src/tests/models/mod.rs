mod user_document;
mod user_id;
mod user_record;
