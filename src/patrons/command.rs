pub mod add_librarian_cmd;
pub mod add_patron_cmd;
pub mod get_user_cmd;
