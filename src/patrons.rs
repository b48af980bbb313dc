use crate::core::domain::Identifiable;
use crate::core::library::UserKind;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;

pub trait Borrower: Identifiable {
    fn is_patron(&self) -> bool;
    fn is_librarian(&self) -> bool;
    fn is_kind(&self, match_kind: UserKind) -> bool;
    fn can_borrow(&self) -> bool;
    fn can_manage_catalog(&self) -> bool;
}
