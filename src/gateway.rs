pub mod email;
pub mod factory;
pub mod logs;
pub mod notify;
pub mod sms;

// NotifierVia selects the simulated delivery channel
#[derive(Debug, PartialEq)]
pub enum NotifierVia {
    Email,
    Sms,
}
