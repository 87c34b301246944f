pub mod home;
pub mod list;
pub mod submit;

pub use home::home;
pub use list::list_contact_requests;
pub use submit::submit_contact_request;
