use crate::domain::contact::ports::ContactService;
use std::sync::Arc;

#[derive(Debug)]
pub struct ContactState<CS: ContactService> {
    contact_service: CS,
}

#[derive(Debug)]
pub struct SharedContactState<CS: ContactService>(Arc<ContactState<CS>>);

impl<CS: ContactService> SharedContactState<CS> {
    pub fn new(contact_service: CS) -> Self {
        Self(Arc::new(ContactState { contact_service }))
    }

    pub fn contact_service(&self) -> &CS {
        &self.0.contact_service
    }
}

// A derived `Clone` would demand `CS: Clone`; only the `Arc` is cloned.
impl<CS: ContactService> Clone for SharedContactState<CS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
