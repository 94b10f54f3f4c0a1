mod submit_contact_message;

pub use submit_contact_message::{
    __path_submit_contact_message_handler, submit_contact_message_handler, ContactMessageRequest,
};
