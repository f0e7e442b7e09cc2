use common::model::contact::Contact;

use crate::api::ApiError;

pub enum Msg {
    ContactsLoaded(Result<Vec<Contact>, ApiError>),
    MissingToken,
    Logout,
}
