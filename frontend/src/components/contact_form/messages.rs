use crate::api::ApiError;

pub enum Msg {
    EditFullName(String),
    EditEmail(String),
    EditPhone(String),
    EditQualification(String),
    EditMessage(String),
    Submit,
    SubmitDone(Result<(), ApiError>),
    GoToLogin,
}
