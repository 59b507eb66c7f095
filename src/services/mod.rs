// Pure service logic with no storage access.

pub mod validator;
