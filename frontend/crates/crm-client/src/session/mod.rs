pub(crate) mod login_result;
pub(crate) mod session_manager;
pub(crate) mod token_claims;

pub use login_result::LoginResult;
pub use session_manager::{
    LOGIN_PATH, NO_TOKEN_MESSAGE, PERMISSIONS_PATH, REGISTER_PATH, SessionManager,
};
pub use token_claims::{TokenClaims, decode_claims};
