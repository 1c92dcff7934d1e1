pub mod delete_account;
pub mod login;
pub mod signup;

pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use login::{LoginError, LoginUseCase};
pub use signup::{SignupError, SignupUseCase};
