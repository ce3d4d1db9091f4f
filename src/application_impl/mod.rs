mod account_service_fake;
mod account_service_impl;
mod credential_hasher_impl;
mod token_issuer_impl;

pub use account_service_fake::*;
pub use account_service_impl::*;
pub use credential_hasher_impl::*;
pub use token_issuer_impl::*;
