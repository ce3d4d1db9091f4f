mod credential_repo_mysql;

pub use credential_repo_mysql::*;

mod util;
