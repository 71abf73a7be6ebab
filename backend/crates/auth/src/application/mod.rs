//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod bootstrap;
pub mod config;
pub mod create_account;
pub mod login;
pub mod profile_query;
pub mod refresh;
pub mod token;
pub mod update_profile;

// Re-exports
pub use authenticate::{AuthenticateUseCase, IdentityResolver};
pub use bootstrap::BootstrapAdminUseCase;
pub use config::AuthConfig;
pub use create_account::{CreateAccountInput, CreateAccountUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use profile_query::{GetProfileUseCase, ListProfilesInput, ListProfilesUseCase};
pub use refresh::RefreshUseCase;
pub use token::{Claims, TokenPair, TokenService};
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
