//! Infrastructure layer for BizForge.
//!
//! File-backed persistence services and secret/config loading. Every service
//! operates on an explicit [`storage::LocalStore`] handle passed at
//! construction; there is no process-global state, so independent stores
//! (tests, parallel sessions) never interfere.

pub mod auth_service;
pub mod config_service;
pub mod ledger_service;
pub mod logger_service;
pub mod paths;
pub mod secret_service;
pub mod storage;
pub mod vault_service;

pub use crate::auth_service::AuthService;
pub use crate::config_service::ConfigService;
pub use crate::ledger_service::LedgerService;
pub use crate::logger_service::LoggerService;
pub use crate::secret_service::SecretServiceImpl;
pub use crate::storage::LocalStore;
pub use crate::vault_service::VaultService;
