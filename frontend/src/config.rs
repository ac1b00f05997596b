//! Build-time configuration, resolved once.

use lumina_client_core::ClientConfig;
use once_cell::sync::Lazy;

pub static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_build_env);
