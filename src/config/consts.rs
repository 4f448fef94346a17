// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://www.cne.gob.ve/web/registro_electoral/ce.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const PARAM_NATIONALITY: &str = "nacionalidad";
pub const PARAM_CEDULA: &str = "cedula";

// Env overrides (read after .env is loaded)
pub const ENV_URL: &str = "CNE_URL";
pub const ENV_TIMEOUT: &str = "CNE_TIMEOUT_SECS";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "consulta";
