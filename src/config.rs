use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;
use std::result::Result as DefaultResult;

use crate::constant::{env_vars, logging as const_log, processor as const_proc};
use crate::error::{AppCfgError, AppErrorCode};

pub struct AppProcessorCfg {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    // TLS is skipped, accepted only for a server on loopback interface
    pub plaintext: bool,
}

pub struct AppLoggingCfg {
    pub min_level: const_log::Level,
    pub destination: const_log::Destination,
}

pub struct AppClassifierCfg {
    pub processor: AppProcessorCfg,
    pub logging: AppLoggingCfg,
}

impl AppLoggingCfg {
    fn from_verbose(verbose: bool) -> Self {
        let min_level = if verbose {
            const_log::Level::DEBUG
        } else {
            const_log::Level::WARNING
        };
        Self {
            min_level,
            destination: const_log::Destination::CONSOLE,
        }
    }
}

impl AppClassifierCfg {
    /// Explicit construction, the secret key is the only required setting.
    pub fn new(secret_key: String, verbose: bool) -> DefaultResult<Self, AppCfgError> {
        if secret_key.trim().is_empty() {
            return Err(AppCfgError {
                code: AppErrorCode::MissingSecretKey,
                detail: None,
            });
        }
        let processor = AppProcessorCfg {
            host: const_proc::DEFAULT_API_HOST.to_string(),
            port: const_proc::DEFAULT_API_PORT,
            secret_key,
            plaintext: false,
        };
        Ok(Self {
            processor,
            logging: AppLoggingCfg::from_verbose(verbose),
        })
    }

    /// verbose mode is nothing more than the lowered log threshold
    pub fn verbose(&self) -> bool {
        matches!(
            self.logging.min_level,
            const_log::Level::DEBUG | const_log::Level::TRACE
        )
    }

    /// Construction from environment variables collected by the caller, only
    /// labels listed in `env_vars::EXPECTED_LABELS` are examined.
    pub fn from_env_map(
        mut env_var_map: HashMap<String, String, RandomState>,
    ) -> DefaultResult<Self, AppCfgError> {
        let secret_key = env_var_map
            .remove(env_vars::SECRET_KEY)
            .ok_or(AppCfgError {
                code: AppErrorCode::MissingSecretKey,
                detail: None,
            })?;
        let verbose = match env_var_map.remove(env_vars::VERBOSE) {
            Some(v) => parse_bool_flag(v.as_str()).ok_or(AppCfgError {
                code: AppErrorCode::InvalidVerboseFlag,
                detail: Some(v),
            })?,
            None => false,
        };
        let mut cfg = Self::new(secret_key, verbose)?;
        if let Some(host) = env_var_map.remove(env_vars::API_HOST) {
            let valid = !host.is_empty()
                && host
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
            if !valid {
                return Err(AppCfgError {
                    code: AppErrorCode::InvalidApiHost,
                    detail: Some(host),
                });
            }
            cfg.processor.host = host;
        }
        if let Some(port) = env_var_map.remove(env_vars::API_PORT) {
            cfg.processor.port = match port.parse::<u16>() {
                Ok(p) if p > 0 => p,
                _others => {
                    return Err(AppCfgError {
                        code: AppErrorCode::InvalidApiPort,
                        detail: Some(port),
                    })
                }
            };
        }
        if let Some(v) = env_var_map.remove(env_vars::API_PLAINTEXT) {
            let plaintext = parse_bool_flag(v.as_str()).ok_or(AppCfgError {
                code: AppErrorCode::InvalidPlaintextFlag,
                detail: Some(v),
            })?;
            if plaintext && !is_loopback_host(cfg.processor.host.as_str()) {
                return Err(AppCfgError {
                    code: AppErrorCode::PlaintextRemoteHost,
                    detail: Some(cfg.processor.host.clone()),
                });
            }
            cfg.processor.plaintext = plaintext;
        }
        if let Some(path) = env_var_map.remove(env_vars::LOG_PATH) {
            Self::check_log_path(path.as_str())?;
            cfg.logging.destination = const_log::Destination::LOCALFS(path);
        }
        Ok(cfg)
    } // end of fn from_env_map

    fn check_log_path(path: &str) -> DefaultResult<(), AppCfgError> {
        let p = Path::new(path);
        let parent_ok = p
            .parent()
            .map(|d| d.as_os_str().is_empty() || d.is_dir())
            .unwrap_or(false);
        if parent_ok && p.file_name().is_some() {
            Ok(())
        } else {
            Err(AppCfgError {
                code: AppErrorCode::InvalidLogPath,
                detail: Some(path.to_string()),
            })
        }
    }
} // end of impl AppClassifierCfg

pub fn is_loopback_host(host: &str) -> bool {
    host == "localhost"
        || host
            .parse::<IpAddr>()
            .map(|a| a.is_loopback())
            .unwrap_or(false)
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _others => None,
    }
}
