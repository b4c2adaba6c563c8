#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorCode {
    MissingSecretKey,
    InvalidVerboseFlag,
    InvalidApiHost,
    InvalidApiPort,
    InvalidPlaintextFlag,
    PlaintextRemoteHost,
    InvalidLogPath,
} // end of AppErrorCode

#[derive(Debug)]
pub struct AppCfgError {
    pub code: AppErrorCode,
    pub detail: Option<String>,
}
