pub mod env_vars {
    pub const SECRET_KEY: &str = "STRIPE_SECRET_KEY";
    pub const VERBOSE: &str = "STRIPE_CLASSIFIER_VERBOSE";
    pub const API_HOST: &str = "STRIPE_API_HOST";
    pub const API_PORT: &str = "STRIPE_API_PORT";
    // plain TCP without TLS, for a mock API server on loopback interface
    pub const API_PLAINTEXT: &str = "STRIPE_API_PLAINTEXT";
    // full path to the log file, log messages go to stdout if omitted
    pub const LOG_PATH: &str = "STRIPE_CLASSIFIER_LOG_PATH";
    pub const EXPECTED_LABELS: [&str; 6] = [
        SECRET_KEY,
        VERBOSE,
        API_HOST,
        API_PORT,
        API_PLAINTEXT,
        LOG_PATH,
    ];
}

pub mod processor {
    pub const DEFAULT_API_HOST: &str = "api.stripe.com";
    pub const DEFAULT_API_PORT: u16 = 443;
    pub const API_VERSION: &str = "v1";
}

pub mod identifier {
    pub const PREFIX_PAYMENT_INTENT: &str = "pi_";
    pub const PREFIX_CHARGE: &str = "ch_";
    // charges created by non-card payment methods, e.g. ACH debit
    pub const PREFIX_PAYMENT: &str = "py_";
}

pub const PAYMENT_METHOD_US_BANK_ACCOUNT: &str = "us_bank_account";

pub mod logging {
    #[allow(clippy::upper_case_acronyms)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Level {
        TRACE,
        DEBUG,
        INFO,
        WARNING,
        ERROR,
        FATAL,
    }

    #[allow(clippy::upper_case_acronyms)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Destination {
        CONSOLE,
        LOCALFS(String),
    }
}
