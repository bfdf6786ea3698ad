use anyhow::Error;
use roster_config::ConfigError;
use roster_store::error::StoreError;
use roster_sync::error::SyncError;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error) {
    eprintln!("Error: {:#}", err);
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(sync_err) = cause.downcast_ref::<SyncError>() {
            return sync_exit_code(sync_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
    }
    EXIT_FAILURE
}

fn sync_exit_code(err: &SyncError) -> u8 {
    match err {
        SyncError::Http(_) => EXIT_FAILURE,
        SyncError::Url(_)
        | SyncError::UnsupportedScheme(_)
        | SyncError::Decode(_)
        | SyncError::MissingField { .. }
        | SyncError::InvalidField { .. } => EXIT_INVALID_INPUT,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidTimeoutSecs(_)
        | ConfigError::InvalidUrl(_)
        | ConfigError::InvalidUserAgent
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err {
        StoreError::Io(_) => EXIT_FAILURE,
    }
}
