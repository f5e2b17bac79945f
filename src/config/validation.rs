use super::{Command, Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Process(args) => validate_columns(&args.id_column, &args.context_column),
            Command::Serve(args) => validate_columns(&args.id_column, &args.context_column),
            Command::Columns(_) | Command::Keywords => Ok(()),
        }
    }
}

fn validate_columns(id_column: &str, context_column: &str) -> Result<(), ConfigError> {
    if id_column.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(
            "ID column name must not be empty".to_string(),
        ));
    }

    if context_column.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(
            "Context column name must not be empty".to_string(),
        ));
    }

    if id_column == context_column {
        return Err(ConfigError::InvalidConfig(format!(
            "ID and Context columns must differ (both are '{id_column}')"
        )));
    }

    Ok(())
}
