use std::env;
use std::fmt;

const DEFAULT_BOX_HEARING_LEAD_DAYS: i64 = 14;
const MAX_BOX_HEARING_LEAD_DAYS: i64 = 365;
const DEFAULT_HEARING_MINUTES: u32 = 20;

/// Distinguishes runtime behavior for different stages of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the intake converter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub conversion: ConversionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let box_hearing_lead_days = read_number(
            "INTAKE_BOX_HEARING_LEAD_DAYS",
            DEFAULT_BOX_HEARING_LEAD_DAYS,
        )?;
        if !(0..=MAX_BOX_HEARING_LEAD_DAYS).contains(&box_hearing_lead_days) {
            return Err(ConfigError::InvalidNumber {
                variable: "INTAKE_BOX_HEARING_LEAD_DAYS",
            });
        }
        let default_hearing_minutes =
            read_number("INTAKE_DEFAULT_HEARING_MINUTES", DEFAULT_HEARING_MINUTES)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            conversion: ConversionConfig {
                box_hearing_lead_days,
                default_hearing_minutes,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn read_number<T>(variable: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { variable }),
        Err(_) => Ok(default),
    }
}

/// Knobs applied while deriving canonical commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Days between the application due date and the box hearing, `0..=365`.
    pub box_hearing_lead_days: i64,
    /// Used when neither the hearing nor its hearing type states a duration.
    pub default_hearing_minutes: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            box_hearing_lead_days: DEFAULT_BOX_HEARING_LEAD_DAYS,
            default_hearing_minutes: DEFAULT_HEARING_MINUTES,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable } => {
                write!(f, "{} must be a valid number in range", variable)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
