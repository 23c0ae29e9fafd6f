use clap::Parser;
use zad_core::domain::common::{LlmConfig, PreferencesConfig, ZadConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "zad-api", about = "ZAD halal analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub preferences: PreferenceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    /// Vision model used for product and menu image analyses.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-pro")]
    pub gemini_model: String,

    /// Lighter model used for ingredient lookups and place searches.
    #[arg(long, env = "GEMINI_TEXT_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_text_model: String,
}

#[derive(Debug, Clone, Parser)]
pub struct PreferenceArgs {
    #[arg(long, env = "PREFERENCES_PATH", default_value = "data/preferences.json")]
    pub preferences_path: String,
}

#[derive(Debug, Clone, Parser)]
pub struct LogArgs {
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,

    #[arg(long, env = "LOG_FILTER", default_value = "info,zad_api=debug,zad_core=debug")]
    pub log_filter: String,
}

impl From<Args> for ZadConfig {
    fn from(args: Args) -> Self {
        ZadConfig {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_text_model: args.llm.gemini_text_model,
            },
            preferences: PreferencesConfig {
                store_path: args.preferences.preferences_path,
            },
        }
    }
}
