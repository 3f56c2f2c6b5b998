use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub limits: InputLimits,
    pub management: ManagementSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

/// Maximum lengths applied to form input before validation
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct InputLimits {
    pub name_max_chars: usize,
    pub text_max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            name_max_chars: 50,
            text_max_chars: 500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ManagementSettings {
    pub preview_chars: usize,
}

impl Default for ManagementSettings {
    fn default() -> Self {
        Self { preview_chars: 60 }
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_from(config::File::with_name("config/dashboard").required(false))
}

fn load_from<S>(source: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let limits = InputLimits::default();
    let management = ManagementSettings::default();

    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("limits.name_max_chars", limits.name_max_chars as u64)?
        .set_default("limits.text_max_chars", limits.text_max_chars as u64)?
        .set_default("management.preview_chars", management.preview_chars as u64)?
        .add_source(source)
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
