use ninja_actions::CmsService;
use ninja_config::NinjaConfig;

/// Shared application resources initialized once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: NinjaConfig,
    pub service: CmsService,
}

impl AppContext {
    pub fn init(config: NinjaConfig) -> anyhow::Result<Self> {
        let service = CmsService::new(&config)?;
        if !config.api.has_token() {
            tracing::debug!("no API token configured; requests are sent unauthenticated");
        }
        Ok(Self { config, service })
    }

    /// Host that relative media paths resolve against.
    pub fn media_base(&self) -> String {
        self.config.api.media_base()
    }
}
