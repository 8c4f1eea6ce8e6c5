use std::sync::Arc;

use crate::config::Config;
use crate::db::EmployeeStore;
use crate::utils::s3::{BackgroundFetcher, BACKGROUND_URL};
use crate::views::Branding;

/// Everything the handlers need, built once at startup.
pub struct AppContext {
    pub branding: Branding,
    /// `None` when the startup connection attempt failed.
    pub store: Option<Arc<dyn EmployeeStore>>,
    pub background: BackgroundFetcher,
}

impl AppContext {
    pub fn new(
        config: &Config,
        color: &str,
        store: Option<Arc<dyn EmployeeStore>>,
        background: BackgroundFetcher,
    ) -> Self {
        AppContext {
            branding: Branding {
                color: color.to_string(),
                group_name: config.group_name.clone(),
                group_slogan: config.group_slogan.clone(),
                bg_url: BACKGROUND_URL.to_string(),
            },
            store,
            background,
        }
    }
}
