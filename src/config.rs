use std::{env, path::PathBuf};

pub const DEFAULT_CATALOG_KEY: &str = "farmerProducts";
pub const DEFAULT_CART_KEY: &str = "cart";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub catalog_key: String,
    pub cart_key: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = env::var("AGRIMARKET_DATA_DIR")
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);
        let catalog_key = key_from_env("AGRIMARKET_CATALOG_KEY", DEFAULT_CATALOG_KEY)?;
        let cart_key = key_from_env("AGRIMARKET_CART_KEY", DEFAULT_CART_KEY)?;
        if catalog_key == cart_key {
            anyhow::bail!("catalog and cart must use different storage keys (both are '{cart_key}')");
        }
        Ok(Self {
            data_dir,
            catalog_key,
            cart_key,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_key: DEFAULT_CATALOG_KEY.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
        }
    }
}

fn key_from_env(var: &str, default: &str) -> anyhow::Result<String> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => anyhow::bail!("{var} is set but empty"),
        Ok(value) => Ok(value.trim().to_string()),
        Err(_) => Ok(default.to_string()),
    }
}
