//! Page-supplied engine configuration.
//!
//! The host page may embed
//! `<script type="application/json" id="jtlab-config">{ ... }</script>`
//! to override timings or switch the carousel to loop mode. A missing block
//! means defaults; an invalid one is logged and also means defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use stage::config::StageConfig;

/// DOM id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "jtlab-config";

/// Read and resolve the inline configuration block.
pub fn load() -> StageConfig {
    resolve(read_inline().as_deref())
}

/// Resolve raw block text into a configuration, falling back to defaults.
pub fn resolve(raw: Option<&str>) -> StageConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return StageConfig::default();
    };
    match StageConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("config: loaded #{CONFIG_ELEMENT_ID} (edge={:?})", config.navigation.edge);
            config
        }
        Err(err) => {
            log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err}");
            StageConfig::default()
        }
    }
}

fn read_inline() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
