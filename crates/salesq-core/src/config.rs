//! Dashboard configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::page::PAGE_SIZE;
use crate::sort::SortSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows per page.
    pub page_size: usize,

    /// Numbered slots in the page-number window before gaps appear.
    pub max_visible_pages: usize,

    /// Dataset to load when none is given explicitly.
    pub dataset_path: Option<String>,

    /// Sort applied to a fresh session.
    pub default_sort: SortSpec,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_visible_pages: 5,
            dataset_path: None,
            default_sort: SortSpec::default(),
        }
    }
}

impl DashboardConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SALESQ_PAGE_SIZE`: rows per page
    /// - `SALESQ_MAX_VISIBLE_PAGES`: page-number window size
    /// - `SALESQ_DATASET`: default dataset path
    /// - `SALESQ_DEFAULT_SORT`: `field:direction`, e.g. `quantity:desc`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    /// Unparseable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SALESQ_PAGE_SIZE") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.page_size = v;
            }
        }

        if let Some(s) = lookup("SALESQ_MAX_VISIBLE_PAGES") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.max_visible_pages = v;
            }
        }

        if let Some(s) = lookup("SALESQ_DATASET") {
            if !s.trim().is_empty() {
                cfg.dataset_path = Some(s);
            }
        }

        if let Some(s) = lookup("SALESQ_DEFAULT_SORT") {
            if let Ok(v) = s.parse::<SortSpec>() {
                cfg.default_sort = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        if self.max_visible_pages == 0 {
            return Err(Error::Config("max_visible_pages must be at least 1".into()));
        }
        Ok(())
    }
}
