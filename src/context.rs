// src/context.rs

use std::path::PathBuf;

use directories::ProjectDirs;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "readiness";
pub const APP_ID: &str = "readiness-wizard";

pub const DEFAULT_CHECKLIST_FILE: &str = "complete_checklist_comprehensive.json";
pub const EXPORTS_DIR: &str = "exports";

pub const ENV_CHECKLIST_PATH: &str = "READINESS_CHECKLIST_PATH";
pub const ENV_EXPORT_DIR: &str = "READINESS_EXPORT_DIR";
pub const ENV_DEBUG: &str = "READINESS_DEBUG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppCtx {
    pub checklist_path: PathBuf,
    /// Used when no save dialog is available or the user skips it.
    pub export_dir: PathBuf,
    pub debug_ui: bool,
}

fn truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

impl AppCtx {
    pub fn new(checklist_path: PathBuf, export_dir: PathBuf) -> Self {
        Self {
            checklist_path,
            export_dir,
            debug_ui: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Resolve settings from a key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let checklist_path = set(ENV_CHECKLIST_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKLIST_FILE));

        let export_dir = set(ENV_EXPORT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir);

        let debug_ui = set(ENV_DEBUG).map(|v| truthy(&v)).unwrap_or(false);

        Self {
            checklist_path,
            export_dir,
            debug_ui,
        }
    }
}

/// <data_dir>/exports, or ./exports when the platform has no data dir.
pub fn default_export_dir() -> PathBuf {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
        .map(|p| p.data_dir().join(EXPORTS_DIR))
        .unwrap_or_else(|| PathBuf::from(EXPORTS_DIR))
}
