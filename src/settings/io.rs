use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use bevy::log::{info, error, debug};

use crate::catalog::resources::to_pretty_json;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "CandidCraft";
const APPLICATION: &str = "StoreManager";
const CONFIG_FILE: &str = "app_settings.json";

fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(ErrorKind::NotFound, "Could not determine project directories for app settings."))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T> {
    load_settings_from(&get_config_path()?)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    save_settings_to(&get_config_path()?, settings)
}

/// Missing file yields defaults; an unparsable one is an `InvalidData` error.
pub fn load_settings_from<T: for<'de> serde::de::Deserialize<'de> + Default>(config_file: &Path) -> io::Result<T> {
    info!("AppSettings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                error!("AppSettings: Failed to parse settings file {:?}: {}", config_file, e);
                io::Error::new(ErrorKind::InvalidData, format!("Failed to parse settings file: {}", e))
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", config_file);
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

pub fn save_settings_to<T: serde::Serialize>(config_file: &Path, settings: &T) -> io::Result<()> {
    debug!("AppSettings: Saving settings to {:?}", config_file);
    let bytes = to_pretty_json(settings).map_err(|e| {
        error!("AppSettings: Failed to serialize settings for {:?}: {}", config_file, e);
        io::Error::new(ErrorKind::Other, e)
    })?;
    fs::write(config_file, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Scope;
    use crate::settings::AppSettings;
    use tempfile::tempdir;

    #[test]
    fn settings_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let loaded: AppSettings = load_settings_from(&path).unwrap();
        assert_eq!(loaded, AppSettings::default());

        let settings = AppSettings {
            catalog_root: Some(dir.path().to_path_buf()),
            last_scope: Some(Scope::Portfolio),
        };
        save_settings_to(&path, &settings).unwrap();
        let loaded: AppSettings = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn garbage_settings_are_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();
        let err = load_settings_from::<AppSettings>(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
