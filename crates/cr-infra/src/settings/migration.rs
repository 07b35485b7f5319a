use anyhow::{anyhow, Result};
use cr_core::ports::SettingsMigrationPort;
use cr_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![
                // Box::new(MigrationV1ToV2),
            ],
        }
    }

    pub fn with_migrations(migrations: Vec<Box<dyn SettingsMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Step `settings` forward until it reaches the current schema.
    ///
    /// Fails when a step is missing or the file comes from a newer release.
    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        loop {
            let current = settings.schema_version;

            if current == CURRENT_SCHEMA_VERSION {
                return Ok(settings);
            }
            if current > CURRENT_SCHEMA_VERSION {
                return Err(anyhow!(
                    "settings schema {} is newer than supported {}",
                    current,
                    CURRENT_SCHEMA_VERSION
                ));
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no migration found from version {}", current))?;

            settings = migration.migrate(settings);
            settings.schema_version = migration.to_version();
        }
    }
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FromZero;

    impl SettingsMigrationPort for FromZero {
        fn from_version(&self) -> u32 {
            0
        }

        fn to_version(&self) -> u32 {
            1
        }

        fn migrate(&self, mut settings: Settings) -> Settings {
            settings.history.max_registry_length = 42;
            settings
        }
    }

    #[test]
    fn current_settings_pass_through() {
        let migrated = SettingsMigrator::new()
            .migrate_to_latest(Settings::default())
            .unwrap();
        assert_eq!(migrated, Settings::default());
    }

    #[test]
    fn older_schema_runs_registered_steps() {
        let old = Settings {
            schema_version: 0,
            ..Settings::default()
        };

        let migrated = SettingsMigrator::with_migrations(vec![Box::new(FromZero)])
            .migrate_to_latest(old)
            .unwrap();

        assert_eq!(migrated.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(migrated.history.max_registry_length, 42);
    }

    #[test]
    fn missing_step_is_an_error() {
        let old = Settings {
            schema_version: 0,
            ..Settings::default()
        };
        assert!(SettingsMigrator::new().migrate_to_latest(old).is_err());
    }

    #[test]
    fn newer_schema_is_an_error() {
        let future = Settings {
            schema_version: CURRENT_SCHEMA_VERSION + 1,
            ..Settings::default()
        };
        assert!(SettingsMigrator::new().migrate_to_latest(future).is_err());
    }
}
