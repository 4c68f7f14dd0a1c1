use crate::{
    EULA_FILE, EULA_KEY, GAMEMODE_KEY, Result as WorldResult, SERVER_PROPERTIES, WorldError,
    properties::{read_file_value, replace_file_value},
};

use bb_core::{GameMode, UNKNOWN_MODE, World};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

/// Worlds root on disk: one directory per world.
///
/// Nothing is cached; every call reads the directory again.
#[derive(Debug, Clone)]
pub struct WorldStore {
    root: PathBuf,
    init_program: String,
    init_args: Vec<String>,
}

impl WorldStore {
    /// `init_program` + `init_args` is run inside a fresh world directory to
    /// generate its default config files.
    pub fn new(
        root: impl Into<PathBuf>,
        init_program: impl Into<String>,
        init_args: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            init_program: init_program.into(),
            init_args,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn world_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Creates the worlds root if it is missing.
    pub async fn ensure_root(&self) -> WorldResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| WorldError::io(&self.root, e))
    }

    /// All worlds, sorted by name. Plain files in the root are skipped; a world
    /// whose mode cannot be read is listed as `unknown`.
    pub async fn list(&self) -> WorldResult<Vec<World>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| WorldError::io(&self.root, e))?;

        let mut worlds = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| WorldError::io(&self.root, e))?
        {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|e| WorldError::io(&path, e))?;
            if !file_type.is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!("Skipping world directory with non UTF-8 name: {}", path.display());
                continue;
            };

            let mode = match read_file_value(&path.join(SERVER_PROPERTIES), GAMEMODE_KEY).await {
                Ok(Some(mode)) => mode,
                Ok(None) => {
                    warn!("World {} has no {} setting", name, GAMEMODE_KEY);
                    UNKNOWN_MODE.to_string()
                }
                Err(e) => {
                    warn!("Could not read mode of world {}: {}", name, e);
                    UNKNOWN_MODE.to_string()
                }
            };

            worlds.push(World::new(name, mode));
        }

        worlds.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(worlds)
    }

    pub async fn exists(&self, name: &str) -> WorldResult<bool> {
        Ok(self.list().await?.iter().any(|world| world.name == name))
    }

    /// Creates a world: new directory, one-shot init run inside it, then the
    /// game mode and EULA acceptance are patched in.
    ///
    /// The directory is created exclusively, so a second create of the same
    /// name fails without touching the first. A failed create leaves whatever
    /// was already written in place.
    pub async fn create(&self, name: &str, mode: GameMode) -> WorldResult<World> {
        if !World::is_valid_name(name) {
            return Err(WorldError::invalid_name(name));
        }

        let path = self.world_path(name);
        tokio::fs::create_dir(&path).await.map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => WorldError::already_exists(name),
            _ => WorldError::io(&path, e),
        })?;

        info!("Initializing world {} in {}", name, path.display());

        let output = Command::new(&self.init_program)
            .args(&self.init_args)
            .current_dir(&path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                WorldError::init_failed(name, format!("could not run {}: {}", self.init_program, e))
            })?;

        if !output.status.success() {
            debug!("World init output: {}", String::from_utf8_lossy(&output.stdout));
            debug!("World init errors: {}", String::from_utf8_lossy(&output.stderr));
            return Err(WorldError::init_failed(name, output.status.to_string()));
        }

        replace_file_value(&path.join(SERVER_PROPERTIES), GAMEMODE_KEY, mode.as_str()).await?;
        replace_file_value(&path.join(EULA_FILE), EULA_KEY, "true").await?;

        info!("World {} created ({})", name, mode);
        Ok(World::new(name, mode.as_str()))
    }
}
