use super::{ConfigDocument, KubeconfigError, KubeconfigResult};
use directories::BaseDirs;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> KubeconfigResult<Self> {
        Ok(Self::at(locate()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> KubeconfigResult<ConfigDocument> {
        tracing::debug!(path = %self.path.display(), "loading kubeconfig");

        let contents = fs::read_to_string(&self.path).map_err(|source| KubeconfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        ConfigDocument::parse(&contents).map_err(|source| KubeconfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes a sibling temp file with mode 0600 and renames it over the target.
    pub fn save(&self, document: &ConfigDocument) -> KubeconfigResult<()> {
        let data = document.to_yaml().map_err(KubeconfigError::Serialize)?;
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let tmp = temp_path(&target);

        tracing::debug!(path = %target.display(), bytes = data.len(), "saving kubeconfig");

        if let Err(source) = write_private(&tmp, data.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(KubeconfigError::Io { path: tmp, source });
        }

        if let Err(source) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(KubeconfigError::Io {
                path: target,
                source,
            });
        }

        Ok(())
    }
}

pub fn locate() -> KubeconfigResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| kubeconfig_path(dirs.home_dir()))
        .ok_or(KubeconfigError::MissingHomeDir)
}

pub fn kubeconfig_path(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

pub(super) fn temp_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("config");
    target.with_file_name(format!(".{name}.tmp.{}", std::process::id()))
}

fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(data)?;
    file.sync_all()
}
