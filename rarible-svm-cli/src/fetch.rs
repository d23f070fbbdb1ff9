//! Account dumps on disk, one `<base58 address>.bin` file per account.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rarible_svm_core::address::Address;
use rarible_svm_core::error::{CoreError, CoreResult};
use rarible_svm_core::fetch::AccountFetcher;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, address: &Address) -> PathBuf {
        self.dir.join(format!("{}.bin", address))
    }
}

impl AccountFetcher for DirFetcher {
    fn fetch(&self, address: &Address) -> CoreResult<Vec<u8>> {
        let path = self.path_for(address);
        match fs::read(&path) {
            Ok(data) => {
                debug!(%address, path = %path.display(), "account dump hit");
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%address, path = %path.display(), "account dump miss");
                Err(CoreError::AccountNotFound { address: *address })
            }
            Err(e) => Err(CoreError::Fetch {
                address: *address,
                message: e.to_string(),
            }),
        }
    }
}
