//! Package of generated Verilog modules.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::vir;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error at {path:?}: {error:?}")]
    Fs { path: PathBuf, error: io::Error },
}

/// Package.
#[derive(Debug, Default)]
pub struct Package {
    /// Modules.
    pub modules: Vec<vir::Module>,
}

impl Package {
    /// Adds the given module to package.
    pub fn add(&mut self, module: vir::Module) { self.modules.push(module); }

    fn gen_vir_module(module: &vir::Module, path_dir: &Path) -> Result<PathBuf, PackageError> {
        let path = path_dir.join(format!("{}.v", module.name));
        let fs_error = |error| PackageError::Fs { path: path.clone(), error };

        let mut file = File::create(&path).map_err(fs_error)?;
        writeln!(file, "{}", module.to_string()).map_err(fs_error)?;

        Ok(path)
    }

    /// Generates Verilog code at the given directory path, one file per module. Returns the paths
    /// of the written files.
    pub fn gen_vir<P: AsRef<Path>>(self, path_dir: P) -> Result<Vec<PathBuf>, PackageError> {
        let path_dir = path_dir.as_ref();
        fs::create_dir_all(path_dir).map_err(|error| PackageError::Fs { path: path_dir.to_path_buf(), error })?;

        let paths = self
            .modules
            .iter()
            .map(|module| Self::gen_vir_module(module, path_dir))
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = paths.len(), dir = %path_dir.display(), "wrote Verilog modules");
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::codegen;

    #[test]
    fn gen_vir_writes_one_file_per_module() {
        let dir = env::temp_dir().join(format!("alurom-package-{}", std::process::id()));
        let paths = codegen::package().gen_vir(&dir).unwrap();

        let names = paths.iter().filter_map(|p| p.file_name()?.to_str().map(str::to_string)).collect::<Vec<_>>();
        assert_eq!(names, vec!["alurom_rom.v", "alurom_alu.v", "alurom.v"]);

        let top = fs::read_to_string(dir.join("alurom.v")).unwrap();
        assert!(top.contains("module alurom\n("));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn gen_vir_reports_unwritable_dir() {
        let file = env::temp_dir().join(format!("alurom-package-file-{}", std::process::id()));
        fs::write(&file, "").unwrap();

        let err = codegen::package().gen_vir(file.join("build")).unwrap_err();
        assert!(matches!(err, PackageError::Fs { .. }));

        fs::remove_file(&file).unwrap();
    }
}
