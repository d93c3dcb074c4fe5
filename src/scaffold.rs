//! Fake installed packages for test setups
//!
//! [`create_module`] writes `index.js`, `index.d.ts` and `package.json` for a package under the
//! configured modules directory of any store, so code that resolves dependencies can be tested
//! against a [`MemoryFileSystem`](crate::fs::MemoryFileSystem).

use crate::config::ScaffoldConfig;
use crate::error::{FsError, Result};
use crate::fs::FileSystem;
use crate::origin::PathOrigin;
use crate::tree::{create_file, mkdirp};
use serde::Serialize;
use tracing::debug;

const DEFAULT_IMPLEMENTATION: &str = "module.exports = {};";

/// Package to scaffold. Missing sources are replaced by empty stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub implementation: Option<String>,
    pub declaration: Option<String>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implementation: None,
            declaration: None,
        }
    }

    pub fn with_implementation(mut self, source: impl Into<String>) -> Self {
        self.implementation = Some(source.into());
        self
    }

    pub fn with_declaration(mut self, source: impl Into<String>) -> Self {
        self.declaration = Some(source.into());
        self
    }

    pub fn implementation_source(&self) -> &str {
        self.implementation
            .as_deref()
            .unwrap_or(DEFAULT_IMPLEMENTATION)
    }

    pub fn declaration_source(&self) -> String {
        match &self.declaration {
            Some(source) => source.clone(),
            None => format!("declare module \"{}\" {{}}", self.name),
        }
    }
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    name: &'a str,
    main: &'a str,
}

/// Accepts `pkg` or `@scope/pkg`.
fn validate_name(name: &str) -> Result<()> {
    fn valid_segment(segment: &str) -> bool {
        !segment.trim().is_empty()
            && segment != "."
            && segment != ".."
            && !segment.contains(['\\', '"'])
    }

    let segments: Vec<&str> = name.split('/').collect();
    let valid = match segments.as_slice() {
        [single] => valid_segment(single) && !single.starts_with('@'),
        [scope, package] => {
            scope.len() > 1
                && scope.starts_with('@')
                && valid_segment(scope)
                && valid_segment(package)
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FsError::InvalidModuleName(name.to_string()))
    }
}

/// Scaffolds `module` under `/node_modules` in `store`.
pub fn create_module(module: &ModuleDescriptor, store: &dyn FileSystem) -> Result<()> {
    create_module_with(module, store, &ScaffoldConfig::default())
}

/// Scaffolds `module` using the modules directory and entry point from `config`.
pub fn create_module_with(
    module: &ModuleDescriptor,
    store: &dyn FileSystem,
    config: &ScaffoldConfig,
) -> Result<()> {
    config.validate()?;
    validate_name(&module.name)?;

    let base = PathOrigin::new(store, config.package_dir(&module.name));
    let manifest = serde_json::to_string(&Manifest {
        name: &module.name,
        main: &config.entry_point,
    })?;

    mkdirp(&base)?;
    create_file(&base.join("index.js"), module.implementation_source())?;
    create_file(&base.join("index.d.ts"), module.declaration_source())?;
    create_file(&base.join("package.json"), manifest)?;

    debug!(name = %module.name, dir = %base.path, "Scaffolded module");
    Ok(())
}
