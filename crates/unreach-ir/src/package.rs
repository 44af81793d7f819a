//! Loaded packages (§4.4 "target package").

use crate::ids::PackageId;

/// A loaded package, as the host's loader presents it.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: PackageId,
    /// Full import path, e.g. `example.com/app/internal/svc`.
    pub path: String,
    pub name: String,
    /// The package belongs to the main module under analysis.
    pub in_main_module: bool,
    /// The package is part of the standard library / a vendored
    /// dependency, never a target package regardless of module
    /// membership.
    pub is_stdlib: bool,
    /// Set by the loader when this package failed to load cleanly
    /// (parse error, missing import, type-check failure) but was
    /// still included in the program (§7 "Input-degraded").
    pub load_error: Option<String>,
}

impl Package {
    /// A *target* package supplies entry points beyond program main
    /// (§4.4): user-authored code, in the main module, not stdlib.
    pub fn is_target(&self) -> bool {
        self.in_main_module && !self.is_stdlib
    }

    /// An internal-path package: `internal` as a whole path segment,
    /// anywhere in the path, or the path rooted at `internal`.
    pub fn is_internal_path(&self) -> bool {
        self.path.split('/').any(|segment| segment == "internal")
    }

    pub fn is_main_package(&self) -> bool {
        self.name == "main"
    }
}
