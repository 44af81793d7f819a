//! Canonical Name Cache (C1, §4.1).
//!
//! Deterministic identity strings for functions, methods, and types,
//! bridging the SSA view and the type-system view. Entries are
//! immutable once written, so concurrent readers and inserters never
//! race on a key (§5) — a `DashMap` gives us that without hand-rolled
//! locking, the same way `raya-stdlib-posix`'s handle registry reaches
//! for it over a `Mutex<HashMap<_>>`.

use dashmap::DashMap;
use std::sync::Arc;
use unreach_ir::{ConcreteTypeId, DeclKind, Declaration, FuncId, InterfaceId, PackageId, Program, TypeRef};

#[derive(Default)]
pub struct NameCache {
    concrete_types: DashMap<ConcreteTypeId, Arc<str>>,
    interfaces: DashMap<InterfaceId, Arc<str>>,
    functions: DashMap<FuncId, Arc<str>>,
}

fn package_path(program: &Program, pkg: PackageId) -> &str {
    program.get_package(pkg).map(|p| p.path.as_str()).unwrap_or("<unknown-package>")
}

fn bracketed(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("[{}]", params.join(", "))
    }
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<pkg-path>.<type-name>[args-or-params]`; builtins/unnamed
    /// types fall back to their printed form with no package prefix.
    pub fn concrete_type_name(&self, program: &Program, id: ConcreteTypeId) -> Arc<str> {
        if let Some(hit) = self.concrete_types.get(&id) {
            return hit.clone();
        }
        let computed: Arc<str> = match program.get_concrete_type(id) {
            Some(ty) => Arc::from(format!(
                "{}.{}{}",
                package_path(program, ty.package),
                ty.name,
                bracketed(&ty.type_params)
            )),
            None => Arc::from(format!("<unresolved-type-{}>", id.0)),
        };
        self.concrete_types.insert(id, computed.clone());
        computed
    }

    pub fn interface_name(&self, program: &Program, id: InterfaceId) -> Arc<str> {
        if let Some(hit) = self.interfaces.get(&id) {
            return hit.clone();
        }
        let computed: Arc<str> = match program.get_interface(id) {
            Some(iface) => Arc::from(format!("{}.{}", package_path(program, iface.package), iface.name)),
            None => Arc::from(format!("<unresolved-interface-{}>", id.0)),
        };
        self.interfaces.insert(id, computed.clone());
        computed
    }

    /// Resolve any `TypeRef` to its printed form, for pointer and
    /// primitive types which have no id of their own to cache under.
    pub fn type_name(&self, program: &Program, ty: &TypeRef) -> Arc<str> {
        match ty {
            TypeRef::Concrete(id) => self.concrete_type_name(program, *id),
            TypeRef::Interface(id) => self.interface_name(program, *id),
            TypeRef::Pointer(inner) => Arc::from(format!("*{}", self.type_name(program, inner))),
            TypeRef::Primitive(p) => Arc::from(format!("{:?}", p).to_lowercase()),
            TypeRef::TypeParam(n) => Arc::from(format!("T{}", n)),
        }
    }

    /// `<pkg-path>.<name>` for a function, or
    /// `<pkg-path>.<receiver-type-name>[params].<method-name>` for a
    /// method, with a leading `*` on the receiver when it is a pointer
    /// receiver.
    pub fn function_name(&self, program: &Program, id: FuncId) -> Arc<str> {
        if let Some(hit) = self.functions.get(&id) {
            return hit.clone();
        }
        let computed: Arc<str> = match program.get_function(id) {
            Some(f) => {
                let pkg = package_path(program, f.package);
                match f.receiver {
                    Some(recv) => {
                        let recv_name = match program.get_concrete_type(recv) {
                            Some(ty) => format!("{}{}", ty.name, bracketed(&ty.type_params)),
                            None => format!("<unresolved-type-{}>", recv.0),
                        };
                        let star = if f.receiver_is_pointer { "*" } else { "" };
                        Arc::from(format!("{}.{}{}.{}", pkg, star, recv_name, f.name))
                    }
                    None => Arc::from(format!("{}.{}", pkg, f.name)),
                }
            }
            None => Arc::from(format!("<unresolved-func-{}>", id.0)),
        };
        self.functions.insert(id, computed.clone());
        computed
    }

    /// The same naming scheme as [`NameCache::function_name`], built
    /// directly from a [`Declaration`] — used for the reporting pass,
    /// where uninstantiated generic templates have no SSA function to
    /// key a lookup on.
    pub fn declaration_name(&self, program: &Program, decl: &Declaration) -> Arc<str> {
        let pkg = package_path(program, decl.package);
        match &decl.kind {
            DeclKind::Method { receiver, by_pointer } => {
                let recv_name = match program.get_concrete_type(*receiver) {
                    Some(ty) => format!("{}{}", ty.name, bracketed(&ty.type_params)),
                    None => format!("<unresolved-type-{}>", receiver.0),
                };
                let star = if *by_pointer { "*" } else { "" };
                Arc::from(format!("{}.{}{}.{}", pkg, star, recv_name, decl.name))
            }
            DeclKind::Function => Arc::from(format!("{}.{}", pkg, decl.name)),
        }
    }
}
