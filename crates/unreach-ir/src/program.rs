//! The whole-program container (§6 Inputs): everything the loader
//! hands the engine in one value.

use crate::assembly::AssemblyMap;
use crate::concrete_type::ConcreteType;
use crate::declaration::Declaration;
use crate::function::Function;
use crate::ids::{ConcreteTypeId, DeclId, FuncId, InterfaceId, PackageId};
use crate::interface_type::InterfaceType;
use crate::package::Package;

/// A fully loaded program: packages, SSA functions, declarations
/// (including generic templates with no SSA body), and the
/// concrete/interface type universe.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub packages: Vec<Package>,
    pub functions: Vec<Function>,
    pub declarations: Vec<Declaration>,
    pub concrete_types: Vec<ConcreteType>,
    pub interfaces: Vec<InterfaceType>,
    pub assembly: AssemblyMap,
    /// The identity of `reflect.Value.Call` (or this language's
    /// equivalent), if the program imports it. Its presence flips on
    /// the conservative address-taken-via-reflection model (I3, §4.5
    /// "Address-taken / dynamic-call cross-product").
    pub reflect_value_call: Option<FuncId>,
    /// The identity of the runtime finalizer-registration routine
    /// (`runtime.SetFinalizer` or equivalent), if imported (§4.6(g)).
    pub finalizer_register: Option<FuncId>,
}

impl Program {
    pub fn get_function(&self, id: FuncId) -> Option<&Function> {
        self.functions.get(id.index())
    }

    pub fn get_declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    pub fn get_concrete_type(&self, id: ConcreteTypeId) -> Option<&ConcreteType> {
        self.concrete_types.get(id.index())
    }

    pub fn get_interface(&self, id: InterfaceId) -> Option<&InterfaceType> {
        self.interfaces.get(id.index())
    }

    pub fn get_package(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Ergonomic, monotonically-growing construction of a [`Program`],
/// assigning each entity its id as it is added — mirrors
/// `raya-compiler`'s `ModuleBuilder`.
#[derive(Debug, Clone, Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&mut self, mut package: Package) -> PackageId {
        let id = PackageId::new(self.program.packages.len() as u32);
        package.id = id;
        self.program.packages.push(package);
        id
    }

    pub fn add_function(&mut self, mut function: Function) -> FuncId {
        let id = FuncId::new(self.program.functions.len() as u32);
        function.id = id;
        self.program.functions.push(function);
        id
    }

    pub fn add_declaration(&mut self, mut decl: Declaration) -> DeclId {
        let id = DeclId::new(self.program.declarations.len() as u32);
        decl.id = id;
        self.program.declarations.push(decl);
        id
    }

    pub fn add_concrete_type(&mut self, mut ty: ConcreteType) -> ConcreteTypeId {
        let id = ConcreteTypeId::new(self.program.concrete_types.len() as u32);
        ty.id = id;
        self.program.concrete_types.push(ty);
        id
    }

    pub fn add_interface(&mut self, mut iface: InterfaceType) -> InterfaceId {
        let id = InterfaceId::new(self.program.interfaces.len() as u32);
        iface.id = id;
        self.program.interfaces.push(iface);
        id
    }

    pub fn set_reflect_value_call(&mut self, id: FuncId) -> &mut Self {
        self.program.reflect_value_call = Some(id);
        self
    }

    pub fn set_finalizer_register(&mut self, id: FuncId) -> &mut Self {
        self.program.finalizer_register = Some(id);
        self
    }

    pub fn assembly_mut(&mut self) -> &mut AssemblyMap {
        &mut self.program.assembly
    }

    pub fn build(self) -> Program {
        self.program
    }
}
