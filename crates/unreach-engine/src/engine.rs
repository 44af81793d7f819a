//! RTA Engine (C5): the worklist fixed point over SSA instructions.
//!
//! A function enters the reachable set either as a root (C4) or
//! because some already-reachable function's instructions produced an
//! edge to it. Visiting a function scans its instructions once,
//! dispatching on instruction kind and folding in the precision
//! extensions (C6) before the generic operand scan records any
//! remaining address-taken functions. The worklist is double-buffered
//! so draining one generation never reallocates into the generation
//! being built.

use crate::name::NameCache;
use crate::precision;
use crate::type_index::TypeIndex;
use crate::entry::EntryPoints;
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use unreach_ir::{
    CallInstr, CallTarget, ChangeInterfaceInstr, ConcreteTypeId, DeclId, FuncId, InterfaceId,
    Instr, MakeInterfaceInstr, Method, Package, Program, Signature, TypeAssertInstr, TypeRef,
};

#[derive(Debug, Default)]
pub struct EngineOutput {
    pub reachable: FxHashSet<FuncId>,
    pub addr_taken: FxHashSet<FuncId>,
    pub reachable_objects: FxHashSet<DeclId>,
}

pub struct Engine<'p> {
    program: &'p Program,
    names: NameCache,
    types: TypeIndex,
    reachable: FxHashSet<FuncId>,
    addr_taken: FxHashSet<FuncId>,
    reachable_objects: FxHashSet<DeclId>,
    addr_taken_by_sig: FxHashMap<Signature, FxHashSet<FuncId>>,
    dynamic_sites: FxHashSet<Signature>,
    invoke_methods_by_iface: FxHashMap<InterfaceId, FxHashSet<Method>>,
    current: Vec<FuncId>,
    next: Vec<FuncId>,
}

fn underlying_concrete(ty: &TypeRef) -> Option<ConcreteTypeId> {
    match ty {
        TypeRef::Concrete(id) => Some(*id),
        TypeRef::Pointer(inner) => underlying_concrete(inner),
        _ => None,
    }
}

impl<'p> Engine<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            names: NameCache::new(),
            types: TypeIndex::new(),
            reachable: FxHashSet::default(),
            addr_taken: FxHashSet::default(),
            reachable_objects: FxHashSet::default(),
            addr_taken_by_sig: FxHashMap::default(),
            dynamic_sites: FxHashSet::default(),
            invoke_methods_by_iface: FxHashMap::default(),
            current: Vec::new(),
            next: Vec::new(),
        }
    }

    pub fn run(mut self, entries: &EntryPoints) -> EngineOutput {
        for &f in &entries.functions {
            self.mark_reachable(f);
        }
        for &d in &entries.exported_template_objects {
            self.reachable_objects.insert(d);
        }
        self.drain();
        EngineOutput {
            reachable: self.reachable,
            addr_taken: self.addr_taken,
            reachable_objects: self.reachable_objects,
        }
    }

    fn drain(&mut self) {
        let mut generation = 0u32;
        while !self.next.is_empty() {
            std::mem::swap(&mut self.current, &mut self.next);
            self.next.clear();
            generation += 1;
            debug!("worklist generation {generation}: {} functions", self.current.len());
            let batch = std::mem::take(&mut self.current);
            for f in batch {
                self.visit_function(f);
            }
        }
    }

    /// Adds `f` to the reachable set and, if newly added, enqueues it
    /// for visiting and links its generic-template origin (extension
    /// h) without enqueuing the template itself.
    fn mark_reachable(&mut self, f: FuncId) -> bool {
        if !self.reachable.insert(f) {
            return false;
        }
        self.next.push(f);
        if let Some(template) = self.program.get_function(f).and_then(|func| func.origin.template()) {
            if self.reachable.insert(template) {
                trace!("{f} links its origin template {template} reachable (no enqueue)");
            }
        }
        true
    }

    fn record_address_taken(&mut self, f: FuncId) {
        if !self.addr_taken.insert(f) {
            return;
        }
        if let Some(func) = self.program.get_function(f) {
            self.addr_taken_by_sig.entry(func.signature.clone()).or_default().insert(f);
            if self.dynamic_sites.contains(&func.signature) {
                self.mark_reachable(f);
            }
        }
        if self.program.reflect_value_call.is_some() {
            trace!("{f} address-taken with reflect.Value.Call in program, forcing reachable");
            self.mark_reachable(f);
        }
    }

    fn visit_dynamic_call(&mut self, sig: &Signature) {
        self.dynamic_sites.insert(sig.clone());
        if let Some(funcs) = self.addr_taken_by_sig.get(sig) {
            let funcs: Vec<FuncId> = funcs.iter().copied().collect();
            for f in funcs {
                self.mark_reachable(f);
            }
        }
    }

    fn close_invoke_edge(&mut self, concrete: ConcreteTypeId, method: &Method) {
        if let Some(ty) = self.program.get_concrete_type(concrete) {
            if let Some(implementation) = ty.resolve(method) {
                let func = implementation.func;
                self.mark_reachable(func);
                self.record_address_taken(func);
            }
        }
    }

    fn visit_invoke(&mut self, interface: InterfaceId, method: &Method) {
        self.invoke_methods_by_iface.entry(interface).or_default().insert(method.clone());
        let implementers: Vec<ConcreteTypeId> = self
            .types
            .known_implementers(interface)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        for concrete in implementers {
            self.close_invoke_edge(concrete, method);
        }
    }

    fn on_new_runtime_type(&mut self, concrete: ConcreteTypeId) {
        let newly = self.types.record_runtime_type(self.program, concrete);
        for iface in newly {
            if let Some(methods) = self.invoke_methods_by_iface.get(&iface).cloned() {
                for method in methods {
                    self.close_invoke_edge(concrete, &method);
                }
            }
        }
    }

    fn is_exported(&self, f: FuncId) -> bool {
        self.program
            .get_function(f)
            .and_then(|func| func.declaration)
            .and_then(|d| self.program.get_declaration(d))
            .map(|d| d.exported)
            .unwrap_or(false)
    }

    fn mark_all_exported_methods(&mut self, concrete: ConcreteTypeId) {
        let Some(ty) = self.program.get_concrete_type(concrete) else { return };
        let funcs: Vec<FuncId> = ty.methods.iter().map(|m| m.func).collect();
        for f in funcs {
            if self.is_exported(f) {
                self.mark_reachable(f);
                self.record_address_taken(f);
            }
        }
    }

    fn mark_methods_by_name(&mut self, concrete: ConcreteTypeId, names: &[&str]) {
        let Some(ty) = self.program.get_concrete_type(concrete) else { return };
        let funcs: Vec<FuncId> = ty
            .methods
            .iter()
            .filter(|m| names.contains(&m.method.name.as_str()))
            .map(|m| m.func)
            .collect();
        for f in funcs {
            self.mark_reachable(f);
            self.record_address_taken(f);
        }
    }

    fn visit_make_interface(&mut self, m: &MakeInterfaceInstr, known_safe: Option<&[&str]>) {
        if let Some(pointed) = m.pointer_to_interface {
            self.types.build_user_types_index(self.program);
            let implementers = self.types.implementations(self.program, pointed);
            let Some(iface) = self.program.get_interface(pointed) else { return };
            let methods = iface.methods.clone();
            for concrete in implementers {
                self.on_new_runtime_type(concrete);
                for method in &methods {
                    self.close_invoke_edge(concrete, method);
                }
            }
            return;
        }
        let Some(target) = m.target_interface else { return };
        let Some(iface) = self.program.get_interface(target) else { return };
        let Some(concrete) = underlying_concrete(&m.operand_type) else { return };

        if iface.is_empty() {
            self.on_new_runtime_type(concrete);
            match known_safe {
                Some(safe_methods) => self.mark_methods_by_name(concrete, safe_methods),
                None => self.mark_all_exported_methods(concrete),
            }
        } else {
            self.on_new_runtime_type(concrete);
            let methods = iface.methods.clone();
            for method in &methods {
                self.close_invoke_edge(concrete, method);
            }
        }
    }

    fn visit_type_assert(&mut self, t: &TypeAssertInstr, current_package: Option<&Package>) {
        let source_nonempty = t
            .source_interface
            .and_then(|id| self.program.get_interface(id))
            .map(|iface| !iface.is_empty())
            .unwrap_or(false);

        match &t.target {
            TypeRef::Concrete(concrete) if source_nonempty => {
                let source = t.source_interface.expect("checked above");
                let Some(src_iface) = self.program.get_interface(source) else { return };
                let methods = src_iface.methods.clone();
                self.on_new_runtime_type(*concrete);
                for method in &methods {
                    self.close_invoke_edge(*concrete, method);
                }
            }
            TypeRef::Interface(target_iface) => {
                let Some(ti) = self.program.get_interface(*target_iface) else { return };
                if ti.is_empty() {
                    return;
                }
                self.types.build_user_types_index(self.program);
                let is_stdlib = current_package.map(|p| p.is_stdlib).unwrap_or(false);
                let implementations = self.types.implementations(self.program, *target_iface);
                let candidates: Vec<ConcreteTypeId> = if is_stdlib {
                    self.types.runtime_types().intersection(&implementations).copied().collect()
                } else {
                    implementations.into_iter().collect()
                };
                let methods = ti.methods.clone();
                for concrete in candidates {
                    for method in &methods {
                        self.close_invoke_edge(concrete, method);
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_change_interface(&mut self, c: &ChangeInterfaceInstr) {
        let Some(ti) = self.program.get_interface(c.target_interface) else { return };
        if ti.is_empty() {
            return;
        }
        self.types.build_user_types_index(self.program);
        let methods = ti.methods.clone();
        let implementers = self.types.implementations(self.program, c.target_interface);
        for concrete in implementers {
            for method in &methods {
                self.close_invoke_edge(concrete, method);
            }
        }
    }

    fn visit_call(&mut self, instrs: &[Instr], call: &CallInstr) {
        match &call.target {
            CallTarget::Static(callee) => {
                self.mark_reachable(*callee);
                if let Some(target) = precision::finalizer::finalizer_target(self.program, instrs, call) {
                    self.mark_reachable(target);
                    self.record_address_taken(target);
                }
            }
            CallTarget::Dynamic(sig) => self.visit_dynamic_call(sig),
            CallTarget::Invoke { interface, method } => self.visit_invoke(*interface, method),
        }
    }

    fn visit_function(&mut self, f: FuncId) {
        let program = self.program;
        let Some(function) = program.get_function(f) else { return };
        trace!("visiting {f} ({})", function.name);
        let known_safe = precision::known_safe::known_safe_methods(function, program, &self.names);
        let package = program.get_package(function.package);
        let instrs: Vec<Instr> = function.instrs().cloned().collect();

        for instr in &instrs {
            match instr {
                Instr::Call(call) => self.visit_call(&instrs, call),
                Instr::MakeInterface(m) => self.visit_make_interface(m, known_safe.as_deref()),
                Instr::TypeAssert(t) => self.visit_type_assert(t, package),
                Instr::ChangeInterface(c) => self.visit_change_interface(c),
                Instr::Other { .. } => {}
            }
            for addr in instr.address_taken_candidates() {
                self.record_address_taken(addr);
            }
        }
    }
}
