//! Interface satisfaction: the pointer-to-interface-to-`any` pattern,
//! the pointer-receiver method-set swap, and alias identity.

use super::harness::*;
use unreach_engine::{analyze, AnalysisConfig};
use unreach_ir::{
    BasicBlock, CallInstr, CallTarget, ConcreteType, ConcreteTypeId, Function, FuncId, Instr,
    InterfaceId, InterfaceType, MakeInterfaceInstr, Method, MethodImpl, NoSuppression, Operand,
    ProgramBuilder, Signature, TypeRef, ValueId,
};

/// A marker method is kept reachable purely through the
/// pointer-to-interface-to-`any` MakeInterface pattern, without a
/// direct invoke site of its own.
#[test]
fn marker_method_kept_by_pointer_to_interface_pattern() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "app");

    let app_error = b.add_interface(InterfaceType {
        id: InterfaceId::new(0),
        name: "AppError".into(),
        package: pkg,
        methods: vec![Method::new("Error", 0, 1), Method::new("marker", 0, 0)],
    });

    let marker_fn = b.add_function(Function::new(FuncId::new(0), "marker", pkg, Signature::new(vec![], vec![])));
    let error_fn = b.add_function(Function::new(FuncId::new(0), "Error", pkg, Signature::new(vec![], vec![])));

    b.add_concrete_type(ConcreteType {
        id: ConcreteTypeId::new(0),
        name: "NotFoundError".into(),
        package: pkg,
        type_params: vec![],
        methods: vec![
            MethodImpl { method: Method::new("marker", 0, 0), func: marker_fn, by_pointer: false },
            MethodImpl { method: Method::new("Error", 0, 1), func: error_fn, by_pointer: false },
        ],
    });

    func_decl(&mut b, pkg, "marker", marker_fn, false);
    func_decl(&mut b, pkg, "Error", error_fn, false);

    let mut use_fn = Function::new(FuncId::new(0), "use", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: ValueId::new(0),
        target_interface: None,
        operand: Operand::Value(ValueId::new(1)),
        operand_type: TypeRef::Pointer(Box::new(TypeRef::Interface(app_error))),
        pointer_to_interface: Some(app_error),
    }));
    use_fn.add_block(block);
    let use_fn = b.add_function(use_fn);
    // exported so the entry collector seeds it directly, keeping this
    // scenario isolated to the MakeInterface pattern under test rather
    // than threading a separate `main` through it.
    func_decl(&mut b, pkg, "use", use_fn, true);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    assert!(report.results.is_empty());
}

/// A value-receiver interface method missing on `C` but present only
/// on `*C` resolves the invoke edge against `*C`.
#[test]
fn pointer_receiver_interface_satisfaction() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "main");

    let stringer = b.add_interface(InterfaceType {
        id: InterfaceId::new(0),
        name: "Stringer".into(),
        package: pkg,
        methods: vec![Method::new("String", 0, 1)],
    });

    let string_impl = b.add_function(Function::new(FuncId::new(0), "String", pkg, Signature::new(vec![], vec![])));
    let ty = b.add_concrete_type(ConcreteType {
        id: ConcreteTypeId::new(0),
        name: "Point".into(),
        package: pkg,
        type_params: vec![],
        methods: vec![MethodImpl { method: Method::new("String", 0, 1), func: string_impl, by_pointer: true }],
    });
    func_decl(&mut b, pkg, "String", string_impl, false);

    let mut main_fn = Function::new(FuncId::new(0), "main", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: ValueId::new(0),
        target_interface: Some(stringer),
        operand: Operand::Value(ValueId::new(1)),
        operand_type: TypeRef::Concrete(ty),
        pointer_to_interface: None,
    }));
    block.push(Instr::Call(CallInstr {
        dest: None,
        target: CallTarget::Invoke { interface: stringer, method: Method::new("String", 0, 1) },
        args: vec![],
    }));
    main_fn.add_block(block);
    let main_fn = b.add_function(main_fn);
    func_decl(&mut b, pkg, "main", main_fn, false);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();
    assert!(report.results.is_empty());
}

/// `type Foo = Bar` is the loader's job to collapse to a single
/// `ConcreteTypeId` before handing instructions to this crate (I7);
/// two call sites that box the aliased value into the same interface
/// by its one canonical id still resolve to a single reachable
/// method, not two independently-tracked ones.
#[test]
fn aliased_named_type_indexed_under_one_canonical_key() {
    init_logging();
    let mut b = ProgramBuilder::new();
    let pkg = package(&mut b, "example.com/app", "app");

    let stringer = b.add_interface(InterfaceType {
        id: InterfaceId::new(0),
        name: "Stringer".into(),
        package: pkg,
        methods: vec![Method::new("String", 0, 1)],
    });
    let string_impl = b.add_function(Function::new(FuncId::new(0), "String", pkg, Signature::new(vec![], vec![])));
    // `Bar`'s canonical id: both `Foo` (an alias) and `Bar` itself are
    // presented to this crate as this one ConcreteTypeId, per I7.
    let bar = b.add_concrete_type(ConcreteType {
        id: ConcreteTypeId::new(0),
        name: "Bar".into(),
        package: pkg,
        type_params: vec![],
        methods: vec![MethodImpl { method: Method::new("String", 0, 1), func: string_impl, by_pointer: false }],
    });
    func_decl(&mut b, pkg, "String", string_impl, false);

    // Two independent sites box the same canonical type into the same
    // interface — as if reached once through the `Foo` spelling and
    // once through the `Bar` spelling of the alias.
    let mut via_foo = Function::new(FuncId::new(0), "viaFoo", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: ValueId::new(0),
        target_interface: Some(stringer),
        operand: Operand::Value(ValueId::new(1)),
        operand_type: TypeRef::Concrete(bar),
        pointer_to_interface: None,
    }));
    via_foo.add_block(block);
    let via_foo = b.add_function(via_foo);
    func_decl(&mut b, pkg, "viaFoo", via_foo, true);

    let mut via_bar = Function::new(FuncId::new(0), "viaBar", pkg, Signature::new(vec![], vec![]));
    let mut block = BasicBlock::new();
    block.push(Instr::MakeInterface(MakeInterfaceInstr {
        dest: ValueId::new(0),
        target_interface: Some(stringer),
        operand: Operand::Value(ValueId::new(1)),
        operand_type: TypeRef::Concrete(bar),
        pointer_to_interface: None,
    }));
    via_bar.add_block(block);
    let via_bar = b.add_function(via_bar);
    func_decl(&mut b, pkg, "viaBar", via_bar, true);

    let program = b.build();
    let report = analyze(&program, &AnalysisConfig::default(), &NoSuppression).unwrap();

    // `String` is used through both alias spellings of the same
    // canonical type; it is reported exactly zero times, not flagged
    // as a stray duplicate under some second identity.
    assert!(report.results.is_empty());
}
