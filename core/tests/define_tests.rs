use std::cell::RefCell;
use std::rc::Rc;

use propflags::runtime::value::symbol::JsSymbol;
use propflags::{
    AccessorPair, Context, JsValue, ObjectRef, PropertyDescriptor, RuntimeError,
    define_flagged_property,
};

fn getter_val() -> JsValue {
    JsValue::native("get", |_| Ok(JsValue::from("val")))
}

fn recording_setter() -> (JsValue, Rc<RefCell<Vec<JsValue>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let setter = JsValue::native("set", move |args| {
        sink.borrow_mut().push(args.arg(0));
        Ok(JsValue::Undefined)
    });
    (setter, seen)
}

fn noop_setter() -> JsValue {
    JsValue::native("set", |_| Ok(JsValue::Undefined))
}

fn obj() -> (Context, ObjectRef) {
    let ctx = Context::new();
    let o = ctx.new_object();
    (ctx, o)
}

fn assert_not_redefinable(ctx: &Context, o: &ObjectRef) {
    let err = ctx
        .define_property(o, "a", PropertyDescriptor::default().with_writable(true))
        .expect_err("writable redefinition should be rejected");
    assert!(matches!(err, RuntimeError::Redefine { .. }));
    let err = ctx
        .define_property(o, "a", PropertyDescriptor::data(JsValue::from("x")))
        .expect_err("value redefinition should be rejected");
    assert!(matches!(err, RuntimeError::Redefine { .. }));
}

#[test]
fn default_mask_stores_array_verbatim() {
    let (ctx, o) = obj();
    let get = getter_val();
    let set = noop_setter();
    let pair = JsValue::array(vec![get.clone(), set.clone()]);

    define_flagged_property(&o, "a", pair.clone(), 0u8).expect("define should succeed");

    assert!(ctx.has_own_property(&o, "a"));
    let stored = ctx.get(&o, "a").expect("read");
    assert_eq!(stored, pair);
    let JsValue::Array(arr) = stored else {
        panic!("expected array value");
    };
    assert!(arr.borrow().includes(&get));
    assert!(arr.borrow().includes(&set));

    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.value.is_some());
    assert!(!ctx.property_is_enumerable(&o, "a"));
    assert!(ctx.keys(&o).is_empty());

    let err = ctx
        .set(&o, "a", JsValue::array(Vec::new()))
        .expect_err("write should fail");
    assert!(matches!(err, RuntimeError::ReadOnly { .. }));
    assert_not_redefinable(&ctx, &o);
}

#[test]
fn accessor_pair_from_letter_code() {
    let (ctx, o) = obj();
    let pair = JsValue::array(vec![getter_val(), noop_setter()]);

    define_flagged_property(&o, "a", pair, "a").expect("define should succeed");

    assert!(ctx.has_own_property(&o, "a"));
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::from("val"));
    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.value.is_none());
    assert!(desc.get.is_some());
    assert!(desc.set.is_some());
    assert!(!ctx.property_is_enumerable(&o, "a"));
    assert!(ctx.set(&o, "a", JsValue::from("")).expect("write through setter"));
    assert_not_redefinable(&ctx, &o);
}

#[test]
fn accessor_pair_from_bitmask() {
    let (ctx, o) = obj();
    let (setter, seen) = recording_setter();
    let pair = JsValue::array(vec![getter_val(), setter]);

    define_flagged_property(&o, "a", pair, 0b1000u8).expect("define should succeed");

    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::from("val"));
    assert!(ctx.set(&o, "a", JsValue::Number(7.0)).expect("write"));
    assert_eq!(*seen.borrow(), vec![JsValue::Number(7.0)]);
    assert_not_redefinable(&ctx, &o);
}

#[test]
fn enumerable_from_letter_code_and_bitmask() {
    for flags in [propflags::FlagSpec::from("e"), propflags::FlagSpec::from(0b0010u8)] {
        let (ctx, o) = obj();
        define_flagged_property(&o, "a", JsValue::Number(5.0), flags).expect("define");

        assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(5.0));
        assert!(ctx.property_is_enumerable(&o, "a"));
        assert_eq!(ctx.keys(&o), vec!["a".to_string()]);

        let err = ctx
            .set(&o, "a", JsValue::Number(3.0))
            .expect_err("write should fail");
        assert!(matches!(err, RuntimeError::ReadOnly { .. }));
        assert_not_redefinable(&ctx, &o);
    }
}

#[test]
fn enumerable_writable_can_only_be_locked_further() {
    for flags in [propflags::FlagSpec::from("ew"), propflags::FlagSpec::from(0b0011u8)] {
        let (ctx, o) = obj();
        define_flagged_property(&o, "a", JsValue::Number(5.0), flags).expect("define");

        assert!(ctx.property_is_enumerable(&o, "a"));
        assert!(ctx.set(&o, "a", JsValue::Number(3.0)).expect("write"));
        assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(3.0));

        let err = ctx
            .define_property(&o, "a", PropertyDescriptor::default().with_enumerable(false))
            .expect_err("enumerable change should be rejected");
        assert!(matches!(err, RuntimeError::Redefine { .. }));

        ctx.define_property(&o, "a", PropertyDescriptor::default().with_writable(false))
            .expect("dropping writable is allowed");
        let err = ctx
            .set(&o, "a", JsValue::Number(5.0))
            .expect_err("write should now fail");
        assert!(matches!(err, RuntimeError::ReadOnly { .. }));
        assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(3.0));
    }
}

#[test]
fn configurable_allows_direct_redefinition() {
    for flags in [propflags::FlagSpec::from("c"), propflags::FlagSpec::from(0b0100u8)] {
        let (ctx, o) = obj();
        define_flagged_property(&o, "a", JsValue::Number(5.0), flags).expect("define");

        assert!(!ctx.property_is_enumerable(&o, "a"));
        assert!(ctx.keys(&o).is_empty());
        assert!(ctx.set(&o, "a", JsValue::array(Vec::new())).is_err());

        ctx.define_property(
            &o,
            "a",
            PropertyDescriptor::default()
                .with_writable(true)
                .with_enumerable(true),
        )
        .expect("configurable property can be redefined");

        assert!(ctx.property_is_enumerable(&o, "a"));
        assert_eq!(ctx.keys(&o), vec!["a".to_string()]);
        assert!(ctx.set(&o, "a", JsValue::Number(3.0)).expect("write"));
        assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(3.0));
    }
}

#[test]
fn getter_only_rejects_writes_and_has_no_setter() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", AccessorPair::getter(getter_val()), "a").expect("define");

    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.get.is_some());
    assert!(desc.set.is_none());
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::from("val"));

    let err = ctx
        .set(&o, "a", JsValue::Number(1.0))
        .expect_err("getter-only write should fail");
    assert!(matches!(err, RuntimeError::GetterOnly { .. }));
}

#[test]
fn setter_only_reads_undefined_and_has_no_getter() {
    let (ctx, o) = obj();
    let (setter, seen) = recording_setter();
    define_flagged_property(&o, "a", AccessorPair::setter(setter), "a").expect("define");

    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.get.is_none());
    assert!(desc.set.is_some());
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Undefined);
    assert!(ctx.set(&o, "a", JsValue::from("x")).expect("write"));
    assert_eq!(*seen.borrow(), vec![JsValue::from("x")]);
}

#[test]
fn falsy_array_slots_are_left_out() {
    let (ctx, o) = obj();
    let pair = JsValue::array(vec![JsValue::Null, noop_setter()]);
    define_flagged_property(&o, "a", pair, "A").expect("define");

    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert_eq!(desc.get, None);
    assert!(desc.set.is_some());
}

#[test]
fn accessor_pair_under_data_flags_is_stored_as_array() {
    let (ctx, o) = obj();
    let get = getter_val();
    define_flagged_property(&o, "a", AccessorPair::getter(get.clone()), "e").expect("define");

    let JsValue::Array(arr) = ctx.get(&o, "a").expect("read") else {
        panic!("expected array value");
    };
    assert_eq!(arr.borrow().elements, vec![get, JsValue::Undefined]);
}

#[test]
fn reinvoking_on_non_configurable_key_fails() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", JsValue::Number(1.0), "e").expect("first define");

    for flags in ["e", "ec", "ew", ""] {
        let err = define_flagged_property(&o, "a", JsValue::Number(2.0), flags)
            .expect_err("second define should fail");
        assert!(matches!(err, RuntimeError::Redefine { .. }), "{flags}");
    }
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(1.0));
}

#[test]
fn reinvoking_accessor_with_new_functions_fails() {
    let (_ctx, o) = obj();
    define_flagged_property(&o, "a", AccessorPair::getter(getter_val()), "a").expect("define");

    let err = define_flagged_property(&o, "a", AccessorPair::getter(getter_val()), "a")
        .expect_err("different getter should be rejected");
    assert!(matches!(err, RuntimeError::Redefine { .. }));
}

#[test]
fn writable_non_configurable_still_accepts_a_new_value() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", JsValue::Number(1.0), "w").expect("first define");
    define_flagged_property(&o, "a", JsValue::Number(2.0), "w").expect("value update");

    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(2.0));
}

#[test]
fn reinvoking_on_configurable_key_changes_flags() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", JsValue::Number(1.0), "c").expect("first define");
    define_flagged_property(&o, "a", JsValue::Number(2.0), "ewc").expect("second define");

    assert!(ctx.property_is_enumerable(&o, "a"));
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Number(2.0));
}

#[test]
fn non_callable_getter_slot_is_rejected_by_define() {
    let (ctx, o) = obj();
    let pair = JsValue::array(vec![JsValue::Number(1.0)]);

    let err = define_flagged_property(&o, "a", pair, "a").expect_err("getter must be callable");
    assert!(matches!(err, RuntimeError::NotCallable { role: "getter", .. }));
    assert!(!ctx.has_own_property(&o, "a"));
}

#[test]
fn returns_target_for_chaining() {
    let (ctx, o) = obj();
    let returned = define_flagged_property(&o, "a", JsValue::Number(1.0), "e")
        .and_then(|t| define_flagged_property(&t, "b", JsValue::Number(2.0), "e"))
        .expect("chained defines");

    assert!(Rc::ptr_eq(&returned, &o));
    assert_eq!(ctx.keys(&o), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn symbol_keys_are_supported() {
    let (ctx, o) = obj();
    let sym = JsSymbol::new(Some("tag".into()));
    ctx.define_flagged_property(&o, &sym, JsValue::from("x"), "e")
        .expect("define");

    assert_eq!(ctx.get(&o, &sym).expect("read"), JsValue::from("x"));
    assert!(ctx.property_is_enumerable(&o, &sym));
    assert!(ctx.keys(&o).is_empty());
}

#[test]
fn getter_receives_target_as_this() {
    let (ctx, o) = obj();
    o.borrow_mut().insert("name", JsValue::from("rex"));
    let getter = JsValue::native("get", |args| {
        let JsValue::Object(this) = args.this() else {
            return Ok(JsValue::Undefined);
        };
        Context::new().get(this, "name")
    });
    define_flagged_property(&o, "greeting", AccessorPair::getter(getter), "a").expect("define");

    assert_eq!(ctx.get(&o, "greeting").expect("read"), JsValue::from("rex"));
}

#[test]
fn installed_flags_read_back_as_decoded() {
    let (_ctx, o) = obj();
    for (key, code) in [("data", "ecw"), ("acc", "ca")] {
        define_flagged_property(&o, key, AccessorPair::getter(getter_val()), code).expect("define");
    }

    let borrowed = o.borrow();
    let read = |key: &str| {
        let prop = borrowed.get_own(&key.into()).expect("installed");
        propflags::PropertyFlags::of(prop)
    };
    assert_eq!(read("data"), propflags::PropertyFlags::from_letters("wec"));
    assert_eq!(read("acc"), propflags::PropertyFlags::from_letters("ac"));
}

#[test]
fn accessor_slots_of_a_string_are_its_characters() {
    let (ctx, o) = obj();
    let err = define_flagged_property(&o, "a", JsValue::from("ab"), "a")
        .expect_err("a one-character string is not a getter");
    assert!(matches!(err, RuntimeError::NotCallable { role: "getter", .. }));
    assert!(!ctx.has_own_property(&o, "a"));
}

#[test]
fn accessor_slots_of_an_object_are_keys_zero_and_one() {
    let (ctx, o) = obj();
    let mut holder = propflags::JsObject::new();
    holder.insert("0", getter_val());
    let holder = JsValue::object(holder);

    define_flagged_property(&o, "a", holder, 8).expect("define");

    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::from("val"));
    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.set.is_none());
}

#[test]
fn accessor_slots_of_undefined_or_null_are_a_type_error() {
    for value in [JsValue::Undefined, JsValue::Null] {
        let (ctx, o) = obj();
        let err = define_flagged_property(&o, "a", value, "a").expect_err("cannot index");
        assert!(matches!(err, RuntimeError::TypeError { .. }));
        assert!(!ctx.has_own_property(&o, "a"));
    }
}

#[test]
fn accessor_slots_of_a_number_are_absent() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", JsValue::Number(1.0), "ea").expect("define");

    assert!(ctx.property_is_enumerable(&o, "a"));
    assert_eq!(ctx.get(&o, "a").expect("read"), JsValue::Undefined);
}

#[test]
fn unsuffixed_mask_literal_defines_property() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", JsValue::Number(5.0), 3).expect("define");

    assert!(ctx.property_is_enumerable(&o, "a"));
    assert!(ctx.set(&o, "a", JsValue::Number(4.0)).expect("write"));
}

#[test]
fn accessor_with_both_functions_cleared_still_reports_accessor() {
    let (ctx, o) = obj();
    define_flagged_property(&o, "a", AccessorPair::getter(getter_val()), "ac").expect("define");
    ctx.define_property(&o, "a", PropertyDescriptor::accessor(Some(JsValue::Undefined), None))
        .expect("clear getter");

    let desc = ctx.get_own_property_descriptor(&o, "a").expect("descriptor");
    assert!(desc.is_accessor());
    assert_eq!(desc.get, Some(JsValue::Undefined));
    assert_eq!(desc.set, Some(JsValue::Undefined));

    let reported = desc.to_object().wrapped();
    assert!(ctx.has_own_property(&reported, "get"));
    assert!(ctx.has_own_property(&reported, "set"));
    assert!(!ctx.has_own_property(&reported, "value"));
}
