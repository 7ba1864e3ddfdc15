use crate::fixtures::example_schema;
use crate::fixtures::field;
use crate::fixtures::field_on;
use crate::fixtures::fragment;
use crate::fixtures::keys;
use crate::fixtures::n;
use crate::fixtures::on;
use crate::fixtures::query;
use crate::fixtures::render;
use crate::fixtures::spread;
use apollo_collector::execution::collect_fields;
use apollo_collector::execution::OperationContext;
use apollo_collector::name;
use apollo_collector::ExecutableDocument;
use expect_test::expect;
use pretty_assertions::assert_eq;

#[test]
fn spread_expands_in_place() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(field("a"))
                .with_selection(spread("Middle"))
                .with_selection(field("d")),
        )
        .with_fragment(
            fragment("Middle", "ExampleTypeA")
                .with_selection(field("b"))
                .with_selection(field("c")),
        );
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    assert_eq!(keys(&collected), ["a", "b", "c", "d"]);
}

#[test]
fn undefined_fragment_contributes_nothing() {
    let schema = example_schema();
    let document = ExecutableDocument::new().with_operation(
        query()
            .with_selection(field("a"))
            .with_selection(spread("Missing"))
            .with_selection(field("b")),
    );
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    assert_eq!(keys(&collected), ["a", "b"]);
}

#[test]
fn spread_type_condition_must_apply() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(spread("OnA"))
                .with_selection(spread("OnNamed"))
                .with_selection(spread("OnExample")),
        )
        .with_fragment(fragment("OnA", "ExampleTypeA").with_selection(field("onA")))
        .with_fragment(fragment("OnNamed", "Named").with_selection(field("onNamed")))
        .with_fragment(fragment("OnExample", "Example").with_selection(field("onExample")));
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let for_a = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    assert_eq!(keys(&for_a), ["onA", "onNamed", "onExample"]);

    let for_b = collect_fields(&ctx, "ExampleTypeB", selection_set, &[]);
    assert_eq!(keys(&for_b), ["onExample"]);

    let for_c = collect_fields(&ctx, "ExampleTypeC", selection_set, &[]);
    assert_eq!(keys(&for_c), ["onNamed"]);
}

#[test]
fn cyclic_spreads_terminate() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(field("top"))
                .with_selection(spread("First")),
        )
        .with_fragment(
            fragment("First", "ExampleTypeA")
                .with_selection(field("x"))
                .with_selection(spread("Second")),
        )
        .with_fragment(
            fragment("Second", "ExampleTypeA")
                .with_selection(field("y"))
                .with_selection(spread("First"))
                .with_selection(on("ExampleTypeA").with_selection(spread("Second"))),
        );
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    expect![[r#"
        top: top
        x: x
        y: y
    "#]]
    .assert_eq(&render(&collected));
}

#[test]
fn self_referencing_fragment() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(query().with_selection(spread("Loop")))
        .with_fragment(
            fragment("Loop", "ExampleTypeA")
                .with_selection(field("x"))
                .with_selection(spread("Loop")),
        );
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    assert_eq!(keys(&collected), ["x"]);
    assert_eq!(collected[0].fields().len(), 1);
}

#[test]
fn visited_fragments_from_the_caller_are_not_expanded() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(field("a"))
                .with_selection(spread("Outer"))
                .with_selection(spread("Inner")),
        )
        .with_fragment(fragment("Outer", "ExampleTypeA").with_selection(field("outer")))
        .with_fragment(fragment("Inner", "ExampleTypeA").with_selection(field("inner")));
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[name!("Outer")]);
    assert_eq!(keys(&collected), ["a", "inner"]);
}

#[test]
fn sibling_spreads_of_one_fragment_each_contribute() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(spread("Shared"))
                .with_selection(field("between"))
                .with_selection(spread("Shared")),
        )
        .with_fragment(fragment("Shared", "ExampleTypeA").with_selection(field("shared")));
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let collected = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    assert_eq!(keys(&collected), ["shared", "between"]);
    let contributors = collected[0].fields();
    assert_eq!(contributors.len(), 2);
    assert!(contributors[0].ptr_eq(&contributors[1]));
}

#[test]
fn nested_fragments_keep_depth_first_order() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(
            query()
                .with_selection(field_on("ExampleTypeA", "first"))
                .with_selection(
                    on("Example")
                        .with_selection(spread("Details"))
                        .with_selection(field_on("ExampleTypeA", "last")),
                ),
        )
        .with_fragment(
            fragment("Details", "Named")
                .with_selection(field_on("Named", "name"))
                .with_selection(
                    on("ExampleTypeA")
                        .with_selection(field_on("ExampleTypeA", "fieldA"))
                        .with_selection(field_on("ExampleTypeA", "first")),
                ),
        );
    let ctx = OperationContext::new(&document, &schema);
    let selection_set = &ctx.operation().unwrap().selection_set;

    let for_a = collect_fields(&ctx, "ExampleTypeA", selection_set, &[]);
    expect![[r#"
        first: ExampleTypeA.first, ExampleTypeA.first
        name: Named.name
        fieldA: ExampleTypeA.fieldA
        last: ExampleTypeA.last
    "#]]
    .assert_eq(&render(&for_a));

    // `ExampleTypeB` is in the union but does not implement `Named`
    let for_b = collect_fields(&ctx, "ExampleTypeB", selection_set, &[]);
    expect![[r#"
        first: ExampleTypeA.first
        last: ExampleTypeA.last
    "#]]
    .assert_eq(&render(&for_b));
}

#[test]
fn spread_lookup_uses_the_fragment_name() {
    let schema = example_schema();
    let document = ExecutableDocument::new()
        .with_operation(query().with_selection(spread("Frag")))
        .with_fragment(fragment("Frag", "ExampleTypeA").with_selection(field("x")));
    let ctx = OperationContext::new(&document, &schema);

    let frag = ctx.fragment("Frag").unwrap();
    assert_eq!(frag.type_condition(), &n("ExampleTypeA"));
    assert!(ctx.fragment("Other").is_none());

    let spread_node = ctx.operation().unwrap().selection_set.selections[0]
        .as_fragment_spread()
        .unwrap();
    assert!(spread_node.fragment_def(&document).unwrap().ptr_eq(frag));
}
