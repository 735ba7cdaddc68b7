//! End-to-end tests for the scoped builder DSL.
//!
//! These drive whole files through the `build_*` entry points and check
//! the ordering, naming, and laziness guarantees of the underlying
//! containers, plus a snapshot of the rendered output.

use quill_dsl::named;
use quill_specs::{TypeKind, build_file, build_type};

#[test]
fn test_children_enumerate_in_call_order() {
    let file = build_file("demo", |file| {
        file.function("a", |f| {
            f.line("emit(1)");
        });
        file.function("b", |f| {
            f.line("emit(2)");
        });
    });

    let names: Vec<&str> = file.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(file.functions[0].body, ["emit(1)"]);
    assert_eq!(file.functions[1].body, ["emit(2)"]);
}

#[test]
fn test_deferred_position_follows_first_read() {
    // Declared before "eager" but forced after it, so it must land after.
    let file = build_file("demo", |file| {
        named! {
            let declared_first = file.functions.adding(|f| { f.returns("Int"); });
        }
        file.function("eager", |_| {});
        declared_first.force(&mut file.functions);
    });

    let names: Vec<&str> = file.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["eager", "declared_first"]);
}

#[test]
fn test_deferred_appends_exactly_once() {
    let file = build_file("demo", |file| {
        named! {
            let helper = file.functions.adding(|f| { f.returns("Int"); });
        }
        helper.force(&mut file.functions);
        helper.force(&mut file.functions);
        helper.force(&mut file.functions);
    });

    assert_eq!(file.functions.len(), 1);
    assert_eq!(file.functions[0].name, "helper");
    assert_eq!(file.functions[0].returns.as_deref(), Some("Int"));
}

#[test]
fn test_explicit_name_wins_over_binding_name() {
    let file = build_file("demo", |file| {
        let unrelated_binding = file.function("explicit", |_| {});
        assert_eq!(unrelated_binding.name, "explicit");
    });

    assert_eq!(file.functions[0].name, "explicit");
}

#[test]
fn test_nested_scopes_resolve_to_innermost() {
    // Both TypeScope and FunctionScope declare `annotation`; the call in
    // the inner closure must configure the function, not the type.
    let spec = build_type("Widget", |t| {
        t.annotation("Component", |_| {});
        t.function("render", |f| {
            f.annotation("Override", |_| {});
            f.line("draw()");
        });
    });

    let type_annotations: Vec<&str> =
        spec.annotations.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(type_annotations, ["Component"]);

    let fn_annotations: Vec<&str> = spec.functions[0]
        .annotations
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(fn_annotations, ["Override"]);
}

#[test]
fn test_object_kind() {
    let spec = build_type("Registry", |t| {
        t.kind(TypeKind::Object);
    });

    assert_eq!(spec.to_string(), "object Registry {\n}\n");
}

#[test]
fn test_rendered_file_snapshot() {
    let file = build_file("service", |file| {
        file.package("demo.service");
        file.import("core.net");
        file.import("core.time");
        file.import("core.net");
        file.type_("Service", |t| {
            t.annotation("Component", |a| {
                a.member("lazy", "true");
            });
            t.supertype("Closeable");
            t.property("port", |p| {
                p.ty("Int").initializer("8080");
            });
            t.function("close", |f| {
                f.line("socket.close()");
            });
        });
        file.function("main", |f| {
            f.param("args", |p| {
                p.ty("Array<String>");
            });
            f.line("Service().close()");
        });
    });

    insta::assert_snapshot!(file.to_string(), @r"
    package demo.service

    import core.net
    import core.time

    @Component(lazy = true)
    class Service : Closeable {
        val port: Int = 8080

        fun close() {
            socket.close()
        }
    }

    fun main(args: Array<String>) {
        Service().close()
    }
    ");
}
