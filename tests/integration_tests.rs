//! End-to-end tests running source text through the scanner, parser and
//! type checker.

use ktscript::{
    ast::{
        statements::Stmt,
        types::{BasicType, Type, BOOLEAN, INT, STRING},
    },
    check_source,
    errors::errors::Error,
};

fn error_name(source: &str) -> String {
    match check_source(source).unwrap_err() {
        Error::Parse(error) => error.get_error_name().to_string(),
        Error::Type(error) => error.get_error_name().to_string(),
    }
}

#[test]
fn test_nested_loops_program() {
    let source = r#"
var a = 0
for (i in 1..10) {
    for (j in 1..10) println(i * j)
};
while (true) {
    if (a > 10) { break };
    a++;
}
"#;

    let (program, env) = check_source(source).unwrap();

    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[2], Stmt::While { .. }));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_search_program() {
    let source = r#"
// Linear search over an array.
fun search(i: Int, a: Array<Int>): Boolean {
    for (value in a) {
        if (i == value) {
            return true
        }
    }
    return false
}

fun search(name: String, names: Array<String>): Boolean {
    return false
}

val numbers = Array(5) { i -> i * 2 }
val names = arrayOf("ann", "bob")
val found = search(4, numbers)
val known = search("ann", names)
println("found: $found, known: ${known}")
"#;

    let (_, env) = check_source(source).unwrap();

    assert_eq!(
        env.get_variable("numbers").unwrap().ty,
        Type::Array(BasicType::Int)
    );
    assert_eq!(env.get_variable("found").unwrap().ty, BOOLEAN);
    assert!(env.get_variable("known").unwrap().read_only);
}

#[test]
fn test_higher_order_values() {
    let source = r#"
val add: (Int, Int) -> Int = { a, b -> a + b }
var total = add(1, 2)
total += if (total > 2) 1 else 0
val label = if (total == 4) { "four" } else { "other" }
print(label)
"#;

    let (_, env) = check_source(source).unwrap();

    assert_eq!(env.get_variable("total").unwrap().ty, INT);
    assert_eq!(env.get_variable("label").unwrap().ty, STRING);
}

#[test]
fn test_mutable_list_program() {
    let source = r#"
val words = MutableList(3, { i -> "w" + i })
var joined = ""
for (word in words) {
    joined += word
}
val mixed = mutableListOf(1, "two", true)
"#;

    let (_, env) = check_source(source).unwrap();

    assert_eq!(
        env.get_variable("words").unwrap().ty,
        Type::MutableList(BasicType::String)
    );
    assert_eq!(
        env.get_variable("mixed").unwrap().ty,
        Type::MutableList(BasicType::Any)
    );
    assert!(env.get_variable("word").is_none());
}

#[test]
fn test_scan_errors_surface_as_parse_errors() {
    assert_eq!(error_name("val a = 1 # 2"), "UnrecognisedToken");
    assert_eq!(error_name("val a = 99999999999"), "NumberParseError");
}

#[test]
fn test_parse_errors() {
    assert_eq!(error_name(""), "EmptyInput");
    assert_eq!(error_name("\n\n;"), "EmptyInput");
    assert_eq!(error_name("val a = 1 +"), "UnexpectedEnd");
    assert_eq!(error_name("val a = 1 val b = 2"), "MissingSeparator");
    assert_eq!(error_name("val s = \"x is ${a +}\""), "InvalidTemplate");
}

#[test]
fn test_type_errors() {
    assert_eq!(error_name("var a = 1; a += \"x\""), "BinaryOperatorMismatch");
    assert_eq!(error_name("val a = 1; a = 2"), "ReadOnlyVariable");
    assert_eq!(error_name("break"), "LoopControlOutsideLoop");
    assert_eq!(error_name("return 1"), "ReturnOutsideFunction");
    assert_eq!(error_name("println(missing)"), "NotInScope");
}

#[test]
fn test_error_messages() {
    let error = check_source("val a: Int = \"x\"").unwrap_err();

    assert_eq!(
        error.to_string(),
        "type error: types do not match: expected Int, received String"
    );
}
