//! Unit tests for the type checker.
//!
//! Expression rules are checked on hand-built trees; statement and program
//! rules are checked on parsed source.

use crate::{
    ast::{
        ast::{ArithmeticOp, ComparisonOp, LogicalOp, SelfOp},
        expressions::{Exp, Lambda, StringExp},
        types::{BasicType, Type, BOOLEAN, INT, STRING},
    },
    errors::errors::TypeError,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{
    environment::Environment,
    type_checker::{type_check, TypeChecker},
};

fn type_of(env: &Environment, exp: &Exp) -> Result<Type, TypeError> {
    TypeChecker::new().type_of(env, exp)
}

fn check(source: &str) -> Result<Environment, TypeError> {
    let program = parse(tokenize(source).unwrap()).unwrap();
    type_check(&program)
}

fn assert_type_error(source: &str, name: &str) {
    let error = check(source).unwrap_err();
    assert_eq!(error.get_error_name(), name, "{}", error);
}

fn variable_type(env: &Environment, name: &str) -> Type {
    env.get_variable(name).unwrap().ty.clone()
}

fn lambda(parameters: Vec<(&str, Option<Type>)>, body: Exp) -> Lambda {
    Lambda {
        parameters: parameters
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty))
            .collect(),
        body: Box::new(body),
    }
}

#[test]
fn test_plus_rules() {
    let env = Environment::new();
    let plus = |left: Exp, right: Exp| Exp::arithmetic(left, ArithmeticOp::Plus, right);

    assert_eq!(type_of(&env, &plus(Exp::Int(1), Exp::Int(2))).unwrap(), INT);
    assert_eq!(
        type_of(&env, &plus(Exp::string("a"), Exp::Int(2))).unwrap(),
        STRING
    );
    assert_eq!(
        type_of(&env, &plus(Exp::string("a"), Exp::string("b"))).unwrap(),
        STRING
    );
    assert!(type_of(&env, &plus(Exp::Int(1), Exp::string("b"))).is_err());
    assert!(type_of(&env, &plus(Exp::Boolean(true), Exp::Int(1))).is_err());
}

#[test]
fn test_other_arithmetic_is_int_only() {
    let env = Environment::new();
    let minus = Exp::arithmetic(Exp::string("a"), ArithmeticOp::Minus, Exp::Int(1));
    let modulo = Exp::arithmetic(Exp::Int(7), ArithmeticOp::Modulo, Exp::Int(2));

    assert_eq!(
        type_of(&env, &minus).unwrap_err().get_error_name(),
        "BinaryOperatorMismatch"
    );
    assert_eq!(type_of(&env, &modulo).unwrap(), INT);
}

#[test]
fn test_comparison_and_logical_operands() {
    let env = Environment::new();

    let greater = Exp::comparison(Exp::Int(1), ComparisonOp::Greater, Exp::Int(2));
    assert_eq!(type_of(&env, &greater).unwrap(), BOOLEAN);

    let equal_strings = Exp::comparison(Exp::string("a"), ComparisonOp::Equal, Exp::string("a"));
    assert!(type_of(&env, &equal_strings).is_err());

    let and = Exp::logical(greater.clone(), LogicalOp::And, Exp::Boolean(false));
    assert_eq!(type_of(&env, &and).unwrap(), BOOLEAN);

    let or_int = Exp::logical(Exp::Int(1), LogicalOp::Or, Exp::Boolean(true));
    assert!(type_of(&env, &or_int).is_err());
}

#[test]
fn test_not_requires_boolean() {
    let env = Environment::new();

    assert_eq!(
        type_of(&env, &Exp::Not(Box::new(Exp::Boolean(true)))).unwrap(),
        BOOLEAN
    );
    assert_eq!(
        type_of(&env, &Exp::Not(Box::new(Exp::Int(1))))
            .unwrap_err()
            .get_error_name(),
        "UnaryOperatorMismatch"
    );
}

#[test]
fn test_variable_lookup() {
    let env = Environment::new().with_variable("a", STRING, true);

    assert_eq!(type_of(&env, &Exp::var("a")).unwrap(), STRING);
    assert_eq!(
        type_of(&env, &Exp::var("b")).unwrap_err(),
        TypeError::NotInScope {
            variable: String::from("b")
        }
    );
}

#[test]
fn test_self_operation_requires_int() {
    let env = Environment::new()
        .with_variable("i", INT, false)
        .with_variable("s", STRING, false);

    assert_eq!(
        type_of(&env, &Exp::self_operation("i", SelfOp::Increase, true)).unwrap(),
        INT
    );
    assert!(type_of(&env, &Exp::self_operation("s", SelfOp::Decrease, false)).is_err());
}

#[test]
fn test_string_interpolations_are_checked() {
    let env = Environment::new().with_variable("a", INT, false);
    let mut template = StringExp::plain("a is ");
    template.interpolations.push((5, Exp::var("a")));

    assert_eq!(type_of(&env, &Exp::Str(template.clone())).unwrap(), STRING);

    template.interpolations.push((5, Exp::var("missing")));
    assert!(type_of(&env, &Exp::Str(template)).is_err());
}

#[test]
fn test_if_expression() {
    let env = Environment::new();
    let if_exp = |condition: Exp, then_branch: Exp, else_branch: Option<Exp>| Exp::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
    };

    assert_eq!(
        type_of(
            &env,
            &if_exp(Exp::Boolean(true), Exp::Int(1), Some(Exp::Int(2)))
        )
        .unwrap(),
        INT
    );
    assert_eq!(
        type_of(&env, &if_exp(Exp::Boolean(true), Exp::Int(1), None)).unwrap_err(),
        TypeError::MissingElseBranch
    );
    assert!(type_of(
        &env,
        &if_exp(Exp::Boolean(true), Exp::Int(1), Some(Exp::string("x")))
    )
    .is_err());
    assert!(type_of(&env, &if_exp(Exp::Int(1), Exp::Int(1), Some(Exp::Int(2)))).is_err());
}

#[test]
fn test_range_is_int_array() {
    let env = Environment::new();
    let range = Exp::Range {
        start: Box::new(Exp::Int(1)),
        end: Box::new(Exp::Int(10)),
    };

    assert_eq!(type_of(&env, &range).unwrap(), Type::Array(BasicType::Int));
}

#[test]
fn test_collection_literals() {
    let env = Environment::new();

    assert_eq!(
        type_of(&env, &Exp::ArrayOf(vec![Exp::Int(1), Exp::Int(2)])).unwrap(),
        Type::Array(BasicType::Int)
    );
    assert_eq!(
        type_of(&env, &Exp::ArrayOf(vec![Exp::Int(1), Exp::string("abc")])).unwrap(),
        Type::Array(BasicType::Any)
    );
    assert_eq!(
        type_of(&env, &Exp::MutableListOf(vec![Exp::Boolean(true)])).unwrap(),
        Type::MutableList(BasicType::Boolean)
    );
    assert_eq!(
        type_of(&env, &Exp::ArrayOf(vec![]))
            .unwrap_err()
            .get_error_name(),
        "EmptyCollectionLiteral"
    );
}

#[test]
fn test_collection_of_collections_rejected() {
    let env = Environment::new();
    let nested = Exp::ArrayOf(vec![Exp::ArrayOf(vec![Exp::Int(1)])]);

    assert_eq!(
        type_of(&env, &nested).unwrap_err().get_error_name(),
        "UnsupportedElementType"
    );
}

#[test]
fn test_array_initializer() {
    let env = Environment::new();
    // Array(10, { i -> "s" + i * 2 })
    let init = lambda(
        vec![("i", None)],
        Exp::arithmetic(
            Exp::string("s"),
            ArithmeticOp::Plus,
            Exp::arithmetic(Exp::var("i"), ArithmeticOp::Multiply, Exp::Int(2)),
        ),
    );

    let array = Exp::Array {
        size: Box::new(Exp::Int(10)),
        init: init.clone(),
    };
    assert_eq!(type_of(&env, &array).unwrap(), Type::Array(BasicType::String));

    let list = Exp::MutableList {
        size: Box::new(Exp::Int(10)),
        init,
    };
    assert_eq!(
        type_of(&env, &list).unwrap(),
        Type::MutableList(BasicType::String)
    );
}

#[test]
fn test_array_initializer_rules() {
    let env = Environment::new();
    let array = |size: Exp, init: Lambda| Exp::Array {
        size: Box::new(size),
        init,
    };

    let no_parameter = array(Exp::Int(3), lambda(vec![], Exp::Int(0)));
    assert_eq!(
        type_of(&env, &no_parameter).unwrap_err().get_error_name(),
        "InitializerArity"
    );

    let string_index = array(Exp::Int(3), lambda(vec![("i", Some(STRING))], Exp::Int(0)));
    assert_eq!(
        type_of(&env, &string_index).unwrap_err().get_error_name(),
        "InitializerParameterType"
    );

    let string_size = array(Exp::string("3"), lambda(vec![("i", None)], Exp::var("i")));
    assert_eq!(
        type_of(&env, &string_size).unwrap_err().get_error_name(),
        "TypeMatchError"
    );
}

#[test]
fn test_typed_lambda() {
    let env = Environment::new();
    let add = Exp::Lambda(lambda(
        vec![("a", Some(INT)), ("b", Some(INT))],
        Exp::arithmetic(Exp::var("a"), ArithmeticOp::Plus, Exp::var("b")),
    ));

    assert_eq!(
        type_of(&env, &add).unwrap(),
        Type::function(vec![INT, INT], INT)
    );
}

#[test]
fn test_lambda_parameters_do_not_escape() {
    let env = Environment::new();
    let checker = TypeChecker::new();
    let identity = lambda(vec![("x", Some(INT))], Exp::var("x"));

    checker.type_of_lambda(&env, &identity, None).unwrap();
    assert!(env.is_empty());
}

#[test]
fn test_untyped_lambda_parameter_needs_context() {
    let env = Environment::new();
    let checker = TypeChecker::new();
    let increment = lambda(
        vec![("x", None)],
        Exp::arithmetic(Exp::var("x"), ArithmeticOp::Plus, Exp::Int(1)),
    );

    assert_eq!(
        checker
            .type_of_lambda(&env, &increment, None)
            .unwrap_err()
            .get_error_name(),
        "UnresolvedLambdaParameter"
    );
    assert_eq!(
        checker
            .type_of_lambda(&env, &increment, Some(&[INT][..]))
            .unwrap(),
        Type::function(vec![INT], INT)
    );
}

#[test]
fn test_environment_is_persistent() {
    let empty = Environment::new();
    let with_a = empty.with_variable("a", INT, false);
    let shadowed = with_a.with_variable("a", STRING, true);

    assert!(empty.is_empty());
    assert_eq!(variable_type(&with_a, "a"), INT);
    assert_eq!(variable_type(&shadowed, "a"), STRING);
    assert!(with_a.declare_variable("a", BOOLEAN, false).is_err());
}

#[test]
fn test_declarations_extend_environment() {
    let env = check("var a = 1\nval b: String = \"x\"\nvar c: Boolean").unwrap();

    assert_eq!(env.len(), 3);
    assert_eq!(variable_type(&env, "a"), INT);
    assert_eq!(variable_type(&env, "b"), STRING);
    assert_eq!(variable_type(&env, "c"), BOOLEAN);
    assert!(env.get_variable("b").unwrap().read_only);
    assert!(!env.get_variable("a").unwrap().read_only);
}

#[test]
fn test_declaration_without_type_rejected() {
    assert_type_error("var a", "ExpectedExplicitType");
}

#[test]
fn test_redeclaration_rejected() {
    assert_type_error("var a = 1; var a = 2", "VariableAlreadyDeclared");
    assert_type_error("var a = 1; val a: Int", "VariableAlreadyDeclared");
}

#[test]
fn test_explicit_type_must_match() {
    assert_type_error("val a: String = 1", "TypeMatchError");
    assert_type_error("val a: Array<Any> = arrayOf(1, 2)", "TypeMatchError");
}

#[test]
fn test_compound_assignment_rules() {
    assert_type_error("var a = 1; a += \"x\"", "BinaryOperatorMismatch");
    assert_type_error("var s = \"a\"; s -= 1", "BinaryOperatorMismatch");
    assert!(check("var s = \"a\"; s += 1; s += \"b\"").is_ok());
    assert!(check("var a = 1; a -= 2; a *= 3; a /= 4").is_ok());
}

#[test]
fn test_read_only_reassignment_rejected() {
    assert_type_error("val a = 1; a = 2", "ReadOnlyVariable");
    assert_type_error("val a = 1; a += 2", "ReadOnlyVariable");
}

#[test]
fn test_undeclared_assignment_rejected() {
    assert_type_error("a = 2", "UndefinedVariable");
}

#[test]
fn test_reassignment_keeps_type() {
    assert_type_error("var a = 1; a = \"x\"", "TypeMatchError");
    assert!(check("var a = 1; a = a + 1").is_ok());
}

#[test]
fn test_function_typed_variable() {
    let env = check(
        "val f: (Int) -> Boolean = { x -> x > 0 }\n\
         var g: (Int) -> Int = { x: Int -> x }\n\
         g = { y -> y * 2 }\n\
         val b = f(3)",
    )
    .unwrap();

    assert_eq!(variable_type(&env, "f"), Type::function(vec![INT], BOOLEAN));
    assert_eq!(variable_type(&env, "b"), BOOLEAN);
}

#[test]
fn test_untyped_lambda_without_context_rejected() {
    assert_type_error("val g = { x -> x }", "UnresolvedLambdaParameter");
}

#[test]
fn test_duplicate_lambda_parameter_rejected() {
    assert_type_error("val g = { x: Int, x: Int -> x }", "DuplicateParameter");
}

#[test]
fn test_loop_control_outside_loop() {
    assert_type_error("break", "LoopControlOutsideLoop");
    assert_type_error("fun f(): Int {\n continue\n return 1\n}", "LoopControlOutsideLoop");
    assert!(check("while (true) { break }").is_ok());
    assert!(check("for (i in 1..3) { continue }").is_ok());
}

#[test]
fn test_return_outside_function() {
    assert_type_error("return 1", "ReturnOutsideFunction");
    assert_type_error("while (true) { return 1 }", "ReturnOutsideFunction");
}

#[test]
fn test_for_variable_does_not_escape() {
    let env = check("val xs = arrayOf(1, 2)\nfor (x in xs) { println(x) }").unwrap();

    assert!(env.contains("xs"));
    assert!(!env.contains("x"));
}

#[test]
fn test_block_bindings_do_not_escape() {
    let env = check("var a = 1\nwhile (a < 3) { var b = 2 }\n{ var c = 3 }").unwrap();

    assert!(env.contains("a"));
    assert!(!env.contains("b"));
    assert!(!env.contains("c"));
}

#[test]
fn test_for_requires_collection() {
    assert_type_error("for (x in 3) { println(x) }", "NotACollection");
}

#[test]
fn test_for_element_type() {
    assert_type_error(
        "val xs = mutableListOf(\"a\")\nfor (x in xs) { var y = 1; y += x }",
        "BinaryOperatorMismatch",
    );
}

#[test]
fn test_while_condition_must_be_boolean() {
    assert_type_error("while (1) { break }", "TypeMatchError");
}

#[test]
fn test_if_statement_body_not_inspected() {
    assert!(check("if (1) { break }").is_ok());
}

const SEARCH: &str = "fun search(i: Int, a: Array<Int>): Boolean {\n\
    var index = 0\n\
    for (index in a) {\n\
        if (i == index) { return true }\n\
    }\n\
    return false\n\
}\n";

#[test]
fn test_function_declaration() {
    let program = parse(tokenize(SEARCH).unwrap()).unwrap();
    let mut checker = TypeChecker::new();
    let env = checker.type_check_program(&program).unwrap();

    assert!(env.is_empty());
    assert_eq!(checker.get_signatures().len(), 1);
}

#[test]
fn test_function_redeclaration_rejected() {
    assert_type_error(&format!("{}{}", SEARCH, SEARCH), "FunctionAlreadyDeclared");
}

#[test]
fn test_overloads_coexist() {
    let source = format!(
        "{}fun search(s: String, a: Array<String>): Boolean {{ return false }}\n\
         val found = search(1, arrayOf(1, 2))\n\
         val missing = search(\"x\", arrayOf(\"y\"))",
        SEARCH
    );
    let program = parse(tokenize(&source).unwrap()).unwrap();
    let mut checker = TypeChecker::new();
    let env = checker.type_check_program(&program).unwrap();

    assert_eq!(checker.get_signatures().len(), 2);
    assert_eq!(variable_type(&env, "found"), BOOLEAN);
    assert_eq!(variable_type(&env, "missing"), BOOLEAN);
}

#[test]
fn test_call_with_wrong_arguments_rejected() {
    assert_type_error(
        &format!("{}search(\"x\", arrayOf(1))", SEARCH),
        "FunctionUndefined",
    );
}

#[test]
fn test_function_cannot_call_itself() {
    assert_type_error(
        "fun f(a: Int): Int { return f(a) }",
        "FunctionUndefined",
    );
}

#[test]
fn test_return_type_checked() {
    assert_type_error("fun f(): Int { return true }", "ReturnTypeMismatch");
}

#[test]
fn test_parameters_are_read_only() {
    assert_type_error("fun f(a: Int): Int {\n a = 2\n return a\n}", "ReadOnlyVariable");
}

#[test]
fn test_duplicate_function_parameter_rejected() {
    assert_type_error("fun f(a: Int, a: Int): Int { return a }", "DuplicateParameter");
}

#[test]
fn test_function_sees_earlier_globals() {
    assert!(check("val base = 10\nfun f(a: Int): Int { return a + base }").is_ok());
    assert_type_error(
        "fun f(a: Int): Int { return a + base }\nval base = 10",
        "NotInScope",
    );
}

#[test]
fn test_nested_function_rejected() {
    assert_type_error(
        "fun f(): Int {\n fun g(): Int { return 1 }\n return 1\n}",
        "NestedFunctionDeclaration",
    );
    assert_type_error(
        "while (true) { fun g(): Int { return 1 } }",
        "NestedFunctionDeclaration",
    );
}

#[test]
fn test_print_requires_basic_type() {
    assert!(check("print(1)\nprintln(\"a\" + 1)").is_ok());
    assert_type_error("val f = { x: Int -> x }\nprintln(f)", "NonBasicPrint");
}

#[test]
fn test_sessions_are_independent() {
    assert!(check(SEARCH).is_ok());
    assert!(check(SEARCH).is_ok());
}
