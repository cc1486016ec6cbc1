#[cfg(test)]
mod tests {
    use crate::{merge_script, ErrorKind};

    #[test]
    fn test_function_keyword_is_stripped() {
        let methods = merge_script("S.zui", "function greet(name) { return name; }").unwrap();
        assert_eq!(methods, vec!["greet(name) { return name; }".to_string()]);
    }

    #[test]
    fn test_functions_keep_source_order_and_text() {
        let script = r#"
            let count = 0;
            function inc() {
                count += 1; // bump
            }
            const label = "n";
            function reset(to = 0) { count = to; }
        "#;
        let methods = merge_script("S.zui", script).unwrap();
        assert_eq!(methods.len(), 2);
        assert!(methods[0].starts_with("inc() {"));
        assert!(methods[0].contains("count += 1; // bump"));
        assert_eq!(methods[1], "reset(to = 0) { count = to; }");
    }

    #[test]
    fn test_declarations_alone_produce_nothing() {
        let methods = merge_script("S.zui", "let x = 1;\nconst y = 2; var z;").unwrap();
        assert!(methods.is_empty());
    }

    #[test]
    fn test_stray_semicolons_are_ignored() {
        let methods = merge_script("S.zui", "function a() {};").unwrap();
        assert_eq!(methods, vec!["a() {}".to_string()]);
    }

    #[test]
    fn test_generator_becomes_generator_method() {
        for script in [
            "function *ids() { yield 1; }",
            "function* ids() { yield 1; }",
            "function*ids() { yield 1; }",
            "function * ids() { yield 1; }",
        ] {
            let methods = merge_script("S.zui", script).unwrap();
            assert_eq!(methods, vec!["*ids() { yield 1; }".to_string()], "{}", script);
        }
    }

    #[test]
    fn test_async_function_is_rejected() {
        let err = merge_script("S.zui", "async function load() {}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFunctionForm);
        assert!(err.to_string().contains("load"));
    }

    #[test]
    fn test_syntax_error() {
        let err = merge_script("S.zui", "function broken( {").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScriptSyntax);
        assert!(err.to_string().starts_with("S.zui: "));
    }

    #[test]
    fn test_unsupported_constructs_are_internal_errors() {
        for script in [
            "doSomething();",
            "class Helper {}",
            "import x from './x.js';",
            "if (a) { b(); }",
        ] {
            let err = merge_script("S.zui", script).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InternalUnsupportedConstruct, "{}", script);
            assert!(err.is_internal());
        }
    }
}
