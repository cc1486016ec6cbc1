#[cfg(test)]
mod tests {
    use crate::{compile, compile_batch, compile_with_options};
    use crate::{CompilationUnit, CompileOptions, ErrorKind};

    const HASH: &str = "h1";

    #[test]
    fn test_full_output_for_minimal_component() {
        let out = compile("src/Hello.zui", "  <p>Hi</p>\n", HASH).unwrap();
        let expected = r#"// Code generated from Hello.zui. DO NOT EDIT
// Source file content hash: h1

export class Hello extends HTMLElement {
  constructor() {
    super();
  }
  connectedCallback() {
    const shadowRoot = this.attachShadow({ mode: 'open' });
    this.zuiCreateHTMLElements(shadowRoot);
  }
  disconnectedCallback() {
  }
  adoptedCallback() {
  }
  attributeChangedCallback() {
  }
  zuiCreateHTMLElements(shadowRoot) {
    const node_p_0_0_h1 = document.createElement("p");
    node_p_0_0_h1.append("Hi");
    shadowRoot.appendChild(node_p_0_0_h1);
  }
}
customElements.define("zui-hello_h1", Hello);
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_output_is_deterministic() {
        let src = r#"<div class="a"><button on:click|once>Go</button><input bind:value={state.v}></div>
<script>let state = {}; function go(e) { return e; }</script>"#;
        let first = compile("Widget.zui", src, "abc").unwrap();
        let second = compile("Widget.zui", src, "abc").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ends_with_exactly_one_newline() {
        let out = compile("A.zui", "<p>x</p>", HASH).unwrap();
        assert!(out.ends_with(");\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_script_in_head_and_body_is_rejected() {
        let src = "<script>function a() {}</script><div></div><script>function b() {}</script>";
        let err = compile("Two.zui", src, HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MultipleScriptElements);
        assert!(err.to_string().starts_with("Two.zui: "));
    }

    #[test]
    fn test_two_scripts_in_body_are_rejected() {
        let src = "<div></div><script>function a() {}</script><script>function b() {}</script>";
        let err = compile("Two.zui", src, HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MultipleScriptElements);
    }

    #[test]
    fn test_single_script_is_merged_and_body_script_still_walked() {
        let src = "<div></div><script>function a() { return 1; }</script>";
        let out = compile("One.zui", src, HASH).unwrap();
        assert!(out.contains("\na() { return 1; }\n"));
        assert!(out.contains(r#"const node_script_0_1_h1 = document.createElement("script");"#));
        assert!(out.contains(r#"node_script_0_1_h1.append("function a() { return 1; }");"#));
        assert!(out.contains("shadowRoot.appendChild(node_script_0_1_h1);"));
    }

    #[test]
    fn test_head_script_is_not_walked() {
        let src = "<script>function a() {}</script><p>x</p>";
        let out = compile("Head.zui", src, HASH).unwrap();
        assert!(out.contains("\na() {}\n"));
        assert!(!out.contains(r#"createElement("script")"#));
    }

    #[test]
    fn test_top_level_function_becomes_method() {
        let src = "<script>function greet(name) { return name; }</script><p>x</p>";
        let out = compile("Greeter.zui", src, HASH).unwrap();
        assert!(out.lines().any(|l| l.starts_with("greet(name) {")));
        let method = out.find("greet(name) {").unwrap();
        let create = out.find("zuiCreateHTMLElements(shadowRoot) {").unwrap();
        let close = out.rfind("\n}\n").unwrap();
        assert!(create < method && method < close);
    }

    #[test]
    fn test_top_level_let_is_dropped() {
        let out = compile("State.zui", "<p>x</p><script>let x = 1;</script>", HASH).unwrap();
        assert!(!out.contains("x = 1"));
        assert!(!out.contains("let x"));
    }

    #[test]
    fn test_unknown_directive_names_the_path() {
        let err = compile("src/Bad.zui", "<div do:something></div>", HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownDirective);
        assert!(err.to_string().contains("src/Bad.zui"));
    }

    #[test]
    fn test_unsupported_script_construct_is_internal() {
        let err = compile("Expr.zui", "<p>x</p><script>console.log(1);</script>", HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalUnsupportedConstruct);
        assert!(err.is_internal());
    }

    #[test]
    fn test_text_is_escaped() {
        let out = compile("T.zui", r#"<p>say "hi" \ back</p>"#, HASH).unwrap();
        assert!(out.contains(r#".append("say \"hi\" \\ back");"#));
    }

    #[test]
    fn test_class_name_must_be_identifier() {
        let err = compile("my-card.zui", "<p>x</p>", HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidComponentName);
    }

    #[test]
    fn test_tag_prefix_option() {
        let unit = CompilationUnit::new("Card.zui", "<p>x</p>", "ff00");
        let options = CompileOptions {
            tag_prefix: "acme".to_string(),
            ..CompileOptions::default()
        };
        let out = compile_with_options(&unit, &options).unwrap();
        assert!(out.ends_with("customElements.define(\"acme-card_ff00\", Card);\n"));
    }

    #[test]
    fn test_different_hashes_register_different_tags() {
        let a = compile("Card.zui", "<p>x</p>", "aaa").unwrap();
        let b = compile("Card.zui", "<p>x</p>", "bbb").unwrap();
        assert!(a.contains("\"zui-card_aaa\""));
        assert!(b.contains("\"zui-card_bbb\""));
    }

    #[test]
    fn test_batch_matches_one_by_one() {
        let units: Vec<CompilationUnit> = (0..8)
            .map(|i| {
                CompilationUnit::new(
                    format!("C{}.zui", i),
                    format!("<button on:click>b{}</button><button on:tap|once>t</button>", i),
                    format!("h{}", i),
                )
            })
            .chain(std::iter::once(CompilationUnit::new(
                "Broken.zui",
                "<div do:x></div>",
                "h",
            )))
            .collect();

        let options = CompileOptions::default();
        let batch = compile_batch(&units, &options);
        assert_eq!(batch.len(), units.len());
        for (unit, result) in units.iter().zip(batch) {
            assert_eq!(result, compile_with_options(unit, &options));
        }
    }
}
