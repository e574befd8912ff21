/**
 * Extraction Tests
 *
 * Scans whole program ASTs for `i18n("...")` calls and `<I18N>` blocks and
 * checks the extracted messages, warnings and errors.
 */

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::*;
    use jsx_i18n::logging::RecordingLogger;
    use jsx_i18n::{ExtractionError, ExtractorConfig, MessageExtractor};
    use std::sync::Arc;

    mod of_strings {
        use super::*;

        #[test]
        fn should_extract_a_string() {
            let ast = program(vec![stmt(i18n("foo"))]);

            assert_eq!(extract(&ast).unwrap(), vec!["foo"]);
        }

        #[test]
        fn should_extract_multiple_strings() {
            let ast = program(vec![
                let_decl("foo", i18n("foo foo foo")),
                let_decl("bar", i18n("foo, bar, foo")),
                let_decl("baz", template(call("i18n", vec![string("this is silly")]))),
            ]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["foo foo foo", "foo, bar, foo", "this is silly"]
            );
        }
    }

    mod of_jsx {
        use super::*;

        fn render(children: Vec<serde_json::Value>) -> serde_json::Value {
            program(vec![create_class_render(vec![ret(jsx("div", vec![], children))])])
        }

        #[test]
        fn should_extract_simple_strings() {
            let ast = render(vec![
                text("\n    "),
                block(vec![text("O, hai.")]),
                text("\n    "),
                block(vec![text("You look nice today!")]),
                text("\n"),
            ]);

            assert_eq!(extract(&ast).unwrap(), vec!["O, hai.", "You look nice today!"]);
        }

        #[test]
        fn should_extract_strings_with_expressions() {
            let ast = program(vec![create_class_render(vec![
                let_decl("name", path("this.props.name")),
                ret(jsx(
                    "div",
                    vec![],
                    vec![
                        block(vec![text("O, hai, "), interpolation("name"), text(".")]),
                        block(vec![
                            text("You look nice today, "),
                            interpolation("this.props.subject"),
                            text("!"),
                        ]),
                    ],
                )),
            ])]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["O, hai, {name}.", "You look nice today, {this.props.subject}!"]
            );
        }

        #[test]
        fn should_extract_strings_with_nested_components() {
            let ast = render(vec![
                block(vec![
                    text("O, hai, "),
                    jsx("span", vec![], vec![interpolation("name")]),
                    text("."),
                ]),
                block(vec![
                    text("You look "),
                    jsx("em", vec![], vec![text("nice")]),
                    text(" today, "),
                    jsx("strong", vec![], vec![interpolation("this.props.subject")]),
                    text("!"),
                ]),
            ]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec![
                    "O, hai, <span>{name}</span>.",
                    "You look <em>nice</em> today, <strong>{this.props.subject}</strong>!"
                ]
            );
        }

        #[test]
        fn should_extract_strings_with_nested_components_with_attributes() {
            let ast = render(vec![
                block(vec![
                    text("O, hai, "),
                    jsx("span", vec![attr("title", "boop")], vec![interpolation("name")]),
                    text("."),
                ]),
                block(vec![
                    text("You look "),
                    jsx("a", vec![attr("href", "#nice")], vec![text("nice")]),
                    text(" today, "),
                    jsx("strong", vec![], vec![interpolation("this.props.subject")]),
                    text("!"),
                ]),
            ]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec![
                    "O, hai, <span title=\"boop\">{name}</span>.",
                    "You look <a href=\"#nice\">nice</a> today, <strong>{this.props.subject}</strong>!"
                ]
            );
        }

        #[test]
        fn should_extract_strings_with_identifier_attributes() {
            let ast = render(vec![block(vec![
                jsx(
                    "span",
                    vec![attr("i18n-id", "step-2"), attr("className", "step-text")],
                    vec![text("Step 2: ")],
                ),
                text("Add your organization to Idealist"),
            ])]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["<span:step-2>Step 2: </span:step-2>Add your organization to Idealist"]
            );
        }

        #[test]
        fn should_extract_strings_with_namespaced_identifiers() {
            let ast = render(vec![block(vec![
                jsx("span:step-2", vec![attr("className", "step-text")], vec![text("Step 2: ")]),
                text("Add your organization to Idealist"),
            ])]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["<span:step-2>Step 2: </span:step-2>Add your organization to Idealist"]
            );
        }

        #[test]
        fn should_not_qualify_namespaced_identifiers_twice() {
            let ast = render(vec![block(vec![jsx(
                "span:step-2",
                vec![attr("i18n-id", "other"), attr("className", "x")],
                vec![text("hi")],
            )])]);

            assert_eq!(extract(&ast).unwrap(), vec!["<span:step-2>hi</span:step-2>"]);
        }

        #[test]
        fn should_extract_strings_with_childless_components() {
            let ast = render(vec![
                block(vec![
                    text("Line, "),
                    jsx("br", vec![attr("title", "boop")], vec![]),
                    text("Break."),
                ]),
                block(vec![
                    text("React "),
                    jsx("Components", vec![], vec![]),
                    text(", am I right?"),
                ]),
            ]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["Line, <br title=\"boop\" />Break.", "React <Components />, am I right?"]
            );
        }

        #[test]
        fn should_not_assume_an_identifier_when_there_are_unsafe_attributes() {
            let ast = program(vec![stmt(jsx(
                "li",
                vec![],
                vec![block(vec![
                    jsx(
                        "span",
                        vec![attr("i18n-id", "stat"), attr("className", "stat")],
                        vec![jsx(
                            "ReactIntl.FormattedNumber",
                            vec![attr_expr("value", path("dailyVisitors"))],
                            vec![],
                        )],
                    ),
                    text("daily visitors"),
                ])],
            ))]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["<span:stat><ReactIntl.FormattedNumber /></span:stat>daily visitors"]
            );
        }

        #[test]
        fn should_deal_correctly_with_whitespace() {
            let ast = program(vec![stmt(jsx(
                "p",
                vec![attr("id", "are-we-eligible"), attr("className", "in-form-link")],
                vec![
                    text("\n                "),
                    block(vec![
                        text("\n                    "),
                        jsx(
                            "a",
                            vec![attr("href", "/info/Help/Organizations#Eligibility")],
                            vec![text("Are we eligible?")],
                        ),
                        text("\n                "),
                    ]),
                    text("\n            "),
                ],
            ))]);

            assert_eq!(
                extract(&ast).unwrap(),
                vec!["<a href=\"/info/Help/Organizations#Eligibility\">Are we eligible?</a>"]
            );
        }

        #[test]
        fn should_keep_interior_whitespace() {
            let ast = program(vec![stmt(block(vec![
                text("  Two  "),
                jsx("em", vec![], vec![text(" spaced ")]),
                text("  words\n  here  "),
            ]))]);

            assert_eq!(extract(&ast).unwrap(), vec!["Two  <em> spaced </em>  words\n  here"]);
        }

        #[test]
        fn should_not_qualify_elements_without_unsafe_attributes() {
            let ast = program(vec![stmt(block(vec![jsx(
                "b",
                vec![attr("i18n-id", "bold")],
                vec![text("bold")],
            )]))]);

            assert_eq!(extract(&ast).unwrap(), vec!["<b>bold</b>"]);
        }

        #[test]
        fn should_use_configured_block_element() {
            let config = ExtractorConfig {
                block_element: "Trans".to_string(),
                ..ExtractorConfig::default()
            };
            let extractor = MessageExtractor::new(config, Arc::new(RecordingLogger::new())).unwrap();
            let ast = program(vec![
                stmt(jsx("Trans", vec![], vec![text("configured")])),
                stmt(block(vec![text("ignored")])),
            ]);

            assert_eq!(extract_with(&ast, &extractor).unwrap(), vec!["configured"]);
        }
    }

    mod errors_and_warnings {
        use super::*;

        #[test]
        fn should_warn_about_non_extractable_whitelisted_attributes() {
            let logger = Arc::new(RecordingLogger::new());
            let extractor = MessageExtractor::new(ExtractorConfig::default(), logger.clone()).unwrap();
            let ast = program(vec![stmt(block(vec![jsx(
                "a",
                vec![attr_expr("href", call("Router.url", vec![string("about-us")]))],
                vec![text("click me")],
            )]))]);

            let messages = extract_with(&ast, &extractor).unwrap();

            assert_eq!(messages, vec!["<a>click me</a>"]);
            assert_eq!(logger.warnings().len(), 1);
        }

        #[test]
        fn should_fail_on_sanitized_attributes_without_identifier() {
            let ast = program(vec![stmt(block(vec![
                text("O, hai, "),
                jsx("span", vec![attr("className", "boop")], vec![interpolation("name")]),
                text("."),
            ]))]);

            assert!(matches!(
                extract(&ast),
                Err(ExtractionError::MissingIdentifier { .. })
            ));
        }

        #[test]
        fn should_not_require_identifier_on_unique_components() {
            let ast = program(vec![stmt(block(vec![
                text("O, hai, "),
                jsx("Component", vec![attr("beep", "boop")], vec![interpolation("name")]),
                text("."),
            ]))]);

            assert_eq!(extract(&ast).unwrap(), vec!["O, hai, <Component>{name}</Component>."]);
        }

        #[test]
        fn should_require_identifier_on_duplicated_components() {
            let ast = program(vec![stmt(block(vec![
                text("O, hai, "),
                jsx("C", vec![attr("beep", "boop")], vec![interpolation("name")]),
                text(", "),
                jsx("C", vec![attr("beep", "boöp")], vec![interpolation("game")]),
                text("."),
            ]))]);

            assert!(matches!(
                extract(&ast),
                Err(ExtractionError::DuplicateElementName { .. })
            ));
        }

        #[test]
        fn should_fail_on_unexpected_child_kinds() {
            let fragment = serde_json::json!({ "type": "JSXFragment", "children": [] });
            let ast = program(vec![stmt(block(vec![text("before "), fragment]))]);

            match extract(&ast) {
                Err(ExtractionError::UnexpectedNodeKind { kind, .. }) => assert_eq!(kind, "JSXFragment"),
                other => panic!("expected UnexpectedNodeKind, got {:?}", other),
            }
        }

        #[test]
        fn should_fail_on_uninterpolatable_expressions() {
            let ast = program(vec![stmt(block(vec![container(call("format", vec![]))]))]);

            assert!(matches!(
                extract(&ast),
                Err(ExtractionError::UnsupportedExpression { .. })
            ));
        }
    }
}
