//! End-to-end expansion scenarios

use pretty_assertions::assert_eq;

use orthocase::parser::{Node, Section, TestCase};
use orthocase::{expand, expand_document, parse, ExpandError, PipelineError};

fn expanded_cases(source: &str) -> Vec<TestCase> {
    let doc = expand_document(parse(source).expect("Should parse")).expect("Should expand");
    doc.sections
        .into_iter()
        .filter_map(|s| match s {
            Section::Cases(container) => Some(container.cases),
            _ => None,
        })
        .flatten()
        .collect()
}

fn first_step_text(case: &TestCase) -> &str {
    match &case.body[0] {
        Node::Step(step) => &step.tokens[0].text,
        other => panic!("Expected step, got {:?}", other),
    }
}

#[test]
fn test_two_factor_expansion() {
    let source = r#"
        factors {
            ANIMAL: ["cat", "dog"]
            COLOR: ["red", "green", "blue"]
            UNUSED: ["never", "touched"]
        }

        cases {
            case "T" {
                do "give the $${ANIMAL} a $${COLOR} toy"
            }
            case "U" {
                do "no placeholders here"
            }
        }
    "#;

    let cases = expanded_cases(source);
    assert_eq!(cases.len(), 7);

    let names: Vec<&str> = cases.iter().map(|c| c.name.node.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "[1].T-cat-red",
            "[2].T-cat-green",
            "[3].T-cat-blue",
            "[4].T-dog-red",
            "[5].T-dog-green",
            "[6].T-dog-blue",
            "U",
        ]
    );

    assert_eq!(first_step_text(&cases[0]), "give the cat a red toy");
    assert_eq!(first_step_text(&cases[5]), "give the dog a blue toy");
    assert_eq!(first_step_text(&cases[6]), "no placeholders here");
}

#[test]
fn test_instances_follow_their_source_case() {
    let source = r#"
        factors { X: ["1", "2"] }
        cases {
            case "T" { do "$${X}" }
            case "U" { do "$${X}" }
        }
    "#;

    let names: Vec<String> = expanded_cases(source)
        .iter()
        .map(|c| c.name.node.clone())
        .collect();
    assert_eq!(names, vec!["[1].T-1", "[2].T-2", "[1].U-1", "[2].U-2"]);
}

#[test]
fn test_placeholder_in_loop_and_branch_bodies() {
    let source = r#"
        factors { DISH: ["soup", "stew"] }
        cases {
            case "cook" {
                for "pot in $${DISH} pots" {
                    if "pot holds $${DISH}" {
                        do "stir the $${DISH}"
                    } else {
                        do "season the $${DISH}"
                    }
                }
            }
        }
    "#;

    let cases = expanded_cases(source);
    assert_eq!(cases.len(), 2);

    let for_block = match &cases[0].body[0] {
        Node::For(block) => block,
        other => panic!("Expected for block, got {:?}", other),
    };
    assert_eq!(for_block.header.tokens[0].text, "pot in soup pots");
    let if_block = match &for_block.body[0] {
        Node::If(block) => block,
        other => panic!("Expected if block, got {:?}", other),
    };
    assert_eq!(if_block.header.tokens[0].text, "pot holds soup");
    match &if_block.orelse.as_ref().unwrap()[0] {
        Node::Step(step) => assert_eq!(step.tokens[0].text, "season the soup"),
        other => panic!("Expected step, got {:?}", other),
    }
}

#[test]
fn test_undefined_factor_produces_no_instances() {
    let source = r#"
        factors { DEFINED: ["x"] }
        cases {
            case "ok" { do "$${DEFINED}" }
            case "bad" { do "$${UNDEFINED}" }
        }
    "#;

    let err = expand_document(parse(source).unwrap()).unwrap_err();
    assert_eq!(
        err,
        ExpandError::UndefinedFactor {
            name: "UNDEFINED".to_string()
        }
    );
}

#[test]
fn test_malformed_value_list_only_fails_when_referenced() {
    let source = r#"
        factors {
            BAD: [not quoted]
            GOOD: ["fine"]
        }
        cases { case "t" { do "$${GOOD}" } }
    "#;
    let cases = expanded_cases(source);
    assert_eq!(cases[0].name.node, "[1].t-fine");

    let source = r#"
        factors { BAD: [not quoted] }
        cases { case "t" { do "$${BAD}" } }
    "#;
    let err = expand_document(parse(source).unwrap()).unwrap_err();
    assert!(matches!(err, ExpandError::BadFactorValues { .. }));
}

#[test]
fn test_full_pipeline_output() {
    let out = expand(
        r#"
        factors { ANIMAL: ["cat", "dog"] }
        cases { case "feed" { do "feed the $${ANIMAL}" } }
    "#,
    )
    .unwrap();

    let expected = "factors {\n    ANIMAL: [\"cat\", \"dog\"]\n}\n\ncases {\n    case \"[1].feed-cat\" {\n        do \"feed the cat\"\n    }\n    case \"[2].feed-dog\" {\n        do \"feed the dog\"\n    }\n}\n";
    assert_eq!(out, expected);
}

#[test]
fn test_pipeline_surfaces_expansion_error() {
    let err = expand(r#"cases { case "t" { do "$${GHOST}" } }"#).unwrap_err();
    assert!(err.to_string().contains("$${GHOST}"));
    assert!(matches!(err, PipelineError::Expand(_)));
}

#[test]
fn test_document_outside_case_containers_untouched() {
    let source = r#"
        factors { X: ["a"] }
        cases { case "t" { do "$${X}" } }
    "#;
    let doc = expand_document(parse(source).unwrap()).unwrap();

    // The factors section survives expansion unchanged
    match &doc.sections[0] {
        Section::Factors(decls) => {
            assert_eq!(decls.entries[0].name.node, "X");
            assert_eq!(decls.entries[0].raw_values.node, r#"["a"]"#);
        }
        other => panic!("Expected factors section, got {:?}", other),
    }
}
