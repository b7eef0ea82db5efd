//! Golden-output regression tests for the document writer
//!
//! The expansion pipeline is deterministic, so the rendered text for a
//! fixed input must never drift. These snapshots pin the writer's layout
//! of expanded documents.

use orthocase::{expand, expand_with_options, FormatOptions};

#[test]
fn test_expanded_document_output() {
    let out = expand(
        r#"
        factors { ANIMAL: ["cat", "dog"] }
        cases { case "feed" { do "feed the $${ANIMAL}" } }
    "#,
    )
    .unwrap();

    insta::assert_snapshot!(out, @r###"
    factors {
        ANIMAL: ["cat", "dog"]
    }

    cases {
        case "[1].feed-cat" {
            do "feed the cat"
        }
        case "[2].feed-dog" {
            do "feed the dog"
        }
    }
    "###);
}

#[test]
fn test_nested_blocks_output() {
    let out = expand(
        r#"
        factors { DISH: ["soup"] }
        cases {
            case "cook" {
                for "pot in pots" {
                    if "pot holds $${DISH}" {
                        do "stir the $${DISH}"
                    } else {
                        do "season" "lightly"
                    }
                }
            }
        }
    "#,
    )
    .unwrap();

    insta::assert_snapshot!(out, @r###"
    factors {
        DISH: ["soup"]
    }

    cases {
        case "[1].cook-soup" {
            for "pot in pots" {
                if "pot holds soup" {
                    do "stir the soup"
                } else {
                    do "season" "lightly"
                }
            }
        }
    }
    "###);
}

#[test]
fn test_custom_formatting_output() {
    let options = FormatOptions {
        indent: 2,
        blank_line_between_cases: true,
    };
    let out = expand_with_options(
        r#"
        factors { X: ["a", "b"] }
        cases { case "t" { do "use $${X}" } }
    "#,
        &options,
    )
    .unwrap();

    insta::assert_snapshot!(out, @r###"
    factors {
      X: ["a", "b"]
    }

    cases {
      case "[1].t-a" {
        do "use a"
      }

      case "[2].t-b" {
        do "use b"
      }
    }
    "###);
}
