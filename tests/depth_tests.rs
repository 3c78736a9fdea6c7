// tests/depth_tests.rs
//
// The recursion-depth high-water mark is part of the observable contract:
// expression, term, factor, power, primary, identifier, and number each
// count one level on entry. The constants below pin both the counting
// scheme and the right-associative chaining of every operator tier.

use exprcheck::{parse_expression, Outcome, SourceContext};

fn accept(source: &str) -> Outcome {
    parse_expression(source, SourceContext::new("<test>", source))
        .unwrap_or_else(|error| panic!("expected {source:?} to parse: {error}"))
}

fn depth(source: &str) -> usize {
    accept(source).max_depth
}

#[test]
fn a_bare_operand_descends_the_whole_rule_chain() {
    // expression > term > factor > power > primary > number
    assert_eq!(depth("1\n"), 6);
    assert_eq!(depth("a\n"), 6);
}

#[test]
fn each_parenthesis_layer_adds_four_levels() {
    assert_eq!(depth("(1)\n"), 10);
    assert_eq!(depth("((1))\n"), 14);
    assert_eq!(depth("(((1)))\n"), 18);
}

#[test]
fn additive_chains_recurse_rightward() {
    // Tail recursion into `expression` deepens the trace by one level per
    // added right operand; an iterative left-associative loop would hold it
    // flat. This pins the grammar's chaining direction.
    assert_eq!(depth("1+2\n"), 7);
    assert_eq!(depth("1+2+3\n"), 8);
    assert_eq!(depth("1+2+3+4\n"), 9);
}

#[test]
fn multiplicative_and_power_chains_recurse_the_same_way() {
    assert_eq!(depth("1*2\n"), 7);
    assert_eq!(depth("1*2*3\n"), 8);
    assert_eq!(depth("2^3\n"), 7);
    assert_eq!(depth("2^3^2\n"), 8);
}

#[test]
fn a_unary_sign_restarts_the_chain_below_primary() {
    // expression > term > factor > power > primary, then the sign re-enters
    // expression for the whole chain again.
    assert_eq!(depth("-x\n"), 11);
    assert_eq!(depth("+1\n"), 11);
}

#[test]
fn grouping_outranks_chaining_in_the_trace() {
    assert_eq!(depth("(1+2)+3\n"), 11);
    assert_eq!(depth("1+(2+3)\n"), 12);
}

#[test]
fn depth_resets_between_runs() {
    assert_eq!(depth("(((1)))\n"), 18);
    assert_eq!(depth("1\n"), 6);
}
