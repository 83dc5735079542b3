//! Grammar operations - tokenizer and recursive chain parser
//!
//! The parser threads the current panel index and chain time through plain
//! function arguments. A `{` recurses with the same panel as branch root and
//! the chain time pushed forward by the branch delay; returning from the
//! recursion restores the caller's cursor untouched.

use super::grammar_data::{AngleCode, FaceSide, GrammarToken, PanelPlan};
use crate::error::{GrammarError, GrammarErrorKind};
use crate::geometry::Edge;
use crate::schedule::{branch_start_time, folded_start_angle, schedule_window, settled_window};
use crate::UnfoldConfig;

// ============================================================================
// TOKENIZER
// ============================================================================

fn edge_letter(c: char) -> Option<(Edge, FaceSide)> {
    let face = if c.is_ascii_uppercase() {
        FaceSide::Front
    } else {
        FaceSide::Back
    };
    let edge = match c.to_ascii_uppercase() {
        'A' => Edge::A,
        'B' => Edge::B,
        'C' => Edge::C,
        'D' => Edge::D,
        _ => return None,
    };
    Some((edge, face))
}

/// Split a grammar string into tokens, rejecting anything malformed
pub fn tokenize(grammar: &str) -> Result<Vec<GrammarToken>, GrammarError> {
    let mut tokens = Vec::with_capacity(grammar.len() / 2);
    let mut chars = grammar.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c.is_ascii_whitespace() {
            continue;
        }

        match c {
            '{' => tokens.push(GrammarToken::BranchOpen { offset }),
            '}' => tokens.push(GrammarToken::BranchClose { offset }),
            _ => {
                let (edge, face) = edge_letter(c).ok_or(GrammarError {
                    offset,
                    found: Some(c),
                    kind: GrammarErrorKind::UnknownToken,
                })?;

                let (digit_offset, digit) = match chars.next() {
                    Some((o, d)) => (o, Some(d)),
                    None => (grammar.len(), None),
                };
                let angle = digit.and_then(AngleCode::from_digit).ok_or(GrammarError {
                    offset: digit_offset,
                    found: digit,
                    kind: GrammarErrorKind::InvalidAngleCode,
                })?;

                tokens.push(GrammarToken::Fold {
                    edge,
                    face,
                    angle,
                    offset,
                });
            }
        }
    }

    Ok(tokens)
}

// ============================================================================
// PARSER
// ============================================================================

/// Where a chain stopped
struct ChainEnd {
    /// Index of the first token after the chain
    next: usize,
    /// Chain was terminated by `}` rather than end of input
    closed: bool,
}

/// Parse a grammar into timed panel plans
///
/// The root plan (index 0) is settled from `start_time` on; every other plan
/// is scheduled from the running time of the chain that produced it.
pub fn parse_grammar(
    grammar: &str,
    start_time: f32,
    config: &UnfoldConfig,
) -> Result<Vec<PanelPlan>, GrammarError> {
    let tokens = tokenize(grammar)?;

    let mut plans = Vec::with_capacity(tokens.len() + 1);
    plans.push(PanelPlan {
        parent: None,
        edge: None,
        face: None,
        target_angle: 0.0,
        window: settled_window(start_time),
        depth: 0,
        offset: None,
    });

    let end = parse_chain(&tokens, 0, 0, start_time, 0, config, &mut plans)?;

    if end.closed {
        let stray = match tokens.get(end.next - 1) {
            Some(GrammarToken::BranchClose { offset }) => *offset,
            _ => grammar.len(),
        };
        if end.next < tokens.len() {
            log::warn!(
                "[parse_grammar] Unmatched '}}' at offset {} ends the strip, ignoring {} trailing tokens",
                stray,
                tokens.len() - end.next
            );
        } else {
            log::warn!("[parse_grammar] Unmatched '}}' at offset {}", stray);
        }
    }

    log::debug!(
        "[parse_grammar] Planned {} panels from {} tokens",
        plans.len(),
        tokens.len()
    );

    Ok(plans)
}

fn parse_chain(
    tokens: &[GrammarToken],
    mut pos: usize,
    mut current: usize,
    mut time: f32,
    depth: usize,
    config: &UnfoldConfig,
    plans: &mut Vec<PanelPlan>,
) -> Result<ChainEnd, GrammarError> {
    while let Some(token) = tokens.get(pos) {
        match *token {
            GrammarToken::Fold {
                edge,
                face,
                angle,
                offset,
            } => {
                let target_angle = angle.radians();
                let window = schedule_window(
                    time,
                    folded_start_angle(face, target_angle),
                    config.angular_speed,
                );

                plans.push(PanelPlan {
                    parent: Some(current),
                    edge: Some(edge),
                    face: Some(face),
                    target_angle,
                    window,
                    depth,
                    offset: Some(offset),
                });

                log::debug!(
                    "[parse_chain] Panel {} on {:?} of {} ({:?}, {:.3} rad): {:.3}s -> {:.3}s",
                    plans.len() - 1,
                    edge,
                    current,
                    face,
                    target_angle,
                    window.start_time,
                    window.end_time
                );

                current = plans.len() - 1;
                time = window.end_time;
                pos += 1;
            }
            GrammarToken::BranchOpen { offset } => {
                if depth + 1 > config.max_branch_depth {
                    return Err(GrammarError {
                        offset,
                        found: Some('{'),
                        kind: GrammarErrorKind::BranchTooDeep {
                            max_depth: config.max_branch_depth,
                        },
                    });
                }

                let branch_time = branch_start_time(time, config.branch_delay);
                let branch = parse_chain(tokens, pos + 1, current, branch_time, depth + 1, config, plans)?;
                if !branch.closed {
                    // Input ran out inside the branch, which ends every open chain
                    return Ok(branch);
                }
                pos = branch.next;
            }
            GrammarToken::BranchClose { .. } => {
                return Ok(ChainEnd {
                    next: pos + 1,
                    closed: true,
                });
            }
        }
    }

    Ok(ChainEnd {
        next: tokens.len(),
        closed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn config() -> UnfoldConfig {
        UnfoldConfig {
            angular_speed: TAU,
            branch_delay: 0.25,
            max_branch_depth: 4,
        }
    }

    #[test]
    fn test_tokenize_letters_and_braces() {
        let tokens = tokenize("A0 {b2}").expect("valid grammar");
        assert_eq!(tokens.len(), 4);
        assert_eq!(
            tokens[0],
            GrammarToken::Fold {
                edge: Edge::A,
                face: FaceSide::Front,
                angle: AngleCode::Quarter,
                offset: 0
            }
        );
        assert_eq!(tokens[1], GrammarToken::BranchOpen { offset: 3 });
        assert!(matches!(
            tokens[2],
            GrammarToken::Fold {
                edge: Edge::B,
                face: FaceSide::Back,
                angle: AngleCode::ThreeQuarter,
                offset: 4
            }
        ));
    }

    #[test]
    fn test_unknown_letter_reports_offset() {
        let err = tokenize("A0E1").expect_err("E is not an edge");
        assert_eq!(err.offset, 2);
        assert_eq!(err.found, Some('E'));
        assert_eq!(err.kind, GrammarErrorKind::UnknownToken);
    }

    #[test]
    fn test_bad_angle_code() {
        let err = tokenize("A3").expect_err("3 is not an angle code");
        assert_eq!(err.offset, 1);
        assert_eq!(err.kind, GrammarErrorKind::InvalidAngleCode);

        let err = tokenize("B0c").expect_err("missing angle code");
        assert_eq!(err.offset, 3);
        assert_eq!(err.found, None);
    }

    #[test]
    fn test_whitespace_inside_fold_token() {
        let err = tokenize("A 0").expect_err("space between letter and digit");
        assert_eq!(err.offset, 1);
        assert_eq!(err.found, Some(' '));
        assert_eq!(err.kind, GrammarErrorKind::InvalidAngleCode);
    }

    #[test]
    fn test_chain_times_cascade() {
        let plans = parse_grammar("D0b1D0", 0.5, &config()).expect("valid grammar");
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0].parent, None);
        assert_eq!(plans[1].parent, Some(0));
        assert_eq!(plans[2].parent, Some(1));
        assert_eq!(plans[3].parent, Some(2));

        assert!((plans[1].window.start_time - 0.5).abs() < 1e-6);
        assert!((plans[1].window.end_time - 0.75).abs() < 1e-6);
        assert_eq!(plans[2].window.start_time, plans[1].window.end_time);
        assert!((plans[2].window.end_time - 1.25).abs() < 1e-6);
        assert_eq!(plans[3].window.start_time, plans[2].window.end_time);
    }

    #[test]
    fn test_branch_restores_cursor() {
        let plans = parse_grammar("A0{B1}C2", 0.0, &config()).expect("valid grammar");
        assert_eq!(plans.len(), 4);

        let a0 = plans[1];
        let b1 = plans[2];
        let c2 = plans[3];

        assert_eq!(b1.parent, Some(1));
        assert_eq!(b1.depth, 1);
        assert_eq!(b1.window.start_time, a0.window.end_time + 0.25);

        assert_eq!(c2.parent, Some(1));
        assert_eq!(c2.depth, 0);
        assert_eq!(c2.window.start_time, a0.window.end_time);
    }

    #[test]
    fn test_nested_branches() {
        let plans = parse_grammar("A1{B0{C0}D0}a0", 0.0, &config()).expect("valid grammar");
        let parents: Vec<Option<usize>> = plans.iter().map(|p| p.parent).collect();
        assert_eq!(parents, vec![None, Some(0), Some(1), Some(2), Some(2), Some(1)]);
        assert_eq!(plans[3].depth, 2);
        assert_eq!(
            plans[3].window.start_time,
            plans[2].window.end_time + 0.25
        );
        assert_eq!(plans[4].window.start_time, plans[2].window.end_time);
    }

    #[test]
    fn test_branch_depth_cap() {
        let err = parse_grammar("A0{{{{{B0}}}}}", 0.0, &config()).expect_err("too deep");
        assert_eq!(err.offset, 6);
        assert_eq!(err.kind, GrammarErrorKind::BranchTooDeep { max_depth: 4 });
    }

    #[test]
    fn test_unmatched_close_ends_strip() {
        let plans = parse_grammar("A0}B0", 0.0, &config()).expect("stray brace is tolerated");
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn test_text_after_unmatched_close_must_tokenize() {
        let err = parse_grammar("A0}X", 0.0, &config()).expect_err("X is not a token");
        assert_eq!(err.offset, 3);
        assert_eq!(err.found, Some('X'));
        assert_eq!(err.kind, GrammarErrorKind::UnknownToken);
    }

    #[test]
    fn test_deep_nesting_stops_at_config_limit() {
        let config = UnfoldConfig {
            max_branch_depth: crate::constants::MAX_BRANCH_DEPTH_LIMIT,
            ..config()
        };
        let grammar = "{".repeat(500_000);
        let err = parse_grammar(&grammar, 0.0, &config).expect_err("nesting above the limit");
        assert_eq!(err.offset, crate::constants::MAX_BRANCH_DEPTH_LIMIT);
        assert_eq!(
            err.kind,
            GrammarErrorKind::BranchTooDeep {
                max_depth: crate::constants::MAX_BRANCH_DEPTH_LIMIT
            }
        );
    }

    #[test]
    fn test_unclosed_branch_ends_at_input_end() {
        let plans = parse_grammar("A0{B0C0", 0.0, &config()).expect("open branch is tolerated");
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[3].parent, Some(2));
        assert_eq!(plans[3].depth, 1);
    }

    #[test]
    fn test_empty_grammar_is_root_only() {
        let plans = parse_grammar("", 3.0, &config()).expect("empty grammar");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].window.start_time, 3.0);
        assert_eq!(plans[0].window.end_time, 3.0);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_grammar("A0{B1{c2}}C2d1", 0.125, &config()).expect("valid grammar");
        let b = parse_grammar("A0{B1{c2}}C2d1", 0.125, &config()).expect("valid grammar");
        assert_eq!(a, b);
    }
}
